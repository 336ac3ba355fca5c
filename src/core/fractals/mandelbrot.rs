use crate::core::actions::render_image::ports::point_evaluator::PointEvaluator;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::palette::palette::Palette;

/// Escape-time Mandelbrot evaluator over a precomputed palette.
#[derive(Debug, Clone)]
pub struct MandelbrotEvaluator {
    palette: Palette,
    iteration_budget: u32,
}

impl MandelbrotEvaluator {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        let iteration_budget = palette.iteration_budget();

        Self {
            palette,
            iteration_budget,
        }
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget
    }
}

impl PointEvaluator for MandelbrotEvaluator {
    fn evaluate(&self, c: Complex) -> Colour {
        let mut z = Complex::ZERO;

        for iteration in 0..self.iteration_budget {
            z = z * z + c;
            if z.magnitude_squared() > 4.0 {
                return self.palette.colour(iteration);
            }
        }

        self.palette.colour(self.iteration_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::gradient::{BLACK, default_gradient};

    fn evaluator(budget: u32) -> MandelbrotEvaluator {
        MandelbrotEvaluator::new(Palette::build(&default_gradient(), budget, BLACK))
    }

    /// Reference escape count mirroring the evaluator's iteration order.
    fn escape_iteration(c: Complex, budget: u32) -> Option<u32> {
        let mut z = Complex::ZERO;
        for i in 0..budget {
            z = z * z + c;
            if z.magnitude_squared() > 4.0 {
                return Some(i);
            }
        }
        None
    }

    #[test]
    fn test_origin_never_escapes() {
        let evaluator = evaluator(100);

        assert_eq!(evaluator.evaluate(Complex::ZERO), BLACK);
    }

    #[test]
    fn test_far_point_escapes_on_first_iteration() {
        let evaluator = evaluator(100);
        let far = Complex {
            real: 4.0,
            imag: 4.0,
        };

        // |z₁|² = |c|² = 32 > 4, so the palette entry for iteration 0 is
        // used.
        let palette = Palette::build(&default_gradient(), 100, BLACK);
        assert_eq!(evaluator.evaluate(far), palette.colour(0));
    }

    #[test]
    fn test_escaping_point_uses_matching_palette_entry() {
        let budget = 64;
        let evaluator = evaluator(budget);
        let palette = Palette::build(&default_gradient(), budget, BLACK);
        let c = Complex {
            real: 0.3,
            imag: 0.6,
        };

        let i = escape_iteration(c, budget).expect("test point should escape");
        assert!(i > 0 && i < budget);
        assert_eq!(evaluator.evaluate(c), palette.colour(i));
    }

    #[test]
    fn test_interior_point_uses_interior_colour() {
        let evaluator = evaluator(64);
        // c = -1 is in the period-2 bulb and never escapes.
        let c = Complex {
            real: -1.0,
            imag: 0.0,
        };

        assert_eq!(evaluator.evaluate(c), BLACK);
    }

    #[test]
    fn test_budget_is_taken_from_palette() {
        assert_eq!(evaluator(37).iteration_budget(), 37);
    }
}
