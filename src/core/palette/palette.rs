use crate::core::data::colour::Colour;
use crate::core::palette::gradient::GradientStop;

/// Precomputed escape-colour table: one entry per escape iteration plus a
/// final entry for points that never escape.
///
/// Built once at startup and shared read-only by every worker; index `i`
/// colours a point whose orbit escaped at iteration `i`, index
/// `iteration_budget()` colours interior points.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Builds `iteration_budget + 1` entries from the gradient stops.
    ///
    /// Each stop contributes `round(fraction * budget)` entries, linearly
    /// interpolated from its start to its end colour. Stops that would
    /// overrun the budget are truncated; an underfilled budget leaves the
    /// trailing entries at the interior colour. The final slot is always
    /// pinned to `interior`.
    #[must_use]
    pub fn build(stops: &[GradientStop], iteration_budget: u32, interior: Colour) -> Self {
        let budget = iteration_budget as usize;
        let mut colours = Vec::with_capacity(budget + 1);

        'stops: for stop in stops {
            let entries = (stop.fraction * iteration_budget as f64 + 0.5) as usize;

            for i in 0..entries {
                if colours.len() == budget {
                    break 'stops;
                }
                colours.push(stop.start.lerp(stop.end, i as f64 / entries as f64));
            }
        }

        colours.resize(budget, interior);
        colours.push(interior);

        Self { colours }
    }

    /// The colour for an orbit that escaped at `iteration`, or the interior
    /// colour when `iteration` equals the budget.
    #[must_use]
    pub fn colour(&self, iteration: u32) -> Colour {
        self.colours[iteration as usize]
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        (self.colours.len() - 1) as u32
    }

    #[must_use]
    pub fn interior(&self) -> Colour {
        self.colours[self.colours.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::gradient::{BLACK, CYAN, RED, WHITE, default_gradient};

    #[test]
    fn test_build_allocates_budget_plus_one_entries() {
        let palette = Palette::build(&default_gradient(), 1024, BLACK);

        assert_eq!(palette.len(), 1025);
        assert_eq!(palette.iteration_budget(), 1024);
    }

    #[test]
    fn test_final_slot_is_pinned_to_interior_colour() {
        let palette = Palette::build(&default_gradient(), 256, BLACK);

        assert_eq!(palette.colour(256), BLACK);
        assert_eq!(palette.interior(), BLACK);
    }

    #[test]
    fn test_first_entry_is_first_stop_start_colour() {
        let palette = Palette::build(&default_gradient(), 100, BLACK);

        assert_eq!(palette.colour(0), default_gradient()[0].start);
    }

    #[test]
    fn test_stop_boundary_lands_on_next_stop_start() {
        // With a budget of 100 the first stop owns entries 0..25, so entry
        // 25 begins the second stop at its start colour.
        let palette = Palette::build(&default_gradient(), 100, BLACK);

        assert_eq!(palette.colour(25), default_gradient()[1].start);
    }

    #[test]
    fn test_underfilled_stops_leave_interior_tail() {
        let stops = [GradientStop {
            start: WHITE,
            end: RED,
            fraction: 0.5,
        }];
        let palette = Palette::build(&stops, 100, BLACK);

        assert_eq!(palette.len(), 101);
        assert_eq!(palette.colour(0), WHITE);
        // Entries past the single stop's 50 slots degrade to the interior
        // colour instead of being left undefined.
        assert_eq!(palette.colour(50), BLACK);
        assert_eq!(palette.colour(99), BLACK);
    }

    #[test]
    fn test_overfilled_stops_are_truncated_at_budget() {
        let stops = [
            GradientStop {
                start: WHITE,
                end: RED,
                fraction: 0.75,
            },
            GradientStop {
                start: RED,
                end: CYAN,
                fraction: 0.75,
            },
        ];
        let palette = Palette::build(&stops, 40, BLACK);

        assert_eq!(palette.len(), 41);
        assert_eq!(palette.colour(40), BLACK);
    }

    #[test]
    fn test_interpolation_moves_towards_stop_end() {
        let stops = [GradientStop {
            start: WHITE,
            end: BLACK,
            fraction: 1.0,
        }];
        let palette = Palette::build(&stops, 10, BLACK);

        // t = 5/10 of the way from white to black.
        assert_eq!(palette.colour(5).r, 127);
        assert!(palette.colour(1).r > palette.colour(9).r);
    }

    #[test]
    fn test_zero_budget_palette_is_single_interior_entry() {
        let palette = Palette::build(&default_gradient(), 0, BLACK);

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.colour(0), BLACK);
    }
}
