use crate::core::data::colour::Colour;

pub const DARK_YELLOW: Colour = Colour {
    r: 0xEE,
    g: 0xEE,
    b: 0x9E,
    a: 0xFF,
};
pub const DARK_GREEN: Colour = Colour {
    r: 0x44,
    g: 0x88,
    b: 0x44,
    a: 0xFF,
};
pub const PALE_GREY_BLUE: Colour = Colour {
    r: 0x49,
    g: 0x93,
    b: 0xDD,
    a: 0xFF,
};
pub const CYAN: Colour = Colour {
    r: 0x00,
    g: 0xFF,
    b: 0xFF,
    a: 0xFF,
};
pub const RED: Colour = Colour {
    r: 0xFF,
    g: 0x00,
    b: 0x00,
    a: 0xFF,
};
pub const WHITE: Colour = Colour {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
    a: 0xFF,
};
pub const BLACK: Colour = Colour {
    r: 0x00,
    g: 0x00,
    b: 0x00,
    a: 0xFF,
};

/// One segment of a gradient: `fraction` of the iteration budget is spent
/// interpolating from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub start: Colour,
    pub end: Colour,
    pub fraction: f64,
}

/// The default escape-colour gradient. Fractions need not sum exactly to 1;
/// the palette builder tolerates rounding either way.
#[must_use]
pub fn default_gradient() -> [GradientStop; 5] {
    [
        GradientStop {
            start: DARK_YELLOW,
            end: DARK_GREEN,
            fraction: 0.25,
        },
        GradientStop {
            start: DARK_GREEN,
            end: CYAN,
            fraction: 0.25,
        },
        GradientStop {
            start: CYAN,
            end: RED,
            fraction: 0.25,
        },
        GradientStop {
            start: RED,
            end: WHITE,
            fraction: 0.125,
        },
        GradientStop {
            start: WHITE,
            end: PALE_GREY_BLUE,
            fraction: 0.125,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gradient_fractions_sum_to_one() {
        let total: f64 = default_gradient().iter().map(|s| s.fraction).sum();

        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_gradient_stops_are_chained() {
        let stops = default_gradient();

        for pair in stops.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
