#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Channel-wise linear interpolation towards `other`.
    ///
    /// `t` is expected in `[0, 1]`; `t = 0` yields `self`, `t = 1` yields
    /// `other`.
    #[must_use]
    pub fn lerp(self, other: Colour, t: f64) -> Colour {
        let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t) as u8;

        Colour {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}
