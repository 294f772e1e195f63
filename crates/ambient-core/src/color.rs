use std::fmt;

/// 8-bit RGB with a floating alpha, formatted as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Channel-wise interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = if self.a.is_finite() {
            self.a.clamp(0.0, 1.0)
        } else {
            0.0
        };
        write!(f, "rgba({},{},{},{:.3})", self.r, self.g, self.b, a)
    }
}

// Palette
pub const WHITE: Rgba = Rgba::rgb(252, 252, 252);
pub const FIRE_DEEP: Rgba = Rgba::rgb(48, 54, 108);
pub const FIRE_EDGE: Rgba = Rgba::rgb(144, 156, 218);
pub const TONGUE: Rgba = Rgba::rgb(120, 132, 192);
pub const EMBER: Rgba = Rgba::rgb(144, 156, 220);
pub const NEON: Rgba = Rgba::rgb(0, 220, 180);
pub const NEON_LIT: Rgba = Rgba::new(0, 230, 180, 0.40);
pub const NEON_UNLIT: Rgba = Rgba::new(60, 70, 90, 0.45);
pub const INDIGO: Rgba = Rgba::rgb(64, 75, 187);
pub const SLATE: Rgba = Rgba::rgb(40, 42, 57);
pub const AGITATED: Rgba = Rgba::rgb(90, 100, 170);
pub const GREEN: Rgba = Rgba::rgb(9, 183, 110);
pub const ORANGE: Rgba = Rgba::rgb(249, 145, 0);
