/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a`.
///
/// The overlay renderers blend with `One, OneMinusSrcAlpha`, which expects
/// this representation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    ///
    /// Components are clamped to `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Straight-alpha `[r, g, b, a]` array, as edited by color widgets.
    #[inline]
    pub fn from_straight_array(c: [f32; 4]) -> Self {
        Self::from_straight(c[0], c[1], c[2], c[3])
    }

    /// Straight-alpha color forced to full opacity.
    #[inline]
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::from_straight(r, g, b, 1.0)
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Scales opacity by `factor` (premultiplied, so all channels scale).
    #[inline]
    pub fn with_alpha_factor(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self { r: self.r * f, g: self.g * f, b: self.b * f, a: self.a * f }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool { (a - b).abs() < 1e-6 }

    #[test]
    fn straight_is_premultiplied() {
        let c = Color::from_straight(0.5, 0.6, 1.0, 0.3);
        assert!(approx(c.r, 0.15));
        assert!(approx(c.g, 0.18));
        assert!(approx(c.b, 0.3));
        assert!(approx(c.a, 0.3));
    }

    #[test]
    fn straight_round_trip() {
        let (r, g, b, a) = Color::from_straight(0.25, 0.5, 0.75, 0.5).to_straight();
        assert!(approx(r, 0.25) && approx(g, 0.5) && approx(b, 0.75) && approx(a, 0.5));
    }

    #[test]
    fn zero_alpha_straight_is_black() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn alpha_factor_scales_all_channels() {
        let c = Color::white().with_alpha_factor(0.5);
        assert_eq!(c.to_array(), [0.5, 0.5, 0.5, 0.5]);
    }
}
