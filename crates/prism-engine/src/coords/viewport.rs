/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width/height in the `[f32; 2]` layout expected by viewport uniforms.
    /// Degenerate sizes are raised to 1 to keep the NDC divide finite.
    #[inline]
    pub fn uniform_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
