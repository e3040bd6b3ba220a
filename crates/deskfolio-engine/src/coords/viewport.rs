/// Drawable area in logical pixels, as the vertex shaders see it.
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

    /// `None` while minimized or mid-resize, when there is nothing to draw into.
    pub fn drawable(width: f32, height: f32) -> Option<Self> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        (ok(width) && ok(height)).then_some(Self { width, height })
    }

    /// Divisor for logical-to-NDC conversion; never zero.
    #[inline]
    pub fn ndc_extent(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
