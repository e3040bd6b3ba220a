use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// A run of text laid out from its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Logical pixels; the glyph pass rasterises at `size * scale`.
    pub size: f32,
    pub color: Color,
    pub origin: Vec2,
    /// Wrap width in logical pixels, if any.
    pub max_width: Option<f32>,
}

impl DrawList {
    /// Records a text run. Empty strings and invisible sizes are skipped.
    #[allow(clippy::too_many_arguments)]
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let text = text.into();
        if text.is_empty() || size.is_nan() || size <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Text(TextCmd { text, font, size, color, origin, max_width }));
    }
}
