use deskfolio_core::{Bounds, Point};
use deskfolio_engine::coords::{CornerRadii, Rect, Vec2};
use deskfolio_engine::paint::{Color, ColorStop, LinearGradient, Paint};
use deskfolio_engine::scene::{Border, DrawList, ZIndex};
use deskfolio_engine::text::{FontId, FontSystem};

/// The two faces the desktop draws with.
#[derive(Debug, Copy, Clone)]
pub struct Faces {
    pub ui: FontId,
    pub mono: FontId,
}

/// Drawing surface handed to every view.
///
/// Each call gets the next z-index, so things painted later sit on top. An
/// opacity can be set for a group of calls; it scales every color pushed
/// until it is reset.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
    pub faces: Faces,
    /// Physical pixels per logical pixel.
    pub scale: f32,
    pub pointer: Option<Point>,
    z: i32,
    opacity: f32,
}

impl<'a> Painter<'a> {
    pub fn new(
        draw_list: &'a mut DrawList,
        fonts: &'a FontSystem,
        faces: Faces,
        scale: f32,
        pointer: Option<Point>,
    ) -> Self {
        Self { draw_list, fonts, faces, scale, pointer, z: 0, opacity: 1.0 }
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer.is_some_and(|p| rect.contains(vec2(p)))
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures at the renderer's scale so widths match what is drawn.
    pub fn measure(&self, text: &str, font: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        self.fonts.measure_text_scaled(text, font, size, max_width, self.scale)
    }

    pub fn line_height(&self, font: FontId, size: f32) -> f32 {
        self.fonts.line_height(font, size)
    }

    /// `text` shortened with an ellipsis to fit `max_width`.
    pub fn fit(&self, text: &str, font: FontId, size: f32, max_width: f32) -> String {
        self.fonts.truncate(text, font, size, max_width, "…")
    }

    // ── opacity ───────────────────────────────────────────────────────────

    /// Sets the group opacity and returns the previous one.
    pub fn set_opacity(&mut self, opacity: f32) -> f32 {
        std::mem::replace(&mut self.opacity, opacity.clamp(0.0, 1.0))
    }

    fn tint(&self, c: Color) -> Color {
        if self.opacity >= 1.0 { c } else { c.with_opacity(self.opacity) }
    }

    fn tint_paint(&self, paint: Paint) -> Paint {
        if self.opacity >= 1.0 {
            return paint;
        }
        match paint {
            Paint::Solid(c) => Paint::Solid(self.tint(c)),
            Paint::LinearGradient(g) => Paint::LinearGradient(LinearGradient::new(
                g.start,
                g.end,
                g.stops.iter().map(|s| ColorStop::new(s.t, self.tint(s.color))).collect(),
            )),
        }
    }

    fn tint_border(&self, border: Option<Border>) -> Option<Border> {
        border.map(|b| Border::new(b.width, self.tint(b.color)))
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        let color = self.tint(color);
        self.draw_list.push_solid_rect(z, rect, color);
    }

    pub fn fill_rounded(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        self.fill_rounded_corners(rect, CornerRadii::all(radius), paint, border);
    }

    pub fn fill_rounded_corners(
        &mut self,
        rect: Rect,
        radii: CornerRadii,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        let paint = self.tint_paint(paint.into());
        let border = self.tint_border(border);
        self.draw_list.push_rounded_rect(z, rect, radii, paint, border);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, border: Option<Border>) {
        let z = self.next_z();
        let paint = Paint::Solid(self.tint(color));
        let border = self.tint_border(border);
        self.draw_list.push_circle(z, center, radius, paint, border);
    }

    /// Text with its top-left at `origin`, wrapped at `max_width` if given.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        let color = self.tint(color);
        self.draw_list.push_text(z, text, font, size, color, origin, max_width);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

// ── conversions ───────────────────────────────────────────────────────────

#[inline]
pub fn rect(b: Bounds) -> Rect {
    Rect::new(b.origin.x, b.origin.y, b.size.width, b.size.height)
}

#[inline]
pub fn vec2(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskfolio_engine::scene::DrawCmd;

    fn faces() -> Faces {
        Faces { ui: FontId::default(), mono: FontId::default() }
    }

    #[test]
    fn bounds_convert_to_rects() {
        let b = Bounds::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect(b), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(vec2(Point::new(5.0, 6.0)), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn opacity_scales_colors_until_reset() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut painter = Painter::new(&mut list, &fonts, faces(), 1.0, None);
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);

        painter.fill_rect(unit, Color::white());
        assert_eq!(painter.set_opacity(0.5), 1.0);
        painter.fill_rect(unit, Color::white());
        painter.set_opacity(1.0);
        painter.fill_rect(unit, Color::white());

        let paints: Vec<_> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.paint.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(
            paints,
            [
                Paint::Solid(Color::white()),
                Paint::Solid(Color::from_premul(0.5, 0.5, 0.5, 0.5)),
                Paint::Solid(Color::white()),
            ]
        );
    }

    #[test]
    fn hover_needs_a_pointer() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);

        let painter = Painter::new(&mut list, &fonts, faces(), 1.0, None);
        assert!(!painter.is_hovered(r));

        let painter = Painter::new(&mut list, &fonts, faces(), 1.0, Some(Point::new(15.0, 15.0)));
        assert!(painter.is_hovered(r));
    }
}
