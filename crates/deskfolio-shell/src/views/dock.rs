use deskfolio_core::dock::{Dock, DockApp};
use deskfolio_core::Size;
use deskfolio_engine::coords::{Rect, Vec2};
use deskfolio_engine::paint::{Color, LinearGradient, Paint};
use deskfolio_engine::scene::Border;

use crate::painter::{rect, Painter};
use crate::theme::{Theme, SIZE_BODY};

const PLATE_RADIUS: f32 = 18.0;
const ICON_RADIUS: f32 = 13.0;
const GLYPH_SIZE: f32 = 26.0;

/// Top and bottom of an icon's gradient.
fn icon_colors(app: DockApp) -> (u32, u32) {
    match app {
        DockApp::About => (0x6fb1ff, 0x2f6fe0),
        DockApp::Projects => (0x8fd3ff, 0x3d8ff0),
        DockApp::Activities => (0xffd36b, 0xf08c2e),
        DockApp::Career => (0xb59bff, 0x6a48d8),
        DockApp::Links => (0x7be3a8, 0x2aa865),
        DockApp::Terminal => (0x4a4a4a, 0x1c1c1c),
        DockApp::Contact => (0xff9a8b, 0xe0475a),
        DockApp::Trash => (0xe6e6e6, 0xa9a9ad),
    }
}

pub fn paint(p: &mut Painter<'_>, theme: &Theme, dock: &Dock, screen: Size) {
    let plate = rect(dock.bounds(screen));
    p.fill_rounded(plate, PLATE_RADIUS, theme.dock_bg, Some(Border::new(1.0, theme.dock_border)));
    p.fill_rect(rect(dock.separator(screen)), theme.dock_border);

    let font = p.faces.ui;
    let mut tooltip = None;
    for (app, bounds) in dock.icons(screen) {
        let r = rect(bounds);
        let (top, bottom) = icon_colors(app);
        let g = LinearGradient::between(
            r.origin,
            Vec2::new(r.origin.x, r.max().y),
            Color::from_hex(top),
            Color::from_hex(bottom),
        );
        p.fill_rounded(r, ICON_RADIUS, Paint::LinearGradient(g), None);

        let initial: String = app.label().chars().take(1).collect();
        let size = p.measure(&initial, font, GLYPH_SIZE, None);
        let c = r.center();
        p.text(
            initial,
            font,
            GLYPH_SIZE,
            Color::white(),
            Vec2::new(c.x - size.x * 0.5, c.y - size.y * 0.5),
            None,
        );

        if dock.hovered() == Some(app) {
            tooltip = Some((app.label(), r));
        }
    }

    // After every icon so neighbours never cover it.
    if let Some((label, icon)) = tooltip {
        let size = p.measure(label, font, SIZE_BODY, None);
        let w = size.x + 20.0;
        let h = size.y + 8.0;
        let tip = Rect::new(icon.center().x - w * 0.5, icon.origin.y - h - 14.0, w, h);
        p.fill_rounded(tip, 6.0, theme.tooltip_bg, None);
        p.text(label, font, SIZE_BODY, Color::white(), Vec2::new(tip.origin.x + 10.0, tip.origin.y + 4.0), None);
    }
}
