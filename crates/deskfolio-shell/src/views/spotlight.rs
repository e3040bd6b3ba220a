use deskfolio_core::spotlight::Spotlight;
use deskfolio_core::Size;
use deskfolio_engine::coords::{Rect, Vec2};
use deskfolio_engine::scene::Border;

use crate::painter::Painter;
use crate::theme::{Theme, SIZE_BODY, SIZE_SMALL};

const WIDTH: f32 = 640.0;
const FIELD_HEIGHT: f32 = 52.0;
const ROW_HEIGHT: f32 = 44.0;
const QUERY_SIZE: f32 = 20.0;

pub fn paint(p: &mut Painter<'_>, theme: &Theme, spotlight: &Spotlight, screen: Size) {
    let font = p.faces.ui;
    let results = spotlight.results();
    let list_h = if results.is_empty() { ROW_HEIGHT } else { results.len() as f32 * ROW_HEIGHT };
    let width = WIDTH.min(screen.width - 40.0).max(200.0);
    let panel = Rect::new(
        (screen.width - width) * 0.5,
        screen.height * 0.2,
        width,
        FIELD_HEIGHT + list_h + 8.0,
    );

    p.fill_rounded(panel, 14.0, theme.overlay_bg, Some(Border::new(1.0, theme.window_border)));

    let qh = p.line_height(font, QUERY_SIZE);
    let field_y = panel.origin.y + (FIELD_HEIGHT - qh) * 0.5;
    let x = panel.origin.x + 18.0;
    if spotlight.query().is_empty() {
        p.text("Spotlight Search", font, QUERY_SIZE, theme.text_muted, Vec2::new(x, field_y), None);
        p.fill_rect(Rect::new(x, field_y, 2.0, qh), theme.selection);
    } else {
        let q = spotlight.query();
        let w = p.measure(q, font, QUERY_SIZE, None).x;
        p.text(q, font, QUERY_SIZE, theme.text, Vec2::new(x, field_y), None);
        p.fill_rect(Rect::new(x + w + 1.0, field_y, 2.0, qh), theme.selection);
    }
    let top = panel.origin.y + FIELD_HEIGHT;
    p.fill_rect(Rect::new(panel.origin.x, top, panel.size.x, 1.0), theme.divider);

    if results.is_empty() {
        p.text("No results", font, SIZE_BODY, theme.text_muted, Vec2::new(x, top + 14.0), None);
        return;
    }

    for (i, result) in results.iter().enumerate() {
        let row = Rect::new(panel.origin.x + 6.0, top + 4.0 + i as f32 * ROW_HEIGHT, panel.size.x - 12.0, ROW_HEIGHT);
        let selected = i == spotlight.selected();
        if selected {
            p.fill_rounded(row, 8.0, theme.selection, None);
        }
        let (main, sub) = if selected {
            (theme.selection_text, theme.selection_text)
        } else {
            (theme.text, theme.text_muted)
        };
        p.text(result.title, font, SIZE_BODY, main, Vec2::new(row.origin.x + 12.0, row.origin.y + 6.0), None);
        p.text(result.subtitle, font, SIZE_SMALL, sub, Vec2::new(row.origin.x + 12.0, row.origin.y + 24.0), None);
        let cw = p.measure(result.category, font, SIZE_SMALL, None).x;
        p.text(
            result.category,
            font,
            SIZE_SMALL,
            sub,
            Vec2::new(row.max().x - 12.0 - cw, row.origin.y + 14.0),
            None,
        );
    }
}
