//! Detail body blocks laid out top to bottom.

use deskfolio_core::markdown::Block;
use deskfolio_engine::coords::{Rect, Vec2};
use deskfolio_engine::scene::Border;

use super::{wrapped, BodyOut};
use crate::hit::BodyAction;
use crate::painter::Painter;
use crate::theme::{Theme, SIZE_BODY, SIZE_SMALL};

const BLOCK_GAP: f32 = 6.0;
const INDENT: f32 = 16.0;
const IMAGE_HEIGHT: f32 = 120.0;

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 20.0,
        2 => 17.0,
        3 => 15.0,
        _ => SIZE_BODY + 1.0,
    }
}

/// Paints `blocks` from `origin` within `width`; returns the height used.
pub fn paint(
    p: &mut Painter<'_>,
    theme: &Theme,
    blocks: &[Block<'_>],
    origin: Vec2,
    width: f32,
    out: &mut BodyOut<'_>,
) -> f32 {
    let font = p.faces.ui;
    let line = p.line_height(font, SIZE_BODY);
    let mut y = origin.y;

    for block in blocks {
        match *block {
            Block::Heading { level, text } => {
                y += BLOCK_GAP;
                let size = heading_size(level);
                y += wrapped(p, text, font, size, theme.text, Vec2::new(origin.x, y), width);
            }
            Block::Bullet { indent, text } => {
                let x = origin.x + INDENT * (indent as f32 + 1.0);
                p.fill_circle(Vec2::new(x - 8.0, y + line * 0.5), 2.0, theme.text_muted, None);
                y += wrapped(p, text, font, SIZE_BODY, theme.text, Vec2::new(x, y), width - (x - origin.x));
            }
            Block::Quote(text) => {
                let h = wrapped(
                    p,
                    text,
                    font,
                    SIZE_BODY,
                    theme.text_muted,
                    Vec2::new(origin.x + 12.0, y),
                    width - 12.0,
                );
                p.fill_rect(Rect::new(origin.x, y, 3.0, h), theme.quote_bar);
                y += h;
            }
            Block::Image { alt, url } => {
                let r = Rect::new(origin.x, y, width.max(1.0), IMAGE_HEIGHT);
                p.fill_rounded(r, 8.0, theme.placeholder, Some(Border::new(1.0, theme.divider)));
                let label = if alt.is_empty() { "Image" } else { alt };
                let label = p.fit(label, font, SIZE_BODY, width - 24.0);
                let hint = p.fit(url, font, SIZE_SMALL, width - 24.0);
                let c = r.center();
                let lw = p.measure(&label, font, SIZE_BODY, None).x;
                let hw = p.measure(&hint, font, SIZE_SMALL, None).x;
                p.text(label, font, SIZE_BODY, theme.text_muted, Vec2::new(c.x - lw * 0.5, c.y - line), None);
                p.text(hint, font, SIZE_SMALL, theme.link, Vec2::new(c.x - hw * 0.5, c.y + 2.0), None);
                out.click(r, BodyAction::OpenUrl(url.to_string()));
                y += IMAGE_HEIGHT;
            }
            Block::Link { text, url } => {
                let size = p.measure(text, font, SIZE_BODY, Some(width.max(1.0)));
                let r = Rect::new(origin.x, y, size.x, size.y);
                let color = if p.is_hovered(r) { theme.selection } else { theme.link };
                p.text(text, font, SIZE_BODY, color, Vec2::new(origin.x, y), Some(width.max(1.0)));
                out.click(r, BodyAction::OpenUrl(url.to_string()));
                y += size.y;
            }
            Block::Paragraph(text) => {
                y += wrapped(p, text, font, SIZE_BODY, theme.text, Vec2::new(origin.x, y), width);
            }
            Block::Blank => y += line * 0.6,
        }
        y += BLOCK_GAP;
    }

    y - origin.y
}
