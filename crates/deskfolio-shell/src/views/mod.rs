//! Painting of every desktop surface.
//!
//! Views read desktop state and push draw calls; they never mutate the
//! desktop. Body views record clickable regions in the [`HitMap`] and report
//! how far their content can scroll.

mod chrome;
mod dock;
mod finder;
mod lock;
mod markdown;
mod menubar;
mod panels;
mod spotlight;
mod terminal;
mod wallpaper;

use deskfolio_core::clock::Clock;
use deskfolio_core::wm::WindowId;
use deskfolio_core::{Desktop, WindowBody};
use deskfolio_engine::coords::{Rect, Vec2};
use deskfolio_engine::paint::Color;
use deskfolio_engine::text::FontId;

use crate::hit::{BodyAction, HitMap};
use crate::painter::{rect, Painter};
use crate::theme::{Theme, SIZE_SMALL};

/// Per-window sink for clickable regions.
pub struct BodyOut<'a> {
    hits: &'a mut HitMap,
    window: WindowId,
    clip: Rect,
}

impl BodyOut<'_> {
    pub fn click(&mut self, rect: Rect, action: BodyAction) {
        self.hits.push(self.window, rect, self.clip, action);
    }

    /// Narrows the visible area for regions recorded until [`restore`](Self::restore).
    fn narrow(&mut self, clip: Rect) -> Rect {
        let outer = self.clip;
        self.clip = outer.intersect(clip).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        outer
    }

    fn restore(&mut self, clip: Rect) {
        self.clip = clip;
    }
}

/// Paints the whole desktop back to front.
///
/// Returns `(window, max_scroll)` for every scrollable body painted.
pub fn paint_desktop<C: Clock>(
    p: &mut Painter<'_>,
    theme: &Theme,
    desktop: &Desktop<C>,
    hits: &mut HitMap,
) -> Vec<(WindowId, f32)> {
    let screen = desktop.screen();
    let mut limits = Vec::new();

    wallpaper::paint(p, theme, screen);

    let front = desktop.windows().frontmost().map(|w| w.id());
    for window in desktop.windows().back_to_front() {
        let focused = Some(window.id()) == front;
        let opacity = chrome::open_opacity(window.open_progress());
        let previous = p.set_opacity(opacity);

        chrome::paint_frame(p, theme, window, focused);

        let body = rect(window.frame().body());
        p.push_clip(body);
        let mut out = BodyOut { hits: &mut *hits, window: window.id(), clip: body };
        let max_scroll = match &window.body {
            WindowBody::Finder(state) => {
                Some(finder::paint(p, theme, desktop.content(), state, body, &mut out))
            }
            WindowBody::Panel { panel, scroll } => {
                Some(panels::paint(p, theme, *panel, *scroll, body, &mut out))
            }
            WindowBody::Terminal(session) => {
                terminal::paint(p, theme, session, body, focused);
                None
            }
        };
        p.pop_clip();

        chrome::paint_grip(p, theme, window);
        p.set_opacity(previous);

        if let Some(max) = max_scroll {
            limits.push((window.id(), max));
        }
    }

    menubar::paint(p, theme, desktop);
    dock::paint(p, theme, desktop.dock(), screen);

    if desktop.spotlight_overlay() && desktop.spotlight().is_open() {
        spotlight::paint(p, theme, desktop.spotlight(), screen);
    }

    let lock = desktop.lock_screen();
    if lock.is_visible() {
        lock::paint(p, theme, desktop.clock(), lock.opacity(), screen);
    }

    limits
}

// ── shared pieces ─────────────────────────────────────────────────────────

/// Wrapped text; returns the height it took.
fn wrapped(
    p: &mut Painter<'_>,
    text: &str,
    font: FontId,
    size: f32,
    color: Color,
    origin: Vec2,
    width: f32,
) -> f32 {
    let width = width.max(1.0);
    let h = p.measure(text, font, size, Some(width)).y;
    p.text(text, font, size, color, origin, Some(width));
    h
}

/// Flowing row of rounded tags; returns the height it took.
fn chips(p: &mut Painter<'_>, theme: &Theme, items: &[&str], origin: Vec2, width: f32) -> f32 {
    const PAD_X: f32 = 8.0;
    const GAP: f32 = 6.0;

    if items.is_empty() {
        return 0.0;
    }
    let font = p.faces.ui;
    let line = p.line_height(font, SIZE_SMALL);
    let chip_h = line + 6.0;

    let (mut x, mut y) = (origin.x, origin.y);
    for item in items {
        let w = p.measure(item, font, SIZE_SMALL, None).x + PAD_X * 2.0;
        if x > origin.x && x + w > origin.x + width {
            x = origin.x;
            y += chip_h + GAP;
        }
        p.fill_rounded(Rect::new(x, y, w, chip_h), chip_h * 0.5, theme.chip_bg, None);
        p.text(*item, font, SIZE_SMALL, theme.link, Vec2::new(x + PAD_X, y + 3.0), None);
        x += w + GAP;
    }
    y + chip_h - origin.y
}
