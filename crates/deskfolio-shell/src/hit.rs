//! Clickable regions inside window bodies, recorded while painting.

use deskfolio_core::finder::Column;
use deskfolio_core::wm::WindowId;
use deskfolio_core::Point;
use deskfolio_engine::coords::Rect;

use crate::painter::vec2;

/// What a click on a body region asks the desktop to do.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyAction {
    SelectCategory(&'static str),
    ActivateEntry(Column, &'static str),
    OpenUrl(String),
}

#[derive(Debug)]
struct Region {
    window: WindowId,
    rect: Rect,
    action: BodyAction,
}

/// Regions from the last painted frame, in paint order.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<Region>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Records `rect` in window `window`, cut down to the visible `clip`.
    /// Fully clipped regions are dropped.
    pub fn push(&mut self, window: WindowId, rect: Rect, clip: Rect, action: BodyAction) {
        if let Some(rect) = rect.intersect(clip) {
            self.regions.push(Region { window, rect, action });
        }
    }

    /// Topmost region of `window` under `p`.
    pub fn at(&self, window: WindowId, p: Point) -> Option<&BodyAction> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.window == window && r.rect.contains(vec2(p)))
            .map(|r| &r.action)
    }
}
