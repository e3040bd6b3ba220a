use std::fmt;
use std::time::Duration;

use crate::geometry::{Point, Size};

use super::frame::WindowFrame;

/// How long a newly opened window plays its open animation.
pub const OPEN_ANIMATION: Duration = Duration::from_millis(400);

/// Unique window identifier. Never reused within a session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct WindowId(pub(crate) u64);

impl WindowId {
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Window flavour. Decides the resize floor and the cascade origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WindowKind {
    Finder,
    Terminal,
}

impl WindowKind {
    /// Smallest size the resize handle can produce.
    pub const fn min_size(self) -> Size {
        match self {
            WindowKind::Finder => Size::new(600.0, 400.0),
            WindowKind::Terminal => Size::new(400.0, 300.0),
        }
    }

    /// Cascade position for the window at insertion index `index`.
    pub fn cascade(self, index: usize) -> Point {
        let base = match self {
            WindowKind::Finder => 100.0,
            WindowKind::Terminal => 150.0,
        };
        let offset = base + index as f32 * 30.0;
        Point::new(offset, offset)
    }
}

/// Request to open a window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub kind: WindowKind,
    /// `None` cascades from the insertion index.
    pub position: Option<Point>,
    pub size: Size,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, kind: WindowKind, size: Size) -> Self {
        Self { title: title.into(), kind, position: None, size }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }
}

/// One open window.
///
/// `B` is whatever per-window content state the owner attaches (Finder
/// selection, terminal session, ...). The manager never looks inside it.
#[derive(Debug)]
pub struct WindowRecord<B> {
    pub(crate) id: WindowId,
    pub(crate) title: String,
    pub(crate) kind: WindowKind,
    pub(crate) z_index: u32,
    pub(crate) frame: WindowFrame,
    pub(crate) opening: Option<Duration>,
    pub body: B,
}

impl<B> WindowRecord<B> {
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    #[inline]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[inline]
    pub fn frame(&self) -> &WindowFrame {
        &self.frame
    }

    #[inline]
    pub fn frame_mut(&mut self) -> &mut WindowFrame {
        &mut self.frame
    }

    /// True until the open animation has finished.
    #[inline]
    pub fn is_newly_created(&self) -> bool {
        self.opening.is_some()
    }

    /// Open-animation progress in `[0, 1]`; `1.0` once settled.
    pub fn open_progress(&self) -> f32 {
        match self.opening {
            None => 1.0,
            Some(remaining) => {
                let done = OPEN_ANIMATION.saturating_sub(remaining);
                done.as_secs_f32() / OPEN_ANIMATION.as_secs_f32()
            }
        }
    }

    pub(crate) fn tick(&mut self, dt: Duration) {
        if let Some(remaining) = self.opening {
            self.opening = remaining.checked_sub(dt).filter(|r| !r.is_zero());
        }
    }
}
