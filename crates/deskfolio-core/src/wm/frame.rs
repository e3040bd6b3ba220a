use crate::geometry::{Bounds, Point, Size};

/// Height of the title bar strip, in logical pixels.
pub const TITLE_BAR_HEIGHT: f32 = 44.0;

/// Diameter of each traffic-light control.
pub const CONTROL_DIAMETER: f32 = 12.0;

/// Side length of the square resize handle in the bottom-right corner.
pub const RESIZE_HANDLE: f32 = 16.0;

const CONTROL_LEFT: f32 = 16.0;
const CONTROL_PITCH: f32 = 20.0;
const CONTROL_COUNT: usize = 3;

/// Pointer gesture currently driving a window.
///
/// Dragging and resizing are mutually exclusive by construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    /// Pointer offset from the window's top-left at drag start.
    Dragging { offset: Point },
    /// Window origin at resize start; size follows `pointer - origin`.
    Resizing { origin: Point },
}

/// What part of a window frame a point falls on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameHit {
    Close,
    Minimize,
    Zoom,
    /// Inside the control strip but between buttons. Never starts a drag.
    Controls,
    TitleBar,
    ResizeHandle,
    Body,
}

/// Position, size and gesture state of one window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    position: Point,
    size: Size,
    min_size: Size,
    gesture: Gesture,
}

impl WindowFrame {
    /// The initial size is taken as given; the floor applies to resizing only.
    pub fn new(position: Point, size: Size, min_size: Size) -> Self {
        Self { position, size, min_size, gesture: Gesture::Idle }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    #[inline]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    // ── gestures ──────────────────────────────────────────────────────────

    /// Enters `Dragging`, remembering where inside the window it was grabbed.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.gesture = Gesture::Dragging { offset: pointer - self.position };
    }

    /// Enters `Resizing` anchored at the current origin.
    pub fn begin_resize(&mut self) {
        self.gesture = Gesture::Resizing { origin: self.position };
    }

    /// Applies a pointer move. Returns `true` if the frame changed.
    ///
    /// Dragging is unclamped; the window may leave the screen.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        match self.gesture {
            Gesture::Idle => false,
            Gesture::Dragging { offset } => {
                self.position = pointer - offset;
                true
            }
            Gesture::Resizing { origin } => {
                let raw = Size::new(pointer.x - origin.x, pointer.y - origin.y);
                self.size = raw.max(self.min_size);
                true
            }
        }
    }

    /// Returns to `Idle` from any state.
    pub fn release(&mut self) {
        self.gesture = Gesture::Idle;
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position, self.size)
    }

    pub fn title_bar(&self) -> Bounds {
        Bounds::new(self.position.x, self.position.y, self.size.width, TITLE_BAR_HEIGHT)
    }

    /// Everything below the title bar.
    pub fn body(&self) -> Bounds {
        Bounds::new(
            self.position.x,
            self.position.y + TITLE_BAR_HEIGHT,
            self.size.width,
            (self.size.height - TITLE_BAR_HEIGHT).max(0.0),
        )
    }

    /// Strip holding the three traffic lights; excluded from drag start.
    pub fn controls(&self) -> Bounds {
        let top = self.position.y + (TITLE_BAR_HEIGHT - CONTROL_DIAMETER) / 2.0;
        let width = CONTROL_PITCH * (CONTROL_COUNT - 1) as f32 + CONTROL_DIAMETER;
        Bounds::new(self.position.x + CONTROL_LEFT, top, width, CONTROL_DIAMETER)
    }

    /// Bounds of the `index`-th control (0 = close, 1 = minimise, 2 = zoom).
    pub fn control(&self, index: usize) -> Bounds {
        let strip = self.controls();
        Bounds::new(
            strip.origin.x + CONTROL_PITCH * index as f32,
            strip.origin.y,
            CONTROL_DIAMETER,
            CONTROL_DIAMETER,
        )
    }

    pub fn resize_handle(&self) -> Bounds {
        Bounds::new(
            self.position.x + self.size.width - RESIZE_HANDLE,
            self.position.y + self.size.height - RESIZE_HANDLE,
            RESIZE_HANDLE,
            RESIZE_HANDLE,
        )
    }

    /// Classifies `p`, or `None` when it is outside the window.
    pub fn hit_test(&self, p: Point) -> Option<FrameHit> {
        if !self.bounds().contains(p) {
            return None;
        }
        if self.resize_handle().contains(p) {
            return Some(FrameHit::ResizeHandle);
        }
        if self.title_bar().contains(p) {
            // Controls get a slightly taller strip so near-misses don't drag.
            let strip = self.controls();
            let guard = Bounds::new(
                strip.origin.x,
                self.position.y,
                strip.size.width,
                TITLE_BAR_HEIGHT,
            );
            if guard.contains(p) {
                let hit = [FrameHit::Close, FrameHit::Minimize, FrameHit::Zoom]
                    .into_iter()
                    .enumerate()
                    .find(|(i, _)| self.control(*i).contains(p))
                    .map(|(_, hit)| hit);
                return Some(hit.unwrap_or(FrameHit::Controls));
            }
            return Some(FrameHit::TitleBar);
        }
        Some(FrameHit::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder_frame() -> WindowFrame {
        WindowFrame::new(Point::new(100.0, 100.0), Size::new(800.0, 500.0), Size::new(600.0, 400.0))
    }

    // ── drag ──────────────────────────────────────────────────────────────

    #[test]
    fn drag_keeps_grab_offset() {
        let mut f = finder_frame();
        f.begin_drag(Point::new(130.0, 110.0));
        assert_eq!(f.gesture(), Gesture::Dragging { offset: Point::new(30.0, 10.0) });

        assert!(f.pointer_moved(Point::new(430.0, 210.0)));
        assert_eq!(f.position(), Point::new(400.0, 200.0));
    }

    #[test]
    fn drag_is_not_clamped_to_screen() {
        let mut f = finder_frame();
        f.begin_drag(Point::new(110.0, 110.0));
        f.pointer_moved(Point::new(-500.0, -300.0));
        assert_eq!(f.position(), Point::new(-510.0, -310.0));
    }

    #[test]
    fn idle_ignores_pointer_moves() {
        let mut f = finder_frame();
        assert!(!f.pointer_moved(Point::new(0.0, 0.0)));
        assert_eq!(f.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn release_returns_to_idle() {
        let mut f = finder_frame();
        f.begin_drag(Point::new(110.0, 110.0));
        f.release();
        assert!(f.is_idle());
        f.begin_resize();
        f.release();
        assert!(f.is_idle());
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_follows_pointer_minus_origin() {
        let mut f = finder_frame();
        f.begin_resize();
        f.pointer_moved(Point::new(1000.0, 700.0));
        assert_eq!(f.size(), Size::new(900.0, 600.0));
        assert_eq!(f.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn resize_never_goes_below_floor() {
        let mut f = finder_frame();
        f.begin_resize();
        for p in [
            Point::new(150.0, 150.0),
            Point::new(-2000.0, 120.0),
            Point::new(650.0, -40.0),
            Point::new(100.0, 100.0),
        ] {
            f.pointer_moved(p);
            assert!(f.size().width >= 600.0);
            assert!(f.size().height >= 400.0);
        }
    }

    #[test]
    fn terminal_floor_is_smaller() {
        let mut f =
            WindowFrame::new(Point::new(0.0, 0.0), Size::new(700.0, 450.0), Size::new(400.0, 300.0));
        f.begin_resize();
        f.pointer_moved(Point::new(10.0, 10.0));
        assert_eq!(f.size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn initial_size_below_floor_is_kept() {
        let f =
            WindowFrame::new(Point::new(0.0, 0.0), Size::new(900.0, 330.0), Size::new(600.0, 400.0));
        assert_eq!(f.size().height, 330.0);
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn hit_test_regions() {
        let f = finder_frame();
        assert_eq!(f.hit_test(Point::new(50.0, 50.0)), None);
        assert_eq!(f.hit_test(Point::new(122.0, 122.0)), Some(FrameHit::Close));
        assert_eq!(f.hit_test(Point::new(142.0, 122.0)), Some(FrameHit::Minimize));
        assert_eq!(f.hit_test(Point::new(162.0, 122.0)), Some(FrameHit::Zoom));
        assert_eq!(f.hit_test(Point::new(132.0, 122.0)), Some(FrameHit::Controls));
        assert_eq!(f.hit_test(Point::new(122.0, 102.0)), Some(FrameHit::Controls));
        assert_eq!(f.hit_test(Point::new(400.0, 120.0)), Some(FrameHit::TitleBar));
        assert_eq!(f.hit_test(Point::new(400.0, 300.0)), Some(FrameHit::Body));
        assert_eq!(f.hit_test(Point::new(895.0, 595.0)), Some(FrameHit::ResizeHandle));
    }

    #[test]
    fn body_sits_below_title_bar() {
        let f = finder_frame();
        assert_eq!(f.body(), Bounds::new(100.0, 144.0, 800.0, 456.0));
    }
}
