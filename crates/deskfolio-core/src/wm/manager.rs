use std::time::Duration;

use crate::geometry::Point;

use super::frame::WindowFrame;
use super::record::{WindowId, WindowRecord, WindowSpec, OPEN_ANIMATION};

/// Owns the open windows and their stacking order.
///
/// Invariants:
/// - z-indices are unique; every assignment is one above the previous highest
/// - at most one window has a non-idle gesture, and it is the captured one
/// - closing removes the record outright
#[derive(Debug)]
pub struct WindowManager<B> {
    /// Insertion order. Drives cascade offsets, not stacking.
    windows: Vec<WindowRecord<B>>,
    next_id: u64,
    top_z: u32,
    captured: Option<WindowId>,
}

impl<B> Default for WindowManager<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> WindowManager<B> {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an empty manager whose first window gets z-index `first_z`.
    pub fn starting_at(first_z: u32) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            top_z: first_z.saturating_sub(1),
            captured: None,
        }
    }

    // ── mutators ──────────────────────────────────────────────────────────

    /// Opens a window on top of every other one and starts its open animation.
    pub fn open(&mut self, spec: WindowSpec, body: B) -> &WindowRecord<B> {
        self.insert(spec, body, Some(OPEN_ANIMATION))
    }

    /// Like [`open`](Self::open) but without the open animation. Used for
    /// windows that are already on screen when the desktop appears.
    pub fn seed(&mut self, spec: WindowSpec, body: B) -> &WindowRecord<B> {
        self.insert(spec, body, None)
    }

    /// Removes `id`. Unknown ids are ignored.
    pub fn close(&mut self, id: WindowId) -> Option<WindowRecord<B>> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        if self.captured == Some(id) {
            self.captured = None;
        }
        let record = self.windows.remove(index);
        log::debug!("closed {} ({})", record.id, record.title);
        Some(record)
    }

    /// Raises `id` above every other window. Other z-indices are untouched.
    ///
    /// Returns `false` if `id` is not open.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let z = self.top_z + 1;
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        window.z_index = z;
        self.top_z = z;
        true
    }

    /// Closes everything. Returns how many windows were open.
    pub fn close_all(&mut self) -> usize {
        let n = self.windows.len();
        self.windows.clear();
        self.captured = None;
        if n > 0 {
            log::debug!("closed all {n} windows");
        }
        n
    }

    /// Advances open animations.
    pub fn tick(&mut self, dt: Duration) {
        for w in &mut self.windows {
            w.tick(dt);
        }
    }

    // ── pointer capture ───────────────────────────────────────────────────

    /// Starts dragging `id` and captures the pointer for it.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        self.begin_gesture(id, |frame| frame.begin_drag(pointer))
    }

    /// Starts resizing `id` and captures the pointer for it.
    pub fn begin_resize(&mut self, id: WindowId) -> bool {
        self.begin_gesture(id, WindowFrame::begin_resize)
    }

    /// Forwards a pointer move to the captured window, if any.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        let Some(id) = self.captured else {
            return false;
        };
        match self.get_mut(id) {
            Some(w) => w.frame.pointer_moved(pointer),
            None => false,
        }
    }

    /// Ends the active gesture and releases capture.
    pub fn pointer_released(&mut self) -> Option<WindowId> {
        let id = self.captured.take()?;
        if let Some(w) = self.get_mut(id) {
            w.frame.release();
        }
        Some(id)
    }

    #[inline]
    pub fn captured(&self) -> Option<WindowId> {
        self.captured
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord<B>> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord<B>> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Windows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord<B>> {
        self.windows.iter()
    }

    /// Windows sorted back to front (ascending z-index).
    pub fn back_to_front(&self) -> Vec<&WindowRecord<B>> {
        let mut sorted: Vec<_> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    /// The window with the highest z-index.
    pub fn frontmost(&self) -> Option<&WindowRecord<B>> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    pub fn frontmost_mut(&mut self) -> Option<&mut WindowRecord<B>> {
        self.windows.iter_mut().max_by_key(|w| w.z_index)
    }

    /// Topmost window whose frame contains `p`.
    pub fn window_at(&self, p: Point) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.frame.bounds().contains(p))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn insert(&mut self, spec: WindowSpec, body: B, opening: Option<Duration>) -> &WindowRecord<B> {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.top_z += 1;

        let position = spec
            .position
            .unwrap_or_else(|| spec.kind.cascade(self.windows.len()));
        let frame = WindowFrame::new(position, spec.size, spec.kind.min_size());

        log::debug!("opened {id} ({}) at z {}", spec.title, self.top_z);

        let index = self.windows.len();
        self.windows.push(WindowRecord {
            id,
            title: spec.title,
            kind: spec.kind,
            z_index: self.top_z,
            frame,
            opening,
            body,
        });
        &self.windows[index]
    }

    fn begin_gesture(&mut self, id: WindowId, start: impl FnOnce(&mut WindowFrame)) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.pointer_released();
        let Some(w) = self.get_mut(id) else {
            return false;
        };
        start(&mut w.frame);
        self.captured = Some(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::wm::{Gesture, WindowKind};

    fn finder(title: &str) -> WindowSpec {
        WindowSpec::new(title, WindowKind::Finder, Size::new(800.0, 500.0))
    }

    fn terminal() -> WindowSpec {
        WindowSpec::new("Terminal", WindowKind::Terminal, Size::new(700.0, 450.0))
    }

    fn z_of(wm: &WindowManager<()>, id: WindowId) -> u32 {
        wm.get(id).map(|w| w.z_index()).unwrap_or(0)
    }

    // ── open ──────────────────────────────────────────────────────────────

    #[test]
    fn open_assigns_strictly_increasing_unique_z() {
        let mut wm = WindowManager::new();
        let mut last = 0;
        let mut ids = Vec::new();
        for i in 0..20 {
            let w = wm.open(finder(&format!("w{i}")), ());
            assert!(w.z_index() > last);
            last = w.z_index();
            ids.push(w.id());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn open_after_close_still_goes_on_top() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        let b = wm.open(finder("b"), ()).id();
        wm.close(b);
        let c = wm.open(finder("c"), ()).id();
        assert!(z_of(&wm, c) > z_of(&wm, a));
        assert_eq!(wm.frontmost().map(|w| w.id()), Some(c));
    }

    #[test]
    fn starting_at_sets_first_z() {
        let mut wm = WindowManager::starting_at(10);
        assert_eq!(wm.seed(finder("About"), ()).z_index(), 10);
        assert_eq!(wm.seed(finder("Projects"), ()).z_index(), 11);
        assert_eq!(wm.open(finder("Links"), ()).z_index(), 12);
    }

    #[test]
    fn cascade_uses_insertion_index_and_kind() {
        let mut wm = WindowManager::new();
        let p0 = wm.open(finder("a"), ()).frame().position();
        let p1 = wm.open(finder("b"), ()).frame().position();
        let p2 = wm.open(terminal(), ()).frame().position();
        assert_eq!(p0, Point::new(100.0, 100.0));
        assert_eq!(p1, Point::new(130.0, 130.0));
        assert_eq!(p2, Point::new(210.0, 210.0));
    }

    #[test]
    fn explicit_position_wins_over_cascade() {
        let mut wm = WindowManager::new();
        let w = wm.open(finder("a").at(Point::new(1200.0, 100.0)), ());
        assert_eq!(w.frame().position(), Point::new(1200.0, 100.0));
    }

    #[test]
    fn kind_sets_min_size() {
        let mut wm = WindowManager::new();
        let t = wm.open(terminal(), ());
        assert_eq!(t.frame().min_size(), Size::new(400.0, 300.0));
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_only_touches_target() {
        let mut wm = WindowManager::new();
        let ids: Vec<_> = (0..4).map(|i| wm.open(finder(&format!("{i}")), ()).id()).collect();
        let before: Vec<_> = ids.iter().map(|&id| z_of(&wm, id)).collect();

        assert!(wm.focus(ids[1]));

        for (i, &id) in ids.iter().enumerate() {
            if i == 1 {
                continue;
            }
            assert_eq!(z_of(&wm, id), before[i]);
        }
        let max_other = ids.iter().filter(|&&id| id != ids[1]).map(|&id| z_of(&wm, id)).max();
        assert!(Some(z_of(&wm, ids[1])) > max_other);
        assert_eq!(wm.frontmost().map(|w| w.id()), Some(ids[1]));
    }

    #[test]
    fn focus_frontmost_keeps_it_frontmost() {
        let mut wm = WindowManager::new();
        wm.open(finder("a"), ());
        let b = wm.open(finder("b"), ()).id();
        wm.focus(b);
        assert_eq!(wm.frontmost().map(|w| w.id()), Some(b));
    }

    #[test]
    fn focus_unknown_is_noop() {
        let mut wm: WindowManager<()> = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        let z = z_of(&wm, a);
        wm.close(a);
        assert!(!wm.focus(a));
        let b = wm.open(finder("b"), ()).id();
        assert_eq!(z_of(&wm, b), z + 1);
    }

    // ── close ─────────────────────────────────────────────────────────────

    #[test]
    fn close_removes_exactly_one() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        let b = wm.open(finder("b"), ()).id();
        let za = z_of(&wm, a);

        assert!(wm.close(b).is_some());
        assert_eq!(wm.len(), 1);
        assert!(wm.get(b).is_none());
        assert_eq!(z_of(&wm, a), za);
    }

    #[test]
    fn close_unknown_is_noop() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        wm.close(a);
        assert!(wm.close(a).is_none());
        assert!(wm.is_empty());
    }

    #[test]
    fn close_all_empties_and_releases_capture() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        wm.open(terminal(), ());
        wm.begin_drag(a, Point::new(110.0, 110.0));

        assert_eq!(wm.close_all(), 2);
        assert!(wm.is_empty());
        assert_eq!(wm.captured(), None);
        assert_eq!(wm.close_all(), 0);
    }

    // ── capture ───────────────────────────────────────────────────────────

    #[test]
    fn moves_reach_only_the_captured_window() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        let b = wm.open(finder("b"), ()).id();
        let b_pos = wm.get(b).map(|w| w.frame().position());

        assert!(wm.begin_drag(a, Point::new(110.0, 110.0)));
        assert!(wm.pointer_moved(Point::new(510.0, 310.0)));

        assert_eq!(wm.get(a).map(|w| w.frame().position()), Some(Point::new(500.0, 300.0)));
        assert_eq!(wm.get(b).map(|w| w.frame().position()), b_pos);
    }

    #[test]
    fn release_ends_gesture_and_capture() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        wm.begin_resize(a);
        assert_eq!(wm.captured(), Some(a));

        assert_eq!(wm.pointer_released(), Some(a));
        assert_eq!(wm.captured(), None);
        assert_eq!(wm.get(a).map(|w| w.frame().gesture()), Some(Gesture::Idle));
        assert!(!wm.pointer_moved(Point::new(0.0, 0.0)));
    }

    #[test]
    fn closing_captured_window_releases_capture() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        wm.begin_drag(a, Point::new(110.0, 110.0));
        wm.close(a);
        assert_eq!(wm.captured(), None);
        assert!(!wm.pointer_moved(Point::new(0.0, 0.0)));
    }

    #[test]
    fn new_gesture_idles_previous_window() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        let b = wm.open(finder("b"), ()).id();
        wm.begin_drag(a, Point::new(110.0, 110.0));
        wm.begin_resize(b);

        assert_eq!(wm.get(a).map(|w| w.frame().is_idle()), Some(true));
        assert_eq!(wm.captured(), Some(b));
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[test]
    fn window_at_picks_topmost() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a").at(Point::new(0.0, 0.0)), ()).id();
        let b = wm.open(finder("b").at(Point::new(100.0, 100.0)), ()).id();

        assert_eq!(wm.window_at(Point::new(150.0, 150.0)), Some(b));
        wm.focus(a);
        assert_eq!(wm.window_at(Point::new(150.0, 150.0)), Some(a));
        assert_eq!(wm.window_at(Point::new(5000.0, 5000.0)), None);
    }

    #[test]
    fn back_to_front_is_sorted_by_z() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        let b = wm.open(finder("b"), ()).id();
        wm.focus(a);
        let order: Vec<_> = wm.back_to_front().iter().map(|w| w.id()).collect();
        assert_eq!(order, vec![b, a]);
    }

    // ── animation ─────────────────────────────────────────────────────────

    #[test]
    fn open_animation_clears_after_delay() {
        let mut wm = WindowManager::new();
        let a = wm.open(finder("a"), ()).id();
        assert_eq!(wm.get(a).map(|w| w.is_newly_created()), Some(true));

        wm.tick(Duration::from_millis(250));
        let progress = wm.get(a).map(|w| w.open_progress()).unwrap_or(0.0);
        assert!(progress > 0.6 && progress < 0.7);

        wm.tick(Duration::from_millis(150));
        assert_eq!(wm.get(a).map(|w| w.is_newly_created()), Some(false));
        assert_eq!(wm.get(a).map(|w| w.open_progress()), Some(1.0));
    }

    #[test]
    fn seeded_windows_do_not_animate() {
        let mut wm = WindowManager::new();
        let w = wm.seed(finder("a"), ());
        assert!(!w.is_newly_created());
    }
}
