//! The desktop: windows plus the collaborators around them.
//!
//! [`Desktop`] is the single entry point the shell talks to. Pointer and key
//! input come in already translated to desktop space; side effects that
//! leave the process (opening a URL, quitting) are queued as [`Effect`]s.

use std::time::Duration;

use crate::clock::Clock;
use crate::content::ContentTree;
use crate::dock::{Content, Dock, DockApp};
use crate::finder::{Activation, Column, FinderState};
use crate::geometry::{Point, Size};
use crate::lock::LockScreen;
use crate::menubar::{MenuBar, MenuClick, MenuCommand};
use crate::panels::Panel;
use crate::spotlight::{Spotlight, SpotlightKey};
use crate::terminal::TerminalSession;
use crate::wm::{FrameHit, Gesture, WindowId, WindowKind, WindowManager, WindowSpec};

/// z-index of the first seeded window.
pub const FIRST_Z: u32 = 10;
/// Pixels scrolled per wheel line in panels and the detail pane.
pub const SCROLL_STEP: f32 = 40.0;

/// Content state attached to each window.
#[derive(Debug, Clone)]
pub enum WindowBody {
    Finder(FinderState),
    Panel { panel: Panel, scroll: f32 },
    Terminal(TerminalSession),
}

impl WindowBody {
    /// Vertical scroll in pixels of a scrollable body.
    fn scroll_mut(&mut self) -> Option<&mut f32> {
        match self {
            WindowBody::Finder(f) => Some(&mut f.detail_scroll),
            WindowBody::Panel { scroll, .. } => Some(scroll),
            WindowBody::Terminal(_) => None,
        }
    }
}

/// A side effect for the shell to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(String),
    Exit,
}

/// Keys the desktop routes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DeskKey {
    Enter,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    Space,
}

/// Which pointer shape fits the spot under the cursor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Pointer,
    Move,
    Resize,
    Text,
}

/// What a pointer-down did.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerOutcome {
    /// Nothing under the pointer.
    Missed,
    /// Swallowed by an overlay (lock screen, menu bar, search).
    Consumed,
    Launched(DockApp),
    Closed(WindowId),
    Focused(WindowId),
    DragStarted(WindowId),
    ResizeStarted(WindowId),
    /// Landed in a window's content area; `local` is relative to the body.
    Body { id: WindowId, local: Point },
}

pub struct Desktop<C: Clock> {
    clock: C,
    content: ContentTree,
    screen: Size,
    windows: WindowManager<WindowBody>,
    lock: LockScreen,
    menubar: MenuBar,
    dock: Dock,
    spotlight: Spotlight,
    /// Whether the search overlay is drawn and takes input while open.
    spotlight_overlay: bool,
    effects: Vec<Effect>,
}

impl<C: Clock> Desktop<C> {
    /// A locked desktop with the three start-up windows behind the lock screen.
    pub fn new(clock: C, screen: Size) -> Self {
        let content = ContentTree::builtin();
        let mut windows = WindowManager::starting_at(FIRST_Z);

        let about = WindowSpec::new("About", WindowKind::Finder, Size::new(1000.0, 500.0))
            .at(Point::new(100.0, 100.0));
        windows.seed(about, WindowBody::Panel { panel: Panel::About, scroll: 0.0 });

        let projects = WindowSpec::new("Projects", WindowKind::Finder, Size::new(1200.0, 800.0))
            .at(Point::new(1200.0, 100.0));
        windows.seed(projects, WindowBody::Finder(FinderState::new(&content)));

        let links = WindowSpec::new("Links", WindowKind::Finder, Size::new(900.0, 330.0))
            .at(Point::new(100.0, 700.0));
        windows.seed(links, WindowBody::Panel { panel: Panel::Links, scroll: 0.0 });

        Self {
            clock,
            content,
            screen,
            windows,
            lock: LockScreen::Locked,
            menubar: MenuBar::new(),
            dock: Dock::new(),
            spotlight: Spotlight::new(),
            spotlight_overlay: false,
            effects: Vec::new(),
        }
    }

    pub fn with_spotlight_overlay(mut self, enabled: bool) -> Self {
        self.spotlight_overlay = enabled;
        self
    }

    pub fn with_lock(mut self, lock: LockScreen) -> Self {
        self.lock = lock;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn content(&self) -> &ContentTree {
        &self.content
    }

    #[inline]
    pub fn screen(&self) -> Size {
        self.screen
    }

    #[inline]
    pub fn windows(&self) -> &WindowManager<WindowBody> {
        &self.windows
    }

    #[inline]
    pub fn windows_mut(&mut self) -> &mut WindowManager<WindowBody> {
        &mut self.windows
    }

    #[inline]
    pub fn lock_screen(&self) -> LockScreen {
        self.lock
    }

    #[inline]
    pub fn menubar(&self) -> &MenuBar {
        &self.menubar
    }

    #[inline]
    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    #[inline]
    pub fn spotlight(&self) -> &Spotlight {
        &self.spotlight
    }

    #[inline]
    pub fn spotlight_overlay(&self) -> bool {
        self.spotlight_overlay
    }

    /// Drains queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn set_screen(&mut self, screen: Size) {
        self.screen = screen;
    }

    pub fn tick(&mut self, dt: Duration) {
        self.windows.tick(dt);
        self.lock.tick(dt);
    }

    // ── actions ───────────────────────────────────────────────────────────

    /// Opens the window for a dock icon, or empties the desktop for the trash.
    pub fn launch(&mut self, app: DockApp) -> Option<WindowId> {
        log::debug!("launch {}", app.label());
        let Some(launch) = app.launch() else {
            self.windows.close_all();
            return None;
        };
        let body = match launch.content {
            Content::Projects => WindowBody::Finder(FinderState::new(&self.content)),
            Content::Panel(panel) => WindowBody::Panel { panel, scroll: 0.0 },
            Content::Terminal => WindowBody::Terminal(TerminalSession::new(&self.clock)),
        };
        Some(self.windows.open(launch.spec, body).id())
    }

    pub fn run_menu_command(&mut self, command: MenuCommand) {
        log::debug!("menu command {command:?}");
        match command {
            MenuCommand::LockScreen => {
                self.windows.pointer_released();
                self.spotlight.close();
                self.lock.lock();
            }
            MenuCommand::ShutDown => self.effects.push(Effect::Exit),
            MenuCommand::NewFinderWindow => {
                self.launch(DockApp::Projects);
            }
            MenuCommand::CloseWindow => {
                if let Some(id) = self.windows.frontmost().map(|w| w.id()) {
                    self.windows.close(id);
                }
            }
            MenuCommand::EmptyTrash => {
                self.windows.close_all();
            }
        }
    }

    /// Queues `url` to be opened by the operating system.
    pub fn open_external(&mut self, url: impl Into<String>) {
        let url = url.into();
        log::info!("opening {url}");
        self.effects.push(Effect::OpenUrl(url));
    }

    /// Sidebar click in Finder window `id`.
    pub fn select_category(&mut self, id: WindowId, label: &str) {
        let content = self.content;
        if let Some(WindowBody::Finder(finder)) = self.windows.get_mut(id).map(|w| &mut w.body) {
            finder.select_category(&content, label);
        }
    }

    /// Column click in Finder window `id`. Links are queued for opening.
    pub fn activate_entry(&mut self, id: WindowId, column: Column, item: &str) -> Activation {
        let content = self.content;
        let Some(WindowBody::Finder(finder)) = self.windows.get_mut(id).map(|w| &mut w.body) else {
            return Activation::Ignored;
        };
        let activation = finder.activate(&content, column, item);
        if let Activation::OpenExternal(url) = activation {
            self.open_external(url);
        }
        activation
    }

    // ── pointer ───────────────────────────────────────────────────────────

    pub fn pointer_down(&mut self, p: Point) -> PointerOutcome {
        if self.lock.blocks_input() {
            self.lock.unlock();
            return PointerOutcome::Consumed;
        }

        if self.spotlight_captures() {
            self.spotlight.close();
            return PointerOutcome::Consumed;
        }

        match self.menubar.click(self.screen.width, p) {
            MenuClick::Outside => {}
            MenuClick::Command(command) => {
                self.run_menu_command(command);
                return PointerOutcome::Consumed;
            }
            MenuClick::Consumed | MenuClick::Dismissed => return PointerOutcome::Consumed,
        }

        if let Some(app) = self.dock.app_at(self.screen, p) {
            self.launch(app);
            return PointerOutcome::Launched(app);
        }

        let Some(id) = self.windows.window_at(p) else {
            return PointerOutcome::Missed;
        };
        let Some(hit) = self.windows.get(id).and_then(|w| w.frame().hit_test(p)) else {
            return PointerOutcome::Missed;
        };

        self.windows.focus(id);
        match hit {
            FrameHit::Close => {
                self.windows.close(id);
                PointerOutcome::Closed(id)
            }
            FrameHit::Minimize | FrameHit::Zoom | FrameHit::Controls => PointerOutcome::Focused(id),
            FrameHit::TitleBar => {
                self.windows.begin_drag(id, p);
                PointerOutcome::DragStarted(id)
            }
            FrameHit::ResizeHandle => {
                self.windows.begin_resize(id);
                PointerOutcome::ResizeStarted(id)
            }
            FrameHit::Body => {
                let local = self
                    .windows
                    .get(id)
                    .map(|w| w.frame().body().to_local(p))
                    .unwrap_or_default();
                PointerOutcome::Body { id, local }
            }
        }
    }

    /// Returns true if a window moved or resized.
    pub fn pointer_move(&mut self, screen_p: Point) -> bool {
        self.dock.hover(self.screen, screen_p);
        self.windows.pointer_moved(screen_p)
    }

    pub fn pointer_up(&mut self) {
        self.windows.pointer_released();
    }

    pub fn pointer_left(&mut self) {
        self.dock.clear_hover();
    }

    /// Wheel over `p`; positive `lines` scrolls content up (toward older text).
    pub fn wheel(&mut self, p: Point, lines: f32) {
        if self.lock.blocks_input() {
            return;
        }
        let Some(id) = self.windows.window_at(p) else {
            return;
        };
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        match &mut window.body {
            WindowBody::Terminal(session) => session.scroll_by(lines.round() as isize),
            body => {
                if let Some(scroll) = body.scroll_mut() {
                    *scroll = (*scroll - lines * SCROLL_STEP).max(0.0);
                }
            }
        }
    }

    /// Caps the scroll of window `id` once its content height is known.
    pub fn clamp_scroll(&mut self, id: WindowId, max: f32) {
        if let Some(scroll) = self.windows.get_mut(id).and_then(|w| w.body.scroll_mut()) {
            *scroll = scroll.min(max.max(0.0));
        }
    }

    /// Cursor shape for the pointer at `p`.
    pub fn cursor_at(&self, p: Point) -> CursorHint {
        if self.lock.blocks_input() {
            return CursorHint::Pointer;
        }
        if let Some(w) = self.windows.captured().and_then(|id| self.windows.get(id)) {
            match w.frame().gesture() {
                Gesture::Dragging { .. } => return CursorHint::Move,
                Gesture::Resizing { .. } => return CursorHint::Resize,
                Gesture::Idle => {}
            }
        }
        if self.dock.app_at(self.screen, p).is_some() {
            return CursorHint::Pointer;
        }
        if MenuBar::bounds(self.screen.width).contains(p) {
            return CursorHint::Default;
        }
        let Some(w) = self.windows.window_at(p).and_then(|id| self.windows.get(id)) else {
            return CursorHint::Default;
        };
        match w.frame().hit_test(p) {
            Some(FrameHit::TitleBar) => CursorHint::Move,
            Some(FrameHit::ResizeHandle) => CursorHint::Resize,
            Some(FrameHit::Close | FrameHit::Minimize | FrameHit::Zoom) => CursorHint::Pointer,
            Some(FrameHit::Body) if w.kind() == WindowKind::Terminal => CursorHint::Text,
            _ => CursorHint::Default,
        }
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    pub fn key(&mut self, key: DeskKey, meta: bool) {
        if self.lock.blocks_input() {
            return;
        }
        if meta && key == DeskKey::Space {
            self.spotlight.open();
            return;
        }

        if self.spotlight_captures() {
            let key = match key {
                DeskKey::ArrowUp => SpotlightKey::Up,
                DeskKey::ArrowDown => SpotlightKey::Down,
                DeskKey::Enter => SpotlightKey::Enter,
                DeskKey::Escape => SpotlightKey::Escape,
                DeskKey::Backspace => {
                    self.spotlight.backspace();
                    return;
                }
                DeskKey::Space => return,
            };
            self.spotlight.key(key);
            return;
        }

        if key == DeskKey::Escape {
            self.menubar.close();
            return;
        }

        let clock = &self.clock;
        if let Some(session) = frontmost_terminal(&mut self.windows) {
            match key {
                DeskKey::Enter => session.submit(clock),
                DeskKey::Backspace => session.backspace(),
                _ => {}
            }
        }
    }

    /// Committed text from the keyboard or an input method.
    pub fn text(&mut self, text: &str) {
        if self.lock.blocks_input() {
            return;
        }
        if self.spotlight_captures() {
            self.spotlight.insert_text(text);
        } else if let Some(session) = frontmost_terminal(&mut self.windows) {
            session.insert_text(text);
        }
    }

    fn spotlight_captures(&self) -> bool {
        self.spotlight_overlay && self.spotlight.is_open()
    }
}

fn frontmost_terminal(windows: &mut WindowManager<WindowBody>) -> Option<&mut TerminalSession> {
    match &mut windows.frontmost_mut()?.body {
        WindowBody::Terminal(session) => Some(session),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{test_clock, FixedClock};
    use crate::wm::TITLE_BAR_HEIGHT;

    const SCREEN: Size = Size::new(2560.0, 1440.0);

    fn desktop() -> Desktop<FixedClock> {
        Desktop::new(test_clock(), SCREEN).with_lock(LockScreen::Unlocked)
    }

    fn titles(d: &Desktop<FixedClock>) -> Vec<&str> {
        d.windows().back_to_front().iter().map(|w| w.title()).collect()
    }

    fn terminal(d: &Desktop<FixedClock>, id: WindowId) -> &TerminalSession {
        match &d.windows().get(id).expect("window open").body {
            WindowBody::Terminal(t) => t,
            other => panic!("expected terminal, got {other:?}"),
        }
    }

    // ── start-up ──────────────────────────────────────────────────────────

    #[test]
    fn seeds_three_windows() {
        let d = desktop();
        let z: Vec<_> = d.windows().back_to_front().iter().map(|w| w.z_index()).collect();
        assert_eq!(titles(&d), ["About", "Projects", "Links"]);
        assert_eq!(z, [10, 11, 12]);
        let projects = d.windows().back_to_front()[1];
        assert!(matches!(projects.body, WindowBody::Finder(_)));
        assert_eq!(projects.frame().position(), Point::new(1200.0, 100.0));
    }

    #[test]
    fn starts_locked_and_first_click_unlocks() {
        let mut d = Desktop::new(test_clock(), SCREEN);
        assert!(d.lock_screen().blocks_input());
        assert_eq!(d.pointer_down(Point::new(150.0, 110.0)), PointerOutcome::Consumed);
        assert!(!d.lock_screen().blocks_input());
        // during the fade the desktop is already live
        assert!(matches!(d.pointer_down(Point::new(150.0, 110.0)), PointerOutcome::Focused(_) | PointerOutcome::DragStarted(_)));
        d.tick(Duration::from_millis(600));
        assert_eq!(d.lock_screen(), LockScreen::Unlocked);
    }

    // ── dock ──────────────────────────────────────────────────────────────

    #[test]
    fn launch_cascades_and_raises() {
        let mut d = desktop();
        let id = d.launch(DockApp::Terminal).expect("terminal opens");
        let w = d.windows().get(id).expect("open");
        assert_eq!(w.z_index(), 13);
        assert_eq!(w.frame().position(), Point::new(240.0, 240.0));
        assert!(w.is_newly_created());
        assert_eq!(terminal(&d, id).history().len(), 1);
    }

    #[test]
    fn trash_closes_everything() {
        let mut d = desktop();
        assert_eq!(d.launch(DockApp::Trash), None);
        assert!(d.windows().is_empty());
    }

    #[test]
    fn dock_click_launches() {
        let mut d = desktop();
        let (_, icon) = d.dock().icons(SCREEN)[2];
        let outcome = d.pointer_down(Point::new(icon.origin.x + 5.0, icon.origin.y + 5.0));
        assert_eq!(outcome, PointerOutcome::Launched(DockApp::Activities));
        assert_eq!(d.windows().frontmost().map(|w| w.title()), Some("Activities"));
    }

    // ── window interaction ────────────────────────────────────────────────

    #[test]
    fn title_drag_moves_window() {
        let mut d = desktop();
        let outcome = d.pointer_down(Point::new(400.0, 110.0));
        let PointerOutcome::DragStarted(id) = outcome else {
            panic!("expected drag, got {outcome:?}");
        };
        assert_eq!(d.cursor_at(Point::new(0.0, 0.0)), CursorHint::Move);
        assert!(d.pointer_move(Point::new(450.0, 160.0)));
        d.pointer_up();
        assert_eq!(d.windows().get(id).map(|w| w.frame().position()), Some(Point::new(150.0, 150.0)));
        assert!(!d.pointer_move(Point::new(900.0, 900.0)));
    }

    #[test]
    fn click_raises_window_under_pointer() {
        let mut d = desktop();
        // About body, below its title bar
        let p = Point::new(300.0, 100.0 + TITLE_BAR_HEIGHT + 20.0);
        let outcome = d.pointer_down(p);
        assert!(matches!(outcome, PointerOutcome::Body { local, .. } if local == Point::new(200.0, 20.0)));
        assert_eq!(titles(&d), ["Projects", "Links", "About"]);
    }

    #[test]
    fn close_control_removes_window() {
        let mut d = desktop();
        let outcome = d.pointer_down(Point::new(100.0 + 16.0 + 6.0, 100.0 + 22.0));
        assert!(matches!(outcome, PointerOutcome::Closed(_)));
        assert_eq!(titles(&d), ["Projects", "Links"]);
    }

    #[test]
    fn resize_respects_floor() {
        let mut d = desktop();
        let outcome = d.pointer_down(Point::new(1090.0, 590.0));
        let PointerOutcome::ResizeStarted(id) = outcome else {
            panic!("expected resize, got {outcome:?}");
        };
        d.pointer_move(Point::new(150.0, 150.0));
        d.pointer_up();
        assert_eq!(d.windows().get(id).map(|w| w.frame().size()), Some(Size::new(600.0, 400.0)));
    }

    #[test]
    fn empty_desktop_click_misses() {
        let mut d = desktop();
        assert_eq!(d.pointer_down(Point::new(2500.0, 1000.0)), PointerOutcome::Missed);
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn typing_goes_to_frontmost_terminal() {
        let mut d = desktop();
        let id = d.launch(DockApp::Terminal).expect("terminal opens");
        d.text("whoami");
        d.key(DeskKey::Enter, false);
        let t = terminal(&d, id);
        assert_eq!(t.history().last().map(|e| e.command.as_str()), Some("whoami"));
        assert_eq!(t.input(), "");
    }

    #[test]
    fn typing_ignored_when_finder_is_frontmost() {
        let mut d = desktop();
        let id = d.launch(DockApp::Terminal).expect("terminal opens");
        d.launch(DockApp::About);
        d.text("ls");
        assert_eq!(terminal(&d, id).input(), "");
    }

    #[test]
    fn locked_desktop_ignores_keys() {
        let mut d = desktop();
        let id = d.launch(DockApp::Terminal).expect("terminal opens");
        d.run_menu_command(MenuCommand::LockScreen);
        d.text("ls");
        assert_eq!(terminal(&d, id).input(), "");
    }

    #[test]
    fn meta_space_opens_hidden_search_without_stealing_keys() {
        let mut d = desktop();
        let id = d.launch(DockApp::Terminal).expect("terminal opens");
        d.key(DeskKey::Space, true);
        assert!(d.spotlight().is_open());
        d.text("ls");
        assert_eq!(terminal(&d, id).input(), "ls");
    }

    #[test]
    fn search_overlay_captures_keys_when_enabled() {
        let mut d = desktop().with_spotlight_overlay(true);
        d.key(DeskKey::Space, true);
        d.text("mail");
        assert_eq!(d.spotlight().query(), "mail");
        d.key(DeskKey::Escape, false);
        assert!(!d.spotlight().is_open());
        assert_eq!(d.spotlight().query(), "");
    }

    // ── menu ──────────────────────────────────────────────────────────────

    #[test]
    fn menu_commands() {
        let mut d = desktop();
        d.run_menu_command(MenuCommand::NewFinderWindow);
        assert_eq!(d.windows().frontmost().map(|w| w.title()), Some("Projects"));
        assert_eq!(d.windows().len(), 4);

        d.run_menu_command(MenuCommand::CloseWindow);
        assert_eq!(d.windows().len(), 3);

        d.run_menu_command(MenuCommand::EmptyTrash);
        assert!(d.windows().is_empty());

        d.run_menu_command(MenuCommand::ShutDown);
        assert_eq!(d.take_effects(), [Effect::Exit]);
        assert!(d.take_effects().is_empty());
    }

    // ── finder ────────────────────────────────────────────────────────────

    #[test]
    fn finder_link_queues_url() {
        let mut d = desktop();
        let id = d.windows().back_to_front()[1].id();
        let link = d
            .content()
            .items("tomatoagent")
            .iter()
            .find(|i| i.link.is_some())
            .expect("category has a link");
        let (item_id, url) = (link.id, link.link.unwrap_or_default());

        assert_eq!(d.activate_entry(id, Column::First, item_id), Activation::OpenExternal(url));
        assert_eq!(d.take_effects(), [Effect::OpenUrl(url.to_string())]);
    }

    #[test]
    fn finder_category_switch() {
        let mut d = desktop();
        let id = d.windows().back_to_front()[1].id();
        d.select_category(id, "MSG Guard");
        let Some(WindowBody::Finder(f)) = d.windows().get(id).map(|w| &w.body) else {
            panic!("projects window hosts a finder");
        };
        assert_eq!(f.category(), "msgguard");
        assert!(f.selected(Column::First).is_some());
    }

    // ── scrolling ─────────────────────────────────────────────────────────

    #[test]
    fn wheel_scrolls_panel_and_clamps() {
        let mut d = desktop();
        let p = Point::new(300.0, 300.0);
        let id = d.windows().window_at(p).expect("about under pointer");
        d.wheel(p, -3.0);
        d.clamp_scroll(id, 100.0);
        let Some(WindowBody::Panel { scroll, .. }) = d.windows().get(id).map(|w| &w.body) else {
            panic!("about hosts a panel");
        };
        assert_eq!(*scroll, 100.0);

        d.wheel(p, 10.0);
        let Some(WindowBody::Panel { scroll, .. }) = d.windows().get(id).map(|w| &w.body) else {
            panic!("about hosts a panel");
        };
        assert_eq!(*scroll, 0.0);
    }
}
