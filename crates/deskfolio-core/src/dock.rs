//! The dock: a row of launchers at the bottom of the screen.

use crate::geometry::{Bounds, Point, Size};
use crate::panels::Panel;
use crate::wm::{WindowKind, WindowSpec};

pub const ICON_SIZE: f32 = 56.0;
pub const ICON_GAP: f32 = 8.0;
pub const PADDING: f32 = 8.0;
pub const BOTTOM_MARGIN: f32 = 8.0;
/// Width of the gap between the apps and the trash, separator included.
pub const SEPARATOR_SPAN: f32 = 17.0;

/// An icon in the dock.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DockApp {
    About,
    Projects,
    Activities,
    Career,
    Links,
    Terminal,
    Contact,
    Trash,
}

impl DockApp {
    /// Left to right. Trash sits after the separator.
    pub const ALL: [DockApp; 8] = [
        DockApp::About,
        DockApp::Projects,
        DockApp::Activities,
        DockApp::Career,
        DockApp::Links,
        DockApp::Terminal,
        DockApp::Contact,
        DockApp::Trash,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DockApp::About => "About",
            DockApp::Projects => "Projects",
            DockApp::Activities => "Activities",
            DockApp::Career => "Career",
            DockApp::Links => "Links",
            DockApp::Terminal => "Terminal",
            DockApp::Contact => "Contact",
            DockApp::Trash => "Trash",
        }
    }

    /// Window this icon opens. Trash opens nothing.
    pub fn launch(self) -> Option<Launch> {
        let (kind, content, w, h) = match self {
            DockApp::About => (WindowKind::Finder, Content::Panel(Panel::About), 1000.0, 500.0),
            DockApp::Projects => (WindowKind::Finder, Content::Projects, 1200.0, 800.0),
            DockApp::Activities => (WindowKind::Finder, Content::Panel(Panel::Activities), 900.0, 800.0),
            DockApp::Career => (WindowKind::Finder, Content::Panel(Panel::Career), 900.0, 650.0),
            DockApp::Links => (WindowKind::Finder, Content::Panel(Panel::Links), 900.0, 330.0),
            DockApp::Contact => (WindowKind::Finder, Content::Panel(Panel::Contact), 900.0, 500.0),
            DockApp::Terminal => (WindowKind::Terminal, Content::Terminal, 700.0, 450.0),
            DockApp::Trash => return None,
        };
        Some(Launch { spec: WindowSpec::new(self.label(), kind, Size::new(w, h)), content })
    }
}

/// What a launched window hosts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Content {
    /// The Finder column browser.
    Projects,
    Panel(Panel),
    Terminal,
}

/// A window-open request produced by the dock.
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub spec: WindowSpec,
    pub content: Content,
}

/// Hover state and geometry of the dock.
#[derive(Debug, Default, Clone)]
pub struct Dock {
    hovered: Option<DockApp>,
}

impl Dock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon under the pointer, whose label is shown.
    #[inline]
    pub fn hovered(&self) -> Option<DockApp> {
        self.hovered
    }

    /// Updates hover from a pointer position. Returns true if it changed.
    pub fn hover(&mut self, screen: Size, p: Point) -> bool {
        let next = self.app_at(screen, p);
        let changed = next != self.hovered;
        self.hovered = next;
        changed
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// The dock's backing plate.
    pub fn bounds(&self, screen: Size) -> Bounds {
        let apps = (DockApp::ALL.len() - 1) as f32;
        let width = PADDING * 2.0
            + ICON_SIZE * (apps + 1.0)
            + ICON_GAP * (apps - 1.0)
            + SEPARATOR_SPAN;
        let height = ICON_SIZE + PADDING * 2.0;
        Bounds::new(
            (screen.width - width) * 0.5,
            screen.height - BOTTOM_MARGIN - height,
            width,
            height,
        )
    }

    /// Icon rectangles, left to right.
    pub fn icons(&self, screen: Size) -> Vec<(DockApp, Bounds)> {
        let plate = self.bounds(screen);
        let y = plate.origin.y + PADDING;
        let mut x = plate.origin.x + PADDING;
        DockApp::ALL
            .iter()
            .map(|&app| {
                if app == DockApp::Trash {
                    x += SEPARATOR_SPAN - ICON_GAP;
                }
                let icon = Bounds::new(x, y, ICON_SIZE, ICON_SIZE);
                x += ICON_SIZE + ICON_GAP;
                (app, icon)
            })
            .collect()
    }

    /// Separator line between the apps and the trash.
    pub fn separator(&self, screen: Size) -> Bounds {
        let icons = self.icons(screen);
        let plate = self.bounds(screen);
        let trash_x = icons.last().map(|(_, b)| b.origin.x).unwrap_or(plate.right());
        Bounds::new(trash_x - SEPARATOR_SPAN * 0.5 - 0.5, plate.origin.y + PADDING, 1.0, ICON_SIZE)
    }

    pub fn app_at(&self, screen: Size, p: Point) -> Option<DockApp> {
        self.icons(screen).into_iter().find(|(_, b)| b.contains(p)).map(|(app, _)| app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1920.0, 1080.0);

    #[test]
    fn presets_match_apps() {
        let about = DockApp::About.launch().expect("about launches");
        assert_eq!(about.spec.title, "About");
        assert_eq!(about.spec.size, Size::new(1000.0, 500.0));
        assert_eq!(about.spec.position, None);
        assert_eq!(about.content, Content::Panel(Panel::About));

        let term = DockApp::Terminal.launch().expect("terminal launches");
        assert_eq!(term.spec.kind, WindowKind::Terminal);
        assert_eq!(term.spec.size, Size::new(700.0, 450.0));

        let projects = DockApp::Projects.launch().expect("projects launches");
        assert_eq!(projects.content, Content::Projects);
        assert_eq!(projects.spec.size, Size::new(1200.0, 800.0));
    }

    #[test]
    fn trash_launches_nothing() {
        assert!(DockApp::Trash.launch().is_none());
    }

    #[test]
    fn dock_is_centred_at_the_bottom() {
        let dock = Dock::new();
        let b = dock.bounds(SCREEN);
        assert!((b.origin.x + b.size.width * 0.5 - 960.0).abs() < 0.01);
        assert!((b.bottom() - (1080.0 - BOTTOM_MARGIN)).abs() < 0.01);
    }

    #[test]
    fn icons_are_ordered_and_inside_plate() {
        let dock = Dock::new();
        let plate = dock.bounds(SCREEN);
        let icons = dock.icons(SCREEN);
        assert_eq!(icons.len(), 8);
        for pair in icons.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.origin.x);
        }
        let (_, last) = icons[7];
        assert!((last.right() + PADDING - plate.right()).abs() < 0.01);
    }

    #[test]
    fn hover_tracks_icon_under_pointer() {
        let mut dock = Dock::new();
        let (_, career) = dock.icons(SCREEN)[3];
        let centre = Point::new(career.origin.x + 28.0, career.origin.y + 28.0);

        assert!(dock.hover(SCREEN, centre));
        assert_eq!(dock.hovered(), Some(DockApp::Career));
        assert!(!dock.hover(SCREEN, centre));
        assert!(dock.hover(SCREEN, Point::new(0.0, 0.0)));
        assert_eq!(dock.hovered(), None);
    }
}
