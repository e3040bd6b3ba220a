//! Top menu bar: fixed menus with click-to-toggle dropdowns.
//!
//! Layout is computed here from fixed metrics so hit-testing does not need
//! the font. The shell centres each label inside the bounds it gets back.

use crate::geometry::{Bounds, Point};

pub const HEIGHT: f32 = 28.0;
pub const TITLE_LEFT: f32 = 8.0;
pub const TITLE_PADDING: f32 = 10.0;
/// Approximate advance of one title character at the bar's font size.
pub const CHAR_WIDTH: f32 = 7.5;
pub const APPLE_WIDTH: f32 = 36.0;
pub const DROPDOWN_WIDTH: f32 = 240.0;
pub const DROPDOWN_PADDING: f32 = 4.0;
pub const ITEM_HEIGHT: f32 = 24.0;
pub const SEPARATOR_HEIGHT: f32 = 9.0;

/// Menu items that do something.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuCommand {
    LockScreen,
    ShutDown,
    NewFinderWindow,
    CloseWindow,
    EmptyTrash,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item { label: &'static str, command: Option<MenuCommand> },
    Separator,
}

const fn item(label: &'static str) -> MenuEntry {
    MenuEntry::Item { label, command: None }
}

const fn wired(label: &'static str, command: MenuCommand) -> MenuEntry {
    MenuEntry::Item { label, command: Some(command) }
}

const SEP: MenuEntry = MenuEntry::Separator;

#[derive(Debug)]
pub struct Menu {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

impl Menu {
    /// The first menu shows a logo instead of its title.
    pub fn is_apple(&self) -> bool {
        self.title == APPLE
    }
}

const APPLE: &str = "Apple";

pub static MENUS: &[Menu] = &[
    Menu {
        title: APPLE,
        entries: &[
            item("About This Mac"),
            SEP,
            item("System Preferences..."),
            item("App Store..."),
            SEP,
            item("Recent Items"),
            SEP,
            item("Force Quit..."),
            SEP,
            item("Sleep"),
            item("Restart..."),
            wired("Shut Down...", MenuCommand::ShutDown),
            SEP,
            wired("Lock Screen", MenuCommand::LockScreen),
            item("Log Out..."),
        ],
    },
    Menu {
        title: "Finder",
        entries: &[
            item("About Finder"),
            SEP,
            item("Preferences..."),
            SEP,
            wired("Empty Trash...", MenuCommand::EmptyTrash),
            item("Services"),
            SEP,
            item("Hide Finder"),
            item("Hide Others"),
            item("Show All"),
        ],
    },
    Menu {
        title: "File",
        entries: &[
            wired("New Finder Window", MenuCommand::NewFinderWindow),
            item("New Folder"),
            item("New Smart Folder"),
            item("New Tab"),
            SEP,
            item("Open"),
            wired("Close Window", MenuCommand::CloseWindow),
        ],
    },
    Menu {
        title: "Edit",
        entries: &[
            item("Undo"),
            item("Redo"),
            SEP,
            item("Cut"),
            item("Copy"),
            item("Paste"),
            item("Select All"),
        ],
    },
    Menu {
        title: "View",
        entries: &[
            item("as Icons"),
            item("as List"),
            item("as Columns"),
            item("as Gallery"),
            SEP,
            item("Show Preview"),
            item("Show Toolbar"),
            item("Show Sidebar"),
        ],
    },
    Menu {
        title: "Go",
        entries: &[
            item("Back"),
            item("Forward"),
            item("Enclosing Folder"),
            SEP,
            item("Documents"),
            item("Desktop"),
            item("Downloads"),
            item("Home"),
            item("Applications"),
        ],
    },
];

/// What a click on the bar did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuClick {
    /// The click landed on the bar or an open dropdown and was handled.
    Consumed,
    /// A wired item was chosen; the dropdown is closed.
    Command(MenuCommand),
    /// An open dropdown was dismissed by clicking elsewhere.
    Dismissed,
    /// Not ours; the desktop should handle it.
    Outside,
}

#[derive(Debug, Default, Clone)]
pub struct MenuBar {
    open: Option<usize>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index into [`MENUS`] of the open dropdown.
    #[inline]
    pub fn open_menu(&self) -> Option<usize> {
        self.open
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Bar strip across the top of a screen `width` wide.
    pub fn bounds(width: f32) -> Bounds {
        Bounds::new(0.0, 0.0, width, HEIGHT)
    }

    /// Title hit boxes, left to right.
    pub fn titles() -> Vec<Bounds> {
        let mut x = TITLE_LEFT;
        MENUS
            .iter()
            .map(|menu| {
                let w = if menu.is_apple() {
                    APPLE_WIDTH
                } else {
                    menu.title.chars().count() as f32 * CHAR_WIDTH + TITLE_PADDING * 2.0
                };
                let b = Bounds::new(x, 0.0, w, HEIGHT);
                x += w;
                b
            })
            .collect()
    }

    /// Dropdown panel of menu `index`.
    pub fn dropdown(index: usize) -> Option<Bounds> {
        let menu = MENUS.get(index)?;
        let title = *Self::titles().get(index)?;
        let height = menu.entries.iter().map(entry_height).sum::<f32>() + DROPDOWN_PADDING * 2.0;
        Some(Bounds::new(title.origin.x, HEIGHT, DROPDOWN_WIDTH, height))
    }

    /// Rows of menu `index` paired with their entries.
    pub fn rows(index: usize) -> Vec<(MenuEntry, Bounds)> {
        let (Some(menu), Some(panel)) = (MENUS.get(index), Self::dropdown(index)) else {
            return Vec::new();
        };
        let mut y = panel.origin.y + DROPDOWN_PADDING;
        menu.entries
            .iter()
            .map(|&entry| {
                let h = entry_height(&entry);
                let row = Bounds::new(panel.origin.x, y, panel.size.width, h);
                y += h;
                (entry, row)
            })
            .collect()
    }

    /// Handles a pointer-down at `p`.
    pub fn click(&mut self, width: f32, p: Point) -> MenuClick {
        if let Some(i) = Self::titles().iter().position(|b| b.contains(p)) {
            self.open = if self.open == Some(i) { None } else { Some(i) };
            return MenuClick::Consumed;
        }

        if let Some(open) = self.open {
            if Self::dropdown(open).is_some_and(|d| d.contains(p)) {
                let hit = Self::rows(open).into_iter().find(|(_, row)| row.contains(p));
                return match hit {
                    Some((MenuEntry::Item { label, command }, _)) => {
                        log::debug!("menu item {label:?}");
                        self.open = None;
                        command.map_or(MenuClick::Consumed, MenuClick::Command)
                    }
                    _ => MenuClick::Consumed,
                };
            }
            self.open = None;
            return MenuClick::Dismissed;
        }

        if Self::bounds(width).contains(p) {
            MenuClick::Consumed
        } else {
            MenuClick::Outside
        }
    }
}

fn entry_height(entry: &MenuEntry) -> f32 {
    match entry {
        MenuEntry::Item { .. } => ITEM_HEIGHT,
        MenuEntry::Separator => SEPARATOR_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 1920.0;

    fn centre(b: Bounds) -> Point {
        Point::new(b.origin.x + b.size.width * 0.5, b.origin.y + b.size.height * 0.5)
    }

    fn row_of(menu: usize, label: &str) -> Bounds {
        MenuBar::rows(menu)
            .into_iter()
            .find(|(e, _)| matches!(e, MenuEntry::Item { label: l, .. } if *l == label))
            .map(|(_, b)| b)
            .expect("row exists")
    }

    #[test]
    fn six_menus_in_order() {
        let titles: Vec<_> = MENUS.iter().map(|m| m.title).collect();
        assert_eq!(titles, ["Apple", "Finder", "File", "Edit", "View", "Go"]);
        assert!(MENUS[0].is_apple());
    }

    #[test]
    fn title_click_toggles() {
        let mut bar = MenuBar::new();
        let file = centre(MenuBar::titles()[2]);
        assert_eq!(bar.click(WIDTH, file), MenuClick::Consumed);
        assert_eq!(bar.open_menu(), Some(2));
        bar.click(WIDTH, file);
        assert_eq!(bar.open_menu(), None);
    }

    #[test]
    fn switching_titles_moves_dropdown() {
        let mut bar = MenuBar::new();
        bar.click(WIDTH, centre(MenuBar::titles()[1]));
        bar.click(WIDTH, centre(MenuBar::titles()[3]));
        assert_eq!(bar.open_menu(), Some(3));
    }

    #[test]
    fn click_elsewhere_dismisses() {
        let mut bar = MenuBar::new();
        bar.click(WIDTH, centre(MenuBar::titles()[0]));
        assert_eq!(bar.click(WIDTH, Point::new(900.0, 700.0)), MenuClick::Dismissed);
        assert_eq!(bar.open_menu(), None);
        assert_eq!(bar.click(WIDTH, Point::new(900.0, 700.0)), MenuClick::Outside);
    }

    #[test]
    fn empty_bar_area_is_consumed() {
        let mut bar = MenuBar::new();
        assert_eq!(bar.click(WIDTH, Point::new(1000.0, 10.0)), MenuClick::Consumed);
    }

    #[test]
    fn wired_items_yield_commands() {
        let cases = [
            (0, "Lock Screen", MenuCommand::LockScreen),
            (0, "Shut Down...", MenuCommand::ShutDown),
            (1, "Empty Trash...", MenuCommand::EmptyTrash),
            (2, "New Finder Window", MenuCommand::NewFinderWindow),
            (2, "Close Window", MenuCommand::CloseWindow),
        ];
        for (menu, label, command) in cases {
            let mut bar = MenuBar::new();
            bar.click(WIDTH, centre(MenuBar::titles()[menu]));
            assert_eq!(bar.click(WIDTH, centre(row_of(menu, label))), MenuClick::Command(command));
            assert_eq!(bar.open_menu(), None);
        }
    }

    #[test]
    fn inert_items_close_without_command() {
        let mut bar = MenuBar::new();
        bar.click(WIDTH, centre(MenuBar::titles()[3]));
        assert_eq!(bar.click(WIDTH, centre(row_of(3, "Copy"))), MenuClick::Consumed);
        assert_eq!(bar.open_menu(), None);
    }

    #[test]
    fn separator_click_keeps_dropdown_open() {
        let mut bar = MenuBar::new();
        bar.click(WIDTH, centre(MenuBar::titles()[2]));
        let (_, sep) = MenuBar::rows(2)
            .into_iter()
            .find(|(e, _)| *e == MenuEntry::Separator)
            .expect("file menu has a separator");
        assert_eq!(bar.click(WIDTH, centre(sep)), MenuClick::Consumed);
        assert_eq!(bar.open_menu(), Some(2));
    }
}
