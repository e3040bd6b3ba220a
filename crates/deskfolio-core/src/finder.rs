//! Finder column browser.
//!
//! Sidebar category → column 1 → column 2 → column 3, with a detail pane for
//! whichever selected entry carries a [`Detail`]. State is per window and
//! holds only ids; the entries themselves live in the static [`ContentTree`].

use crate::content::{find, normalize_key, ContentTree, Detail, FileItem, ItemKind};

/// A column in the browser, left to right.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Column {
    First,
    Second,
    Third,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::First, Column::Second, Column::Third];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Result of clicking an entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Activation {
    /// The entry is now selected in its column.
    Selected,
    /// A link entry; the caller should open the URL. Selection is unchanged.
    OpenExternal(&'static str),
    /// No such entry in that column.
    Ignored,
}

/// Selection state of one Finder window.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderState {
    category: String,
    selected: [Option<&'static str>; 3],
    /// Vertical scroll of the detail pane, in logical pixels.
    pub detail_scroll: f32,
}

impl FinderState {
    /// Starts on the tree's default category with its first entry selected.
    pub fn new(tree: &ContentTree) -> Self {
        let mut state = Self {
            category: String::new(),
            selected: [None; 3],
            detail_scroll: 0.0,
        };
        state.enter_category(tree, tree.default_category());
        state
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// True if `label` folds onto the current category.
    pub fn is_current(&self, label: &str) -> bool {
        normalize_key(label) == self.category
    }

    /// Switches category from a sidebar label and selects its first entry.
    ///
    /// A label with no matching category leaves every column empty.
    pub fn select_category(&mut self, tree: &ContentTree, label: &str) {
        let key = normalize_key(label);
        log::debug!("finder category -> {key}");
        self.enter_category(tree, key);
    }

    /// Entries shown in `column`.
    pub fn entries(&self, tree: &ContentTree, column: Column) -> &'static [FileItem] {
        let mut items = tree.items(&self.category);
        for parent in &self.selected[..column.index()] {
            let Some(item) = parent.and_then(|id| find(items, id)) else {
                return &[];
            };
            if !item.is_folder() {
                return &[];
            }
            items = item.children;
        }
        items
    }

    /// Id selected in `column`, if any.
    #[inline]
    pub fn selected(&self, column: Column) -> Option<&'static str> {
        self.selected[column.index()]
    }

    /// Handles a click on entry `id` in `column`.
    pub fn activate(&mut self, tree: &ContentTree, column: Column, id: &str) -> Activation {
        let Some(item) = find(self.entries(tree, column), id) else {
            return Activation::Ignored;
        };

        if item.kind == ItemKind::Link {
            return match item.link {
                Some(url) => Activation::OpenExternal(url),
                None => Activation::Ignored,
            };
        }

        let i = column.index();
        self.selected[i] = Some(item.id);
        for deeper in &mut self.selected[i + 1..] {
            *deeper = None;
        }
        self.detail_scroll = 0.0;
        Activation::Selected
    }

    /// Detail record of the deepest selected entry that has one.
    pub fn detail(&self, tree: &ContentTree) -> Option<&'static Detail> {
        Column::ALL
            .iter()
            .rev()
            .filter_map(|&c| {
                let id = self.selected(c)?;
                find(self.entries(tree, c), id)
            })
            .find_map(|item| item.detail)
    }

    fn enter_category(&mut self, tree: &ContentTree, key: String) {
        self.category = key;
        self.selected = [None; 3];
        self.selected[0] = tree.items(&self.category).first().map(|i| i.id);
        self.detail_scroll = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, SidebarSection};

    static REPORT: Detail = Detail { id: "d1", title: "Q3 Report", tech_stack: &["rust"], body: "# Q3" };
    static SPEC: Detail = Detail { id: "d2", title: "Spec", tech_stack: &[], body: "text" };

    static DEEP: &[FileItem] = &[
        FileItem::file("c1", "notes.txt").with_detail(&SPEC),
        FileItem::file("c2", "todo.txt"),
    ];
    static MID: &[FileItem] = &[
        FileItem::folder("b1", "drafts", DEEP),
        FileItem::file("b2", "final.pdf"),
    ];
    static WORK: &[FileItem] = &[
        FileItem::folder("a1", "Reports", MID).with_detail(&REPORT),
        FileItem::file("a2", "2024-01-01.startDate"),
        FileItem::link("a3", "Homepage", "https://example.com"),
    ];
    static HOME: &[FileItem] = &[FileItem::file("h1", "photo.png")];
    static CATS: &[Category] =
        &[Category { key: "work", items: WORK }, Category { key: "home", items: HOME }];
    static SIDE: &[SidebarSection] =
        &[SidebarSection { title: "Favourites", labels: &["Work", "Home", "Missing"] }];

    fn tree() -> ContentTree {
        ContentTree::new(CATS, SIDE)
    }

    // ── category ──────────────────────────────────────────────────────────

    #[test]
    fn starts_on_default_category_with_first_entry() {
        let t = tree();
        let f = FinderState::new(&t);
        assert_eq!(f.category(), "work");
        assert_eq!(f.selected(Column::First), Some("a1"));
    }

    #[test]
    fn switching_category_resets_to_first_entry() {
        let t = tree();
        let mut f = FinderState::new(&t);
        f.activate(&t, Column::First, "a2");
        f.select_category(&t, "Home");
        assert_eq!(f.selected(Column::First), Some("h1"));

        f.select_category(&t, "WORK");
        assert_eq!(f.selected(Column::First), Some("a1"));
        assert_eq!(f.selected(Column::Second), None);
        assert_eq!(f.selected(Column::Third), None);
    }

    #[test]
    fn missing_category_yields_empty_columns() {
        let t = tree();
        let mut f = FinderState::new(&t);
        f.select_category(&t, "Missing");
        assert!(f.entries(&t, Column::First).is_empty());
        assert_eq!(f.selected(Column::First), None);
        assert!(f.detail(&t).is_none());
        assert_eq!(f.activate(&t, Column::First, "a1"), Activation::Ignored);
    }

    #[test]
    fn is_current_folds_label() {
        let t = tree();
        let f = FinderState::new(&t);
        assert!(f.is_current("Work"));
        assert!(!f.is_current("Home"));
    }

    // ── columns ───────────────────────────────────────────────────────────

    #[test]
    fn folder_reveals_next_column() {
        let t = tree();
        let mut f = FinderState::new(&t);
        let names: Vec<_> = f.entries(&t, Column::Second).iter().map(|i| i.name).collect();
        assert_eq!(names, ["drafts", "final.pdf"]);

        assert_eq!(f.activate(&t, Column::Second, "b1"), Activation::Selected);
        assert_eq!(f.entries(&t, Column::Third).len(), 2);
    }

    #[test]
    fn file_selection_has_no_children() {
        let t = tree();
        let mut f = FinderState::new(&t);
        f.activate(&t, Column::First, "a2");
        assert!(f.entries(&t, Column::Second).is_empty());
    }

    #[test]
    fn reselecting_upstream_clears_downstream() {
        let t = tree();
        let mut f = FinderState::new(&t);
        f.activate(&t, Column::Second, "b1");
        f.activate(&t, Column::Third, "c2");
        f.activate(&t, Column::First, "a1");
        assert_eq!(f.selected(Column::Second), None);
        assert_eq!(f.selected(Column::Third), None);
    }

    #[test]
    fn link_opens_without_changing_selection() {
        let t = tree();
        let mut f = FinderState::new(&t);
        let before = f.clone();
        assert_eq!(
            f.activate(&t, Column::First, "a3"),
            Activation::OpenExternal("https://example.com")
        );
        assert_eq!(f, before);
    }

    #[test]
    fn entry_from_another_column_is_ignored() {
        let t = tree();
        let mut f = FinderState::new(&t);
        assert_eq!(f.activate(&t, Column::First, "b1"), Activation::Ignored);
    }

    // ── detail ────────────────────────────────────────────────────────────

    #[test]
    fn detail_comes_from_deepest_selection() {
        let t = tree();
        let mut f = FinderState::new(&t);
        assert_eq!(f.detail(&t).map(|d| d.title), Some("Q3 Report"));

        f.activate(&t, Column::Second, "b1");
        f.activate(&t, Column::Third, "c1");
        assert_eq!(f.detail(&t).map(|d| d.title), Some("Spec"));

        f.activate(&t, Column::Third, "c2");
        assert_eq!(f.detail(&t).map(|d| d.title), Some("Q3 Report"));
    }

    #[test]
    fn selection_resets_detail_scroll() {
        let t = tree();
        let mut f = FinderState::new(&t);
        f.detail_scroll = 120.0;
        f.activate(&t, Column::First, "a1");
        assert_eq!(f.detail_scroll, 0.0);
    }

    #[test]
    fn builtin_tree_opens_on_tomato_agent_description() {
        let t = ContentTree::builtin();
        let f = FinderState::new(&t);
        assert_eq!(f.category(), "tomatoagent");
        assert_eq!(f.detail(&t).map(|d| d.title), Some("TomatoAgent"));
    }
}
