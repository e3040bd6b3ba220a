use super::catalog;

/// Kind of a Finder entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ItemKind {
    File,
    Folder,
    Link,
}

/// Long-form description attached to an entry and shown in the detail pane.
#[derive(Debug, PartialEq)]
pub struct Detail {
    pub id: &'static str,
    pub title: &'static str,
    pub tech_stack: &'static [&'static str],
    /// Markdown-like text; see [`crate::markdown`].
    pub body: &'static str,
}

/// One row in a Finder column.
#[derive(Debug, PartialEq)]
pub struct FileItem {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub link: Option<&'static str>,
    pub detail: Option<&'static Detail>,
    pub children: &'static [FileItem],
}

impl FileItem {
    pub const fn file(id: &'static str, name: &'static str) -> Self {
        Self { id, name, kind: ItemKind::File, link: None, detail: None, children: &[] }
    }

    pub const fn folder(id: &'static str, name: &'static str, children: &'static [FileItem]) -> Self {
        Self { id, name, kind: ItemKind::Folder, link: None, detail: None, children }
    }

    pub const fn link(id: &'static str, name: &'static str, url: &'static str) -> Self {
        Self { id, name, kind: ItemKind::Link, link: Some(url), detail: None, children: &[] }
    }

    pub const fn with_detail(self, detail: &'static Detail) -> Self {
        Self { detail: Some(detail), ..self }
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}

/// A keyed list of entries.
#[derive(Debug)]
pub struct Category {
    pub key: &'static str,
    pub items: &'static [FileItem],
}

/// A titled group of sidebar labels.
#[derive(Debug)]
pub struct SidebarSection {
    pub title: &'static str,
    pub labels: &'static [&'static str],
}

/// Read-only lookup from category key to entries.
#[derive(Debug, Copy, Clone)]
pub struct ContentTree {
    categories: &'static [Category],
    sidebar: &'static [SidebarSection],
}

impl ContentTree {
    pub const fn new(categories: &'static [Category], sidebar: &'static [SidebarSection]) -> Self {
        Self { categories, sidebar }
    }

    /// The portfolio shipped with the desktop.
    pub const fn builtin() -> Self {
        Self::new(catalog::CATEGORIES, catalog::SIDEBAR)
    }

    #[inline]
    pub fn sidebar(&self) -> &'static [SidebarSection] {
        self.sidebar
    }

    #[inline]
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Entries for `key`. An unknown key yields an empty slice.
    pub fn items(&self, key: &str) -> &'static [FileItem] {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.items)
            .unwrap_or(&[])
    }

    /// Key selected when a Finder window first opens: the first sidebar
    /// label, falling back to the first category.
    pub fn default_category(&self) -> String {
        self.sidebar
            .iter()
            .flat_map(|s| s.labels.iter())
            .next()
            .map(|label| normalize_key(label))
            .or_else(|| self.categories.first().map(|c| c.key.to_string()))
            .unwrap_or_default()
    }
}

/// Folds a sidebar label onto a category key: lowercase, letters and digits only.
///
/// `"MSG Guard"` → `"msgguard"`, `"TomatoAgent"` → `"tomatoagent"`.
pub fn normalize_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds the entry with `id` among `items`.
pub(crate) fn find<'t>(items: &'t [FileItem], id: &str) -> Option<&'t FileItem> {
    items.iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_punctuation() {
        assert_eq!(normalize_key("TomatoAgent"), "tomatoagent");
        assert_eq!(normalize_key("MSG Guard"), "msgguard");
        assert_eq!(normalize_key("Legacy Portfolio"), "legacyportfolio");
        assert_eq!(normalize_key("VPModel"), "vpmodel");
    }

    #[test]
    fn unknown_category_is_empty() {
        let tree = ContentTree::builtin();
        assert!(tree.items("no-such-thing").is_empty());
    }

    #[test]
    fn every_sidebar_label_resolves() {
        let tree = ContentTree::builtin();
        for section in tree.sidebar() {
            for label in section.labels {
                assert!(!tree.items(&normalize_key(label)).is_empty(), "{label} has no entries");
            }
        }
    }

    #[test]
    fn default_category_is_first_sidebar_label() {
        static ITEMS: &[FileItem] = &[FileItem::file("1", "a")];
        static CATS: &[Category] = &[Category { key: "zeta", items: ITEMS }];
        static SIDE: &[SidebarSection] = &[SidebarSection { title: "S", labels: &["Alpha Beta"] }];

        assert_eq!(ContentTree::new(CATS, SIDE).default_category(), "alphabeta");
        assert_eq!(ContentTree::new(CATS, &[]).default_category(), "zeta");
        assert_eq!(ContentTree::new(&[], &[]).default_category(), "");
    }

    #[test]
    fn builtin_categories_follow_one_layout() {
        let tree = ContentTree::builtin();
        for cat in tree.categories() {
            let first = &cat.items[0];
            assert!(first.is_folder(), "{} starts with a folder", cat.key);
            assert!(first.detail.is_some(), "{} has a description", cat.key);
            assert!(cat.items.iter().any(|i| i.name.ends_with(".startDate")));
            assert!(cat.items.iter().any(|i| i.name.ends_with(".endDate")));
            assert!(cat.items.iter().any(|i| i.kind == ItemKind::Link && i.link.is_some()));
        }
    }
}
