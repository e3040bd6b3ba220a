//! Static portfolio content browsed by Finder windows.
//!
//! The whole tree is `'static` data baked into the binary: a table of
//! categories, each an ordered list of [`FileItem`]s, plus the sidebar
//! sections that point into it. Nothing is ever mutated.

mod catalog;
mod tree;

pub(crate) use tree::find;
pub use tree::{normalize_key, Category, ContentTree, Detail, FileItem, ItemKind, SidebarSection};
