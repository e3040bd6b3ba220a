//! Search overlay over a fixed result list.

/// One row of the result list.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: &'static str,
}

const fn result(title: &'static str, subtitle: &'static str, category: &'static str) -> SearchResult {
    SearchResult { title, subtitle, category }
}

pub static RESULTS: &[SearchResult] = &[
    result("Calculator", "Applications", "Applications"),
    result("Mail", "Applications", "Applications"),
    result("Safari", "Applications", "Applications"),
    result("System Preferences", "Applications", "Applications"),
    result("Documents", "Folder", "Folders"),
    result("Downloads", "Folder", "Folders"),
    result("Project Proposal.pdf", "Documents", "Documents"),
    result("Budget 2024.xlsx", "Documents", "Documents"),
];

/// Keys the overlay reacts to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpotlightKey {
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug, Default, Clone)]
pub struct Spotlight {
    open: bool,
    query: String,
    selected: usize,
}

impl Spotlight {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn open(&mut self) {
        if !self.open {
            log::debug!("spotlight opened");
        }
        self.open = true;
    }

    /// Hides the overlay and forgets the query.
    pub fn close(&mut self) {
        self.open = false;
        self.set_query(String::new());
    }

    /// Results whose title or subtitle contains the query, ignoring case.
    /// An empty query matches everything.
    pub fn results(&self) -> Vec<&'static SearchResult> {
        let needle = self.query.to_lowercase();
        RESULTS
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.title.to_lowercase().contains(&needle)
                    || r.subtitle.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn insert_text(&mut self, text: &str) {
        let mut query = std::mem::take(&mut self.query);
        query.extend(text.chars().filter(|c| !c.is_control()));
        self.set_query(query);
    }

    pub fn backspace(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query);
    }

    pub fn key(&mut self, key: SpotlightKey) {
        let n = self.results().len();
        match key {
            // `n == 0` keeps the selection pinned at 0
            SpotlightKey::Down if n > 0 => self.selected = (self.selected + 1) % n,
            SpotlightKey::Up if n > 0 => self.selected = (self.selected + n - 1) % n,
            SpotlightKey::Up | SpotlightKey::Down => {}
            SpotlightKey::Enter | SpotlightKey::Escape => self.close(),
        }
    }

    fn set_query(&mut self, query: String) {
        self.query = query;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(s: &Spotlight) -> Vec<&'static str> {
        s.results().iter().map(|r| r.title).collect()
    }

    #[test]
    fn empty_query_lists_everything() {
        let s = Spotlight::new();
        assert_eq!(s.results().len(), 8);
    }

    #[test]
    fn filter_matches_title_or_subtitle_case_insensitively() {
        let mut s = Spotlight::new();
        s.insert_text("DOWN");
        assert_eq!(titles(&s), ["Downloads"]);

        s.close();
        s.insert_text("folder");
        assert_eq!(titles(&s), ["Documents", "Downloads"]);
    }

    #[test]
    fn typing_resets_selection() {
        let mut s = Spotlight::new();
        s.open();
        s.key(SpotlightKey::Down);
        s.key(SpotlightKey::Down);
        assert_eq!(s.selected(), 2);
        s.insert_text("a");
        assert_eq!(s.selected(), 0);
        s.key(SpotlightKey::Down);
        s.backspace();
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn arrows_wrap() {
        let mut s = Spotlight::new();
        s.key(SpotlightKey::Up);
        assert_eq!(s.selected(), 7);
        s.key(SpotlightKey::Down);
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn no_results_keeps_selection_at_zero() {
        let mut s = Spotlight::new();
        s.insert_text("zzzz");
        assert!(s.results().is_empty());
        s.key(SpotlightKey::Down);
        s.key(SpotlightKey::Up);
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn enter_and_escape_close_and_clear() {
        for key in [SpotlightKey::Enter, SpotlightKey::Escape] {
            let mut s = Spotlight::new();
            s.open();
            s.insert_text("mail");
            s.key(key);
            assert!(!s.is_open());
            assert_eq!(s.query(), "");
        }
    }
}
