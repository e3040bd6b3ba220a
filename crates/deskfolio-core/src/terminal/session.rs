use crate::clock::{self, Clock};

use super::builtins;
use super::command::{Builtin, CommandLine};

/// Prompt directory of a fresh session and the target of a bare `cd`.
pub const HOME_DIR: &str = "~";

/// One submitted line and what it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Prompt directory when the line was submitted.
    pub cwd: String,
    /// Trimmed line; empty for the banner and for blank submissions.
    pub command: String,
    pub output: Vec<String>,
}

impl HistoryEntry {
    fn new(cwd: &str, command: &str, output: Vec<String>) -> Self {
        Self { cwd: cwd.to_string(), command: command.to_string(), output }
    }

    /// Number of rendered lines: the prompt echo (if any) plus output.
    pub fn line_count(&self) -> usize {
        usize::from(!self.command.is_empty()) + self.output.len()
    }
}

/// State of one terminal window.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    history: Vec<HistoryEntry>,
    input: String,
    cwd: String,
    /// Lines scrolled up from the newest output; 0 follows the tail.
    scroll_back: usize,
}

impl TerminalSession {
    /// A session whose history starts with the login banner.
    pub fn new(clock: &impl Clock) -> Self {
        let banner = vec![
            format!("Last login: {}", clock::login_stamp(clock.now())),
            "Enter 'help' to show this help message".to_string(),
        ];
        Self {
            history: vec![HistoryEntry::new(HOME_DIR, "", banner)],
            input: String::new(),
            cwd: HOME_DIR.to_string(),
            scroll_back: 0,
        }
    }

    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// The live prompt line, `<cwd> % <input>`.
    pub fn prompt(&self) -> String {
        format!("{} % {}", self.cwd, self.input)
    }

    #[inline]
    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Appends typed text. Line breaks and other control characters are dropped.
    pub fn insert_text(&mut self, text: &str) {
        self.input.extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Scrolls by `lines`; positive moves back toward older output.
    pub fn scroll_by(&mut self, lines: isize) {
        let max = self.total_lines();
        self.scroll_back = self.scroll_back.saturating_add_signed(lines).min(max);
    }

    /// Rendered line count of the whole history, excluding the live prompt.
    pub fn total_lines(&self) -> usize {
        self.history.iter().map(HistoryEntry::line_count).sum()
    }

    // ── execution ─────────────────────────────────────────────────────────

    /// Runs the input buffer and clears it.
    pub fn submit(&mut self, clock: &impl Clock) {
        let input = std::mem::take(&mut self.input);
        self.execute(&input, clock);
    }

    /// Runs one command line against this session.
    pub fn execute(&mut self, input: &str, clock: &impl Clock) {
        self.scroll_back = 0;
        let cmd = CommandLine::parse(input);
        log::debug!("terminal: {:?}", cmd.line);

        if cmd.is_blank() {
            self.history.push(HistoryEntry::new(&self.cwd, "", Vec::new()));
            return;
        }

        let output = match cmd.builtin() {
            Some(Builtin::Clear) => {
                self.history.clear();
                self.input.clear();
                return;
            }
            Some(Builtin::Date) => vec![clock::terminal_date(clock.now())],
            Some(Builtin::History) => self.history_listing(),
            Some(Builtin::Cd) => {
                // the entry records the directory the command was typed in
                let target = cmd.args().next().unwrap_or(HOME_DIR).to_string();
                self.history.push(HistoryEntry::new(&self.cwd, cmd.line, Vec::new()));
                self.cwd = target;
                return;
            }
            Some(fixed) => builtins::fixed_output(fixed)
                .unwrap_or_default()
                .iter()
                .map(|line| line.to_string())
                .collect(),
            None => vec![format!("zsh: command not found: {}", cmd.name)],
        };

        self.history.push(HistoryEntry::new(&self.cwd, cmd.line, output));
    }

    /// `  1  help` style listing of non-empty commands typed so far.
    fn history_listing(&self) -> Vec<String> {
        self.history
            .iter()
            .filter(|entry| !entry.command.is_empty())
            .enumerate()
            .map(|(i, entry)| format!("  {}  {}", i + 1, entry.command))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock;

    fn session() -> TerminalSession {
        TerminalSession::new(&test_clock())
    }

    fn run(s: &mut TerminalSession, line: &str) {
        s.insert_text(line);
        s.submit(&test_clock());
    }

    fn last_output(s: &TerminalSession) -> Vec<&str> {
        s.history().last().map(|e| e.output.iter().map(String::as_str).collect()).unwrap_or_default()
    }

    // ── banner and prompt ─────────────────────────────────────────────────

    #[test]
    fn starts_with_login_banner() {
        let s = session();
        assert_eq!(s.history().len(), 1);
        let banner = &s.history()[0];
        assert!(banner.command.is_empty());
        assert_eq!(
            banner.output,
            ["Last login: 10/15/2026, 2:03:11 PM", "Enter 'help' to show this help message"]
        );
        assert_eq!(s.cwd(), "~");
    }

    #[test]
    fn prompt_shows_cwd_and_input() {
        let mut s = session();
        s.insert_text("ls");
        assert_eq!(s.prompt(), "~ % ls");
        s.backspace();
        assert_eq!(s.prompt(), "~ % l");
    }

    #[test]
    fn insert_drops_control_characters() {
        let mut s = session();
        s.insert_text("he\rl\tp\n");
        assert_eq!(s.input(), "help");
    }

    // ── builtins ──────────────────────────────────────────────────────────

    #[test]
    fn help_lists_commands() {
        let mut s = session();
        run(&mut s, "help");
        let out = last_output(&s);
        assert_eq!(out.len(), 8);
        assert_eq!(out[0], "Available commands:");
        assert!(out.contains(&"  exec <dir name>      - Open window"));
        assert_eq!(s.history().last().map(|e| e.command.as_str()), Some("help"));
        assert_eq!(s.input(), "");
    }

    #[test]
    fn exec_is_not_a_builtin() {
        let mut s = session();
        run(&mut s, "exec Projects");
        assert_eq!(last_output(&s), ["zsh: command not found: exec"]);
    }

    #[test]
    fn unknown_command_echoes_first_token() {
        let mut s = session();
        run(&mut s, "  rm -rf / ");
        assert_eq!(last_output(&s), ["zsh: command not found: rm"]);
        assert_eq!(s.history().last().map(|e| e.command.as_str()), Some("rm -rf /"));
    }

    #[test]
    fn date_uses_clock() {
        let mut s = session();
        run(&mut s, "date");
        assert_eq!(last_output(&s), ["Thu Oct 15 2026 14:03:11 GMT+0900"]);
    }

    #[test]
    fn static_outputs() {
        let mut s = session();
        run(&mut s, "ls -la");
        assert_eq!(last_output(&s), ["About    Projects    Activites", "Career     Links        Terminal", "Contact"]);
        run(&mut s, "wget http://x");
        assert_eq!(last_output(&s), ["it would be avaiable..."]);
        run(&mut s, "whoami");
        assert_eq!(last_output(&s).len(), 10);
    }

    #[test]
    fn clear_empties_everything() {
        let mut s = session();
        run(&mut s, "help");
        run(&mut s, "clear");
        assert!(s.history().is_empty());
        assert_eq!(s.input(), "");
    }

    #[test]
    fn blank_input_appends_empty_entry() {
        let mut s = session();
        run(&mut s, "   ");
        assert_eq!(s.history().len(), 2);
        let entry = &s.history()[1];
        assert!(entry.command.is_empty());
        assert!(entry.output.is_empty());
        assert_eq!(entry.line_count(), 0);
    }

    #[test]
    fn cd_sets_prompt_without_validation() {
        let mut s = session();
        run(&mut s, "cd projects");
        assert_eq!(s.cwd(), "projects");
        assert_eq!(s.history().last().map(|e| e.cwd.as_str()), Some("~"));
        assert!(last_output(&s).is_empty());

        run(&mut s, "cd");
        assert_eq!(s.cwd(), "~");
        assert_eq!(s.history().last().map(|e| e.cwd.as_str()), Some("projects"));
    }

    #[test]
    fn history_lists_prior_commands() {
        let mut s = session();
        run(&mut s, "help");
        run(&mut s, "");
        run(&mut s, "cd docs");
        run(&mut s, "history");
        assert_eq!(last_output(&s), ["  1  help", "  2  cd docs"]);
    }

    #[test]
    fn history_after_clear_is_empty() {
        let mut s = session();
        run(&mut s, "help");
        run(&mut s, "clear");
        run(&mut s, "history");
        assert!(last_output(&s).is_empty());
    }

    // ── scrolling ─────────────────────────────────────────────────────────

    #[test]
    fn scroll_is_clamped_and_reset_on_submit() {
        let mut s = session();
        run(&mut s, "help");
        let total = s.total_lines();
        assert_eq!(total, 2 + 1 + 8);

        s.scroll_by(3);
        assert_eq!(s.scroll_back(), 3);
        s.scroll_by(100);
        assert_eq!(s.scroll_back(), total);
        s.scroll_by(-100);
        assert_eq!(s.scroll_back(), 0);

        s.scroll_by(4);
        run(&mut s, "ls");
        assert_eq!(s.scroll_back(), 0);
    }
}
