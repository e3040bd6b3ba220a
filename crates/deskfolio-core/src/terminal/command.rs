/// A submitted line split on whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine<'a> {
    /// Trimmed full line.
    pub line: &'a str,
    /// First token; empty for a blank line.
    pub name: &'a str,
}

impl<'a> CommandLine<'a> {
    pub fn parse(input: &'a str) -> Self {
        let line = input.trim();
        let name = line.split_whitespace().next().unwrap_or("");
        Self { line, name }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.line.is_empty()
    }

    /// Tokens after the command name.
    pub fn args(&self) -> impl Iterator<Item = &'a str> {
        self.line.split_whitespace().skip(1)
    }

    /// The builtin this line names, if any.
    pub fn builtin(&self) -> Option<Builtin> {
        Builtin::from_name(self.name)
    }
}

/// Commands the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    Clear,
    Date,
    Ls,
    Whoami,
    History,
    Cd,
    Wget,
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "help" => Self::Help,
            "clear" => Self::Clear,
            "date" => Self::Date,
            "ls" => Self::Ls,
            "whoami" => Self::Whoami,
            "history" => Self::History,
            "cd" => Self::Cd,
            "wget" => Self::Wget,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_args() {
        let cmd = CommandLine::parse("  cd   projects extra ");
        assert_eq!(cmd.line, "cd   projects extra");
        assert_eq!(cmd.name, "cd");
        assert_eq!(cmd.args().collect::<Vec<_>>(), ["projects", "extra"]);
        assert_eq!(cmd.builtin(), Some(Builtin::Cd));
    }

    #[test]
    fn blank_line() {
        let cmd = CommandLine::parse(" \t ");
        assert!(cmd.is_blank());
        assert_eq!(cmd.name, "");
        assert_eq!(cmd.builtin(), None);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Builtin::from_name("help"), Some(Builtin::Help));
        assert_eq!(Builtin::from_name("HELP"), None);
        assert_eq!(Builtin::from_name("exec"), None);
    }
}
