//! Fixed output of the builtins that take no input.

use super::command::Builtin;

pub(super) const HELP: &[&str] = &[
    "Available commands:",
    "  help                 - Show this help message",
    "  clear                - Clear the terminal",
    "  date                 - Show current date and time",
    "  ls                   - List directory contents",
    "  whoami               - Print current user",
    "  exec <dir name>      - Open window",
    "  history              - Show command history",
];

pub(super) const LS: &[&str] = &[
    "About    Projects    Activites",
    "Career     Links        Terminal",
    "Contact",
];

pub(super) const WGET: &[&str] = &["it would be avaiable..."];

pub(super) const WHOAMI: &[&str] = &[
    r"    ___  ________          ___       __   ________  ________          ________  ___  ___  ________   ________",
    r"   |\  \|\   __  \        |\  \     |\  \|\   __  \|\   __  \        |\   ____\|\  \|\  \|\   ___  \|\   ____\",
    r"   \ \  \ \  \|\  \       \ \  \    \ \  \ \  \|\  \ \  \|\  \       \ \  \___|\ \  \\\  \ \  \\ \  \ \  \___|",
    r" __ \ \  \ \  \\\  \       \ \  \  __\ \  \ \  \\\  \ \  \\\  \       \ \_____  \ \  \\\  \ \  \\ \  \ \  \  ___",
    r"|\  \\_\  \ \  \\\  \       \ \  \|\__\_\  \ \  \\\  \ \  \\\  \       \|____|\  \ \  \\\  \ \  \\ \  \ \  \|\  \",
    r"\ \________\ \_______\       \ \____________\ \_______\ \_______\        ____\_\  \ \_______\ \__\\ \__\ \_______\",
    r" \|________|\|_______|        \|____________|\|_______|\|_______|       |\_________\|_______|\|__| \|__|\|_______|",
    r"                                                                        \|_________|",
    r"",
    r"",
];

/// Output of a builtin that depends on nothing but its name.
pub(super) fn fixed_output(builtin: Builtin) -> Option<&'static [&'static str]> {
    match builtin {
        Builtin::Help => Some(HELP),
        Builtin::Ls => Some(LS),
        Builtin::Wget => Some(WGET),
        Builtin::Whoami => Some(WHOAMI),
        Builtin::Clear | Builtin::Date | Builtin::History | Builtin::Cd => None,
    }
}
