//! Engine input to desktop input.

use deskfolio_core::{CursorHint, DeskKey};
use deskfolio_engine::input::{Key, Modifiers};
use deskfolio_engine::window::CursorIcon;

/// Keys the desktop routes; everything else arrives as text or is ignored.
pub fn desk_key(key: Key) -> Option<DeskKey> {
    match key {
        Key::Enter => Some(DeskKey::Enter),
        Key::Backspace => Some(DeskKey::Backspace),
        Key::Escape => Some(DeskKey::Escape),
        Key::ArrowUp => Some(DeskKey::ArrowUp),
        Key::ArrowDown => Some(DeskKey::ArrowDown),
        Key::Space => Some(DeskKey::Space),
        _ => None,
    }
}

/// Typed characters are not text while a shortcut modifier is held.
#[inline]
pub fn accepts_text(modifiers: Modifiers) -> bool {
    !modifiers.is_shortcut()
}

pub fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::Default => CursorIcon::Default,
        CursorHint::Pointer => CursorIcon::Pointer,
        CursorHint::Move => CursorIcon::Move,
        CursorHint::Resize => CursorIcon::NwseResize,
        CursorHint::Text => CursorIcon::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routed_keys() {
        assert_eq!(desk_key(Key::Enter), Some(DeskKey::Enter));
        assert_eq!(desk_key(Key::Space), Some(DeskKey::Space));
        assert_eq!(desk_key(Key::Tab), None);
        assert_eq!(desk_key(Key::Other(65)), None);
    }

    #[test]
    fn shortcuts_suppress_text() {
        assert!(accepts_text(Modifiers::default()));
        assert!(accepts_text(Modifiers { shift: true, ..Modifiers::default() }));
        assert!(!accepts_text(Modifiers { meta: true, ..Modifiers::default() }));
        assert!(!accepts_text(Modifiers { ctrl: true, ..Modifiers::default() }));
    }

    #[test]
    fn resize_uses_the_diagonal_cursor() {
        assert_eq!(cursor_icon(CursorHint::Resize), CursorIcon::NwseResize);
        assert_eq!(cursor_icon(CursorHint::Text), CursorIcon::Text);
    }
}
