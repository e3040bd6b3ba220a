use std::collections::HashSet;
use std::hash::Hash;

use super::types::{InputEvent, Key, MouseButton};

/// Down and up transitions seen during one frame.
#[derive(Debug)]
pub struct Edges<T> {
    pub pressed: HashSet<T>,
    pub released: HashSet<T>,
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self { pressed: HashSet::new(), released: HashSet::new() }
    }
}

impl<T: Eq + Hash> Edges<T> {
    #[inline]
    pub fn went_down(&self, v: &T) -> bool {
        self.pressed.contains(v)
    }

    #[inline]
    pub fn went_up(&self, v: &T) -> bool {
        self.released.contains(v)
    }

    fn clear(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// What happened since the previous frame.
///
/// [`InputState`](super::InputState) keeps what is held; this keeps the edges
/// and the raw stream, and is emptied once the frame has been handled.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
    pub keys: Edges<Key>,
    pub buttons: Edges<MouseButton>,
    /// All text committed this frame, concatenated.
    pub text: String,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys.clear();
        self.buttons.clear();
        self.text.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
