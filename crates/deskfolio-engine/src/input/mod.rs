//! Input subsystem.
//!
//! The public API does not expose winit types. The runtime translates
//! platform events into `InputEvent`s through `platform::winit`.

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::{Edges, InputFrame};
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TextEvent,
};
