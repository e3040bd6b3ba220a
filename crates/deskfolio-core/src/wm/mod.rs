//! Window manager.
//!
//! [`WindowManager`] owns every open window and is the only thing that
//! mutates the window list. Its four mutators (`open`, `close`, `focus`,
//! `close_all`) keep z-indices unique, and the window with the highest
//! z-index is frontmost.
//!
//! Each window carries a [`WindowFrame`]: position, size and the
//! `Idle | Dragging | Resizing` gesture state machine.

mod frame;
mod manager;
mod record;

pub use frame::{FrameHit, Gesture, WindowFrame, CONTROL_DIAMETER, RESIZE_HANDLE, TITLE_BAR_HEIGHT};
pub use manager::WindowManager;
pub use record::{WindowId, WindowKind, WindowRecord, WindowSpec, OPEN_ANIMATION};
