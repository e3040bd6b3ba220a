//! Window and runtime loop.
//!
//! Owns the `winit` EventLoop and the desktop window and wires them to the
//! GPU layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
pub use winit::window::CursorIcon;
