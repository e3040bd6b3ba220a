//! Deskfolio engine crate.
//!
//! Owns the platform window, input translation, GPU device and the batched
//! scene renderer the desktop shell draws through.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
