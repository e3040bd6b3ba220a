//! Frame timing.
//!
//! Call `FrameClock::tick()` once per presented frame to obtain a `FrameTime`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
