//! GPU device and surface management.
//!
//! Creates the wgpu Adapter/Device/Queue, configures the window surface and
//! hands out per-frame encoders.

mod error;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
