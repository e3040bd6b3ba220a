//! GPU rendering subsystem.
//!
//! [`SceneRenderer`] consumes a `DrawList` in paint order and issues one
//! render pass. Consecutive commands of the same kind and clip share a draw
//! call, so overlapping windows keep their text above the window behind.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod batch;
mod common;
mod ctx;
mod glyphs;
mod quads;
mod scene_renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene_renderer::SceneRenderer;
