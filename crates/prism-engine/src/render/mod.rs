//! GPU rendering subsystem.
//!
//! Renderers consume draw data and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - overlay geometry (`shapes`) is in logical pixels (top-left origin, +Y down)
//!   and converted to NDC by the vertex shader using a viewport uniform
//! - `mesh` geometry is already in clip space and only scaled by its uniforms

mod ctx;
pub mod mesh;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
