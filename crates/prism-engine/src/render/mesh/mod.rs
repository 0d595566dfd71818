//! Clip-space meshes drawn with a single solid color.
//!
//! A [`FlatMesh`] is uploaded once into a static vertex buffer; per frame only
//! the [`MeshUniforms`] change.

mod flat;
mod renderer;

pub use flat::{FlatMesh, MeshVertex};
pub use renderer::{FlatMeshRenderer, MeshUniforms};
