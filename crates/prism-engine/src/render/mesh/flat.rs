use bytemuck::{Pod, Zeroable};

/// Vertex of a [`FlatMesh`]: a clip-space position.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 3],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Triangle-list geometry in clip space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatMesh {
    vertices: Vec<MeshVertex>,
}

impl FlatMesh {
    /// Builds a mesh from positions. Trailing vertices that do not form a full
    /// triangle are dropped.
    pub fn from_positions(positions: &[[f32; 3]]) -> Self {
        let whole = positions.len() - positions.len() % 3;
        if whole != positions.len() {
            log::warn!(
                "FlatMesh: {} trailing vertices ignored (not a multiple of 3)",
                positions.len() - whole
            );
        }
        Self {
            vertices: positions[..whole].iter().map(|&pos| MeshVertex { pos }).collect(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 12);
    }

    #[test]
    fn partial_triangles_are_dropped() {
        let m = FlatMesh::from_positions(&[[0.0; 3]; 5]);
        assert_eq!(m.vertex_count(), 3);
        assert!(FlatMesh::from_positions(&[]).is_empty());
    }

    #[test]
    fn positions_are_kept_in_order() {
        let m = FlatMesh::from_positions(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let pos: Vec<[f32; 3]> = m.vertices().iter().map(|v| v.pos).collect();
        assert_eq!(pos, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    }
}
