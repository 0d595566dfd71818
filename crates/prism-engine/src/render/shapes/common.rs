//! Shared GPU types and utilities used by the shape renderers.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Viewport};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn new(viewport: Viewport) -> Self {
        Self { viewport: viewport.uniform_size(), _pad: [0.0; 2] }
    }
}

/// Minimum binding size for the viewport uniform buffer.
pub(super) const VIEWPORT_UBO_SIZE: Option<NonZeroU64> =
    NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64);

/// Bind group layout entry for the viewport uniform at `binding`.
pub(super) fn viewport_ubo_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: VIEWPORT_UBO_SIZE,
        },
        count: None,
    }
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── scissor rect ──────────────────────────────────────────────────────────

/// Converts a logical-pixel clip rect to physical scissor rect arguments for wgpu.
///
/// Returns `None` if the clip rect is zero-area (renderer should skip the draw call).
/// Returns `Some((x, y, w, h))` in physical pixels, clamped to the viewport.
///
/// `clip = None` means "no scissor" → returns the full viewport rect.
pub(super) fn logical_clip_to_scissor(
    clip: Option<Rect>,
    viewport: Viewport,
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let phys_vw = (viewport.width * scale).max(1.0) as u32;
    let phys_vh = (viewport.height * scale).max(1.0) as u32;

    let (x, y, w, h) = match clip {
        None => (0, 0, phys_vw, phys_vh),
        Some(r) => {
            let x  = ((r.origin.x * scale).max(0.0) as u32).min(phys_vw);
            let y  = ((r.origin.y * scale).max(0.0) as u32).min(phys_vh);
            let x2 = (((r.origin.x + r.size.x) * scale).max(0.0) as u32).min(phys_vw);
            let y2 = (((r.origin.y + r.size.y) * scale).max(0.0) as u32).min(phys_vh);
            (x, y, x2.saturating_sub(x), y2.saturating_sub(y))
        }
    };

    if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
}

/// Splits `clips` into maximal runs of equal clip rects.
///
/// Yields `(start, end, clip)` index ranges so each run can be drawn with one
/// instanced call under a single scissor.
pub(super) fn clip_runs(clips: &[Option<Rect>]) -> impl Iterator<Item = (u32, u32, Option<Rect>)> + '_ {
    let mut i = 0usize;
    std::iter::from_fn(move || {
        let clip = *clips.get(i)?;
        let start = i;
        while i < clips.len() && clips[i] == clip {
            i += 1;
        }
        Some((start as u32, i as u32, clip))
    })
}
