use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};

use super::flat::{FlatMesh, MeshVertex};

/// Shader globals for [`FlatMeshRenderer`].
///
/// The vertex stage outputs `vec4(scale * pos, 1.0)`; the fragment stage
/// writes `color` unmodified (straight alpha, no blending).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshUniforms {
    pub color: [f32; 4],
    pub scale: f32,
}

impl Default for MeshUniforms {
    fn default() -> Self {
        Self { color: [1.0; 4], scale: 1.0 }
    }
}

/// std140 image of `MeshUniforms` (struct size rounds up to 16).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlobalsUniform {
    color: [f32; 4],
    scale: f32,
    _pad: [f32; 3],
}

impl From<MeshUniforms> for GlobalsUniform {
    fn from(u: MeshUniforms) -> Self {
        Self { color: u.color, scale: u.scale, _pad: [0.0; 3] }
    }
}

const GLOBALS_SIZE: Option<NonZeroU64> =
    NonZeroU64::new(std::mem::size_of::<GlobalsUniform>() as u64);

/// Draws one [`FlatMesh`] with a solid color.
///
/// GPU resources are created lazily on first use:
/// - the shader module is compiled, then linked into a pipeline for the
///   current surface format (rebuilt only if the format changes)
/// - the mesh is uploaded once into a static vertex buffer and never rewritten
pub struct FlatMeshRenderer {
    mesh: FlatMesh,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    globals_ubo: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
}

impl FlatMeshRenderer {
    pub fn new(mesh: FlatMesh) -> Self {
        Self {
            mesh,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            globals_ubo: None,
            vertex_buffer: None,
        }
    }

    pub fn mesh(&self) -> &FlatMesh {
        &self.mesh
    }

    /// Writes the shader globals used by subsequent [`render`](Self::render) calls.
    pub fn set_uniforms(&mut self, ctx: &RenderCtx<'_>, uniforms: MeshUniforms) {
        self.prepare(ctx);
        let Some(ubo) = self.globals_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&GlobalsUniform::from(uniforms)));
    }

    /// Draws the whole mesh on top of the current contents of `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.mesh.is_empty() {
            return;
        }
        self.prepare(ctx);

        let (Some(pipeline), Some(bind_group), Some(vertex_buffer)) = (
            self.pipeline.as_ref(),
            self.bind_group.as_ref(),
            self.vertex_buffer.as_ref(),
        ) else {
            return;
        };

        let mut rpass = target.begin_load_pass("prism mesh pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(0..self.mesh.vertex_count(), 0..1);
    }

    fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_vertex_buffer(ctx);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        // Compile.
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prism mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/flat.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("prism mesh bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: GLOBALS_SIZE,
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("prism mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        // Link.
        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!("mesh pipeline linked for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.globals_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.globals_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let globals_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism mesh globals ubo"),
            contents: bytemuck::bytes_of(&GlobalsUniform::from(MeshUniforms::default())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_ubo.as_entire_binding(),
            }],
        });

        self.globals_ubo = Some(globals_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_some() || self.mesh.is_empty() {
            return;
        }

        self.vertex_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism mesh vbo"),
            contents: bytemuck::cast_slice(self.mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        log::debug!("mesh uploaded ({} vertices)", self.mesh.vertex_count());
    }
}
