//! Shared GPU types and utilities used by all shape renderers.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderTarget};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) const MIN_BINDING_SIZE: NonZeroU64 =
        match NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64) {
            Some(n) => n,
            None => panic!("ViewportUniform must not be zero-sized"),
        };

    pub(super) fn from_viewport(v: Viewport) -> Self {
        Self { viewport: [v.width.max(1.0), v.height.max(1.0)], _pad: [0.0; 2] }
    }
}

pub(super) fn viewport_ubo_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: Some(ViewportUniform::MIN_BINDING_SIZE),
        },
        count: None,
    }
}

pub(super) fn create_viewport_ubo(ctx: &RenderCtx<'_>, label: &'static str) -> wgpu::Buffer {
    ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: ViewportUniform::MIN_BINDING_SIZE.get(),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

// ── unit quad ─────────────────────────────────────────────────────────────

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

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Static unit-quad geometry shared by every instanced shape.
pub(super) struct QuadBuffers {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
}

impl QuadBuffers {
    pub(super) fn new(ctx: &RenderCtx<'_>) -> Self {
        Self {
            vbo: ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("meridian quad vbo"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            ibo: ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("meridian quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            }),
        }
    }

    /// Binds the quad at slot 0 and `instances` at slot 1, then draws `count`.
    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instances: &wgpu::Buffer, count: u32) {
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.set_vertex_buffer(1, instances.slice(..));
        rpass.set_index_buffer(self.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..count);
    }
}

// ── instance buffer ───────────────────────────────────────────────────────

/// Growable per-instance vertex buffer (power-of-two capacity, min 64).
#[derive(Default)]
pub(super) struct InstanceBuffer {
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
}

impl InstanceBuffer {
    /// Uploads `instances`, growing the buffer if needed.
    pub(super) fn upload<T: Pod>(
        &mut self,
        ctx: &RenderCtx<'_>,
        label: &'static str,
        instances: &[T],
    ) -> Option<&wgpu::Buffer> {
        if instances.len() > self.capacity || self.buffer.is_none() {
            let cap = instances.len().next_power_of_two().max(64);
            self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (cap * std::mem::size_of::<T>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = cap;
        }

        let buffer = self.buffer.as_ref()?;
        ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(instances));
        Some(buffer)
    }
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Creates an instanced-quad pipeline with premultiplied blending into the
/// surface format.
pub(super) fn create_quad_pipeline(
    ctx: &RenderCtx<'_>,
    label: &'static str,
    shader_src: &'static str,
    bind_group_layout: &wgpu::BindGroupLayout,
    instance_layout: wgpu::VertexBufferLayout<'static>,
) -> wgpu::RenderPipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout(), instance_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

// ── solid shape renderer core ─────────────────────────────────────────────

/// Pipeline + viewport binding for shapes whose only uniform is the viewport.
///
/// Rebuilt when the surface format changes.
pub(super) struct SolidShapePass {
    label: &'static str,
    shader_src: &'static str,
    instance_layout: fn() -> wgpu::VertexBufferLayout<'static>,

    format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
}

impl SolidShapePass {
    pub(super) fn new(
        label: &'static str,
        shader_src: &'static str,
        instance_layout: fn() -> wgpu::VertexBufferLayout<'static>,
    ) -> Self {
        Self {
            label,
            shader_src,
            instance_layout,
            format: None,
            pipeline: None,
            bind_group: None,
            viewport_ubo: None,
            quad: None,
            instances: InstanceBuffer::default(),
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(self.label),
            entries: &[viewport_ubo_entry(0)],
        });
        let ubo = create_viewport_ubo(ctx, self.label);
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(self.label),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: ubo.as_entire_binding() }],
        });

        self.pipeline = Some(create_quad_pipeline(
            ctx,
            self.label,
            self.shader_src,
            &bgl,
            (self.instance_layout)(),
        ));
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(ubo);
        self.format = Some(ctx.surface_format);
        log::debug!("{} pipeline built for {:?}", self.label, ctx.surface_format);
    }

    /// Uploads `instances` and records one pass drawing all of them.
    pub(super) fn draw<T: Pod>(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        instances: &[T],
    ) {
        if instances.is_empty() || !ctx.viewport.is_valid() {
            return;
        }

        self.ensure_pipeline(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx));
        }

        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        ctx.queue.write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform::from_viewport(ctx.viewport)),
        );

        let label = self.label;
        let Some(instance_vbo) = self.instances.upload(ctx, label, instances) else { return };
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };

        let mut rpass = target.begin_load_pass(label);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        quad.draw(&mut rpass, instance_vbo, instances.len() as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_uniform_is_sixteen_bytes() {
        assert_eq!(ViewportUniform::MIN_BINDING_SIZE.get(), 16);
    }

    #[test]
    fn degenerate_viewport_is_clamped() {
        let u = ViewportUniform::from_viewport(Viewport::new(0.0, 700.0));
        assert_eq!(u.viewport, [1.0, 700.0]);
    }
}
