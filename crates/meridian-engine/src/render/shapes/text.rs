use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::common::{
    create_quad_pipeline, create_viewport_ubo, viewport_ubo_entry, InstanceBuffer, QuadBuffers,
    ViewportUniform,
};

// ── atlas ─────────────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1;

#[derive(Debug, Copy, Clone, PartialEq)]
struct AtlasSlot {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf packer for the glyph atlas. Pure bookkeeping; no GPU handles.
#[derive(Debug)]
struct ShelfPacker {
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self { cursor_x: GLYPH_PADDING, cursor_y: GLYPH_PADDING, row_height: 0, full: false }
    }
}

impl ShelfPacker {
    /// Reserves a `w × h` region and returns its top-left texel.
    fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE || w + 2 * GLYPH_PADDING > ATLAS_SIZE {
            log::warn!("glyph atlas is full ({ATLAS_SIZE}x{ATLAS_SIZE}); some glyphs will not render");
            self.full = true;
            return None;
        }

        let origin = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(origin)
    }
}

fn slot_uv(x: u32, y: u32, w: u32, h: u32) -> AtlasSlot {
    let s = ATLAS_SIZE as f32;
    AtlasSlot {
        uv_min: [x as f32 / s, y as f32 / s],
        uv_max: [(x + w) as f32 / s, (y + h) as f32 / s],
    }
}

// ── GPU state ─────────────────────────────────────────────────────────────

struct TextGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    atlas: wgpu::Texture,
    quad: QuadBuffers,
}

impl TextGpu {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let label = "meridian text";

        let atlas = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("meridian text atlas"),
            size: wgpu::Extent3d { width: ATLAS_SIZE, height: ATLAS_SIZE, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("meridian text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[
                viewport_ubo_entry(0),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let viewport_ubo = create_viewport_ubo(ctx, label);
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&sampler) },
            ],
        });

        let pipeline = create_quad_pipeline(
            ctx,
            label,
            include_str!("shaders/text.wgsl"),
            &bgl,
            GlyphInstance::layout(),
        );

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            viewport_ubo,
            atlas,
            quad: QuadBuffers::new(ctx),
        }
    }

    fn upload_glyph(&self, ctx: &RenderCtx<'_>, x: u32, y: u32, w: u32, h: u32, bitmap: &[u8]) {
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x, y, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are laid out and rasterized at physical size (`size * scale_factor`)
/// and cached in a 2048 × 2048 R8 atlas keyed by fontdue's
/// `GlyphRasterConfig`, so a glyph at a given pixel size is rasterized once
/// for the renderer's lifetime. A surface-format change rebuilds the GPU
/// state and empties the cache.
pub struct TextRenderer {
    gpu: Option<TextGpu>,
    packer: ShelfPacker,
    glyphs: HashMap<GlyphRasterConfig, Option<AtlasSlot>>,
    instances: Vec<GlyphInstance>,
    instance_buffer: InstanceBuffer,
    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            gpu: None,
            packer: ShelfPacker::default(),
            glyphs: HashMap::new(),
            instances: Vec::new(),
            instance_buffer: InstanceBuffer::default(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        if !ctx.viewport.is_valid() {
            return;
        }
        if self.gpu.as_ref().is_none_or(|g| g.format != ctx.surface_format) {
            self.gpu = Some(TextGpu::new(ctx));
            self.packer = ShelfPacker::default();
            self.glyphs.clear();
        }
        let Some(gpu) = self.gpu.as_ref() else { return };

        let scale = ctx.scale_factor;
        self.instances.clear();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };
            if cmd.text.is_empty() || cmd.color.is_transparent() {
                continue;
            }
            let Some(font) = fonts.get(cmd.font) else {
                log::warn!("unknown {:?}, skipping text {:?}", cmd.font, cmd.text);
                continue;
            };

            // Snap the pen origin to the physical pixel grid so glyph
            // bitmaps map 1:1 onto surface texels.
            self.layout.reset(&LayoutSettings {
                x: (cmd.origin.x * scale).round(),
                y: (cmd.origin.y * scale).round(),
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

            let color = cmd.color.to_array();
            for g in self.layout.glyphs() {
                if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                    continue;
                }

                let slot = *self.glyphs.entry(g.key).or_insert_with(|| {
                    let (metrics, bitmap) = font.rasterize_config(g.key);
                    let (w, h) = (metrics.width as u32, metrics.height as u32);
                    let (x, y) = self.packer.allocate(w, h)?;
                    gpu.upload_glyph(ctx, x, y, w, h, &bitmap);
                    Some(slot_uv(x, y, w, h))
                });
                let Some(slot) = slot else { continue };

                self.instances.push(GlyphInstance {
                    dst_min: [g.x / scale, g.y / scale],
                    dst_max: [(g.x + g.width as f32) / scale, (g.y + g.height as f32) / scale],
                    uv_min: slot.uv_min,
                    uv_max: slot.uv_max,
                    color,
                });
            }
        }

        if self.instances.is_empty() {
            return;
        }

        ctx.queue.write_buffer(
            &gpu.viewport_ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform::from_viewport(ctx.viewport)),
        );
        let Some(instance_vbo) = self.instance_buffer.upload(ctx, "meridian text", &self.instances)
        else {
            return;
        };

        let mut rpass = target.begin_load_pass("meridian text");
        rpass.set_pipeline(&gpu.pipeline);
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        gpu.quad.draw(&mut rpass, instance_vbo, self.instances.len() as u32);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min:  [f32; 2],
    uv_max:  [f32; 2],
    color:   [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── shelf packing ─────────────────────────────────────────────────────

    #[test]
    fn packs_left_to_right_with_padding() {
        let mut p = ShelfPacker::default();
        assert_eq!(p.allocate(10, 20), Some((1, 1)));
        assert_eq!(p.allocate(5, 8), Some((12, 1)));
    }

    #[test]
    fn wraps_to_next_shelf_below_tallest_glyph() {
        let mut p = ShelfPacker::default();
        p.allocate(ATLAS_SIZE - 20, 30);
        p.allocate(10, 12);
        assert_eq!(p.allocate(40, 5), Some((1, 1 + 30 + 1)));
    }

    #[test]
    fn full_atlas_stays_full() {
        let mut p = ShelfPacker::default();
        assert_eq!(p.allocate(ATLAS_SIZE, 10), None);
        assert_eq!(p.allocate(1, 1), None);
    }

    // ── uv mapping ────────────────────────────────────────────────────────

    #[test]
    fn uv_covers_texel_rect() {
        let slot = slot_uv(0, 1024, 1024, 1024);
        assert_eq!(slot.uv_min, [0.0, 0.5]);
        assert_eq!(slot.uv_max, [0.5, 1.0]);
    }
}
