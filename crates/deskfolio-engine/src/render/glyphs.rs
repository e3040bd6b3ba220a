use std::collections::HashMap;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::RenderCtx;
use crate::scene::shapes::TextCmd;
use crate::text::FontSystem;

use super::common::{
    create_instanced_pipeline, create_viewport_ubo, viewport_ubo_entry, write_viewport,
    InstanceBuffer, UnitQuad,
};

// ── atlas ─────────────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1;

/// Shelf allocator over a square atlas.
#[derive(Debug)]
struct ShelfPacker {
    size: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl ShelfPacker {
    fn new(size: u32) -> Self {
        Self {
            size,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            full: false,
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.size);
    }

    /// Top-left of a free `w` x `h` slot, or `None` once the atlas is full.
    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }
        if self.cursor_x + w + GLYPH_PADDING > self.size {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_y + h + GLYPH_PADDING > self.size || w + 2 * GLYPH_PADDING > self.size {
            self.full = true;
            return None;
        }

        let slot = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }
}

#[derive(Debug, Copy, Clone)]
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Glyph atlas and instanced textured-quad pipeline for `DrawCmd::Text`.
///
/// Text is laid out and rasterized at physical size (`size * scale_factor`),
/// then positioned back in logical pixels with the pen snapped to the
/// physical grid. Glyphs are cached by `GlyphRasterConfig`, so one glyph at
/// one size is rasterized once.
///
/// When the atlas fills up, glyphs that do not fit are skipped for the rest
/// of the frame and the atlas is cleared at the start of the next one.
pub(super) struct GlyphPipeline {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,
    quad: Option<UnitQuad>,

    atlas_texture: Option<wgpu::Texture>,
    atlas_view: Option<wgpu::TextureView>,
    packer: ShelfPacker,
    cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    layout: Layout<()>,
    instances: Vec<GlyphInstance>,
    instance_buffer: InstanceBuffer,
}

impl Default for GlyphPipeline {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            sampler: None,
            quad: None,
            atlas_texture: None,
            atlas_view: None,
            packer: ShelfPacker::new(ATLAS_SIZE),
            cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            instances: Vec::new(),
            instance_buffer: InstanceBuffer::new("deskfolio glyph instances"),
        }
    }
}

impl GlyphPipeline {
    /// Starts a frame: creates GPU resources on first use and clears the
    /// atlas if it overflowed last frame.
    pub(super) fn begin(&mut self, ctx: &RenderCtx<'_>) {
        self.instances.clear();
        if self.packer.full {
            log::debug!("glyph atlas full; clearing {} cached glyphs", self.cache.len());
            self.packer.reset();
            self.cache.clear();
        }
        self.ensure_resources(ctx);
    }

    /// Lays out `cmd` and records one instance per visible glyph.
    ///
    /// Returns the instance range written, which is empty for blank text or
    /// an unknown font.
    pub(super) fn push_text(
        &mut self,
        ctx: &RenderCtx<'_>,
        cmd: &TextCmd,
        fonts: &FontSystem,
    ) -> Range<u32> {
        let start = self.instances.len() as u32;
        let Some(font) = fonts.get(cmd.font) else {
            log::warn!("unknown {:?}, skipping text", cmd.font);
            return start..start;
        };
        if cmd.text.is_empty() || cmd.size <= 0.0 {
            return start..start;
        }

        let scale = ctx.scale_factor.max(0.01);
        self.layout.reset(&LayoutSettings {
            x: (cmd.origin.x * scale).round(),
            y: (cmd.origin.y * scale).round(),
            max_width: cmd.max_width.map(|w| w * scale),
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

        // Copied out so the layout borrow ends before the atlas is written.
        let glyphs: Vec<(GlyphRasterConfig, f32, f32, usize, usize)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y, g.width, g.height))
            .collect();

        let color = cmd.color.to_array();
        for (key, x, y, w, h) in glyphs {
            let cached = match self.cache.get(&key) {
                Some(c) => *c,
                None => {
                    let (metrics, bitmap) = font.rasterize_config(key);
                    if metrics.width == 0 || metrics.height == 0 {
                        continue;
                    }
                    let Some(entry) =
                        self.upload_glyph(ctx, &bitmap, metrics.width as u32, metrics.height as u32)
                    else {
                        continue;
                    };
                    self.cache.insert(key, entry);
                    entry
                }
            };

            let x0 = x.round() / scale;
            let y0 = y.round() / scale;
            self.instances.push(GlyphInstance {
                dst_min: [x0, y0],
                dst_max: [x0 + w as f32 / scale, y0 + h as f32 / scale],
                uv_min: cached.uv_min,
                uv_max: cached.uv_max,
                color,
            });
        }

        start..self.instances.len() as u32
    }

    pub(super) fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        if self.instances.is_empty() {
            return;
        }
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            write_viewport(ctx, ubo);
        }
        self.instance_buffer.upload(ctx, &self.instances);
    }

    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instances: Range<u32>) {
        let Some(pipeline)   = self.pipeline.as_ref()        else { return; };
        let Some(bind_group) = self.bind_group.as_ref()      else { return; };
        let Some(quad)       = self.quad.as_ref()            else { return; };
        let Some(buffer)     = self.instance_buffer.buffer() else { return; };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, buffer.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..UnitQuad::INDEX_COUNT, 0, instances);
    }

    fn upload_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<CachedGlyph> {
        let atlas = self.atlas_texture.as_ref()?;
        let Some((gx, gy)) = self.packer.place(w, h) else {
            if self.packer.full {
                log::warn!("glyph atlas is full ({ATLAS_SIZE}x{ATLAS_SIZE}); dropping glyphs this frame");
            }
            return None;
        };

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
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

        let atlas_f = ATLAS_SIZE as f32;
        Some(CachedGlyph {
            uv_min: [gx as f32 / atlas_f,       gy as f32 / atlas_f],
            uv_max: [(gx + w) as f32 / atlas_f, (gy + h) as f32 / atlas_f],
        })
    }

    // ── lazy init ──────────────────────────────────────────────────────────

    fn ensure_resources(&mut self, ctx: &RenderCtx<'_>) {
        if self.atlas_texture.is_none() {
            let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("deskfolio glyph atlas"),
                size: wgpu::Extent3d {
                    width: ATLAS_SIZE,
                    height: ATLAS_SIZE,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::R8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            });
            self.atlas_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.atlas_texture = Some(texture);
            self.packer.reset();
            self.cache.clear();
            self.bind_group = None;
        }

        if self.sampler.is_none() {
            self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("deskfolio glyph sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::MipmapFilterMode::Nearest,
                ..Default::default()
            }));
        }

        if self.quad.is_none() {
            self.quad = Some(UnitQuad::new(ctx, "deskfolio glyph unit"));
        }

        self.ensure_pipeline(ctx);
        self.ensure_bind_group(ctx);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("deskfolio glyph shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/glyph.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("deskfolio glyph bgl"),
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

        let pipeline = create_instanced_pipeline(
            ctx,
            "deskfolio glyph pipeline",
            &shader,
            &bgl,
            GlyphInstance::layout(),
        );

        log::debug!("glyph pipeline built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
    }

    fn ensure_bind_group(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl)        = self.bind_group_layout.as_ref() else { return; };
        let Some(atlas_view) = self.atlas_view.as_ref()        else { return; };
        let Some(sampler)    = self.sampler.as_ref()           else { return; };

        let viewport_ubo = create_viewport_ubo(ctx, "deskfolio glyph viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("deskfolio glyph bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
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
