use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::render::RenderCtx;
use crate::scene::shapes::Border;

use super::common::{
    create_instanced_pipeline, create_viewport_ubo, viewport_ubo_entry, write_viewport,
    InstanceBuffer, UnitQuad,
};

/// Instanced SDF pipeline for rects, rounded rects and circles.
///
/// Supported paints:
/// - `Paint::Solid`
/// - `Paint::LinearGradient` (first and last stop)
///
/// Borders are an anti-aliased ring on the inner edge of the shape.
pub(super) struct QuadPipeline {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    quad: Option<UnitQuad>,

    instances: Vec<QuadInstance>,
    instance_buffer: InstanceBuffer,
}

impl Default for QuadPipeline {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group: None,
            viewport_ubo: None,
            quad: None,
            instances: Vec::new(),
            instance_buffer: InstanceBuffer::new("deskfolio quad instances"),
        }
    }
}

impl QuadPipeline {
    pub(super) fn begin(&mut self) {
        self.instances.clear();
    }

    pub(super) fn len(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Records one shape. Empty rects are dropped.
    pub(super) fn push(
        &mut self,
        rect: Rect,
        radii: CornerRadii,
        paint: &Paint,
        border: Option<&Border>,
    ) {
        let r = rect.normalized();
        if r.is_empty() {
            return;
        }

        let (color0, color1, grad_p0, grad_p1) = paint.resolve();
        let (border_width, border_color) = match border {
            Some(b) => (b.width.max(0.0), b.color.to_array()),
            None => (0.0, [0.0; 4]),
        };

        self.instances.push(QuadInstance {
            origin: [r.origin.x, r.origin.y],
            size: [r.size.x, r.size.y],
            radii: radii.to_array(),
            color0,
            color1,
            grad_p0,
            grad_p1,
            border_width_pad: [border_width, 0.0],
            border_color,
        });
    }

    /// Creates GPU resources on first use and uploads this frame's instances.
    pub(super) fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        if self.instances.is_empty() {
            return;
        }
        self.ensure_pipeline(ctx);
        if self.quad.is_none() {
            self.quad = Some(UnitQuad::new(ctx, "deskfolio quad unit"));
        }
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            write_viewport(ctx, ubo);
        }
        self.instance_buffer.upload(ctx, &self.instances);
    }

    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instances: Range<u32>) {
        let Some(pipeline)   = self.pipeline.as_ref()          else { return; };
        let Some(bind_group) = self.bind_group.as_ref()        else { return; };
        let Some(quad)       = self.quad.as_ref()              else { return; };
        let Some(buffer)     = self.instance_buffer.buffer()   else { return; };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, buffer.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..UnitQuad::INDEX_COUNT, 0, instances);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("deskfolio quad shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("deskfolio quad bgl"),
            entries: &[viewport_ubo_entry(0)],
        });

        let pipeline = create_instanced_pipeline(
            ctx,
            "deskfolio quad pipeline",
            &shader,
            &bgl,
            QuadInstance::layout(),
        );

        let viewport_ubo = create_viewport_ubo(ctx, "deskfolio quad viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("deskfolio quad bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        log::debug!("quad pipeline built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (104 bytes):
///
///  offset  0  origin          [f32; 2]   loc 1
///  offset  8  size            [f32; 2]   loc 2
///  offset 16  radii           [f32; 4]   loc 3  (tl, tr, br, bl)
///  offset 32  color0          [f32; 4]   loc 4
///  offset 48  color1          [f32; 4]   loc 5
///  offset 64  grad_p0         [f32; 2]   loc 6
///  offset 72  grad_p1         [f32; 2]   loc 7
///  offset 80  border_width_pad[f32; 2]   loc 8  (.x = border_width)
///  offset 88  border_color    [f32; 4]   loc 9
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadInstance {
    origin: [f32; 2],
    size: [f32; 2],
    radii: [f32; 4],
    color0: [f32; 4],
    color1: [f32; 4],
    grad_p0: [f32; 2],
    grad_p1: [f32; 2],
    border_width_pad: [f32; 2],
    border_color: [f32; 4],
}

impl QuadInstance {
    const ATTRS: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4, // radii
        4 => Float32x4, // color0
        5 => Float32x4, // color1
        6 => Float32x2, // grad_p0
        7 => Float32x2, // grad_p1
        8 => Float32x2, // border_width_pad
        9 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn instance_is_104_bytes() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 104);
    }

    #[test]
    fn push_normalizes_and_drops_empty() {
        let mut quads = QuadPipeline::default();
        let paint = Paint::solid(Color::white());
        quads.push(Rect::new(10.0, 10.0, -4.0, 2.0), CornerRadii::zero(), &paint, None);
        quads.push(Rect::new(0.0, 0.0, 0.0, 5.0), CornerRadii::zero(), &paint, None);
        assert_eq!(quads.len(), 1);
        assert_eq!(quads.instances[0].origin, [6.0, 10.0]);
        assert_eq!(quads.instances[0].size, [4.0, 2.0]);

        quads.begin();
        assert_eq!(quads.len(), 0);
    }

    #[test]
    fn border_width_is_never_negative() {
        let mut quads = QuadPipeline::default();
        let border = Border::new(-3.0, Color::black());
        quads.push(
            Rect::new(0.0, 0.0, 4.0, 4.0),
            CornerRadii::all(2.0),
            &Paint::solid(Color::white()),
            Some(&border),
        );
        assert_eq!(quads.instances[0].border_width_pad, [0.0, 0.0]);
        assert_eq!(quads.instances[0].radii, [2.0; 4]);
    }
}
