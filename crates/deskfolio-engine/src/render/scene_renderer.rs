use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::batch::{BatchKind, BatchPlan};
use super::common::logical_clip_to_scissor;
use super::glyphs::GlyphPipeline;
use super::quads::QuadPipeline;
use super::{RenderCtx, RenderTarget};

/// Draws a [`DrawList`] in paint order.
///
/// Shapes and text are interleaved exactly as recorded: consecutive commands
/// of the same kind under the same clip share one instanced draw, and a
/// kind or clip change starts a new one. Everything goes into a single
/// render pass that loads the cleared surface.
#[derive(Default)]
pub struct SceneRenderer {
    quads: QuadPipeline,
    glyphs: GlyphPipeline,
    plan: BatchPlan,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        self.quads.begin();
        self.glyphs.begin(ctx);
        self.plan.clear();

        for item in draw_list.iter_in_paint_order() {
            if item.clip_rect.is_some_and(|c| c.is_empty()) {
                continue;
            }

            let (kind, range) = match &item.cmd {
                DrawCmd::Text(cmd) => (BatchKind::Glyph, self.glyphs.push_text(ctx, cmd, fonts)),
                shape => {
                    let Some(q) = shape.as_quad() else { continue };
                    let start = self.quads.len();
                    self.quads.push(q.rect, q.radii, q.paint, q.border);
                    (BatchKind::Quad, start..self.quads.len())
                }
            };

            self.plan.push(kind, item.clip_rect, range);
        }

        if self.plan.is_empty() {
            return;
        }

        self.quads.prepare(ctx);
        self.glyphs.prepare(ctx);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("deskfolio scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for batch in self.plan.batches() {
            let Some((x, y, w, h)) =
                logical_clip_to_scissor(batch.clip, ctx.scale_factor, ctx.target_size)
            else {
                continue;
            };
            rpass.set_scissor_rect(x, y, w, h);
            match batch.kind {
                BatchKind::Quad => self.quads.draw(&mut rpass, batch.instances.clone()),
                BatchKind::Glyph => self.glyphs.draw(&mut rpass, batch.instances.clone()),
            }
        }
    }
}
