use egui::{ClippedPrimitive, Context as EguiContext, FullOutput, TexturesDelta};
use egui_wgpu::{Renderer as EguiRenderer, ScreenDescriptor};
use pixels::{Pixels, PixelsContext, wgpu};

/// Draws the egui side panel on top of the chart already in the render target.
pub struct EguiOverlay {
    renderer: EguiRenderer,
}

impl EguiOverlay {
    pub fn new(pixels: &Pixels<'static>) -> Self {
        Self {
            renderer: EguiRenderer::new(pixels.device(), pixels.render_texture_format(), None, 1),
        }
    }

    pub fn paint(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        context: &PixelsContext,
        output: FullOutput,
        egui_ctx: &EguiContext,
        size_in_pixels: [u32; 2],
    ) {
        let pixels_per_point = egui_ctx.pixels_per_point();
        let primitives = egui_ctx.tessellate(output.shapes, pixels_per_point);
        let screen = ScreenDescriptor {
            size_in_pixels,
            pixels_per_point,
        };

        self.upload(encoder, context, &output.textures_delta, &primitives, &screen);

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("side panel"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            self.renderer.render(&mut pass, &primitives, &screen);
        }

        output
            .textures_delta
            .free
            .iter()
            .for_each(|id| self.renderer.free_texture(id));
    }

    fn upload(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        context: &PixelsContext,
        delta: &TexturesDelta,
        primitives: &[ClippedPrimitive],
        screen: &ScreenDescriptor,
    ) {
        for (id, image) in &delta.set {
            self.renderer
                .update_texture(&context.device, &context.queue, *id, image);
        }

        self.renderer
            .update_buffers(&context.device, &context.queue, encoder, primitives, screen);
    }
}
