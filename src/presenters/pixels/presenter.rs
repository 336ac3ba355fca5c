use crate::controllers::request::data::frame_data::FrameData;
use crate::controllers::request::ports::frame_sink::FrameSink;
use crate::controllers::request::stage::StageKind;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::time::Duration;
use winit::window::Window;

/// Presents computed frames through a `pixels` framebuffer with an egui
/// overlay.
///
/// The framebuffer is resized to each delivered image's own resolution and
/// the scaling renderer stretches it to the window surface, so a preview
/// frame fills the window just like a full-resolution one.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    has_frame: bool,
    last_stage: Option<StageKind>,
    last_render_duration: Option<Duration>,
}

impl FrameSink for PixelsPresenter {
    fn present(&mut self, frame: FrameData) {
        let (width, height) = frame.image.resolution();

        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");
        self.pixels.frame_mut().copy_from_slice(frame.image.data());

        self.has_frame = true;
        self.last_stage = Some(frame.stage);
        self.last_render_duration = Some(frame.render_duration);
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            has_frame: false,
            last_stage: None,
            last_render_duration: None,
        }
    }

    #[must_use]
    pub fn last_stage(&self) -> Option<StageKind> {
        self.last_stage
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }

    pub fn render(
        &mut self,
        egui_ctx: &EguiContext,
        shapes: Vec<egui::epaint::ClippedShape>,
        textures_delta: egui::TexturesDelta,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        let clipped_primitives = egui_ctx.tessellate(shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            // Upload new/changed egui textures
            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            // Update egui buffers (vertices, indices)
            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of the pixels framebuffer
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep pixels content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            // Free textures no longer needed
            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn draw_placeholder(&mut self) {
        let frame = self.pixels.frame_mut();
        for pixel in frame.chunks_exact_mut(4) {
            pixel[0] = 0;
            pixel[1] = 0;
            pixel[2] = 0;
            pixel[3] = 255;
        }
    }
}
