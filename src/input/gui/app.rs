//! Main GUI application loop.

use std::sync::Arc;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::error;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::request::{ComputationRequest, Stage, StageKind};
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::MandelbrotEvaluator;
use crate::core::palette::gradient::{BLACK, default_gradient};
use crate::core::palette::palette::Palette;
use crate::core::util::selection::region_from_selection;
use crate::input::gui::selection::SelectionState;
use crate::presenters::pixels::presenter::PixelsPresenter;

const WINDOW_SIZE: f64 = 512.0;
const ITERATION_BUDGET: u32 = 1024;

/// Interactive application state: the computation request, the pixels
/// presenter and the drag-selection input.
struct GuiApp {
    width: u32,
    height: u32,
    presenter: PixelsPresenter,
    request: ComputationRequest,
    selection: SelectionState,
    region: Region,
    cursor: Point,
    last_progress: u8,
    reset_requested: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let presenter = PixelsPresenter::new(window);

        // The palette is fully built before the first worker spawns and is
        // shared read-only from then on.
        let palette = Palette::build(&default_gradient(), ITERATION_BUDGET, BLACK);
        let evaluator = Arc::new(MandelbrotEvaluator::new(palette));

        let region = Region::home();
        let request =
            ComputationRequest::new(size.width.max(2), size.height.max(2), region, evaluator)
                .expect("window size is a valid render target");

        Self {
            width: size.width,
            height: size.height,
            presenter,
            request,
            selection: SelectionState::default(),
            region,
            cursor: Point::default(),
            last_progress: 0,
            reset_requested: false,
            egui_ctx,
            egui_state,
        }
    }

    /// Obtains the initial preview synchronously so the first frame already
    /// shows the set; the full pass continues in the background.
    fn bootstrap(&mut self) {
        self.request.submit(self.region);
        self.request
            .await_stage(StageKind::Preview, &mut self.presenter);
    }

    fn submit(&mut self, region: Region) {
        self.region = region;
        self.request.submit(region);
        self.last_progress = 0;
    }

    /// Once-per-frame pipeline check; never blocks.
    fn poll_pipeline(&mut self) {
        if let Some(progress) = self.request.poll(&mut self.presenter) {
            self.last_progress = progress;
        }
    }

    fn handle_cursor_moved(&mut self, x: i32, y: i32) {
        self.cursor = Point { x, y };
        self.selection.on_move(self.cursor);
    }

    fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                self.selection.on_press(self.cursor);
            }
            (MouseButton::Left, ElementState::Released) => {
                if let Some((p1, p2)) = self.selection.on_release(self.cursor) {
                    if let Some(region) =
                        region_from_selection(p1, p2, self.width, self.height, self.region)
                    {
                        self.submit(region);
                    }
                }
            }
            (MouseButton::Right, ElementState::Released) => {
                self.submit(Region::home());
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;
        self.presenter.resize_surface(width, height);
        self.request.set_target_size(width, height);
    }

    /// Runs the egui frame and returns its output.
    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("View")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 180.0])
                .show(ctx, |ui| {
                    ui.heading("Mandel Explorer");
                    ui.separator();

                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        self.region.x(),
                        self.region.x() + self.region.width()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        self.region.y(),
                        self.region.y() + self.region.height()
                    ));

                    ui.separator();

                    match self.request.stage() {
                        Stage::Idle => {
                            ui.label("Idle");
                        }
                        Stage::PreviewPending => {
                            ui.label("Computing preview...");
                            ui.add(egui::ProgressBar::new(self.last_progress as f32 / 100.0));
                        }
                        Stage::FullPending => {
                            ui.label("Computing full image...");
                            ui.add(egui::ProgressBar::new(self.last_progress as f32 / 100.0));
                        }
                    }

                    if let Some(stage) = self.presenter.last_stage() {
                        ui.label(format!("Showing: {}", stage.display_name()));
                    }
                    if let Some(duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }

                    ui.separator();
                    ui.label("Drag to zoom, right-click to reset.");
                    if ui.button("Reset view").clicked() {
                        self.reset_requested = true;
                    }
                });

            // Selection rectangle overlay, converted from physical pixels
            // to egui points.
            if let Some((min, max)) = self.selection.active_rect() {
                let ppp = ctx.pixels_per_point();
                let rect = egui::Rect::from_min_max(
                    egui::pos2(min.x as f32 / ppp, min.y as f32 / ppp),
                    egui::pos2(max.x as f32 / ppp, max.y as f32 / ppp),
                );

                ctx.layer_painter(egui::LayerId::new(
                    egui::Order::Foreground,
                    egui::Id::new("selection"),
                ))
                .rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::RED));
            }
        })
    }

    /// Handles a window event, forwarding it to egui first.
    ///
    /// Returns true if egui consumed the event (e.g., click on UI element).
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandel Explorer")
            .with_inner_size(LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = GuiApp::new(window, &event_loop);
    app.bootstrap();

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward event to egui first
                    let egui_consumed = app.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            app.poll_pipeline();

                            let egui::FullOutput {
                                platform_output,
                                textures_delta,
                                shapes,
                                ..
                            } = app.update_ui(window);

                            app.egui_state
                                .handle_platform_output(window, platform_output);

                            if app.take_reset_request() {
                                app.submit(Region::home());
                            }

                            if let Err(e) =
                                app.presenter.render(&app.egui_ctx, shapes, textures_delta)
                            {
                                error!("render error: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            app.handle_cursor_moved(position.x as i32, position.y as i32);
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            if !egui_consumed {
                                app.handle_mouse_button(*state, *button);
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    // Poll-driven: the pipeline is checked once per
                    // rendered frame, so keep frames coming.
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
