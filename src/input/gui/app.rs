//! Main GUI application loop.

use crate::controllers::interactive::InteractiveController;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::viewport::ZoomDirection;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::panels::{FrameStats, PanelVisibility, draw_ui};
use crate::input::gui::pointer::PointerTracker;
use crate::input::gui::state::ExplorerState;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 720.0;
/// Frames are skipped below this extent rather than dividing by a
/// near-zero window dimension.
const MIN_FRAME_EXTENT: u32 = 8;

struct ExplorerApp {
    width: u32,
    height: u32,
    presenter: PixelsPresenter,
    controller: InteractiveController,
    state: ExplorerState,
    panels: PanelVisibility,
    pointer: PointerTracker,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    started_at: Instant,
    last_frame_at: Instant,
    smoothed_fps: f32,
    redraw_pending: bool,
}

impl ExplorerApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: PixelsPresenter,
        controller: InteractiveController,
    ) -> Self {
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

        let aspect_ratio = f64::from(size.width.max(1)) / f64::from(size.height.max(1));
        let now = Instant::now();

        Self {
            width: size.width,
            height: size.height,
            presenter,
            controller,
            state: ExplorerState::new(aspect_ratio),
            panels: PanelVisibility::default(),
            pointer: PointerTracker::default(),
            egui_ctx,
            egui_state,
            started_at: now,
            last_frame_at: now,
            smoothed_fps: 0.0,
            redraw_pending: true,
        }
    }

    fn handle_event(
        &mut self,
        window: &'static Window,
        event: Event<GuiEvent>,
        elwt: &EventLoopWindowTarget<GuiEvent>,
    ) {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                // egui gets first refusal on every window event.
                let response = self.egui_state.on_window_event(window, event);
                if response.repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if !response.consumed {
                            self.handle_key(event, elwt);
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if response.consumed {
                            self.pointer.release_all();
                        } else {
                            self.pointer
                                .set_button(*button, *state == ElementState::Pressed);
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        let delta = self.pointer.moved_to((position.x, position.y));

                        if !response.consumed {
                            if let Some((delta_x, delta_y)) = delta {
                                self.state
                                    .viewport
                                    .pan(delta_x, delta_y, f64::from(self.width.max(1)));
                                self.redraw_pending = true;
                            }
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        if !response.consumed {
                            self.handle_wheel(*delta);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        self.redraw_frame(window, elwt);
                    }
                    WindowEvent::Resized(size) => {
                        self.resize(size.width, size.height);
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    _ => {
                        if response.consumed {
                            self.redraw_pending = true;
                        }
                    }
                }
            }
            Event::UserEvent(GuiEvent::Wake) => {
                // A frame finished in the worker; present it next redraw.
                self.redraw_pending = true;
                window.request_redraw();
            }
            Event::AboutToWait => {
                if self.redraw_pending || self.animation_active() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        match event.physical_key {
            PhysicalKey::Code(KeyCode::Tab) => {
                self.panels.show_ui = !self.panels.show_ui;
                self.redraw_pending = true;
            }
            PhysicalKey::Code(KeyCode::Escape) => {
                elwt.exit();
            }
            _ => {}
        }
    }

    fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        let scroll_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        if scroll_y == 0.0 || self.width == 0 || self.height == 0 {
            return;
        }

        let direction = if scroll_y > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };

        self.state.viewport.zoom_at(
            self.pointer.position(),
            (f64::from(self.width), f64::from(self.height)),
            direction,
        );
        self.redraw_pending = true;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width > 0 && height > 0 {
            self.presenter.resize(width, height);
        }
        self.redraw_pending = true;
    }

    fn animation_active(&self) -> bool {
        self.state.animation.zoom.is_enabled()
            || self.state.animation.animate_palette
            || self.state.animation.orbit.is_enabled()
    }

    fn redraw_frame(&mut self, window: &Window, elwt: &EventLoopWindowTarget<GuiEvent>) {
        self.redraw_pending = false;

        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_at).as_secs_f64();
        self.last_frame_at = now;
        let elapsed = now.duration_since(self.started_at).as_secs_f64();

        if delta > 0.0 {
            let fps = (1.0 / delta) as f32;
            self.smoothed_fps = if self.smoothed_fps == 0.0 {
                fps
            } else {
                0.9 * self.smoothed_fps + 0.1 * fps
            };
        }

        // Degenerate window: skip the whole frame.
        if self.width < MIN_FRAME_EXTENT || self.height < MIN_FRAME_EXTENT {
            return;
        }

        let aspect_ratio = f64::from(self.width) / f64::from(self.height);
        self.state.advance_frame(delta, aspect_ratio);
        self.submit_render_request_if_needed(elapsed);

        let mut egui_output = self.update_ui(window, aspect_ratio);

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.egui_state
            .handle_platform_output(window, std::mem::take(&mut egui_output.platform_output));

        if let Err(error) = self.presenter.render(egui_output, &self.egui_ctx) {
            log::error!("presentation failed: {error}");
            elwt.exit();
        }
    }

    fn submit_render_request_if_needed(&mut self, elapsed: f64) {
        let pixel_rect = match PixelRect::from_window_size(self.width, self.height) {
            Ok(rect) => rect,
            Err(_) => return,
        };

        let request = match self.state.build_frame_request(pixel_rect, elapsed) {
            Ok(request) => request,
            Err(_) => return,
        };

        if self.state.should_submit(&request) {
            let request = Arc::new(request);
            let generation = self.controller.submit_request(Arc::clone(&request));
            self.state.record_submission(request, generation);
        }
    }

    fn update_ui(&mut self, window: &Window, aspect_ratio: f64) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        let stats = FrameStats {
            fps: self.smoothed_fps,
            render_duration: self.presenter.last_render_duration(),
            error: self.presenter.last_error_message().map(str::to_string),
        };

        let state = &mut self.state;
        let panels = &mut self.panels;

        self.egui_ctx.run(raw_input, |ctx| {
            draw_ui(ctx, state, panels, &stats, aspect_ratio);
        })
    }
}

/// Runs the GUI application. Does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
        .build()
        .expect("Failed to create event loop");

    let event_loop_proxy = event_loop.create_proxy();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractalscope")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let presenter = PixelsPresenter::new(window, event_loop_proxy);
    let controller = InteractiveController::new(presenter.relay());
    let mut app = ExplorerApp::new(window, &event_loop, presenter, controller);

    event_loop
        .run(move |event, elwt| {
            app.handle_event(window, event, elwt);
        })
        .expect("Event loop error");
}
