use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use crate::controllers::explorer::controller::ExplorerController;
use crate::core::config::ExplorerConfig;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::input::gui::input_state::InputState;

/// The windowing collaborator: owns the event loop, polls input once per
/// display frame, and re-blits the most recent completed frame every frame.
///
/// The frame loop is the controller's clock. Each redraw polls the input
/// snapshot, lets the controller run a scheduled render to completion, then
/// copies the frame buffer to the surface, so the surface only ever sees
/// fully rendered frames.
pub struct ExplorerShell {
    config: ExplorerConfig,
}

impl ExplorerShell {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let config = self.config;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        // pixels keeps a reference to the window for the surface lifetime
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("mandelzoom")
                .with_inner_size(LogicalSize::new(
                    f64::from(config.pixel_width),
                    f64::from(config.pixel_height),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(config.pixel_width, config.pixel_height, surface_texture)?;

        let mut controller = ExplorerController::new(config);
        let mut frame = FrameBuffer::new(config.pixel_width, config.pixel_height)?;
        let mut input = InputState::default();

        // first frame renders before any gesture arrives
        controller.schedule_render();
        controller.render_into(&mut frame);

        log::info!(
            "explorer running at {}x{}, WASD/arrows pan, left click zooms, right click resets",
            config.pixel_width,
            config.pixel_height
        );

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput { event, .. } => {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        if code == KeyCode::Escape {
                            elwt.exit();
                            return;
                        }
                        input.handle_key(code, event.state);
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.handle_button(button, state);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let window_pos = (position.x as f32, position.y as f32);
                    let (x, y) = pixels
                        .window_pos_to_pixel(window_pos)
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                    input.set_mouse_position(x as i32, y as i32);
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width > 0 && new_size.height > 0 {
                        if let Err(err) =
                            pixels.resize_surface(new_size.width, new_size.height)
                        {
                            log::error!("surface resize failed: {err}");
                            elwt.exit();
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    if controller.poll_input(&input) {
                        controller.render_into(&mut frame);
                    }
                    input.end_frame();

                    pixels.frame_mut().copy_from_slice(frame.as_rgba());
                    if let Err(err) = pixels.render() {
                        log::error!("surface render failed: {err}");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        Ok(())
    }
}
