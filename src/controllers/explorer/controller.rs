use std::time::Instant;

use crate::controllers::explorer::gestures::{Gesture, decode_gesture};
use crate::controllers::explorer::ports::input::InputPort;
use crate::core::config::ExplorerConfig;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::greyscale::GreyscaleMap;
use crate::core::render::stripe_pool::render_frame_stripes;
use crate::core::render::workers::stripe_worker_count;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Rendering,
}

/// Interaction state machine driving the explorer.
///
/// Owns the viewport and the iteration budget; both are single-writer and
/// only ever mutated here, on the shell thread, while no render referencing
/// them is in flight. Gestures arriving while `Rendering` are dropped;
/// there is no queue and a render always runs to completion.
pub struct ExplorerController {
    config: ExplorerConfig,
    viewport: Viewport,
    max_iterations: u32,
    state: RenderState,
}

impl ExplorerController {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            viewport: config.initial_viewport(),
            max_iterations: config.max_iterations,
            state: RenderState::Idle,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Requests a render of the current view without any gesture, used for
    /// the first frame after startup.
    pub fn schedule_render(&mut self) {
        self.state = RenderState::Rendering;
    }

    /// Consumes one input snapshot. Returns whether a render was scheduled.
    ///
    /// While a render is pending the snapshot is ignored entirely: the
    /// viewport and budget stay untouched and no gesture is queued.
    pub fn poll_input(&mut self, input: &dyn InputPort) -> bool {
        if self.state == RenderState::Rendering {
            return false;
        }

        let Some(gesture) = decode_gesture(input, self.config.pan_fraction) else {
            return false;
        };

        log::debug!("gesture: {:?}", gesture);
        self.apply_gesture(gesture);
        self.state = RenderState::Rendering;
        true
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Pan {
                fraction_x,
                fraction_y,
            } => {
                self.viewport.pan_by(fraction_x, fraction_y);
            }
            Gesture::ZoomIn { screen_x, screen_y } => {
                // screen rows grow downward, plane rows grow upward
                let plane_y = self.viewport.pixel_height() as i32 - 1 - screen_y;
                let center = self.viewport.pixel_to_complex(screen_x, plane_y);

                self.viewport.zoom_to(center, self.config.zoom_factor);
                self.max_iterations = self
                    .max_iterations
                    .max(zoomed_iteration_budget(self.viewport.width()));
            }
            Gesture::Reset => {
                self.viewport.reset();
                self.max_iterations = self.config.max_iterations;
            }
        }
    }

    /// Runs the scheduled render to completion and returns to `Idle`.
    ///
    /// Blocks until the stripe pool has joined; the buffer holds a complete
    /// frame when this returns.
    pub fn render_into(&mut self, buffer: &mut FrameBuffer) {
        let workers = stripe_worker_count(self.viewport.pixel_height());
        let map = GreyscaleMap::new(self.max_iterations);

        let start = Instant::now();
        render_frame_stripes(&self.viewport, self.max_iterations, &map, buffer, workers);

        log::info!(
            "rendered {}x{} at {} iterations on {} workers in {:?}",
            buffer.width(),
            buffer.height(),
            self.max_iterations,
            workers,
            start.elapsed()
        );

        self.state = RenderState::Idle;
    }
}

/// Budget for the current zoom depth: `100 + floor(log2(3 / width) * 50)`.
///
/// Width 3 is the canonical domain, so the value grows by 50 per halving of
/// the view. Callers keep the budget non-decreasing by taking the max with
/// the current value.
fn zoomed_iteration_budget(view_width: f64) -> u32 {
    let depth = (3.0 / view_width).log2();
    let budget = 100.0 + (depth * 50.0).floor();

    budget.max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::explorer::ports::input::{Key, MouseButton};

    #[derive(Debug, Default)]
    struct StubInput {
        keys_down: Vec<Key>,
        buttons_pressed: Vec<MouseButton>,
        mouse: (i32, i32),
    }

    impl InputPort for StubInput {
        fn is_key_down(&self, key: Key) -> bool {
            self.keys_down.contains(&key)
        }

        fn is_button_pressed(&self, button: MouseButton) -> bool {
            self.buttons_pressed.contains(&button)
        }

        fn mouse_position(&self) -> (i32, i32) {
            self.mouse
        }

        fn any_key_pressed(&self) -> bool {
            !self.keys_down.is_empty()
        }
    }

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            pixel_width: 16,
            pixel_height: 16,
            max_iterations: 30,
            ..ExplorerConfig::default()
        }
    }

    fn zoom_at(x: i32, y: i32) -> StubInput {
        StubInput {
            buttons_pressed: vec![MouseButton::Primary],
            mouse: (x, y),
            ..StubInput::default()
        }
    }

    #[test]
    fn test_starts_idle_with_configured_budget() {
        let controller = ExplorerController::new(small_config());

        assert_eq!(controller.state(), RenderState::Idle);
        assert_eq!(controller.max_iterations(), 30);
        assert_eq!(controller.viewport().width(), 3.0);
    }

    #[test]
    fn test_idle_input_schedules_nothing() {
        let mut controller = ExplorerController::new(small_config());

        assert!(!controller.poll_input(&StubInput::default()));
        assert_eq!(controller.state(), RenderState::Idle);
    }

    #[test]
    fn test_pan_gesture_moves_viewport_and_schedules_render() {
        let mut controller = ExplorerController::new(small_config());
        let input = StubInput {
            keys_down: vec![Key::PanUp],
            ..StubInput::default()
        };

        assert!(controller.poll_input(&input));
        assert_eq!(controller.state(), RenderState::Rendering);
        assert_eq!(controller.viewport().min_y(), -0.75);
        assert_eq!(controller.viewport().max_y(), 2.25);
    }

    #[test]
    fn test_zoom_gesture_halves_view_around_pointer() {
        let mut controller = ExplorerController::new(small_config());

        // center of a 16x16 screen: screen (8, 8) is plane (8, 7)
        assert!(controller.poll_input(&zoom_at(8, 8)));

        let viewport = controller.viewport();
        assert_eq!(viewport.width(), 1.5);
        assert_eq!(viewport.height(), 1.5);

        let expected_center = Viewport::home(16, 16)
            .unwrap()
            .pixel_to_complex(8, 16 - 1 - 8);
        assert!(
            ((viewport.min_x() + viewport.max_x()) / 2.0 - expected_center.real).abs() < 1e-12
        );
        assert!(
            ((viewport.min_y() + viewport.max_y()) / 2.0 - expected_center.imag).abs() < 1e-12
        );
    }

    #[test]
    fn test_budget_grows_with_zoom_depth() {
        let mut controller = ExplorerController::new(small_config());

        // four halvings: width 3/16, log2(16) = 4, so 100 + 200 = 300
        for _ in 0..4 {
            controller.poll_input(&zoom_at(8, 8));
            controller.render_into(&mut FrameBuffer::new(16, 16).unwrap());
        }

        assert_eq!(controller.max_iterations(), 300);
    }

    #[test]
    fn test_budget_never_decreases_on_zoom() {
        let config = ExplorerConfig {
            max_iterations: 250,
            ..small_config()
        };
        let mut controller = ExplorerController::new(config);

        // first halving derives 150, below the configured 250
        controller.poll_input(&zoom_at(8, 8));

        assert_eq!(controller.max_iterations(), 250);
    }

    #[test]
    fn test_reset_restores_view_and_budget() {
        let mut controller = ExplorerController::new(small_config());
        let mut frame = FrameBuffer::new(16, 16).unwrap();

        for _ in 0..5 {
            controller.poll_input(&zoom_at(3, 12));
            controller.render_into(&mut frame);
        }
        assert_ne!(controller.viewport().width(), 3.0);

        let reset = StubInput {
            buttons_pressed: vec![MouseButton::Secondary],
            ..StubInput::default()
        };

        controller.poll_input(&reset);
        controller.render_into(&mut frame);
        let after_one = (*controller.viewport(), controller.max_iterations());

        controller.poll_input(&reset);
        controller.render_into(&mut frame);
        let after_two = (*controller.viewport(), controller.max_iterations());

        assert_eq!(after_one, after_two);
        assert_eq!(after_one.0.width(), 3.0);
        assert_eq!(after_one.1, 30);
    }

    #[test]
    fn test_gestures_are_dropped_while_rendering() {
        let mut controller = ExplorerController::new(small_config());

        assert!(controller.poll_input(&zoom_at(8, 8)));
        assert_eq!(controller.state(), RenderState::Rendering);

        let viewport_before = *controller.viewport();
        let budget_before = controller.max_iterations();

        let pan = StubInput {
            keys_down: vec![Key::PanLeft],
            ..StubInput::default()
        };

        assert!(!controller.poll_input(&pan));
        assert!(!controller.poll_input(&zoom_at(0, 0)));

        assert_eq!(*controller.viewport(), viewport_before);
        assert_eq!(controller.max_iterations(), budget_before);
        assert_eq!(controller.state(), RenderState::Rendering);
    }

    #[test]
    fn test_render_returns_to_idle_with_complete_frame() {
        let mut controller = ExplorerController::new(small_config());
        let mut frame = FrameBuffer::new(16, 16).unwrap();

        controller.schedule_render();
        controller.render_into(&mut frame);

        assert_eq!(controller.state(), RenderState::Idle);
        // every pixel written: alpha is opaque everywhere
        for pixel in frame.as_rgba().chunks_exact(4) {
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_zoomed_iteration_budget_at_home_width() {
        assert_eq!(zoomed_iteration_budget(3.0), 100);
        assert_eq!(zoomed_iteration_budget(1.5), 150);
        assert_eq!(zoomed_iteration_budget(0.375), 250);
    }
}
