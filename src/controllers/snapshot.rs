use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::config::ExplorerConfig;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::mandelbrot::greyscale::GreyscaleMap;
use crate::core::render::rayon_rows::render_frame_rayon;

/// Renders a single frame of the startup view and hands it to a file
/// presenter. The non-interactive path: no gestures, no state machine, one
/// frame on the rayon pool.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<FrameBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &ExplorerConfig) -> Result<(), Box<dyn std::error::Error>> {
        let viewport = config.initial_viewport();

        println!("Rendering Mandelbrot set...");
        println!("Image size: {}x{}", config.pixel_width, config.pixel_height);
        println!("Max iterations: {}", config.max_iterations);

        let mut buffer = FrameBuffer::new(config.pixel_width, config.pixel_height)?;
        let map = GreyscaleMap::new(config.max_iterations);

        let start = Instant::now();
        render_frame_rayon(&viewport, config.max_iterations, &map, &mut buffer);
        println!("Duration:   {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }
}
