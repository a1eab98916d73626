mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use controllers::explorer::controller::{ExplorerController, RenderState};
pub use controllers::explorer::gestures::Gesture;
pub use controllers::explorer::ports::input::{InputPort, Key, MouseButton};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::snapshot::SnapshotController;
pub use core::config::ExplorerConfig;
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::frame_buffer::FrameBuffer;
pub use core::data::viewport::Viewport;
pub use core::mandelbrot::escape::escape;
pub use core::mandelbrot::greyscale::GreyscaleMap;
pub use core::render::ports::colour_map::ColourMap;
pub use core::render::rayon_rows::render_frame_rayon;
pub use core::render::stripe_pool::render_frame_stripes;
pub use core::render::workers::stripe_worker_count;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::shell::ExplorerShell;
