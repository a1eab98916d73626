use rayon::prelude::*;

use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::render::ports::colour_map::ColourMap;
use crate::core::render::scanline::render_row;

/// Renders a full frame row-parallel on rayon's work-stealing pool.
///
/// Same output as [`render_frame_stripes`], different scheduling: rows are
/// stolen dynamically instead of being fixed to a stripe, which suits the
/// one-shot snapshot path where the pool already exists and spawn cost is
/// irrelevant. Rayon joins the scope before returning, so the completed
/// buffer is never observable early here either.
///
/// [`render_frame_stripes`]: crate::core::render::stripe_pool::render_frame_stripes
pub fn render_frame_rayon<M: ColourMap>(
    viewport: &Viewport,
    max_iterations: u32,
    map: &M,
    buffer: &mut FrameBuffer,
) {
    buffer
        .plane_rows_mut()
        .into_par_iter()
        .for_each(|(plane_y, row)| {
            render_row(row, plane_y, viewport, max_iterations, map);
        });
}
