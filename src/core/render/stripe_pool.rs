use std::num::NonZeroUsize;
use std::thread;

use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::render::ports::colour_map::ColourMap;
use crate::core::render::scanline::render_row;

/// Renders a full frame on a pool of scoped worker threads.
///
/// Plane row `y` belongs to worker `y mod workers`, so the stripes interleave
/// and spatial variance in per-pixel cost spreads evenly across the pool.
/// Each worker receives its rows as disjoint mutable slices of the shared
/// buffer, which makes the frame race-free with no locks or atomics. The
/// scope join is the completion barrier: when this function returns, every
/// pixel has been written exactly once and the buffer is consistent.
pub fn render_frame_stripes<M: ColourMap>(
    viewport: &Viewport,
    max_iterations: u32,
    map: &M,
    buffer: &mut FrameBuffer,
    workers: NonZeroUsize,
) {
    let worker_count = workers.get();

    let mut stripes: Vec<Vec<(u32, &mut [u8])>> =
        (0..worker_count).map(|_| Vec::new()).collect();

    for (plane_y, row) in buffer.plane_rows_mut() {
        stripes[plane_y as usize % worker_count].push((plane_y, row));
    }

    thread::scope(|scope| {
        for stripe in stripes.into_iter().filter(|rows| !rows.is_empty()) {
            scope.spawn(move || {
                for (plane_y, row) in stripe {
                    render_row(row, plane_y, viewport, max_iterations, map);
                }
            });
        }
    });
}
