use crate::core::data::frame_buffer::BYTES_PER_PIXEL;
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::escape::escape;
use crate::core::render::ports::colour_map::ColourMap;

/// Renders one plane row into its buffer slice.
///
/// The slice is the row's full RGBA span; `plane_y` addresses the row in
/// plane coordinates (row 0 = `min_y` edge). Shared by both renderers so the
/// stripe pool and the rayon path produce identical frames.
pub(crate) fn render_row<M: ColourMap>(
    row: &mut [u8],
    plane_y: u32,
    viewport: &Viewport,
    max_iterations: u32,
    map: &M,
) {
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let c = viewport.pixel_to_complex(x as i32, plane_y as i32);
        let colour = map.colour(escape(c, max_iterations));

        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
        pixel[3] = colour.a;
    }
}
