use std::io::Write;
use std::path::Path;

use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};

/// Writes the frame as binary PPM, creating parent directories as needed.
///
/// PPM carries no alpha, so the opaque channel is dropped. Buffer rows are
/// already ordered top of screen first, which is the order PPM expects.
pub fn write_ppm(buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;

    let rgba = buffer.as_rgba();
    let mut rgb = Vec::with_capacity(rgba.len() / BYTES_PER_PIXEL * 3);
    for pixel in rgba.chunks_exact(BYTES_PER_PIXEL) {
        rgb.extend_from_slice(&pixel[..3]);
    }

    file.write_all(&rgb)?;

    Ok(())
}
