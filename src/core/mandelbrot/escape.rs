use crate::core::data::complex::Complex;

/// Escape-time count for the Mandelbrot recurrence `z = z² + c`.
///
/// Iterates from `z = 0` and returns the step at which `|z|` first exceeds
/// 2 (tested as `|z|² > 4` to avoid the square root), or `max_iterations` if
/// the point never escapes within the budget. Pure and deterministic, so it
/// can run on any number of workers with no shared state.
#[must_use]
pub fn escape(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > 4.0 {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}
