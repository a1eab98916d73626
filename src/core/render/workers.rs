use std::num::NonZeroUsize;

/// Stripe count for a frame of the given height: one worker per available
/// hardware execution unit, but never more workers than rows.
#[must_use]
pub fn stripe_worker_count(pixel_height: u32) -> NonZeroUsize {
    let available = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);

    let capped = available.min(pixel_height.max(1) as usize);

    NonZeroUsize::new(capped).unwrap_or(NonZeroUsize::MIN)
}
