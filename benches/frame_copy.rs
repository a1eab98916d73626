use criterion::{Criterion, criterion_group, criterion_main};
use mandelzoom::{FrameBuffer, GreyscaleMap, Viewport, render_frame_rayon};

fn bench_present_copies(c: &mut Criterion) {
    let size = 512u32;
    let viewport = Viewport::home(size, size).unwrap();
    let map = GreyscaleMap::new(100);
    let mut frame = FrameBuffer::new(size, size).unwrap();
    render_frame_rayon(&viewport, 100, &map, &mut frame);

    let mut surface = vec![0u8; frame.as_rgba().len()];

    c.bench_function("blit_rgba_to_surface", |b| {
        b.iter(|| surface.copy_from_slice(frame.as_rgba()));
    });

    c.bench_function("strip_alpha_for_ppm", |b| {
        b.iter(|| {
            let rgba = frame.as_rgba();
            let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
            for pixel in rgba.chunks_exact(4) {
                rgb.extend_from_slice(&pixel[..3]);
            }
            rgb
        });
    });
}

criterion_group!(benches, bench_present_copies);
criterion_main!(benches);
