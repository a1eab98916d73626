pub mod ports;
pub mod rayon_rows;
pub mod scanline;
pub mod stripe_pool;
pub mod workers;
