//! Shared helpers for benchmark drivers.

use crate::{Grid, Pixel};

pub const BENCH_SIZES: [usize; 4] = [256, 512, 1024, 2048];
pub const BENCH_ANGLES: [i32; 4] = [90, 180, 270, 360];
pub const BENCH_SCALES: [(i32, i32); 3] = [(2, 2), (4, 2), (8, 8)];

/// Builds a gradient grid so that no two neighbouring blocks average to the same value.
pub fn create_test_grid(width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height);
    let span = (width + height).max(1);
    for row in 0..height {
        for col in 0..width {
            let r = (col * 255 / span) as u8;
            let g = (row * 255 / span) as u8;
            let b = ((col + row) * 255 / span) as u8;
            *grid.pixel_mut(row, col) = Pixel::new(r, g, b);
        }
    }
    grid
}

/// Builds a square patch whose border is `key` and whose interior is opaque.
pub fn create_framed_patch(size: usize, key: Pixel) -> Grid {
    let mut patch = Grid::filled(size, size, Pixel::WHITE);
    let last = size.saturating_sub(1);
    for row in 0..size {
        for col in 0..size {
            if row == 0 || col == 0 || row == last || col == last {
                *patch.pixel_mut(row, col) = key;
            }
        }
    }
    patch
}
