//! Block-mean downsampling.
//!
//! Each output pixel is the per-channel mean of a `height_scale × width_scale`
//! block of source pixels, truncated toward zero. Every source pixel is read
//! exactly once.

use log::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::pixel::Pixel;

/// Downsampling operator with independent row and column factors.
///
/// Scales below 1, or scales that do not evenly divide the grid, leave the
/// grid unchanged. [`try_apply`] reports those cases as
/// [`Error::InvalidScale`] instead.
///
/// [`try_apply`]: OpDownSample::try_apply
#[derive(Copy, Clone, Debug)]
pub struct OpDownSample {
    height_scale: i32,
    width_scale: i32,
}

impl Default for OpDownSample {
    fn default() -> Self {
        Self {
            height_scale: 1,
            width_scale: 1,
        }
    }
}

impl OpDownSample {
    pub fn new(height_scale: i32, width_scale: i32) -> Self {
        Self {
            height_scale,
            width_scale,
        }
    }

    pub fn set_scales(&mut self, height_scale: i32, width_scale: i32) -> &mut Self {
        self.height_scale = height_scale;
        self.width_scale = width_scale;
        self
    }

    /// Returns the `(height_scale, width_scale)` pair as unsigned factors if
    /// both evenly divide `src`.
    fn factors_for(&self, src: &Grid) -> Option<(usize, usize)> {
        let hs = usize::try_from(self.height_scale).ok().filter(|&s| s >= 1)?;
        let ws = usize::try_from(self.width_scale).ok().filter(|&s| s >= 1)?;
        if src.height() % hs != 0 || src.width() % ws != 0 {
            return None;
        }
        Some((hs, ws))
    }

    /// Returns true if applying to `src` would change it.
    pub fn is_applicable(&self, src: &Grid) -> bool {
        self.factors_for(src).is_some()
    }

    /// Returns the output `(width, height)`, or `None` when the scales do not fit `src`.
    pub fn compute_output_dimensions(&self, src: &Grid) -> Option<(usize, usize)> {
        self.factors_for(src)
            .map(|(hs, ws)| (src.width() / ws, src.height() / hs))
    }

    /// Returns the downsampled grid, or a copy of `original` when the scales do not fit.
    pub fn apply(&self, original: &Grid) -> Grid {
        match self.compute_output_dimensions(original) {
            Some((out_w, out_h)) => {
                let mut result = Grid::new(out_w, out_h);
                self.apply_to_preallocated(original, &mut result);
                result
            }
            None => {
                debug!(
                    "down_sample: skipping {}x{} on {}x{} grid",
                    self.height_scale,
                    self.width_scale,
                    original.height(),
                    original.width()
                );
                original.clone()
            }
        }
    }

    /// Like [`apply`](OpDownSample::apply) but rejects scales that do not fit.
    pub fn try_apply(&self, original: &Grid) -> Result<Grid> {
        if !self.is_applicable(original) {
            return Err(Error::InvalidScale {
                height_scale: self.height_scale,
                width_scale: self.width_scale,
                height: original.height(),
                width: original.width(),
            });
        }
        Ok(self.apply(original))
    }

    /// Writes block means into `dst`, which must already have the output dimensions.
    /// `dst` is left untouched when the scales do not fit or the sizes disagree.
    pub fn apply_to_preallocated(&self, original: &Grid, dst: &mut Grid) {
        let Some((hs, ws)) = self.factors_for(original) else {
            return;
        };
        if dst.width() * ws != original.width() || dst.height() * hs != original.height() {
            return;
        }

        let count = (hs * ws) as u64;
        for k in 0..dst.height() {
            for l in 0..dst.width() {
                let mut sums = [0u64; 3];
                for row in k * hs..(k + 1) * hs {
                    for pixel in &original.row(row)[l * ws..(l + 1) * ws] {
                        for (sum, channel) in sums.iter_mut().zip(pixel.channels()) {
                            *sum += channel as u64;
                        }
                    }
                }
                let [r, g, b] = sums.map(|sum| (sum / count) as u8);
                *dst.pixel_mut(k, l) = Pixel::new(r, g, b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dimensions() {
        let src = Grid::new(6, 4);
        assert_eq!(OpDownSample::new(2, 3).compute_output_dimensions(&src), Some((2, 2)));
        assert_eq!(OpDownSample::new(4, 6).compute_output_dimensions(&src), Some((1, 1)));
        assert_eq!(OpDownSample::new(1, 1).compute_output_dimensions(&src), Some((6, 4)));
        assert_eq!(OpDownSample::new(3, 2).compute_output_dimensions(&src), None);
        assert_eq!(OpDownSample::new(0, 2).compute_output_dimensions(&src), None);
        assert_eq!(OpDownSample::new(2, -1).compute_output_dimensions(&src), None);
    }

    #[test]
    fn test_uniform_block_keeps_color() {
        let color = Pixel::new(200, 17, 3);
        let src = Grid::filled(6, 4, color);
        let dst = OpDownSample::new(2, 3).apply(&src);
        assert_eq!(dst, Grid::filled(2, 2, color));
    }

    #[test]
    fn test_mean_truncates() {
        let src = Grid::from_rows(&[
            [Pixel::new(0, 10, 255), Pixel::new(1, 11, 254)],
            [Pixel::new(1, 10, 254), Pixel::new(1, 10, 254)],
        ])
        .expect("rectangular");
        let dst = OpDownSample::new(2, 2).apply(&src);
        // (0+1+1+1)/4 = 0, (10+11+10+10)/4 = 10, (255+254*3)/4 = 254
        assert_eq!(dst, Grid::filled(1, 1, Pixel::new(0, 10, 254)));
    }

    #[test]
    fn test_blocks_are_independent() {
        let a = Pixel::new(10, 20, 30);
        let b = Pixel::new(30, 40, 50);
        let src = Grid::from_rows(&[[a, a, b, b], [a, a, b, b]]).expect("rectangular");
        let dst = OpDownSample::new(2, 2).apply(&src);
        assert_eq!(dst, Grid::from_rows(&[[a, b]]).expect("rectangular"));

        let dst = OpDownSample::new(1, 4).apply(&src);
        let mid = Pixel::new(20, 30, 40);
        assert_eq!(dst, Grid::from_rows(&[[mid], [mid]]).expect("rectangular"));
    }

    #[test]
    fn test_invalid_scales_leave_grid_unchanged() {
        let src = Grid::from_rows(&[[Pixel::new(1, 2, 3), Pixel::new(4, 5, 6), Pixel::WHITE]])
            .expect("rectangular");
        for (hs, ws) in [(0, 1), (1, 0), (-1, 1), (1, 2), (2, 1)] {
            assert_eq!(OpDownSample::new(hs, ws).apply(&src), src, "scales = {hs}x{ws}");
            assert!(matches!(
                OpDownSample::new(hs, ws).try_apply(&src),
                Err(Error::InvalidScale { .. })
            ));
        }
    }

    #[test]
    fn test_set_scales_reconfigures() {
        let src = Grid::filled(4, 2, Pixel::WHITE);
        let mut op = OpDownSample::default();
        assert_eq!(op.apply(&src), src);

        op.set_scales(2, 4);
        assert_eq!(op.compute_output_dimensions(&src), Some((1, 1)));
        assert_eq!(op.apply(&src), Grid::filled(1, 1, Pixel::WHITE));

        assert!(!op.set_scales(3, 1).is_applicable(&src));
    }

    #[test]
    fn test_empty_grid() {
        let src = Grid::new_empty();
        let dst = OpDownSample::new(2, 2).apply(&src);
        assert_eq!(dst, src);
    }
}
