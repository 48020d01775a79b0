//! Color-keyed overlay of one grid onto another.

use log::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::pixel::{Pixel, pack};

/// Overlays a patch grid onto a base grid at `(start_row, start_column)`.
///
/// Patch pixels equal to the transparent key are skipped, so the base keeps
/// its own pixel there. The overlay is all-or-nothing: if the patch does not
/// fit inside the base, nothing is written and the pixel count is 0.
#[derive(Copy, Clone, Debug, Default)]
pub struct OpPatch {
    start_row: i32,
    start_column: i32,
    transparent: Pixel,
}

impl OpPatch {
    pub fn new(start_row: i32, start_column: i32) -> Self {
        Self {
            start_row,
            start_column,
            transparent: Pixel::BLACK,
        }
    }

    pub fn set_origin(&mut self, start_row: i32, start_column: i32) -> &mut Self {
        self.start_row = start_row;
        self.start_column = start_column;
        self
    }

    /// Sets the key color. Defaults to black.
    pub fn set_transparent_color(&mut self, r: u8, g: u8, b: u8) -> &mut Self {
        self.transparent = pack(r, g, b);
        self
    }

    pub fn transparent_color(&self) -> Pixel {
        self.transparent
    }

    /// Returns the origin as unsigned indices if `patch` fits inside `base` there.
    fn origin_in(&self, base: &Grid, patch: &Grid) -> Option<(usize, usize)> {
        let row = usize::try_from(self.start_row).ok()?;
        let col = usize::try_from(self.start_column).ok()?;
        if row > base.height() || col > base.width() {
            return None;
        }
        if row + patch.height() > base.height() || col + patch.width() > base.width() {
            return None;
        }
        Some((row, col))
    }

    /// Returns true if `patch` fits inside `base` at the configured origin.
    pub fn fits(&self, base: &Grid, patch: &Grid) -> bool {
        self.origin_in(base, patch).is_some()
    }

    /// Writes the non-transparent pixels of `patch` into `base` and returns how
    /// many were written. Returns 0 without touching `base` if the patch does not fit.
    pub fn apply(&self, base: &mut Grid, patch: &Grid) -> usize {
        let Some((start_row, start_col)) = self.origin_in(base, patch) else {
            debug!(
                "patch: {}x{} at ({}, {}) does not fit {}x{} grid",
                patch.height(),
                patch.width(),
                self.start_row,
                self.start_column,
                base.height(),
                base.width()
            );
            return 0;
        };

        let mut count = 0;
        for (i, patch_row) in patch.rows().enumerate() {
            let base_row = &mut base.row_mut(start_row + i)[start_col..start_col + patch_row.len()];
            for (dst, &src) in base_row.iter_mut().zip(patch_row) {
                if src == self.transparent {
                    continue;
                }
                *dst = src;
                count += 1;
            }
        }
        count
    }

    /// Like [`apply`](OpPatch::apply) but rejects a patch that does not fit.
    pub fn try_apply(&self, base: &mut Grid, patch: &Grid) -> Result<usize> {
        if !self.fits(base, patch) {
            return Err(Error::PatchOutOfBounds {
                start_row: self.start_row,
                start_column: self.start_column,
                patch_height: patch.height(),
                patch_width: patch.width(),
                height: base.height(),
                width: base.width(),
            });
        }
        Ok(self.apply(base, patch))
    }
}
