//! Clockwise rotation in 90-degree increments.
//!
//! A single clockwise quarter turn maps an `R×C` source onto a `C×R`
//! destination with `dst[j][R-1-i] = src[i][j]`. Repeated turns are folded
//! modulo 4 and performed as one coordinate remapping, which gives the same
//! grid as applying the quarter turn repeatedly.

use log::debug;

use crate::error::{Error, Result};
use crate::grid::Grid;

const QUARTER_TURN_DEGREES: i32 = 90;

/// Net clockwise rotation after folding whole turns modulo 4.
///
/// ```text
/// Up            Right (90)    Down (180)    Left (270)
/// ┌───────┐     ┌───────┐     ┌───────┐     ┌───────┐
/// │ 1   2 │     │ 3   1 │     │ 4   3 │     │ 2   4 │
/// │       │     │       │     │       │     │       │
/// │ 3   4 │     │ 4   2 │     │ 2   1 │     │ 1   3 │
/// └───────┘     └───────┘     └───────┘     └───────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation90 {
    Up,
    Right,
    Down,
    Left,
}

impl Rotation90 {
    /// Folds a number of clockwise quarter turns.
    pub fn from_quarter_turns(turns: u32) -> Self {
        match turns % 4 {
            0 => Rotation90::Up,
            1 => Rotation90::Right,
            2 => Rotation90::Down,
            _ => Rotation90::Left,
        }
    }

    fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation90::Right | Rotation90::Left)
    }
}

/// Clockwise rotation operator for multiples of 90 degrees.
///
/// Degrees that are zero, negative, or not a multiple of 90 leave the grid
/// unchanged. [`try_apply`] reports those cases as [`Error::InvalidRotation`]
/// instead.
///
/// [`try_apply`]: OpRotate90::try_apply
#[derive(Copy, Clone, Debug, Default)]
pub struct OpRotate90 {
    degrees: i32,
}

impl OpRotate90 {
    pub fn new(degrees: i32) -> Self {
        Self { degrees }
    }

    pub fn set_degrees(&mut self, degrees: i32) -> &mut Self {
        self.degrees = degrees;
        self
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    /// Number of clockwise quarter turns, or `None` when the rotation is a no-op.
    pub fn quarter_turns(&self) -> Option<u32> {
        if self.degrees == 0 || self.degrees % QUARTER_TURN_DEGREES != 0 {
            return None;
        }
        // Negative multiples never enter the turn loop.
        u32::try_from(self.degrees / QUARTER_TURN_DEGREES).ok()
    }

    /// Net rotation after folding, or `None` when the rotation is a no-op.
    pub fn rotation(&self) -> Option<Rotation90> {
        self.quarter_turns().map(Rotation90::from_quarter_turns)
    }

    /// Returns the output `(width, height)` for `src`.
    pub fn compute_output_dimensions(&self, src: &Grid) -> (usize, usize) {
        match self.rotation() {
            Some(rotation) if rotation.swaps_dimensions() => (src.height(), src.width()),
            _ => (src.width(), src.height()),
        }
    }

    /// Returns the rotated grid. A no-op rotation returns a copy of `original`.
    pub fn apply(&self, original: &Grid) -> Grid {
        let Some(rotation) = self.rotation() else {
            debug!("rotate: skipping {} degrees", self.degrees);
            return original.clone();
        };
        if rotation == Rotation90::Up {
            return original.clone();
        }

        let (out_w, out_h) = self.compute_output_dimensions(original);
        let mut result = Grid::new(out_w, out_h);
        remap(original, &mut result, rotation);
        result
    }

    /// Like [`apply`](OpRotate90::apply) but rejects no-op degrees.
    pub fn try_apply(&self, original: &Grid) -> Result<Grid> {
        if self.quarter_turns().is_none() {
            return Err(Error::InvalidRotation {
                degrees: self.degrees,
            });
        }
        Ok(self.apply(original))
    }

    /// Writes the rotation into `dst`, which must already have the output dimensions.
    /// `dst` is left untouched when the rotation is a no-op or the sizes disagree.
    pub fn apply_to_preallocated(&self, original: &Grid, dst: &mut Grid) {
        let (out_w, out_h) = self.compute_output_dimensions(original);
        if dst.width() != out_w || dst.height() != out_h {
            return;
        }
        match self.rotation() {
            None => {}
            Some(Rotation90::Up) => dst.clone_from(original),
            Some(rotation) => remap(original, dst, rotation),
        }
    }
}

fn remap(original: &Grid, dst: &mut Grid, rotation: Rotation90) {
    let max_col = dst.width().saturating_sub(1);
    let max_row = dst.height().saturating_sub(1);

    for row in 0..dst.height() {
        for col in 0..dst.width() {
            let (orig_row, orig_col) = get_original_coordinates(row, col, max_row, max_col, rotation);
            *dst.pixel_mut(row, col) = original.pixel(orig_row, orig_col);
        }
    }
}

/// Maps a destination `(row, col)` back to its source `(row, col)`.
fn get_original_coordinates(
    row: usize,
    col: usize,
    max_row: usize,
    max_col: usize,
    rotation: Rotation90,
) -> (usize, usize) {
    match rotation {
        Rotation90::Up => (row, col),
        Rotation90::Right => (max_col - col, row),
        Rotation90::Down => (max_row - row, max_col - col),
        Rotation90::Left => (col, max_row - row),
    }
}
