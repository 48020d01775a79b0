//! Single owner of the working grid.
//!
//! The editor holds exactly one grid at a time. Rotation and downsampling
//! replace it with a new grid; patching writes into it. The lenient methods
//! never fail on bad parameters, the `try_` variants do.

use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::op_downsample::OpDownSample;
use crate::op_patch::OpPatch;
use crate::op_rotate_90::OpRotate90;
use crate::store::{FileStore, ImageStore};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageEditor {
    grid: Grid,
}

impl ImageEditor {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Opens an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(&FileStore, path)
    }

    /// Opens an image through `store`.
    pub fn open_with<S: ImageStore + ?Sized>(store: &S, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(store.load(path.as_ref())?))
    }

    /// Replaces the working grid with an image file. On error the grid is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load_with(&FileStore, path)
    }

    pub fn load_with<S: ImageStore + ?Sized>(
        &mut self,
        store: &S,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        self.grid = store.load(path.as_ref())?;
        Ok(())
    }

    /// Saves the working grid as a PNG file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with(&FileStore, path)
    }

    pub fn save_with<S: ImageStore + ?Sized>(&self, store: &S, path: impl AsRef<Path>) -> Result<()> {
        store.save(&self.grid, path.as_ref())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Rotates clockwise by `degrees`. Zero, negative and non-multiples of 90 are ignored.
    pub fn rotate(&mut self, degrees: i32) {
        let op = OpRotate90::new(degrees);
        if op.quarter_turns().is_some() {
            self.grid = op.apply(&self.grid);
            debug!("rotated {degrees} degrees");
        }
    }

    pub fn try_rotate(&mut self, degrees: i32) -> Result<()> {
        self.grid = OpRotate90::new(degrees).try_apply(&self.grid)?;
        Ok(())
    }

    /// Block-averages the grid. Scales that do not fit are ignored.
    pub fn down_sample(&mut self, height_scale: i32, width_scale: i32) {
        let op = OpDownSample::new(height_scale, width_scale);
        if op.is_applicable(&self.grid) {
            self.grid = op.apply(&self.grid);
            debug!("down-sampled by {height_scale}x{width_scale}");
        }
    }

    pub fn try_down_sample(&mut self, height_scale: i32, width_scale: i32) -> Result<()> {
        self.grid = OpDownSample::new(height_scale, width_scale).try_apply(&self.grid)?;
        Ok(())
    }

    /// Overlays `patch` at `(start_row, start_column)`, skipping pixels equal to
    /// the transparent color. Returns the number of pixels written.
    pub fn patch(
        &mut self,
        start_row: i32,
        start_column: i32,
        patch: &Grid,
        transparent_red: u8,
        transparent_green: u8,
        transparent_blue: u8,
    ) -> usize {
        let mut op = OpPatch::new(start_row, start_column);
        op.set_transparent_color(transparent_red, transparent_green, transparent_blue);
        op.apply(&mut self.grid, patch)
    }

    pub fn try_patch(
        &mut self,
        start_row: i32,
        start_column: i32,
        patch: &Grid,
        transparent_red: u8,
        transparent_green: u8,
        transparent_blue: u8,
    ) -> Result<usize> {
        let mut op = OpPatch::new(start_row, start_column);
        op.set_transparent_color(transparent_red, transparent_green, transparent_blue);
        op.try_apply(&mut self.grid, patch)
    }

    /// Prints the working grid, one line per row.
    pub fn print_image<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.grid.print_to(out)
    }
}
