//! Rotate, downsample and patch RGB pixel grids.
//!
//! # Operators
//!
//! - [`OpRotate90`]: clockwise rotation by multiples of 90°, done as a single
//!   coordinate remapping.
//! - [`OpDownSample`]: per-channel block mean with independent row and column
//!   factors.
//! - [`OpPatch`]: overlays one grid onto another, skipping a transparent key color.
//!
//! Invalid parameters (a 45° turn, a scale that does not divide the grid, a
//! patch that does not fit) leave the grid unchanged. Each operator also has a
//! `try_apply` that reports them as [`Error`]s.
//!
//! [`ImageEditor`] owns one working grid and threads it through the operators,
//! loading and saving through an [`ImageStore`].
//!
//! # Example
//!
//! ```
//! use rusty_grid::{Grid, ImageEditor, Pixel};
//!
//! let red = Pixel::new(255, 0, 0);
//! let blue = Pixel::new(0, 0, 255);
//!
//! let mut editor = ImageEditor::new(Grid::filled(4, 4, red));
//! editor.down_sample(2, 2);
//! editor.rotate(90);
//! let written = editor.patch(0, 0, &Grid::filled(2, 2, blue), 0, 0, 0);
//!
//! assert_eq!(written, 4);
//! assert_eq!(editor.grid(), &Grid::filled(2, 2, blue));
//! ```

#[doc(hidden)]
pub mod bench_utils;
mod editor;
mod error;
mod grid;
mod op_downsample;
mod op_patch;
mod op_rotate_90;
mod operation;
mod pixel;
mod store;

pub use crate::editor::ImageEditor;
pub use crate::error::{Error, Result};
pub use crate::grid::Grid;
pub use crate::op_downsample::OpDownSample;
pub use crate::op_patch::OpPatch;
pub use crate::op_rotate_90::{OpRotate90, Rotation90};
pub use crate::operation::Operation;
pub use crate::pixel::{Pixel, pack, unpack_blue, unpack_green, unpack_red};
pub use crate::store::{FileStore, ImageStore, is_supported_color, open, save};
