use std::io;
use std::path::PathBuf;

/// Errors produced by loading, saving and strict-mode transformations.
///
/// The lenient transformation entry points never return these; they leave the
/// grid untouched instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot save a {width}x{height} grid")]
    EmptyGrid { width: usize, height: usize },
    #[error("a {width}x{height} grid exceeds the largest encodable image")]
    GridTooLarge { width: usize, height: usize },
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("rotation of {degrees} degrees is not a positive multiple of 90")]
    InvalidRotation { degrees: i32 },
    #[error(
        "scale {height_scale}x{width_scale} does not evenly divide a grid of {height} rows and {width} columns"
    )]
    InvalidScale {
        height_scale: i32,
        width_scale: i32,
        height: usize,
        width: usize,
    },
    #[error(
        "patch of {patch_height}x{patch_width} at ({start_row}, {start_column}) does not fit a grid of {height} rows and {width} columns"
    )]
    PatchOutOfBounds {
        start_row: i32,
        start_column: i32,
        patch_height: usize,
        patch_width: usize,
        height: usize,
        width: usize,
    },
    #[error("invalid operation `{input}`: {reason}")]
    InvalidOperation { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
