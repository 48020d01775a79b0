//! Loading and saving grids as image files.
//!
//! - `ImageStore`: the load/save seam the editor talks to.
//! - `FileStore`: decodes any format the `image` crate recognizes (sniffed from
//!   content) and always encodes RGB PNG.
//!
//! Grid cell `[row][col]` is the image pixel at `x = col`, `y = row`.

use std::path::Path;

use image::{ColorType, ImageFormat, ImageReader, Rgb, RgbImage};
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::pixel::Pixel;

/// Source of grids and sink for edited grids.
pub trait ImageStore {
    fn load(&self, path: &Path) -> Result<Grid>;
    fn save(&self, grid: &Grid, path: &Path) -> Result<()>;
}

/// [`ImageStore`] backed by image files on disk.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileStore;

impl ImageStore for FileStore {
    fn load(&self, path: &Path) -> Result<Grid> {
        open(path)
    }

    fn save(&self, grid: &Grid, path: &Path) -> Result<()> {
        save(grid, path)
    }
}

/// Decodes an image file into a grid, discarding alpha.
///
/// Sources that are not 8-bit RGB or RGBA are converted with a warning.
pub fn open(path: &Path) -> Result<Grid> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let decoded = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let color = decoded.color();
    if !is_supported_color(color) {
        warn!(
            "{}: {color:?} images are not supported directly; converting to RGB",
            path.display()
        );
    }

    let rgb = decoded.into_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    let mut grid = Grid::new(width, height);
    for (x, y, &Rgb(channels)) in rgb.enumerate_pixels() {
        *grid.pixel_mut(y as usize, x as usize) = Pixel::from(channels);
    }
    debug!("loaded {}: {width}x{height}", path.display());
    Ok(grid)
}

/// Returns true for the color types that load without conversion.
pub fn is_supported_color(color: ColorType) -> bool {
    matches!(color, ColorType::Rgb8 | ColorType::Rgba8)
}

/// Encodes a grid as an RGB PNG, regardless of the file extension.
pub fn save(grid: &Grid, path: &Path) -> Result<()> {
    let (Ok(width), Ok(height)) = (u32::try_from(grid.width()), u32::try_from(grid.height()))
    else {
        return Err(Error::GridTooLarge {
            width: grid.width(),
            height: grid.height(),
        });
    };
    if grid.is_empty() {
        return Err(Error::EmptyGrid {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb(grid.pixel(y as usize, x as usize).channels())
    });
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        "saved {}: {}x{}",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(())
}
