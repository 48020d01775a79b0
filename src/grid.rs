//! Rectangular pixel grid with row-major storage.
//!
//! # Memory Layout
//!
//! Pixels are stored in a flat `Pixel` buffer in row-major order:
//!
//! ```text
//! data[row * width + column]
//! ```
//!
//! Every row has the same length, so the grid is rectangular by construction.

use std::fmt;
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// A 2D grid of RGB pixels indexed `[row][column]`.
///
/// Width and height are tracked separately from the buffer so a grid may have
/// zero rows or zero columns. Rotation swaps them, which can produce a grid
/// such as 0 rows by 3 columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl Grid {
    /// Creates an empty grid with no dimensions.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Creates a black grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Creates a grid where every pixel is `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            data: vec![pixel; width.saturating_mul(height)],
        }
    }

    /// Builds a grid from nested rows. Rejects rows of unequal length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[Pixel]>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for (row, pixels) in rows.iter().enumerate() {
            let pixels = pixels.as_ref();
            if pixels.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    actual: pixels.len(),
                });
            }
            data.extend_from_slice(pixels);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a grid from rows of `0x00RRGGBB` packed integers.
    pub fn from_packed_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[u32]>,
    {
        let rows: Vec<Vec<Pixel>> = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|&p| Pixel::from_packed(p)).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Returns the grid as rows of `0x00RRGGBB` packed integers.
    pub fn to_packed_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(Pixel::to_packed).collect())
            .collect()
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the grid holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the pixels of `row`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Returns mutable pixels of `row`.
    pub fn row_mut(&mut self, row: usize) -> &mut [Pixel] {
        let start = row * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }

    /// Iterates over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |row| self.row(row))
    }

    /// Returns the pixel at `[row][column]`.
    pub fn pixel(&self, row: usize, column: usize) -> Pixel {
        self.data[row * self.width + column]
    }

    /// Returns a mutable reference to the pixel at `[row][column]`.
    pub fn pixel_mut(&mut self, row: usize, column: usize) -> &mut Pixel {
        &mut self.data[row * self.width + column]
    }

    /// Returns all pixels in row-major order.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// Fills all pixels with `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.data.fill(pixel);
    }

    /// Writes the grid as text, one line per row, each pixel as `(RRR, GGG, BBB) `.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for pixel in row {
                write!(f, "({:3}, {:3}, {:3}) ", pixel.r(), pixel.g(), pixel.b())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
