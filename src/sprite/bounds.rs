//! Content boundary detection for recommending crop coordinates
//!
//! A pixel counts as content when any of its RGB channels is darker than the
//! background threshold. Alpha is ignored, so fully transparent black pixels
//! are content too.

use crate::io::error::{Result, invalid_layout};
use crate::io::image::load_rgba;
use crate::math::series::round_half_even;
use image::RgbaImage;
use ndarray::{Array3, ArrayView3, s};
use std::fmt;
use std::ops::Range;
use std::path::Path;

/// Sheet pixels as a `(height, width, 4)` array
#[derive(Debug, Clone)]
pub struct PixelGrid {
    pixels: Array3<u8>,
}

/// First and last content row and column inside a region, relative to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    /// First row containing content
    pub first_row: usize,
    /// Last row containing content
    pub last_row: usize,
    /// First column containing content
    pub first_col: usize,
    /// Last column containing content
    pub last_col: usize,
}

impl ContentBounds {
    /// Width of the content box
    pub const fn width(&self) -> usize {
        self.last_col - self.first_col + 1
    }

    /// Height of the content box
    pub const fn height(&self) -> usize {
        self.last_row - self.first_row + 1
    }
}

/// Vertical whitespace around the content of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalMargins {
    /// Height of the inspected cell
    pub cell_height: usize,
    /// Rows spanned by content; 0 when the cell is blank
    pub content_height: usize,
    /// Blank rows above the content
    pub top_margin: usize,
    /// Blank rows below the content
    pub bottom_margin: usize,
}

impl VerticalMargins {
    /// Derive margins from detected bounds; a blank cell reports zeros
    pub const fn from_bounds(cell_height: usize, bounds: Option<ContentBounds>) -> Self {
        match bounds {
            Some(b) => Self {
                cell_height,
                content_height: b.height(),
                top_margin: b.first_row,
                bottom_margin: cell_height - b.last_row - 1,
            },
            None => Self {
                cell_height,
                content_height: 0,
                top_margin: 0,
                bottom_margin: 0,
            },
        }
    }
}

impl PixelGrid {
    /// Copy an RGBA image into array form
    ///
    /// # Errors
    ///
    /// Returns an error if the image buffer does not match its dimensions
    pub fn from_image(img: &RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        let pixels = Array3::from_shape_vec(
            (height as usize, width as usize, 4),
            img.as_raw().clone(),
        )
        .map_err(|e| invalid_layout(&format!("pixel buffer does not match image size: {e}")))?;
        Ok(Self { pixels })
    }

    /// Load an image file
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_image(&load_rgba(path)?)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// RGB channels of one pixel
    pub fn rgb(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        let r = *self.pixels.get((row, col, 0))?;
        let g = *self.pixels.get((row, col, 1))?;
        let b = *self.pixels.get((row, col, 2))?;
        Some([r, g, b])
    }

    /// View of a rectangular region, clamped to the image
    pub fn region(&self, rows: Range<usize>, cols: Range<usize>) -> ArrayView3<'_, u8> {
        let clamp = |r: Range<usize>, max: usize| {
            let end = r.end.min(max);
            r.start.min(end)..end
        };
        let rows = clamp(rows, self.height());
        let cols = clamp(cols, self.width());
        self.pixels.slice(s![rows, cols, ..])
    }

    /// Detect content bounds inside a region
    pub fn content_bounds(
        &self,
        rows: Range<usize>,
        cols: Range<usize>,
        threshold: u8,
    ) -> Option<ContentBounds> {
        content_bounds(&self.region(rows, cols), threshold)
    }
}

fn is_content(pixel: impl IntoIterator<Item = u8>, threshold: u8) -> bool {
    pixel.into_iter().take(3).any(|c| c < threshold)
}

/// Content bounds of an array view, relative to the view's origin
pub fn content_bounds(view: &ArrayView3<'_, u8>, threshold: u8) -> Option<ContentBounds> {
    let (rows, cols, _) = view.dim();
    let mut row_hit = vec![false; rows];
    let mut col_hit = vec![false; cols];

    for (row, line) in view.outer_iter().enumerate() {
        for (col, pixel) in line.outer_iter().enumerate() {
            if is_content(pixel.iter().copied(), threshold) {
                if let Some(hit) = row_hit.get_mut(row) {
                    *hit = true;
                }
                if let Some(hit) = col_hit.get_mut(col) {
                    *hit = true;
                }
            }
        }
    }

    let first_row = row_hit.iter().position(|&h| h)?;
    let last_row = row_hit.iter().rposition(|&h| h)?;
    let first_col = col_hit.iter().position(|&h| h)?;
    let last_col = col_hit.iter().rposition(|&h| h)?;

    Some(ContentBounds {
        first_row,
        last_row,
        first_col,
        last_col,
    })
}

/// Bounds of the top-left cell using simple division
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstCellReport {
    /// Cell width (`W / cols`)
    pub cell_width: usize,
    /// Cell height (`H / rows`)
    pub cell_height: usize,
    /// Detected content, if any
    pub bounds: Option<ContentBounds>,
}

/// Inspect the top-left cell of a `cols` x `rows` grid
pub fn first_cell_report(
    grid: &PixelGrid,
    cols: usize,
    rows: usize,
    threshold: u8,
) -> FirstCellReport {
    let cell_width = grid.width() / cols.max(1);
    let cell_height = grid.height() / rows.max(1);
    FirstCellReport {
        cell_width,
        cell_height,
        bounds: grid.content_bounds(0..cell_height, 0..cell_width, threshold),
    }
}

/// Rounded `(start, end)` of grid row `row` out of `rows`
pub fn rounded_row_span(height: usize, row: usize, rows: usize) -> (usize, usize) {
    let rows = rows.max(1) as f64;
    let at = |r: usize| round_half_even(r as f64 * height as f64 / rows) as usize;
    (at(row), at(row + 1))
}

/// Vertical margins of the first-column cell in grid row `row`
pub fn cell_margins(
    grid: &PixelGrid,
    row: usize,
    rows: usize,
    cols: usize,
    threshold: u8,
) -> VerticalMargins {
    let (start, end) = rounded_row_span(grid.height(), row, rows);
    let cell_width = grid.width() / cols.max(1);
    let bounds = grid.content_bounds(start..end, 0..cell_width, threshold);
    VerticalMargins::from_bounds(end.saturating_sub(start), bounds)
}

/// Margins of the middle row's first cell (the third row on a five-row sheet)
pub fn middle_cell_report(
    grid: &PixelGrid,
    cols: usize,
    rows: usize,
    threshold: u8,
) -> VerticalMargins {
    cell_margins(grid, rows / 2, rows, cols, threshold)
}

/// Margins of the first-column cell of every row
pub fn row_margins(
    grid: &PixelGrid,
    cols: usize,
    rows: usize,
    threshold: u8,
) -> Vec<VerticalMargins> {
    (0..rows)
        .map(|row| cell_margins(grid, row, rows, cols, threshold))
        .collect()
}

impl fmt::Display for FirstCellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Analyzing first cell ({}x{})...",
            self.cell_width, self.cell_height
        )?;
        match self.bounds {
            Some(b) => {
                writeln!(f, "First content row at y={}", b.first_row)?;
                writeln!(f, "Last content row at y={}", b.last_row)?;
                writeln!(f, "Content height: {} pixels", b.last_row + 1)?;
                writeln!(f, "First content column at x={}", b.first_col)?;
                writeln!(f, "Last content column at x={}", b.last_col)?;
                write!(f, "Content width: {} pixels", b.last_col + 1)
            }
            None => write!(f, "No content found in first cell"),
        }
    }
}

impl fmt::Display for VerticalMargins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell={}px, content={}px, top_margin={}px, bottom_margin={}px",
            self.cell_height, self.content_height, self.top_margin, self.bottom_margin
        )
    }
}
