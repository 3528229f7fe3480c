//! Cell geometry for composite avatar sheets

use crate::io::configuration::{GRID_COLS, GRID_ROWS};
use crate::io::error::{Result, ToolError, WithPath, invalid_layout, invalid_parameter};
use crate::math::series::round_half_even;
use serde::Deserialize;
use std::path::Path;

/// Avatar names in reading order (left-to-right, top-to-bottom)
pub const AVATAR_NAMES: [&str; 20] = [
    "lion", "default", "eagle", "fox", //
    "dragon", "alien", "phoenix", "octopus", //
    "tiger", "panda", "owl", "unicorn", //
    "penguin", "wolf", "shark", "raccoon", //
    "robot", "ninja", "wizard", "dinosaur",
];

/// Row bands of the shipped sheet, measured from the background gaps between rows
///
/// Each pair is `(start, end)` in pixels; the gaps are 49, 28, 32 and 27 px with
/// a 30 px top margin and 181 px bottom margin.
pub const DEFAULT_ROW_BANDS: [(u32, u32); 5] = [
    (30, 240),
    (289, 519),
    (547, 788),
    (820, 1078),
    (1105, 1355),
];

/// Pixel rectangle of one sheet cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CellRect {
    /// Exclusive right edge
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// How a sheet is divided into cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetLayout {
    /// Integer division of the sheet; remainder pixels are dropped
    Uniform {
        /// Number of columns
        cols: u32,
        /// Number of rows
        rows: u32,
    },
    /// Explicit row bands with evenly divided columns
    Banded {
        /// Number of columns
        cols: u32,
        /// `(start, end)` pixel rows of each band
        bands: Vec<(u32, u32)>,
    },
    /// Fractional division with boundaries rounded half to even
    Rounded {
        /// Number of columns
        cols: u32,
        /// Number of rows
        rows: u32,
    },
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::Uniform {
            cols: GRID_COLS,
            rows: GRID_ROWS,
        }
    }
}

impl SheetLayout {
    /// The measured band table for the shipped sheet
    pub fn banded_default() -> Self {
        Self::Banded {
            cols: GRID_COLS,
            bands: DEFAULT_ROW_BANDS.to_vec(),
        }
    }

    /// Number of columns
    pub const fn cols(&self) -> u32 {
        match self {
            Self::Uniform { cols, .. } | Self::Banded { cols, .. } | Self::Rounded { cols, .. } => {
                *cols
            }
        }
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        match self {
            Self::Uniform { rows, .. } | Self::Rounded { rows, .. } => *rows,
            Self::Banded { bands, .. } => bands.len() as u32,
        }
    }

    /// Compute every cell of a `width` x `height` sheet in reading order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layout has zero columns or rows
    /// - A cell would be empty because the sheet is smaller than the grid
    /// - A row band is inverted or extends past the bottom of the sheet
    pub fn cells(&self, width: u32, height: u32) -> Result<Vec<CellRect>> {
        let cols = self.cols();
        let rows = self.rows();
        if cols == 0 {
            return Err(invalid_parameter("cols", &cols, &"must be at least 1"));
        }
        if rows == 0 {
            return Err(invalid_parameter("rows", &rows, &"must be at least 1"));
        }

        let col_spans = match self {
            Self::Uniform { .. } | Self::Banded { .. } => uniform_spans(width, cols),
            Self::Rounded { .. } => rounded_spans(width, cols),
        };
        let row_spans = match self {
            Self::Uniform { .. } => uniform_spans(height, rows),
            Self::Rounded { .. } => rounded_spans(height, rows),
            Self::Banded { bands, .. } => {
                validate_bands(bands, height)?;
                bands.clone()
            }
        };

        let mut cells = Vec::with_capacity(col_spans.len() * row_spans.len());
        for &(y0, y1) in &row_spans {
            for &(x0, x1) in &col_spans {
                if x1 <= x0 || y1 <= y0 {
                    return Err(invalid_layout(&format!(
                        "sheet {width}x{height} is too small for a {cols}x{rows} grid"
                    )));
                }
                cells.push(CellRect {
                    x: x0,
                    y: y0,
                    width: x1 - x0,
                    height: y1 - y0,
                });
            }
        }
        Ok(cells)
    }
}

/// `(start, end)` spans of `count` equal integer-width slices
pub fn uniform_spans(extent: u32, count: u32) -> Vec<(u32, u32)> {
    let size = extent / count.max(1);
    (0..count).map(|i| (i * size, (i + 1) * size)).collect()
}

/// `(start, end)` spans with boundaries at `round(i * extent / count)`
pub fn rounded_spans(extent: u32, count: u32) -> Vec<(u32, u32)> {
    let boundary = |i: u32| {
        round_half_even(f64::from(i) * f64::from(extent) / f64::from(count.max(1))) as u32
    };
    (0..count).map(|i| (boundary(i), boundary(i + 1))).collect()
}

fn validate_bands(bands: &[(u32, u32)], height: u32) -> Result<()> {
    for (index, &(start, end)) in bands.iter().enumerate() {
        if end <= start {
            return Err(invalid_layout(&format!(
                "row band {index} ends at {end}, before its start {start}"
            )));
        }
        if end > height {
            return Err(invalid_layout(&format!(
                "row band {index} ends at {end}, past the sheet height {height}"
            )));
        }
    }
    Ok(())
}

/// Layout overrides read from a TOML file
///
/// ```toml
/// cols = 4
/// names = ["lion", "default"]
/// bands = [[30, 240], [289, 519]]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    /// Column count override
    pub cols: Option<u32>,
    /// Row count override for uniform and rounded layouts
    pub rows: Option<u32>,
    /// Avatar names in reading order
    pub names: Option<Vec<String>>,
    /// Row bands; when present the layout becomes banded
    pub bands: Option<Vec<(u32, u32)>>,
}

impl LayoutFile {
    /// Read and parse a layout file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid layout TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path, "read layout")?;
        Self::parse(&content, path)
    }

    /// Parse layout TOML; `origin` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid layout TOML
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| ToolError::LayoutFile {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Apply the overrides on top of `base`
    pub fn apply(&self, base: SheetLayout) -> SheetLayout {
        let cols = self.cols.unwrap_or_else(|| base.cols());
        if let Some(bands) = &self.bands {
            return SheetLayout::Banded {
                cols,
                bands: bands.clone(),
            };
        }
        match base {
            SheetLayout::Uniform { rows, .. } => SheetLayout::Uniform {
                cols,
                rows: self.rows.unwrap_or(rows),
            },
            SheetLayout::Rounded { rows, .. } => SheetLayout::Rounded {
                cols,
                rows: self.rows.unwrap_or(rows),
            },
            SheetLayout::Banded { bands, .. } => SheetLayout::Banded { cols, bands },
        }
    }

    /// Names from the file, or the built-in avatar names
    pub fn names(&self) -> Vec<String> {
        self.names.clone().unwrap_or_else(default_names)
    }
}

/// The built-in avatar names as owned strings
pub fn default_names() -> Vec<String> {
    AVATAR_NAMES.iter().map(ToString::to_string).collect()
}
