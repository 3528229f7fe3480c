//! Crops a composite sheet into individually named avatar files

use crate::io::error::{Result, WithPath};
use crate::io::image::{load_rgba, save_png};
use crate::io::progress::ProgressReporter;
use crate::sprite::layout::{CellRect, SheetLayout, default_names};
use image::RgbaImage;
use image::imageops;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One cropped cell together with its output name
#[derive(Debug, Clone)]
pub struct Tile {
    /// File stem the tile is saved under
    pub name: String,
    /// Source rectangle on the sheet
    pub cell: CellRect,
    /// Cropped pixels
    pub image: RgbaImage,
}

/// A tile written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedTile {
    /// Output file path
    pub path: PathBuf,
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
}

/// Outcome of a slicing run
#[derive(Debug, Clone, Default)]
pub struct SliceReport {
    /// Sheet width in pixels
    pub sheet_width: u32,
    /// Sheet height in pixels
    pub sheet_height: u32,
    /// Files written, in reading order
    pub saved: Vec<SavedTile>,
}

impl SliceReport {
    /// Number of avatars written
    pub fn count(&self) -> usize {
        self.saved.len()
    }
}

/// Splits a sheet into tiles using a layout and a list of names
pub struct SheetSlicer {
    layout: SheetLayout,
    names: Vec<String>,
    show_progress: bool,
}

impl Default for SheetSlicer {
    fn default() -> Self {
        Self::new(SheetLayout::default(), default_names())
    }
}

impl SheetSlicer {
    /// Create a slicer; cell `i` is saved as `names[i]`
    pub const fn new(layout: SheetLayout, names: Vec<String>) -> Self {
        Self {
            layout,
            names,
            show_progress: false,
        }
    }

    /// Show a progress bar while writing tiles
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The layout in use
    pub const fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Crop the sheet into named tiles
    ///
    /// Cells beyond the last name are skipped, as are names beyond the last cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout does not fit the sheet
    pub fn slice(&self, sheet: &RgbaImage) -> Result<Vec<Tile>> {
        let cells = self.layout.cells(sheet.width(), sheet.height())?;
        let tiles = cells
            .into_iter()
            .zip(&self.names)
            .map(|(cell, name)| Tile {
                name: name.clone(),
                cell,
                image: imageops::crop_imm(sheet, cell.x, cell.y, cell.width, cell.height)
                    .to_image(),
            })
            .collect();
        Ok(tiles)
    }

    /// Load `sheet_path`, slice it and write every tile to `out_dir/<name>.png`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sheet cannot be loaded
    /// - The layout does not fit the sheet
    /// - The output directory or a tile file cannot be written
    pub fn export(&self, sheet_path: &Path, out_dir: &Path) -> Result<SliceReport> {
        info!("Loading image: {}", sheet_path.display());
        let sheet = load_rgba(sheet_path)?;
        let (sheet_width, sheet_height) = sheet.dimensions();
        info!("Image size: {sheet_width}x{sheet_height}");
        debug!(
            "Grid: {} cols x {} rows",
            self.layout.cols(),
            self.layout.rows()
        );

        std::fs::create_dir_all(out_dir).with_path(out_dir, "create directory")?;

        let tiles = self.slice(&sheet)?;
        let progress = ProgressReporter::new("avatars", tiles.len(), self.show_progress);
        let mut saved = Vec::with_capacity(tiles.len());

        for tile in &tiles {
            let path = out_dir.join(format!("{}.png", tile.name));
            save_png(&tile.image, &path)?;
            info!(
                "Saved: {}.png ({}x{}px)",
                tile.name, tile.cell.width, tile.cell.height
            );
            progress.advance(&tile.name);
            saved.push(SavedTile {
                path,
                width: tile.cell.width,
                height: tile.cell.height,
            });
        }
        progress.finish();

        info!(
            "Successfully split {} avatars into {}/",
            saved.len(),
            out_dir.display()
        );

        Ok(SliceReport {
            sheet_width,
            sheet_height,
            saved,
        })
    }
}
