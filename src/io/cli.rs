//! Command-line interface for the sheet, item bank and diagram tools

use crate::diagram::DiagramRequest;
use crate::diagram::raster::to_base64;
use crate::io::configuration::{
    BACKGROUND_THRESHOLD, DEFAULT_AVATAR_DIR, DEFAULT_BANDED_SHEET_PATH,
    DEFAULT_ITEM_BANK_INPUT, DEFAULT_ITEM_BANK_OUTPUT, DEFAULT_SHEET_PATH, GRID_COLS, GRID_ROWS,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::itembank::RepairJob;
use crate::sprite::bounds::{PixelGrid, first_cell_report, middle_cell_report, row_margins};
use crate::sprite::layout::{LayoutFile, SheetLayout, default_names};
use crate::sprite::slicer::SheetSlicer;
use crate::sprite::survey::GridSurvey;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mathmatix-tools")]
#[command(
    author,
    version,
    about = "Asset and content maintenance tools for the MathMatix tutor"
)]
/// Command-line arguments shared by every tool
pub struct Cli {
    /// Only log warnings and errors, and hide progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Tool to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// The available tools
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a composite avatar sheet into one PNG per avatar
    Split(SplitArgs),
    /// Report the content bounds of the top-left cell
    Bounds(GridArgs),
    /// Report vertical margins of the middle cell and of every row
    Margins(GridArgs),
    /// Sample grid boundaries and recommend a rounded split
    Survey(GridArgs),
    /// Repair a spreadsheet-damaged item bank CSV
    FixItems(FixItemsArgs),
    /// Render a diagram request and print it as base64 PNG
    Diagram(DiagramArgs),
}

/// How sheet cells are derived
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Equal cells by integer division
    #[default]
    Uniform,
    /// Measured row bands with equal columns
    Banded,
    /// Equal cells with rounded boundaries
    Rounded,
}

/// Arguments of `split`
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Composite sheet; defaults to the usual path for the chosen layout
    #[arg(value_name = "SHEET")]
    pub sheet: Option<PathBuf>,

    /// Directory the avatars are written to
    #[arg(short, long, default_value = DEFAULT_AVATAR_DIR)]
    pub out: PathBuf,

    /// Cell layout
    #[arg(short, long, value_enum, default_value_t = LayoutMode::Uniform)]
    pub layout: LayoutMode,

    /// TOML file overriding names, columns or row bands
    #[arg(long, value_name = "FILE")]
    pub layout_file: Option<PathBuf>,

    /// Number of columns
    #[arg(long, default_value_t = GRID_COLS)]
    pub cols: u32,

    /// Number of rows (ignored by the banded layout)
    #[arg(long, default_value_t = GRID_ROWS)]
    pub rows: u32,
}

impl SplitArgs {
    /// Sheet path, falling back to the default for the layout
    pub fn sheet_path(&self) -> PathBuf {
        self.sheet.clone().unwrap_or_else(|| match self.layout {
            LayoutMode::Banded => PathBuf::from(DEFAULT_BANDED_SHEET_PATH),
            LayoutMode::Uniform | LayoutMode::Rounded => PathBuf::from(DEFAULT_SHEET_PATH),
        })
    }

    /// Resolve the layout and names, applying the layout file if given
    ///
    /// # Errors
    ///
    /// Returns an error if the layout file cannot be read or parsed
    pub fn resolve(&self) -> Result<(SheetLayout, Vec<String>)> {
        let base = match self.layout {
            LayoutMode::Uniform => SheetLayout::Uniform {
                cols: self.cols,
                rows: self.rows,
            },
            LayoutMode::Rounded => SheetLayout::Rounded {
                cols: self.cols,
                rows: self.rows,
            },
            LayoutMode::Banded => match SheetLayout::banded_default() {
                SheetLayout::Banded { bands, .. } => SheetLayout::Banded {
                    cols: self.cols,
                    bands,
                },
                other => other,
            },
        };

        match &self.layout_file {
            Some(path) => {
                let file = LayoutFile::load(path)?;
                Ok((file.apply(base), file.names()))
            }
            None => Ok((base, default_names())),
        }
    }
}

/// Arguments shared by the sheet diagnostics
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Composite sheet to inspect
    #[arg(value_name = "SHEET", default_value = DEFAULT_SHEET_PATH)]
    pub sheet: PathBuf,

    /// Number of columns
    #[arg(long, default_value_t = GRID_COLS as usize)]
    pub cols: usize,

    /// Number of rows
    #[arg(long, default_value_t = GRID_ROWS as usize)]
    pub rows: usize,

    /// Channel value below which a pixel counts as content
    #[arg(short, long, default_value_t = BACKGROUND_THRESHOLD)]
    pub threshold: u8,
}

/// Arguments of `fix-items`
#[derive(Args, Debug)]
pub struct FixItemsArgs {
    /// Damaged item bank
    #[arg(value_name = "INPUT", default_value = DEFAULT_ITEM_BANK_INPUT)]
    pub input: PathBuf,

    /// Repaired item bank
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_ITEM_BANK_OUTPUT)]
    pub output: PathBuf,
}

/// Arguments of `diagram`
#[derive(Args, Debug)]
pub struct DiagramArgs {
    /// Request JSON, e.g. '{"type":"parabola","params":{"a":2}}'
    #[arg(value_name = "JSON", conflicts_with = "input")]
    pub request: Option<String>,

    /// Read the request JSON from a file instead
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Also write the PNG to this file
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,
}

impl DiagramArgs {
    /// Request text from the argument or the input file
    ///
    /// # Errors
    ///
    /// Returns an error if neither source is given or the file cannot be read
    pub fn request_text(&self) -> Result<String> {
        match (&self.request, &self.input) {
            (Some(json), _) => Ok(json.clone()),
            (None, Some(path)) => std::fs::read_to_string(path).with_path(path, "read request"),
            (None, None) => Err(invalid_parameter(
                "request",
                &"",
                &"pass the request JSON or --input <FILE>",
            )),
        }
    }
}

/// Runs the selected tool
pub struct ToolRunner {
    cli: Cli,
}

impl ToolRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected tool
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the tool
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Split(args) => self.split(args),
            Command::Bounds(args) => Self::bounds(args),
            Command::Margins(args) => Self::margins(args),
            Command::Survey(args) => Self::survey(args),
            Command::FixItems(args) => self.fix_items(args),
            Command::Diagram(args) => Self::diagram(args),
        }
    }

    fn split(&self, args: &SplitArgs) -> Result<()> {
        let (layout, names) = args.resolve()?;
        let report = SheetSlicer::new(layout, names)
            .with_progress(self.cli.should_show_progress())
            .export(&args.sheet_path(), &args.out)?;
        info!("Wrote {} avatars", report.count());
        Ok(())
    }

    // Reports are the tool's output, so they go to stdout
    #[allow(clippy::print_stdout)]
    fn bounds(args: &GridArgs) -> Result<()> {
        let grid = PixelGrid::open(&args.sheet)?;
        println!("Image size: {}x{}", grid.width(), grid.height());
        println!(
            "{}",
            first_cell_report(&grid, args.cols, args.rows, args.threshold)
        );
        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn margins(args: &GridArgs) -> Result<()> {
        let grid = PixelGrid::open(&args.sheet)?;
        println!("Image size: {}x{}", grid.width(), grid.height());
        println!(
            "Middle cell (row {}): {}",
            args.rows / 2 + 1,
            middle_cell_report(&grid, args.cols, args.rows, args.threshold)
        );
        for (row, margins) in row_margins(&grid, args.cols, args.rows, args.threshold)
            .iter()
            .enumerate()
        {
            println!("Row {}: {margins}", row + 1);
        }
        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn survey(args: &GridArgs) -> Result<()> {
        let grid = PixelGrid::open(&args.sheet)?;
        println!("{}", GridSurvey::run(&grid, args.cols, args.rows));
        Ok(())
    }

    fn fix_items(&self, args: &FixItemsArgs) -> Result<()> {
        let summary = RepairJob::new(&args.input, &args.output)
            .with_progress(self.cli.should_show_progress())
            .run()?;
        info!(
            "Skipped {} blank and {} duplicate IDs",
            summary.blank_ids, summary.duplicate_ids
        );
        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn diagram(args: &DiagramArgs) -> Result<()> {
        let request = DiagramRequest::from_json(&args.request_text()?)?;
        let kind = request.diagram_kind()?;
        let png = crate::diagram::render_png(kind, &request.params)?;
        if let Some(path) = &args.output {
            std::fs::write(path, &png).with_path(path, "write diagram")?;
            info!("Saved {kind} diagram to {}", path.display());
        }
        println!("{}", to_base64(&png));
        Ok(())
    }
}
