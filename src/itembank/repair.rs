//! Row-by-row item bank repair pipeline

use crate::io::error::{Result, ToolError, WithPath};
use crate::io::progress::ProgressReporter;
use crate::itembank::record::{Field, ItemRecord, OUTPUT_COLUMNS, RawRow};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts gathered while repairing a bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairSummary {
    /// Data rows read
    pub rows_read: usize,
    /// Items written
    pub written: usize,
    /// Rows dropped for a blank ID
    pub blank_ids: usize,
    /// Rows dropped because their ID was already seen
    pub duplicate_ids: usize,
}

/// Repairs an item bank file into a new file
#[derive(Debug, Clone)]
pub struct RepairJob {
    input: PathBuf,
    output: PathBuf,
    show_progress: bool,
}

impl RepairJob {
    /// Create a job reading `input` and writing `output`
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            show_progress: false,
        }
    }

    /// Show a spinner while rows are read
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the repair
    ///
    /// The whole input is read before the output file is created, so a
    /// missing or malformed input never leaves a partial output behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input cannot be opened or is not valid CSV
    /// - The output cannot be created or written
    pub fn run(&self) -> Result<RepairSummary> {
        info!("Reading from {}...", self.input.display());
        let file = File::open(&self.input).with_path(&self.input, "open item bank")?;
        let progress = ProgressReporter::unbounded("rows", self.show_progress);
        let (records, mut summary) = read_items(file, &self.input, &progress)?;
        progress.finish();

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        let out = File::create(&self.output).with_path(&self.output, "create output")?;
        write_items(BufWriter::new(out), &records).with_path(&self.output, "write output")?;
        summary.written = records.len();

        info!("Success! Processed {} items.", summary.written);
        info!("Saved to: {}", self.output.display());
        Ok(summary)
    }
}

/// Repair CSV from `input` into `output` without touching the filesystem
///
/// # Errors
///
/// Returns an error if the input is not valid CSV or the output fails
pub fn repair<R: Read, W: Write>(input: R, output: W) -> Result<RepairSummary> {
    let progress = ProgressReporter::unbounded("rows", false);
    let (records, mut summary) = read_items(input, Path::new("<input>"), &progress)?;
    write_items(output, &records).with_path(Path::new("<output>"), "write output")?;
    summary.written = records.len();
    Ok(summary)
}

/// Read, deduplicate and repair every row
///
/// # Errors
///
/// Returns an error if the header or a row cannot be parsed
pub fn read_items<R: Read>(
    input: R,
    origin: &Path,
    progress: &ProgressReporter,
) -> Result<(Vec<ItemRecord>, RepairSummary)> {
    let csv_error = |source| ToolError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut summary = RepairSummary::default();
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result.map_err(csv_error)?;
        summary.rows_read += 1;
        progress.advance("");

        let raw = RawRow::from_cells(headers.iter(), row.iter());
        let id = raw.get("ID").trim();
        if id.is_empty() {
            summary.blank_ids += 1;
            continue;
        }
        if !seen.insert(id.to_string()) {
            debug!("Skipping duplicate ID {id}");
            summary.duplicate_ids += 1;
            continue;
        }

        records.push(ItemRecord::repair(id, &raw));
    }

    Ok((records, summary))
}

/// Write the header and records with CRLF terminators
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_items<W: Write>(mut output: W, records: &[ItemRecord]) -> std::io::Result<()> {
    let header = OUTPUT_COLUMNS.map(|name| Field::Text(name.to_string()));
    write_row(&mut output, &header)?;
    for record in records {
        write_row(&mut output, &record.fields())?;
    }
    output.flush()
}

fn write_row<W: Write>(output: &mut W, fields: &[Field]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    output.write_all(line.as_bytes())?;
    output.write_all(b"\r\n")
}
