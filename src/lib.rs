//! Maintenance tools for the MathMatix tutor's assets and content
//!
//! The crate bundles three independent tool families behind one binary:
//! composite avatar sheet slicing and diagnostics, repair of spreadsheet-damaged
//! item bank CSV files, and rendering of curriculum diagrams to PNG.

#![deny(unsafe_code)]

/// Curriculum diagrams rendered from JSON requests
pub mod diagram;
/// Input/output operations, configuration and error handling
pub mod io;
/// Item bank repair and difficulty scoring
pub mod itembank;
/// Numeric helpers for sampling and axis layout
pub mod math;
/// Avatar sheet slicing and content diagnostics
pub mod sprite;

pub use io::error::{Result, ToolError};
