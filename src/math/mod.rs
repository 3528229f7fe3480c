//! Mathematical utilities shared by the tools

/// Clipping of lines to a rectangular window
pub mod clip;
/// Sampling, ranges and rounding helpers
pub mod series;
