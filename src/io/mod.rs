//! Command line, configuration, errors and file formats

/// Command-line interface and subcommand dispatch
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error type and path context
pub mod error;
/// PNG loading, saving and in-memory encoding
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars and spinners
pub mod progress;
