//! Error types and path context for tool operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for all tool operations
#[derive(Debug, Error)]
pub enum ToolError {
    /// Failed to load an image from the filesystem
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        #[source]
        source: image::ImageError,
    },

    /// Failed to save or encode an image
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing failed
    #[error("CSV error in '{}': {source}", .path.display())]
    Csv {
        /// File being read or written
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// A diagram request was not valid JSON or had the wrong shape
    #[error("Invalid diagram request: {source}")]
    Request {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A layout file could not be parsed
    #[error("Invalid layout file '{}': {source}", .path.display())]
    LayoutFile {
        /// Path to the layout file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Sheet layout does not fit the image
    #[error("Invalid sheet layout: {reason}")]
    InvalidLayout {
        /// Description of the mismatch
        reason: String,
    },

    /// Diagram type string is not one of the supported kinds
    #[error("Unknown diagram type: {name}")]
    UnknownDiagramType {
        /// The rejected type string
        name: String,
    },

    /// Rasterisation of a diagram scene failed
    #[error("Render error in {operation}: {reason}")]
    Render {
        /// Rendering stage that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

/// Convenience type alias for tool results
pub type Result<T> = std::result::Result<T, ToolError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`ToolError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| ToolError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(source: serde_json::Error) -> Self {
        Self::Request { source }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ToolError {
    ToolError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid layout error
pub fn invalid_layout(reason: &impl ToString) -> ToolError {
    ToolError::InvalidLayout {
        reason: reason.to_string(),
    }
}

/// Create a render error
pub fn render_error(operation: &'static str, reason: &impl ToString) -> ToolError {
    ToolError::Render {
        operation,
        reason: reason.to_string(),
    }
}
