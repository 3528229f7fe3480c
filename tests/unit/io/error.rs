//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mathmatix_tools::ToolError;
    use mathmatix_tools::io::error::{WithPath, invalid_layout, invalid_parameter, render_error};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ToolError::FileSystem {
            path: "/tmp/item-bank.csv".into(),
            operation: "open item bank",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("open item bank"));
        assert!(message.contains("/tmp/item-bank.csv"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("xRange", &-4, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("xRange"));
        assert!(message.contains("-4"));
        assert!(message.contains("must be positive"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = ToolError::ImageExport {
            path: PathBuf::from("/restricted/lion.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/lion.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests with_path attaches the path and operation
    // Verified by dropping the operation in the mapping
    #[test]
    fn test_with_path_maps_io_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        let error = result
            .with_path(Path::new("data/bank.csv"), "read bank")
            .unwrap_err();

        match error {
            ToolError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, PathBuf::from("data/bank.csv"));
                assert_eq!(operation, "read bank");
            }
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests JSON errors convert into request errors
    // Verified by mapping to a different variant
    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ToolError::from(json_error);

        assert!(matches!(error, ToolError::Request { .. }));
        assert!(error.to_string().starts_with("Invalid diagram request"));
    }

    // Tests the helper constructors format their reasons
    // Verified by swapping operation and reason
    #[test]
    fn test_helper_constructors() {
        let layout = invalid_layout(&"band 2 is inverted");
        assert_eq!(layout.to_string(), "Invalid sheet layout: band 2 is inverted");

        let render = render_error("parse svg", &"unexpected end");
        assert_eq!(render.to_string(), "Render error in parse svg: unexpected end");

        let unknown = ToolError::UnknownDiagramType {
            name: "hexagon".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown diagram type: hexagon");
    }
}
