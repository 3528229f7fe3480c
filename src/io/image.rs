//! PNG loading, saving and in-memory encoding

use crate::io::error::{Result, ToolError, WithPath};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Load any supported image and convert it to 8-bit RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| ToolError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Save an image as PNG, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| ToolError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

/// Encode an image as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| ToolError::ImageExport {
            path: "<memory>".into(),
            source,
        })?;
    Ok(bytes)
}
