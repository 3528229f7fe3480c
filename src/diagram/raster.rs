//! SVG rasterisation and PNG/base64 encoding

use crate::io::error::{Result, render_error};
use crate::io::image::encode_png;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::RgbaImage;
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{Options, Tree, fontdb};
use std::sync::{Arc, LazyLock};
use tracing::debug;

// System fonts are scanned once per process
static FONTS: LazyLock<Arc<fontdb::Database>> = LazyLock::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    debug!("Loaded {} font faces", db.len());
    Arc::new(db)
});

/// Rasterise an SVG document onto a white canvas, one pixel per user unit
///
/// Figures are laid out in output pixels, so no scaling happens here.
///
/// # Errors
///
/// Returns an error if the SVG cannot be parsed or has an empty size
pub fn rasterize(svg: &str) -> Result<RgbaImage> {
    let options = Options {
        fontdb: Arc::clone(&FONTS),
        ..Options::default()
    };
    let tree = Tree::from_str(svg, &options).map_err(|e| render_error("parse svg", &e))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        render_error("allocate canvas", &format!("{width}x{height} is not drawable"))
    })?;
    pixmap.fill(Color::WHITE);
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    // Opaque background, so premultiplied and straight alpha coincide
    RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| render_error("convert canvas", &"pixel buffer size mismatch"))
}

/// Rasterise and encode as PNG bytes
///
/// # Errors
///
/// Returns an error if rasterisation or encoding fails
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    encode_png(&rasterize(svg)?)
}

/// Standard base64 of PNG bytes, without line breaks
pub fn to_base64(png: &[u8]) -> String {
    STANDARD.encode(png)
}
