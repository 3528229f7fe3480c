//! Curriculum diagrams rendered from JSON requests
//!
//! A request names one of a fixed set of diagram kinds and carries loosely
//! typed parameters. Each kind lays its marks out on a [`canvas::Figure`],
//! which is written as SVG and rasterised to PNG at 150 DPI.

/// Angle between two rays
pub mod angle;
/// SVG plotting surface
pub mod canvas;
/// Coordinate plane with points, lines and half-planes
pub mod coordinate_plane;
/// Title and label text
pub mod labels;
/// Number line with points and a one-variable inequality
pub mod number_line;
/// Vertex-form parabola
pub mod parabola;
/// Request parameters and their defaults
pub mod params;
/// SVG to PNG and base64
pub mod raster;
/// Right triangle
pub mod triangle;

use crate::io::error::{Result, ToolError};
use canvas::Figure;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The supported diagram kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    /// `y = a(x-h)^2 + k`
    Parabola,
    /// Right triangle with labelled sides
    Triangle,
    /// Number line
    NumberLine,
    /// Cartesian plane
    CoordinatePlane,
    /// Angle between two rays
    Angle,
}

impl DiagramKind {
    /// Every kind, in request-name order
    pub const ALL: [Self; 5] = [
        Self::Parabola,
        Self::Triangle,
        Self::NumberLine,
        Self::CoordinatePlane,
        Self::Angle,
    ];

    /// Name used in requests
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parabola => "parabola",
            Self::Triangle => "triangle",
            Self::NumberLine => "number_line",
            Self::CoordinatePlane => "coordinate_plane",
            Self::Angle => "angle",
        }
    }
}

impl FromStr for DiagramKind {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ToolError::UnknownDiagramType {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A diagram request as sent by callers
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagramRequest {
    /// Diagram kind name
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific parameters; absent or `null` means all defaults
    #[serde(default)]
    pub params: Value,
}

impl DiagramRequest {
    /// Parse a request from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or lacks a string `type`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the kind name
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownDiagramType`] for unsupported names
    pub fn diagram_kind(&self) -> Result<DiagramKind> {
        self.kind.parse()
    }

    /// Render and encode as base64 PNG
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is unknown or rendering fails
    pub fn generate(&self) -> Result<String> {
        generate_diagram(self.diagram_kind()?, &self.params)
    }
}

fn decode<T: DeserializeOwned + Default>(params: &Value) -> Result<T> {
    if params.is_null() {
        return Ok(T::default());
    }
    Ok(T::deserialize(params)?)
}

/// Lay out the figure for a kind and its parameters
///
/// # Errors
///
/// Returns an error if the parameters do not deserialize or fail validation
pub fn build_figure(kind: DiagramKind, params: &Value) -> Result<Figure> {
    debug!("Building {kind} diagram");
    match kind {
        DiagramKind::Parabola => parabola::build(&decode(params)?),
        DiagramKind::Triangle => triangle::build(&decode(params)?),
        DiagramKind::NumberLine => number_line::build(&decode(params)?),
        DiagramKind::CoordinatePlane => coordinate_plane::build(&decode(params)?),
        DiagramKind::Angle => angle::build(&decode(params)?),
    }
}

/// Render a diagram as an SVG document
///
/// # Errors
///
/// Returns an error if layout fails
pub fn render_svg(kind: DiagramKind, params: &Value) -> Result<String> {
    build_figure(kind, params)?.to_svg()
}

/// Render a diagram as PNG bytes at 150 DPI on white
///
/// # Errors
///
/// Returns an error if layout, rasterisation or encoding fails
pub fn render_png(kind: DiagramKind, params: &Value) -> Result<Vec<u8>> {
    raster::svg_to_png(&render_svg(kind, params)?)
}

/// Render a diagram and return the PNG as standard base64
///
/// # Errors
///
/// Returns an error if layout, rasterisation or encoding fails
pub fn generate_diagram(kind: DiagramKind, params: &Value) -> Result<String> {
    Ok(raster::to_base64(&render_png(kind, params)?))
}
