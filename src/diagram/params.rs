//! Typed diagram parameters with the defaults of each diagram kind
//!
//! Requests arrive as loosely typed JSON: numbers may be sent as strings and
//! any field may be omitted. Every struct here deserializes with its
//! defaults filled in, and unknown keys are ignored.

use crate::io::error::{Result, invalid_parameter};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl Numeric {
    fn value<E: serde::de::Error>(self) -> std::result::Result<f64, E> {
        match self {
            Self::Number(v) => Ok(v),
            Self::Flag(b) => Ok(if b { 1.0 } else { 0.0 }),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|e| E::custom(format!("could not convert '{s}' to a number: {e}"))),
        }
    }
}

/// Accept a JSON number, numeric string or boolean as `f64`
///
/// # Errors
///
/// Returns a deserialization error for non-numeric strings and other types
pub fn lenient_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<f64, D::Error> {
    Numeric::deserialize(deserializer)?.value()
}

/// Optional variant of [`lenient_f64`]; `null` reads as absent
///
/// # Errors
///
/// Returns a deserialization error for non-numeric values
pub fn lenient_opt_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<f64>, D::Error> {
    Option::<Numeric>::deserialize(deserializer)?
        .map(Numeric::value)
        .transpose()
}

/// An opaque RGB colour
///
/// Requests may use single-letter shorthands (`b`, `g`, `r`, `c`, `m`, `y`,
/// `k`, `w`), any SVG/CSS colour name, or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color([u8; 3]);

impl Color {
    /// `black`
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `white`
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// `red`, also the `r` shorthand
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// `blue`, also the `b` shorthand
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// `green`, also the `g` shorthand
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    /// `yellow`
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// `lightblue`
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);

    /// Colour from its channels
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Parse a colour string
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for anything that is not a
    /// shorthand, colour name or colour literal
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let shorthand = match raw {
            "b" => Some(Self::BLUE),
            "g" => Some(Self::GREEN),
            "r" => Some(Self::RED),
            "c" => Some(Self::rgb(0, 191, 191)),
            "m" => Some(Self::rgb(191, 0, 191)),
            "y" => Some(Self::rgb(191, 191, 0)),
            "k" => Some(Self::BLACK),
            "w" => Some(Self::WHITE),
            _ => None,
        };
        if let Some(color) = shorthand {
            return Ok(color);
        }
        raw.to_ascii_lowercase()
            .parse::<svgtypes::Color>()
            .map(|c| Self::rgb(c.red, c.green, c.blue))
            .map_err(|e| invalid_parameter("color", &raw, &e))
    }

    /// Red, green and blue channels
    pub const fn channels(self) -> [u8; 3] {
        self.0
    }

    /// `#rrggbb` form
    pub fn hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

/// Which side of the boundary an inequality keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum InequalityKind {
    /// `x > v` or `y > mx + b`
    #[default]
    Greater,
    /// Anything else is treated as `<`
    Less,
}

impl From<String> for InequalityKind {
    fn from(value: String) -> Self {
        if value == "greater" {
            Self::Greater
        } else {
            Self::Less
        }
    }
}

impl InequalityKind {
    /// ASCII relation symbol used in titles and labels
    pub const fn symbol(self, inclusive: bool) -> &'static str {
        match (self, inclusive) {
            (Self::Greater, true) => ">=",
            (Self::Greater, false) => ">",
            (Self::Less, true) => "<=",
            (Self::Less, false) => "<",
        }
    }

    /// Typographic relation symbol used in legends
    pub const fn math_symbol(self, inclusive: bool) -> &'static str {
        match (self, inclusive) {
            (Self::Greater, true) => "≥",
            (Self::Greater, false) => ">",
            (Self::Less, true) => "≤",
            (Self::Less, false) => "<",
        }
    }
}

/// Parameters of `y = a(x-h)^2 + k`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParabolaParams {
    /// Leading coefficient
    #[serde(deserialize_with = "lenient_f64")]
    pub a: f64,
    /// Vertex x
    #[serde(deserialize_with = "lenient_f64")]
    pub h: f64,
    /// Vertex y
    #[serde(deserialize_with = "lenient_f64")]
    pub k: f64,
    /// Mark and annotate the vertex
    pub show_vertex: bool,
    /// Draw the axis of symmetry
    pub show_axis: bool,
    /// Half-width of the plotted x interval around `h`
    #[serde(deserialize_with = "lenient_f64")]
    pub x_range: f64,
}

impl Default for ParabolaParams {
    fn default() -> Self {
        Self {
            a: 1.0,
            h: 0.0,
            k: 0.0,
            show_vertex: true,
            show_axis: true,
            x_range: 10.0,
        }
    }
}

/// Side label overrides of a right triangle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TriangleLabels {
    /// Label of the vertical leg
    pub a: String,
    /// Label of the horizontal leg
    pub b: String,
    /// Label of the hypotenuse
    pub c: String,
}

impl Default for TriangleLabels {
    fn default() -> Self {
        Self {
            a: "a".to_string(),
            b: "b".to_string(),
            c: "c".to_string(),
        }
    }
}

/// Parameters of a right triangle
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriangleParams {
    /// Opposite (vertical) leg
    #[serde(deserialize_with = "lenient_f64")]
    pub a: f64,
    /// Adjacent (horizontal) leg
    #[serde(deserialize_with = "lenient_f64")]
    pub b: f64,
    /// Hypotenuse as labelled; not checked against the legs
    #[serde(deserialize_with = "lenient_f64")]
    pub c: f64,
    /// Side label names
    pub labels: TriangleLabels,
    /// Print the acute angles and the right angle
    pub show_angles: bool,
    /// Triangle kind; only right triangles are drawn
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            a: 3.0,
            b: 4.0,
            c: 5.0,
            labels: TriangleLabels::default(),
            show_angles: true,
            kind: "right".to_string(),
        }
    }
}

/// A highlighted point on a number line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinePoint {
    /// Position on the line
    #[serde(deserialize_with = "lenient_f64")]
    pub x: f64,
    /// Marker colour
    pub color: Color,
    /// Optional caption above the marker
    pub label: String,
}

impl Default for LinePoint {
    fn default() -> Self {
        Self {
            x: 0.0,
            color: Color::RED,
            label: String::new(),
        }
    }
}

/// A one-variable inequality `x <op> value`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Inequality1D {
    /// Boundary value
    #[serde(deserialize_with = "lenient_f64")]
    pub value: f64,
    /// Direction of the solution set
    #[serde(rename = "type")]
    pub kind: InequalityKind,
    /// Whether the boundary is included
    pub inclusive: bool,
}

impl Default for Inequality1D {
    fn default() -> Self {
        Self {
            value: 0.0,
            kind: InequalityKind::Greater,
            inclusive: false,
        }
    }
}

/// Parameters of a number line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberLineParams {
    /// Left end
    #[serde(deserialize_with = "lenient_f64")]
    pub min: f64,
    /// Right end
    #[serde(deserialize_with = "lenient_f64")]
    pub max: f64,
    /// Highlighted points
    pub points: Vec<LinePoint>,
    /// Draw integer ticks and their numbers
    pub show_numbers: bool,
    /// Optional shaded solution set
    pub inequality: Option<Inequality1D>,
}

impl Default for NumberLineParams {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
            points: Vec::new(),
            show_numbers: true,
            inequality: None,
        }
    }
}

/// A labelled point on the coordinate plane
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlanePoint {
    /// X coordinate
    #[serde(deserialize_with = "lenient_f64")]
    pub x: f64,
    /// Y coordinate
    #[serde(deserialize_with = "lenient_f64")]
    pub y: f64,
    /// Optional caption
    pub label: String,
    /// Marker colour
    pub color: Color,
}

impl Default for PlanePoint {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            label: String::new(),
            color: Color::RED,
        }
    }
}

/// A line given by slope and intercept or by two points
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineSpec {
    /// Slope `m`
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub slope: Option<f64>,
    /// Intercept `b`
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub y_intercept: Option<f64>,
    /// Points the line passes through; the first two are used
    pub points: Option<Vec<[f64; 2]>>,
    /// Legend label for slope-intercept lines
    pub label: Option<String>,
    /// Line colour
    pub color: Option<Color>,
}

/// A two-variable inequality `y <op> mx + b`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inequality2D {
    /// Boundary slope
    #[serde(deserialize_with = "lenient_f64")]
    pub slope: f64,
    /// Boundary intercept
    #[serde(deserialize_with = "lenient_f64")]
    pub y_intercept: f64,
    /// Which half-plane is shaded
    #[serde(rename = "type")]
    pub kind: InequalityKind,
    /// Solid boundary when included, dashed otherwise
    pub inclusive: bool,
}

impl Default for Inequality2D {
    fn default() -> Self {
        Self {
            slope: 1.0,
            y_intercept: 0.0,
            kind: InequalityKind::Greater,
            inclusive: false,
        }
    }
}

/// Parameters of a coordinate plane
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoordinatePlaneParams {
    /// Half-width of the x axis, truncated to an integer
    #[serde(deserialize_with = "lenient_f64")]
    pub x_range: f64,
    /// Half-height of the y axis, truncated to an integer
    #[serde(deserialize_with = "lenient_f64")]
    pub y_range: f64,
    /// Labelled points
    pub points: Vec<PlanePoint>,
    /// Lines to draw
    pub lines: Vec<LineSpec>,
    /// Draw grid lines
    pub grid: bool,
    /// Optional shaded half-plane
    pub inequality: Option<Inequality2D>,
}

impl Default for CoordinatePlaneParams {
    fn default() -> Self {
        Self {
            x_range: 10.0,
            y_range: 10.0,
            points: Vec::new(),
            lines: Vec::new(),
            grid: true,
            inequality: None,
        }
    }
}

/// Parameters of an angle diagram
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AngleParams {
    /// Angle measure in degrees
    #[serde(deserialize_with = "lenient_f64")]
    pub degrees: f64,
    /// Angle name
    pub label: String,
    /// Append `= degrees°` to the label
    pub show_measure: bool,
}

impl Default for AngleParams {
    fn default() -> Self {
        Self {
            degrees: 45.0,
            label: "θ".to_string(),
            show_measure: true,
        }
    }
}

/// Reject NaN and infinite parameters
///
/// # Errors
///
/// Returns an invalid parameter error naming `parameter`
pub fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_parameter(parameter, &value, &"must be a finite number"))
    }
}
