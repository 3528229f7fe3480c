//! Figures laid out in data space and drawn through `plotters`
//!
//! A figure has a fixed size in inches, one plot area with x and y limits,
//! and layers in data coordinates. The axes, grid, series and legend are a
//! `plotters` chart on an [`SVGBackend`]. Lines, patches and markers are
//! clipped to the plot window before they reach the chart; text and
//! annotation arrows are placed in pixels on the root area and are not.
//!
//! `plotters` only turns text by quarter turns, so labels at any other angle
//! are appended to the finished document as SVG `<text>` elements.

use crate::diagram::params::Color;
use crate::io::configuration::DIAGRAM_DPI;
use crate::io::error::{Result, ToolError, render_error};
use crate::math::clip::{Window, clip_polyline};
use crate::math::series::{linspace, padded};
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{
    AreaSeries, Cartesian2d, ChartBuilder, ChartContext, Circle, DrawingArea, IntoDrawingArea,
    LineSeries, PathElement, Polygon, Rectangle, SVGBackend, SeriesLabelPosition, TRANSPARENT,
    Text, WHITE,
};
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{
    Color as _, FontDesc, FontFamily, FontStyle, FontTransform, RGBColor, ShapeStyle,
};
use quick_xml::escape::escape;
use std::fmt::Display;

pub use crate::math::clip::Point;

/// Output pixels per typographic point
pub const PIXELS_PER_POINT: f64 = DIAGRAM_DPI / 72.0;

const MAX_AXIS_TICKS: usize = 11;
const TICK_FONT_PT: f64 = 10.0;
const LEGEND_FONT_PT: f64 = 11.0;
const AXIS_LABEL_FONT_PT: f64 = 12.0;
const TITLE_FONT_PT: f64 = 14.0;
const TITLE_PAD_PT: f64 = 6.0;
const LINE_HEIGHT: f64 = 1.2;
const WEDGE_SAMPLES: usize = 64;
const GRID_GRAY: RGBColor = RGBColor(176, 176, 176);
const LEGEND_EDGE: RGBColor = RGBColor(204, 204, 204);

// Chart margins in inches
const OUTER_MARGIN_IN: f64 = 0.2;
const X_LABEL_AREA_IN: f64 = 0.55;
const Y_LABEL_AREA_IN: f64 = 0.7;

type Chart<'a, 'b> =
    ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type Area<'b> = DrawingArea<SVGBackend<'b>, Shift>;

const fn pixels(points: f64) -> f64 {
    points * PIXELS_PER_POINT
}

const fn rgb(color: Color) -> RGBColor {
    let [r, g, b] = color.channels();
    RGBColor(r, g, b)
}

fn draw_error(error: impl Display) -> ToolError {
    render_error("draw", &error)
}

/// Outline style for lines and patch edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line colour
    pub color: Color,
    /// Width in points
    pub width: f64,
    /// Dashed instead of solid
    pub dashed: bool,
}

impl Stroke {
    /// A solid stroke
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    /// The same stroke, dashed
    #[must_use]
    pub const fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    fn style(&self) -> ShapeStyle {
        rgb(self.color).stroke_width(pixels(self.width).round().max(1.0) as u32)
    }

    // Dash and gap lengths in pixels, scaled by the line width
    fn dash_pattern(&self) -> (u32, u32) {
        let unit = pixels(self.width);
        ((3.7 * unit).round() as u32, (1.6 * unit).round() as u32)
    }
}

/// Interior style for patches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    /// Fill colour
    pub color: Color,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
}

impl Fill {
    /// A fill with the given opacity
    pub const fn new(color: Color, opacity: f64) -> Self {
        Self { color, opacity }
    }

    fn style(&self) -> ShapeStyle {
        rgb(self.color).mix(self.opacity).filled()
    }
}

/// Horizontal alignment of text around its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Text starts at the anchor
    #[default]
    Start,
    /// Text is centred on the anchor
    Middle,
    /// Text ends at the anchor
    End,
}

impl Anchor {
    const fn h_pos(self) -> HPos {
        match self {
            Self::Start => HPos::Left,
            Self::Middle => HPos::Center,
            Self::End => HPos::Right,
        }
    }

    const fn svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Background box drawn behind text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    /// Box colour
    pub face: Color,
    /// Box opacity
    pub opacity: f64,
    /// Padding as a fraction of the font size
    pub pad: f64,
}

/// Font and placement of a text mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    /// Bold weight
    pub bold: bool,
    /// Text colour
    pub color: Color,
    /// Horizontal alignment
    pub anchor: Anchor,
    /// Counter-clockwise rotation in degrees
    pub rotation: f64,
    /// Optional background box
    pub boxed: Option<TextBox>,
}

impl TextStyle {
    /// Black, regular, left-aligned text of `size` points
    pub const fn new(size: f64) -> Self {
        Self {
            size,
            bold: false,
            color: Color::BLACK,
            anchor: Anchor::Start,
            rotation: 0.0,
            boxed: None,
        }
    }

    /// Bold weight
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Text colour
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Centre on the anchor
    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.anchor = Anchor::Middle;
        self
    }

    /// Rotate counter-clockwise by `degrees`
    #[must_use]
    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Draw a box behind the text
    #[must_use]
    pub const fn boxed(mut self, face: Color, opacity: f64, pad: f64) -> Self {
        self.boxed = Some(TextBox { face, opacity, pad });
        self
    }

    fn font(&self) -> FontDesc<'static> {
        let weight = if self.bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        FontDesc::new(FontFamily::SansSerif, pixels(self.size), weight)
    }

    // Quarter turns `plotters` can draw; `None` for any other angle
    fn quarter_turn(&self) -> Option<FontTransform> {
        let turns = self.rotation.rem_euclid(360.0) / 90.0;
        if (turns - turns.round()).abs() > 1e-9 {
            return None;
        }
        // plotters turns clockwise on screen
        match turns.round() as u8 % 4 {
            0 => Some(FontTransform::None),
            1 => Some(FontTransform::Rotate270),
            2 => Some(FontTransform::Rotate180),
            _ => Some(FontTransform::Rotate90),
        }
    }
}

/// What a layer draws
#[derive(Debug, Clone, PartialEq)]
enum Mark {
    Line {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<Point>,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    },
    Area {
        points: Vec<Point>,
        baseline: f64,
        fill: Fill,
    },
    Span {
        x: (f64, f64),
        y: (f64, f64),
        fill: Fill,
    },
    Marker {
        at: Point,
        size: f64,
        face: Color,
        edge: Color,
        edge_width: f64,
    },
    HLine {
        y: f64,
        stroke: Stroke,
    },
    VLine {
        x: f64,
        stroke: Stroke,
    },
    Text {
        at: Point,
        text: String,
        style: TextStyle,
    },
    Arrow {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Layer {
    mark: Mark,
    label: Option<String>,
}

/// A single-axes figure
#[derive(Debug, Clone)]
pub struct Figure {
    width_in: f64,
    height_in: f64,
    x_limits: (f64, f64),
    y_limits: (f64, f64),
    equal_aspect: bool,
    axes_visible: bool,
    grid: bool,
    title: Option<(String, f64)>,
    x_label: Option<String>,
    y_label: Option<String>,
    layers: Vec<Layer>,
    show_legend: bool,
}

impl Figure {
    /// Create an empty figure of `width_in` x `height_in` inches
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            x_limits: (0.0, 1.0),
            y_limits: (0.0, 1.0),
            equal_aspect: false,
            axes_visible: true,
            grid: false,
            title: None,
            x_label: None,
            y_label: None,
            layers: Vec::new(),
            show_legend: false,
        }
    }

    /// Figure size in output pixels
    pub fn size(&self) -> (u32, u32) {
        (
            (self.width_in * DIAGRAM_DPI).round() as u32,
            (self.height_in * DIAGRAM_DPI).round() as u32,
        )
    }

    /// Set the x data limits
    ///
    /// Reversed limits are put in order and an empty range is widened by one
    /// unit each way.
    pub fn set_xlim(&mut self, lo: f64, hi: f64) {
        self.x_limits = ordered_limits(lo, hi);
    }

    /// Set the y data limits, ordered and widened like [`Self::set_xlim`]
    pub fn set_ylim(&mut self, lo: f64, hi: f64) {
        self.y_limits = ordered_limits(lo, hi);
    }

    /// Use the same scale on both axes, shrinking the plot area to fit
    pub const fn set_equal_aspect(&mut self) {
        self.equal_aspect = true;
    }

    /// Hide the axes, ticks and grid
    pub const fn hide_axes(&mut self) {
        self.axes_visible = false;
    }

    /// Draw grid lines at the major ticks
    pub const fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    /// Bold title above the plot area
    pub fn set_title(&mut self, title: &str) {
        self.title = Some((title.to_string(), TITLE_PAD_PT));
    }

    /// Title with an explicit gap in points above the plot area
    pub fn set_title_padded(&mut self, title: &str, pad: f64) {
        self.title = Some((title.to_string(), pad));
    }

    /// Label under the x axis
    pub fn set_xlabel(&mut self, label: &str) {
        self.x_label = Some(label.to_string());
    }

    /// Label beside the y axis
    pub fn set_ylabel(&mut self, label: &str) {
        self.y_label = Some(label.to_string());
    }

    fn push(&mut self, mark: Mark) {
        self.layers.push(Layer { mark, label: None });
    }

    /// Polyline through `points`
    pub fn plot(&mut self, points: Vec<Point>, stroke: Stroke) {
        self.push(Mark::Line { points, stroke });
    }

    /// Closed polygon with optional fill and outline
    pub fn polygon(&mut self, points: Vec<Point>, fill: Option<Fill>, stroke: Option<Stroke>) {
        self.push(Mark::Polygon {
            points,
            fill,
            stroke,
        });
    }

    /// Axis-aligned rectangle outline with its lower-left corner at `origin`
    pub fn rectangle(&mut self, origin: Point, width: f64, height: f64, stroke: Stroke) {
        let (x, y) = origin;
        self.polygon(
            vec![(x, y), (x + width, y), (x + width, y + height), (x, y + height)],
            None,
            Some(stroke),
        );
    }

    /// Shade the region between `ys` and the constant `bound` along `xs`
    pub fn fill_between(&mut self, xs: &[f64], ys: &[f64], bound: f64, fill: Fill) {
        let points = xs.iter().copied().zip(ys.iter().copied()).collect();
        self.push(Mark::Area {
            points,
            baseline: bound,
            fill,
        });
    }

    /// Shade the rectangle `[x0, x1] x [y0, y1]`
    pub fn span(&mut self, x: (f64, f64), y: (f64, f64), fill: Fill) {
        self.push(Mark::Span { x, y, fill });
    }

    /// Round marker of `size` points diameter
    pub fn marker(&mut self, at: Point, size: f64, face: Color, edge: Color, edge_width: f64) {
        self.push(Mark::Marker {
            at,
            size,
            face,
            edge,
            edge_width,
        });
    }

    /// Filled round marker without a distinct edge
    pub fn dot(&mut self, at: Point, size: f64, color: Color) {
        self.marker(at, size, color, color, 1.0);
    }

    /// Circular sector from `theta1` to `theta2` degrees, counter-clockwise
    pub fn wedge(
        &mut self,
        center: Point,
        radius: f64,
        theta1: f64,
        theta2: f64,
        fill: Fill,
        stroke: Stroke,
    ) {
        self.polygon(
            wedge_outline(center, radius, theta1, theta2),
            Some(fill),
            Some(stroke),
        );
    }

    /// Horizontal line across the whole plot area
    pub fn axhline(&mut self, y: f64, stroke: Stroke) {
        self.push(Mark::HLine { y, stroke });
    }

    /// Vertical line across the whole plot area
    pub fn axvline(&mut self, x: f64, stroke: Stroke) {
        self.push(Mark::VLine { x, stroke });
    }

    /// Text at a data position; `\n` starts a new line
    pub fn text(&mut self, at: Point, text: &str, style: TextStyle) {
        self.push(Mark::Text {
            at,
            text: text.to_string(),
            style,
        });
    }

    /// Arrow from `from` with its head at `to`
    pub fn arrow(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(Mark::Arrow { from, to, stroke });
    }

    /// Text at `text_at` with an arrow pointing at `target`
    pub fn annotate(&mut self, text: &str, target: Point, text_at: Point, style: TextStyle) {
        self.arrow(text_at, target, Stroke::solid(Color::BLACK, 2.0));
        self.text(text_at, text, style);
    }

    /// Give the most recently added series a legend entry
    ///
    /// Text and arrows never appear in the legend; labelling one is ignored.
    pub fn label_last(&mut self, label: &str) {
        if let Some(layer) = self.layers.last_mut()
            && !matches!(layer.mark, Mark::Text { .. } | Mark::Arrow { .. })
        {
            layer.label = Some(label.to_string());
        }
    }

    /// Draw the legend in the upper-right corner of the plot area
    pub const fn show_legend(&mut self) {
        self.show_legend = true;
    }

    /// Number of layers added so far
    pub const fn mark_count(&self) -> usize {
        self.layers.len()
    }

    /// Legend labels in drawing order
    pub fn legend_labels(&self) -> Vec<&str> {
        self.layers
            .iter()
            .filter_map(|layer| layer.label.as_deref())
            .collect()
    }

    /// Title text, if set
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(|(t, _)| t.as_str())
    }

    /// Current data limits
    pub const fn limits(&self) -> ((f64, f64), (f64, f64)) {
        (self.x_limits, self.y_limits)
    }

    /// Draw the figure and return the SVG document
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is not finite or drawing fails
    pub fn to_svg(&self) -> Result<String> {
        for (name, (lo, hi)) in [("x", self.x_limits), ("y", self.y_limits)] {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(render_error(
                    "layout",
                    &format!("{name} limits ({lo}, {hi}) are not finite"),
                ));
            }
        }

        let mut svg = String::with_capacity(32 * 1024);
        let rotated = {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            let rotated = self.draw(&root)?;
            root.present().map_err(draw_error)?;
            rotated
        };

        if rotated.is_empty() {
            return Ok(svg);
        }
        let close = svg
            .rfind("</svg>")
            .ok_or_else(|| render_error("draw", &"document has no closing tag"))?;
        svg.insert_str(close, &rotated);
        Ok(svg)
    }

    // Draws everything plotters can and returns the SVG of off-axis labels
    fn draw(&self, root: &Area<'_>) -> Result<String> {
        root.fill(&WHITE).map_err(draw_error)?;

        let area = match &self.title {
            Some((title, _)) => {
                let font = TextStyle::new(TITLE_FONT_PT).bold().font();
                root.titled(title, font).map_err(draw_error)?
            }
            None => root.clone(),
        };

        let margin = OUTER_MARGIN_IN * DIAGRAM_DPI;
        let top = self
            .title
            .as_ref()
            .map_or(margin, |(_, pad)| pixels(*pad));
        let (x_area, y_area) = if self.axes_visible {
            (X_LABEL_AREA_IN * DIAGRAM_DPI, Y_LABEL_AREA_IN * DIAGRAM_DPI)
        } else {
            (0.0, 0.0)
        };

        let (inset_x, inset_y) = if self.equal_aspect {
            let (width, height) = area.dim_in_pixel();
            equal_aspect_inset(
                f64::from(width) - y_area - margin - margin,
                f64::from(height) - x_area - top - margin,
                self.x_limits.1 - self.x_limits.0,
                self.y_limits.1 - self.y_limits.0,
            )
        } else {
            (0.0, 0.0)
        };

        let mut chart = ChartBuilder::on(&area)
            .margin_top((top + inset_y) as i32)
            .margin_bottom((margin + inset_y) as i32)
            .margin_left((margin + inset_x) as i32)
            .margin_right((margin + inset_x) as i32)
            .x_label_area_size(x_area as i32)
            .y_label_area_size(y_area as i32)
            .build_cartesian_2d(
                self.x_limits.0..self.x_limits.1,
                self.y_limits.0..self.y_limits.1,
            )
            .map_err(draw_error)?;

        if self.axes_visible {
            self.draw_mesh(&mut chart)?;
        }

        let window = Window::new(self.x_limits, self.y_limits);
        for layer in &self.layers {
            draw_layer(&mut chart, &window, layer)?;
        }

        if self.show_legend && self.layers.iter().any(|l| l.label.is_some()) {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(LEGEND_EDGE)
                .label_font(TextStyle::new(LEGEND_FONT_PT).font())
                .draw()
                .map_err(draw_error)?;
        }

        let mut rotated = String::new();
        for layer in &self.layers {
            match &layer.mark {
                Mark::Arrow { from, to, stroke } => {
                    draw_arrow(root, chart.backend_coord(from), chart.backend_coord(to), stroke)?;
                }
                Mark::Text { at, text, style } => {
                    let anchor = chart.backend_coord(at);
                    match style.quarter_turn() {
                        Some(turn) => draw_text(root, anchor, text, style, turn)?,
                        None => rotated.push_str(&rotated_text_svg(anchor, text, style)),
                    }
                }
                _ => {}
            }
        }

        Ok(rotated)
    }

    fn draw_mesh(&self, chart: &mut Chart<'_, '_>) -> Result<()> {
        let grid = if self.grid {
            GRID_GRAY.mix(0.3)
        } else {
            TRANSPARENT
        };
        chart
            .configure_mesh()
            .x_labels(MAX_AXIS_TICKS)
            .y_labels(MAX_AXIS_TICKS)
            .x_label_formatter(&|v| tick_label(*v))
            .y_label_formatter(&|v| tick_label(*v))
            .label_style(TextStyle::new(TICK_FONT_PT).font())
            .bold_line_style(grid)
            .light_line_style(TRANSPARENT)
            .x_desc(self.x_label.as_deref().unwrap_or_default())
            .y_desc(self.y_label.as_deref().unwrap_or_default())
            .axis_desc_style(TextStyle::new(AXIS_LABEL_FONT_PT).bold().font())
            .draw()
            .map_err(draw_error)
    }
}

fn ordered_limits(lo: f64, hi: f64) -> (f64, f64) {
    padded(lo.min(hi), lo.max(hi), 0.0)
}

/// Horizontal and vertical inset in pixels that gives both axes one scale
///
/// `width` and `height` are the plot area before the adjustment; the longer
/// side, relative to its data span, shrinks symmetrically.
pub fn equal_aspect_inset(width: f64, height: f64, x_span: f64, y_span: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 || x_span <= 0.0 || y_span <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = (width / x_span).min(height / y_span);
    (
        x_span.mul_add(-scale, width) / 2.0,
        y_span.mul_add(-scale, height) / 2.0,
    )
}

/// Closed outline of a circular sector, sampled along its arc
pub fn wedge_outline(center: Point, radius: f64, theta1: f64, theta2: f64) -> Vec<Point> {
    let mut sweep = (theta2 - theta1).rem_euclid(360.0);
    if sweep <= f64::EPSILON && (theta2 - theta1).abs() > f64::EPSILON {
        sweep = 360.0;
    }
    let arc = linspace(theta1, theta1 + sweep, WEDGE_SAMPLES).into_iter().map(|deg| {
        let rad = deg.to_radians();
        (
            radius.mul_add(rad.cos(), center.0),
            radius.mul_add(rad.sin(), center.1),
        )
    });
    if sweep >= 360.0 {
        arc.collect()
    } else {
        std::iter::once(center).chain(arc).collect()
    }
}

fn draw_layer(chart: &mut Chart<'_, '_>, window: &Window, layer: &Layer) -> Result<()> {
    let label = layer.label.as_deref();
    match &layer.mark {
        Mark::Line { points, stroke } => {
            for (i, run) in clip_polyline(window, points).into_iter().enumerate() {
                // Only the first visible run carries the legend entry
                let label = if i == 0 { label } else { None };
                draw_line(chart, run, stroke, label)?;
            }
        }
        Mark::HLine { y, stroke } => {
            if (window.y.0..=window.y.1).contains(y) {
                draw_line(chart, vec![(window.x.0, *y), (window.x.1, *y)], stroke, label)?;
            }
        }
        Mark::VLine { x, stroke } => {
            if (window.x.0..=window.x.1).contains(x) {
                draw_line(chart, vec![(*x, window.y.0), (*x, window.y.1)], stroke, label)?;
            }
        }
        Mark::Polygon {
            points,
            fill,
            stroke,
        } => {
            if let Some(fill) = fill {
                let style = fill.style();
                let series = chart
                    .draw_series(std::iter::once(Polygon::new(points.clone(), style)))
                    .map_err(draw_error)?;
                if let Some(label) = label {
                    series.label(label).legend(move |(x, y)| patch_swatch(x, y, style));
                }
            }
            if let Some(stroke) = stroke {
                let mut outline = points.clone();
                outline.extend(points.first().copied());
                let label = if fill.is_some() { None } else { label };
                draw_line(chart, outline, stroke, label)?;
            }
        }
        Mark::Area {
            points,
            baseline,
            fill,
        } => {
            let baseline = baseline.clamp(window.y.0, window.y.1);
            let clamped: Vec<Point> = points.iter().map(|&p| window.clamp(p)).collect();
            let style = fill.style();
            let series = chart
                .draw_series(AreaSeries::new(clamped, baseline, style))
                .map_err(draw_error)?;
            if let Some(label) = label {
                series.label(label).legend(move |(x, y)| patch_swatch(x, y, style));
            }
        }
        Mark::Span { x, y, fill } => {
            let corners = [window.clamp((x.0, y.0)), window.clamp((x.1, y.1))];
            let style = fill.style();
            let series = chart
                .draw_series(std::iter::once(Rectangle::new(corners, style)))
                .map_err(draw_error)?;
            if let Some(label) = label {
                series.label(label).legend(move |(x, y)| patch_swatch(x, y, style));
            }
        }
        Mark::Marker {
            at,
            size,
            face,
            edge,
            edge_width,
        } => {
            if !window.contains(*at) {
                return Ok(());
            }
            let radius = (pixels(*size) / 2.0).round() as i32;
            let face = rgb(*face).filled();
            let edge = rgb(*edge).stroke_width(pixels(*edge_width).round().max(1.0) as u32);
            let series = chart
                .draw_series([
                    Circle::new(*at, radius, face),
                    Circle::new(*at, radius, edge),
                ])
                .map_err(draw_error)?;
            if let Some(label) = label {
                series
                    .label(label)
                    .legend(move |(x, y)| Circle::new((x + 10, y), 5, face));
            }
        }
        Mark::Text { .. } | Mark::Arrow { .. } => {}
    }
    Ok(())
}

fn patch_swatch(x: i32, y: i32, style: ShapeStyle) -> Rectangle<(i32, i32)> {
    Rectangle::new([(x, y - 5), (x + 20, y + 5)], style)
}

fn draw_line(
    chart: &mut Chart<'_, '_>,
    points: Vec<Point>,
    stroke: &Stroke,
    label: Option<&str>,
) -> Result<()> {
    let style = stroke.style();
    let series = if stroke.dashed {
        let (dash, gap) = stroke.dash_pattern();
        chart.draw_series(DashedLineSeries::new(points, dash, gap, style))
    } else {
        chart.draw_series(LineSeries::new(points, style))
    }
    .map_err(draw_error)?;
    if let Some(label) = label {
        series
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }
    Ok(())
}

fn draw_arrow(root: &Area<'_>, from: (i32, i32), to: (i32, i32), stroke: &Stroke) -> Result<()> {
    let (dx, dy) = (f64::from(to.0 - from.0), f64::from(to.1 - from.1));
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        return Ok(());
    }
    let (ux, uy) = (dx / length, dy / length);
    let head = pixels(stroke.width).mul_add(3.0, 9.0);
    let base = (
        (-ux).mul_add(head, f64::from(to.0)),
        (-uy).mul_add(head, f64::from(to.1)),
    );
    let half = head * 0.45;
    let corner = |sign: f64| {
        (
            (sign * uy).mul_add(half, base.0).round() as i32,
            (-sign * ux).mul_add(half, base.1).round() as i32,
        )
    };

    let shaft = vec![from, (base.0.round() as i32, base.1.round() as i32)];
    root.draw(&PathElement::new(shaft, stroke.style()))
        .map_err(draw_error)?;
    root.draw(&Polygon::new(
        vec![to, corner(1.0), corner(-1.0)],
        rgb(stroke.color).filled(),
    ))
    .map_err(draw_error)
}

fn draw_text(
    root: &Area<'_>,
    at: (i32, i32),
    text: &str,
    style: &TextStyle,
    turn: FontTransform,
) -> Result<()> {
    let font = style
        .font()
        .transform(turn)
        .color(&rgb(style.color))
        .pos(Pos::new(style.anchor.h_pos(), VPos::Center));
    let lines: Vec<&str> = text.split('\n').collect();
    let line_height = (pixels(style.size) * LINE_HEIGHT).round() as i32;
    let first_y = at.1 - line_height * (lines.len() as i32 - 1) / 2;

    if let Some(boxed) = &style.boxed {
        let mut width = 0;
        for line in &lines {
            width = width.max(root.estimate_text_size(line, &font).map_err(draw_error)?.0);
        }
        let pad = (boxed.pad * pixels(style.size)).round() as i32;
        let width = width as i32;
        let left = match style.anchor {
            Anchor::Start => at.0,
            Anchor::Middle => at.0 - width / 2,
            Anchor::End => at.0 - width,
        } - pad;
        let top = first_y - line_height / 2 - pad;
        let corners = [
            (left, top),
            (left + width + 2 * pad, top + line_height * lines.len() as i32 + 2 * pad),
        ];
        root.draw(&Rectangle::new(corners, rgb(boxed.face).mix(boxed.opacity).filled()))
            .map_err(draw_error)?;
        root.draw(&Rectangle::new(corners, RGBColor(0, 0, 0).stroke_width(1)))
            .map_err(draw_error)?;
    }

    for (i, line) in lines.iter().enumerate() {
        let y = first_y + line_height * i as i32;
        root.draw(&Text::new((*line).to_string(), (at.0, y), font.clone()))
            .map_err(draw_error)?;
    }
    Ok(())
}

/// SVG `<text>` for a label turned by an angle `plotters` cannot express
pub fn rotated_text_svg(at: (i32, i32), text: &str, style: &TextStyle) -> String {
    let (x, y) = at;
    format!(
        r#"<text x="{x}" y="{y}" transform="rotate({:.2} {x} {y})" font-family="sans-serif" font-size="{:.2}" font-weight="{}" fill="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
        -style.rotation,
        pixels(style.size),
        if style.bold { "bold" } else { "normal" },
        style.color.hex(),
        style.anchor.svg(),
        escape(text)
    ) + "\n"
}

/// Axis tick text: integers without a decimal point, others as short as possible
pub fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
