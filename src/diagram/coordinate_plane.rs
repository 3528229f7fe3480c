use crate::diagram::canvas::{Figure, Fill, Point, Stroke, TextStyle};
use crate::diagram::labels::linear_rhs;
use crate::diagram::params::{
    Color, CoordinatePlaneParams, Inequality2D, InequalityKind, LineSpec, ensure_finite,
};
use crate::io::configuration::{INEQUALITY_SAMPLES, LINE_SAMPLES};
use crate::io::error::Result;
use crate::math::series::{linspace, padded};
use tracing::debug;

/// Figure size in inches
pub const FIGURE_SIZE: (f64, f64) = (8.0, 8.0);

/// Symmetric axis limits `(-e, e)` for a range truncated to the integer `e`
///
/// The sign of the range is ignored. A range that truncates to zero gives
/// `(-1, 1)` so the axis stays drawable.
///
/// # Errors
///
/// Returns an error for non-finite values
pub fn axis_limits(parameter: &'static str, value: f64) -> Result<(f64, f64)> {
    let extent = ensure_finite(parameter, value)?.trunc().abs();
    Ok(padded(-extent, extent, 0.0))
}

/// How a requested line will be drawn
#[derive(Debug, Clone, PartialEq)]
pub enum LineShape {
    /// Sampled `y = mx + b` with a legend label
    SlopeIntercept {
        /// Sampled points
        points: Vec<Point>,
        /// Legend label
        label: String,
    },
    /// Segment through two given points
    Segment(Point, Point),
}

/// Resolve a line request; `None` when it names neither form
pub fn line_shape(line: &LineSpec, x_limits: (f64, f64)) -> Option<LineShape> {
    if let (Some(m), Some(b)) = (line.slope, line.y_intercept) {
        let points = linspace(x_limits.0, x_limits.1, LINE_SAMPLES)
            .into_iter()
            .map(|x| (x, m.mul_add(x, b)))
            .collect();
        let label = line
            .label
            .clone()
            .unwrap_or_else(|| format!("y = {}", linear_rhs(m, b)));
        return Some(LineShape::SlopeIntercept { points, label });
    }
    match line.points.as_deref() {
        Some([[x1, y1], [x2, y2], ..]) => Some(LineShape::Segment((*x1, *y1), (*x2, *y2))),
        _ => None,
    }
}

/// Title text, including the relation when an inequality is shaded
pub fn title(inequality: Option<&Inequality2D>) -> String {
    inequality.map_or_else(
        || "Coordinate Plane".to_string(),
        |ineq| {
            format!(
                "Linear Inequality: y {} {}",
                ineq.kind.symbol(ineq.inclusive),
                linear_rhs(ineq.slope, ineq.y_intercept)
            )
        },
    )
}

fn shade_inequality(
    fig: &mut Figure,
    ineq: &Inequality2D,
    x_limits: (f64, f64),
    y_limits: (f64, f64),
) {
    let xs = linspace(x_limits.0, x_limits.1, INEQUALITY_SAMPLES);
    let ys: Vec<f64> = xs
        .iter()
        .map(|x| ineq.slope.mul_add(*x, ineq.y_intercept))
        .collect();
    let bound = match ineq.kind {
        InequalityKind::Greater => y_limits.1,
        InequalityKind::Less => y_limits.0,
    };

    fig.fill_between(&xs, &ys, bound, Fill::new(Color::LIGHT_BLUE, 0.3));
    fig.label_last(&format!(
        "y {} {}",
        ineq.kind.math_symbol(ineq.inclusive),
        linear_rhs(ineq.slope, ineq.y_intercept)
    ));

    let mut boundary = Stroke::solid(Color::BLUE, 2.5);
    if !ineq.inclusive {
        boundary = boundary.dashed();
    }
    fig.plot(xs.into_iter().zip(ys).collect(), boundary);
}

/// Lay out a coordinate plane with an optional inequality, lines and points
///
/// # Errors
///
/// Returns an error if a range or coordinate is not finite
pub fn build(params: &CoordinatePlaneParams) -> Result<Figure> {
    let x_limits = axis_limits("xRange", params.x_range)?;
    let y_limits = axis_limits("yRange", params.y_range)?;

    let mut fig = Figure::new(FIGURE_SIZE.0, FIGURE_SIZE.1);
    fig.axhline(0.0, Stroke::solid(Color::BLACK, 1.5));
    fig.axvline(0.0, Stroke::solid(Color::BLACK, 1.5));
    fig.set_grid(params.grid);

    if let Some(ineq) = &params.inequality {
        ensure_finite("inequality.slope", ineq.slope)?;
        ensure_finite("inequality.yIntercept", ineq.y_intercept)?;
        shade_inequality(&mut fig, ineq, x_limits, y_limits);
    }

    for line in &params.lines {
        let stroke = Stroke::solid(line.color.unwrap_or(Color::BLUE), 2.5);
        match line_shape(line, x_limits) {
            Some(LineShape::SlopeIntercept { points, label }) => {
                fig.plot(points, stroke);
                fig.label_last(&label);
            }
            Some(LineShape::Segment(from, to)) => fig.plot(vec![from, to], stroke),
            None => debug!("Skipping line without slope/intercept or two points"),
        }
    }

    for point in &params.points {
        let x = ensure_finite("points.x", point.x)?;
        let y = ensure_finite("points.y", point.y)?;
        fig.dot((x, y), 10.0, point.color);
        if !point.label.is_empty() {
            let style = TextStyle::new(12.0).bold().boxed(Color::YELLOW, 0.7, 0.3);
            fig.text((x + 0.5, y + 0.5), &point.label, style);
        }
    }

    fig.set_xlim(x_limits.0, x_limits.1);
    fig.set_ylim(y_limits.0, y_limits.1);
    fig.set_xlabel("x");
    fig.set_ylabel("y");
    fig.set_title(&title(params.inequality.as_ref()));
    fig.set_equal_aspect();
    if !params.lines.is_empty() || params.inequality.is_some() {
        fig.show_legend();
    }

    Ok(fig)
}
