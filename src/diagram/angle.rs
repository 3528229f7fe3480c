use crate::diagram::canvas::{Figure, Fill, Point, Stroke, TextStyle};
use crate::diagram::labels::float_label;
use crate::diagram::params::{AngleParams, Color, ensure_finite};
use crate::io::error::Result;

/// Figure size in inches
pub const FIGURE_SIZE: (f64, f64) = (6.0, 6.0);

/// Length of both rays
pub const RAY_LENGTH: f64 = 4.0;

/// Distance of the label from the vertex along the bisector
pub const LABEL_RADIUS: f64 = 1.5;

/// End of the second ray at `degrees` counter-clockwise from the x axis
pub fn ray_end(degrees: f64) -> Point {
    let rad = degrees.to_radians();
    (RAY_LENGTH * rad.cos(), RAY_LENGTH * rad.sin())
}

/// Label anchor on the angle bisector
pub fn label_anchor(degrees: f64) -> Point {
    let rad = (degrees / 2.0).to_radians();
    (LABEL_RADIUS * rad.cos(), LABEL_RADIUS * rad.sin())
}

/// Lay out two rays from the origin with a shaded wedge between them
///
/// # Errors
///
/// Returns an error if `degrees` is not finite
pub fn build(params: &AngleParams) -> Result<Figure> {
    let degrees = ensure_finite("degrees", params.degrees)?;
    let mut fig = Figure::new(FIGURE_SIZE.0, FIGURE_SIZE.1);

    let ray = Stroke::solid(Color::BLUE, 3.0);
    fig.plot(vec![(0.0, 0.0), (RAY_LENGTH, 0.0)], ray);
    fig.plot(vec![(0.0, 0.0), ray_end(degrees)], ray);

    fig.wedge(
        (0.0, 0.0),
        1.0,
        0.0,
        degrees,
        Fill::new(Color::YELLOW, 0.3),
        Stroke::solid(Color::RED, 2.0),
    );

    let style = TextStyle::new(14.0).bold().centered();
    if params.show_measure {
        fig.text(
            label_anchor(degrees),
            &format!("{} = {}°", params.label, float_label(degrees)),
            style.boxed(Color::LIGHT_BLUE, 0.8, 0.5),
        );
    } else {
        fig.text(label_anchor(degrees), &params.label, style);
    }

    fig.set_xlim(-1.0, RAY_LENGTH + 1.0);
    fig.set_ylim(-1.0, RAY_LENGTH + 1.0);
    fig.set_equal_aspect();
    fig.hide_axes();
    fig.set_title("Angle Diagram");

    Ok(fig)
}
