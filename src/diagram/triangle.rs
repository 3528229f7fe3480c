use crate::diagram::canvas::{Figure, Stroke, TextStyle};
use crate::diagram::labels::{degrees_1dp, float_label};
use crate::diagram::params::{Color, TriangleParams, ensure_finite};
use crate::io::error::{Result, invalid_parameter};
use tracing::debug;

/// Figure size in inches
pub const FIGURE_SIZE: (f64, f64) = (8.0, 6.0);

/// Side length of the right-angle marker
pub const RIGHT_ANGLE_MARKER: f64 = 0.3;

/// Acute angles in degrees at `(b, 0)` and at `(0, a)`
pub fn acute_angles(a: f64, b: f64) -> (f64, f64) {
    let at_b = (a / b).atan().to_degrees();
    (at_b, 90.0 - at_b)
}

/// Lay out a right triangle with legs `b` (horizontal) and `a` (vertical)
///
/// # Errors
///
/// Returns an error if a side is not finite or a leg is not positive
pub fn build(params: &TriangleParams) -> Result<Figure> {
    let a = ensure_finite("a", params.a)?;
    let b = ensure_finite("b", params.b)?;
    let c = ensure_finite("c", params.c)?;
    for (name, leg) in [("a", a), ("b", b)] {
        if leg <= 0.0 {
            return Err(invalid_parameter(name, &leg, &"leg must be positive"));
        }
    }
    if params.kind != "right" {
        debug!("Triangle type '{}' drawn as a right triangle", params.kind);
    }

    let mut fig = Figure::new(FIGURE_SIZE.0, FIGURE_SIZE.1);
    fig.polygon(
        vec![(0.0, 0.0), (b, 0.0), (0.0, a)],
        None,
        Some(Stroke::solid(Color::BLUE, 3.0)),
    );
    fig.rectangle(
        (0.0, 0.0),
        RIGHT_ANGLE_MARKER,
        RIGHT_ANGLE_MARKER,
        Stroke::solid(Color::BLUE, 2.0),
    );

    let labels = &params.labels;
    let side = TextStyle::new(14.0).bold().centered();
    fig.text(
        (b / 2.0, -0.5),
        &format!("{} = {}", labels.b, float_label(b)),
        side,
    );
    fig.text(
        (-0.5, a / 2.0),
        &format!("{} = {}", labels.a, float_label(a)),
        side.rotated(90.0),
    );
    fig.text(
        (b / 2.0 + 0.3, a / 2.0 + 0.3),
        &format!("{} = {}", labels.c, float_label(c)),
        side.rotated(-50.0),
    );

    if params.show_angles {
        let (at_b, at_a) = acute_angles(a, b);
        let angle = TextStyle::new(12.0).bold().color(Color::RED);
        fig.text((0.8, 0.3), &degrees_1dp(at_a), angle);
        fig.text((b - 0.8, 0.3), &degrees_1dp(at_b), angle);
        fig.text((0.3, 0.8), "90°", angle);
    }

    fig.set_equal_aspect();
    fig.set_xlim(-1.0, b + 1.0);
    fig.set_ylim(-1.0, a + 1.0);
    fig.hide_axes();
    fig.set_title("Right Triangle");

    Ok(fig)
}
