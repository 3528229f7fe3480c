use crate::diagram::canvas::{Figure, Stroke, TextStyle};
use crate::diagram::labels::{float_label, vertex_form};
use crate::diagram::params::{Color, ParabolaParams, ensure_finite};
use crate::io::configuration::PARABOLA_SAMPLES;
use crate::io::error::Result;
use crate::math::series::{extent, linspace, padded};

/// Figure size in inches
pub const FIGURE_SIZE: (f64, f64) = (8.0, 6.0);

/// Sampled curve `y = a(x-h)^2 + k` from `h - x_range` to `h + x_range`
pub fn sample_curve(params: &ParabolaParams) -> (Vec<f64>, Vec<f64>) {
    let ParabolaParams { a, h, k, x_range, .. } = *params;
    let xs = linspace(h - x_range, h + x_range, PARABOLA_SAMPLES);
    let ys = xs.iter().map(|x| a.mul_add((x - h).powi(2), k)).collect();
    (xs, ys)
}

/// Lay out a parabola with its vertex, axis of symmetry and legend
///
/// # Errors
///
/// Returns an error if a coefficient or `xRange` is not finite
pub fn build(params: &ParabolaParams) -> Result<Figure> {
    ensure_finite("a", params.a)?;
    let h = ensure_finite("h", params.h)?;
    let k = ensure_finite("k", params.k)?;
    let x_range = ensure_finite("xRange", params.x_range)?;

    let (xs, ys) = sample_curve(params);
    let equation = vertex_form(params.a, h, k);
    let mut fig = Figure::new(FIGURE_SIZE.0, FIGURE_SIZE.1);

    fig.plot(
        xs.into_iter().zip(ys.iter().copied()).collect(),
        Stroke::solid(Color::BLUE, 2.5),
    );
    fig.label_last(&equation);

    if params.show_vertex {
        fig.dot((h, k), 10.0, Color::RED);
        fig.label_last(&format!("Vertex ({}, {})", float_label(h), float_label(k)));
        let style = TextStyle::new(12.0).bold().boxed(Color::YELLOW, 0.7, 0.5);
        fig.annotate(
            &format!("Vertex\n({}, {})", float_label(h), float_label(k)),
            (h, k),
            (h + 1.0, k + 2.0),
            style,
        );
    }

    if params.show_axis {
        fig.axvline(h, Stroke::solid(Color::GREEN, 2.0).dashed());
        fig.label_last(&format!("Axis: x = {}", float_label(h)));
    }

    fig.axhline(0.0, Stroke::solid(Color::BLACK, 0.5));
    fig.axvline(0.0, Stroke::solid(Color::BLACK, 0.5));
    fig.set_grid(true);
    fig.show_legend();
    fig.set_xlabel("x");
    fig.set_ylabel("y");
    fig.set_title(&format!("Parabola: {equation}"));

    fig.set_xlim(h - x_range, h + x_range);
    let (lo, hi) = extent(&ys).unwrap_or((k, k));
    let (y_lo, y_hi) = padded(lo, hi, 0.1);
    fig.set_ylim(y_lo, y_hi);

    Ok(fig)
}
