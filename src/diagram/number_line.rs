use crate::diagram::canvas::{Figure, Fill, Stroke, TextStyle};
use crate::diagram::labels::relation_1d;
use crate::diagram::params::{
    Color, Inequality1D, InequalityKind, NumberLineParams, ensure_finite,
};
use crate::io::configuration::MAX_NUMBER_LINE_TICKS;
use crate::io::error::{Result, invalid_parameter};

/// Figure size in inches
pub const FIGURE_SIZE: (f64, f64) = (12.0, 2.0);

/// Integer tick positions from `trunc(min)` to `trunc(max)` inclusive
pub fn integer_ticks(min: f64, max: f64) -> Vec<i64> {
    (min.trunc() as i64..=max.trunc() as i64).collect()
}

/// Data-space x interval shaded for an inequality, clamped to the line
pub fn shaded_interval(inequality: &Inequality1D, min: f64, max: f64) -> (f64, f64) {
    let value = inequality.value.clamp(min, max);
    match inequality.kind {
        InequalityKind::Greater => (value, max),
        InequalityKind::Less => (min, value),
    }
}

/// Title text, including the relation when an inequality is shown
pub fn title(params: &NumberLineParams) -> String {
    params.inequality.as_ref().map_or_else(
        || "Number Line".to_string(),
        |ineq| {
            format!(
                "Number Line: {}",
                relation_1d(ineq.kind, ineq.inclusive, ineq.value)
            )
        },
    )
}

/// Lay out a number line with ticks, an optional inequality and points
///
/// # Errors
///
/// Returns an error if a bound is not finite, `max <= min`, or numbered ticks
/// are requested over more than [`MAX_NUMBER_LINE_TICKS`] integers
pub fn build(params: &NumberLineParams) -> Result<Figure> {
    let min = ensure_finite("min", params.min)?;
    let max = ensure_finite("max", params.max)?;
    if max <= min {
        return Err(invalid_parameter("max", &max, &format!("must exceed min {min}")));
    }
    if params.show_numbers && max.trunc() - min.trunc() >= MAX_NUMBER_LINE_TICKS as f64 {
        return Err(invalid_parameter(
            "max",
            &max,
            &format!("numbered lines draw at most {MAX_NUMBER_LINE_TICKS} ticks"),
        ));
    }

    let mut fig = Figure::new(FIGURE_SIZE.0, FIGURE_SIZE.1);
    fig.plot(vec![(min, 0.0), (max, 0.0)], Stroke::solid(Color::BLACK, 3.0));
    fig.arrow((max - 0.5, 0.0), (max, 0.0), Stroke::solid(Color::BLACK, 2.0));
    fig.arrow((min + 0.5, 0.0), (min, 0.0), Stroke::solid(Color::BLACK, 2.0));

    if params.show_numbers {
        let number = TextStyle::new(11.0).bold().centered();
        for i in integer_ticks(min, max) {
            let x = i as f64;
            fig.plot(vec![(x, -0.1), (x, 0.1)], Stroke::solid(Color::BLACK, 2.0));
            fig.text((x, -0.3), &i.to_string(), number);
        }
    }

    if let Some(ineq) = &params.inequality {
        let value = ensure_finite("inequality.value", ineq.value)?;
        fig.span(
            shaded_interval(ineq, min, max),
            (-0.15, 0.15),
            Fill::new(Color::BLUE, 0.3),
        );
        if ineq.inclusive {
            fig.marker((value, 0.0), 14.0, Color::BLUE, Color::BLUE, 1.0);
        } else {
            fig.marker((value, 0.0), 14.0, Color::WHITE, Color::BLUE, 3.0);
        }
        let label = TextStyle::new(13.0)
            .bold()
            .centered()
            .color(Color::BLUE)
            .boxed(Color::LIGHT_BLUE, 0.8, 0.4);
        fig.text(
            (value, 0.5),
            &relation_1d(ineq.kind, ineq.inclusive, value),
            label,
        );
    }

    for point in &params.points {
        let x = ensure_finite("points.x", point.x)?;
        fig.dot((x, 0.0), 12.0, point.color);
        if !point.label.is_empty() {
            let style = TextStyle::new(12.0)
                .bold()
                .centered()
                .color(point.color)
                .boxed(Color::YELLOW, 0.7, 0.3);
            fig.text((x, 0.4), &point.label, style);
        }
    }

    fig.set_xlim(min - 0.5, max + 0.5);
    fig.set_ylim(-0.8, 0.8);
    fig.hide_axes();
    fig.set_title_padded(&title(params), 20.0);

    Ok(fig)
}
