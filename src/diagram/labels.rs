//! Text of titles, legends and annotations

use crate::diagram::params::InequalityKind;

/// Shortest round-trip text of a float, always showing it is one
///
/// Values with a decimal exponent in `[-4, 16)` print positionally with a
/// mandatory fractional part (`1.0`, `-2.5`, `0.0001`). Others use a signed
/// two-digit exponent (`1e-05`, `1.5e+16`).
pub fn float_label(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    if (-4..16).contains(&exponent) {
        let positional = format!("{value}");
        if positional.contains('.') {
            positional
        } else {
            positional + ".0"
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// `y = a(x-h)² + k` with the coefficients filled in
pub fn vertex_form(a: f64, h: f64, k: f64) -> String {
    format!(
        "y = {}(x-{})² + {}",
        float_label(a),
        float_label(h),
        float_label(k)
    )
}

/// `mx + b` with the coefficients filled in
pub fn linear_rhs(slope: f64, intercept: f64) -> String {
    format!("{}x + {}", float_label(slope), float_label(intercept))
}

/// `x > 3.0` style relation used by number-line labels and titles
pub fn relation_1d(kind: InequalityKind, inclusive: bool, value: f64) -> String {
    format!("x {} {}", kind.symbol(inclusive), float_label(value))
}

/// Degrees with one decimal and a degree sign
pub fn degrees_1dp(value: f64) -> String {
    format!("{value:.1}°")
}
