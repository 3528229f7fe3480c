use num_traits::Float;

/// Evenly spaced samples over the closed interval `[start, stop]`
///
/// Returns an empty vector for zero samples and `[start]` for one.
pub fn linspace<T: Float>(start: T, stop: T, samples: usize) -> Vec<T> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let Some(last) = T::from(samples - 1) else {
                return Vec::new();
            };
            let step = (stop - start) / last;
            (0..samples)
                .map(|i| {
                    // Pin the endpoint so accumulated rounding never overshoots
                    if i == samples - 1 {
                        stop
                    } else {
                        T::from(i).map_or(start, |i| start + step * i)
                    }
                })
                .collect()
        }
    }
}

/// Smallest and largest finite values of a series
pub fn extent<T: Float>(values: &[T]) -> Option<(T, T)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Expand `[lo, hi]` by `fraction` of its span on both sides
///
/// A degenerate range is widened by one unit each way so it stays drawable.
pub fn padded<T: Float>(lo: T, hi: T, fraction: T) -> (T, T) {
    let span = hi - lo;
    if span <= T::epsilon() * (lo.abs() + hi.abs() + T::one()) {
        return (lo - T::one(), hi + T::one());
    }
    let pad = span * fraction;
    (lo - pad, hi + pad)
}

/// Round half to even, as used for recommended pixel boundaries
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}
