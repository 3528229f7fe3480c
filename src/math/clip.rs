/// A data-space coordinate pair
pub type Point = (f64, f64);

/// Closed axis-aligned rectangle in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Horizontal extent `(left, right)`
    pub x: (f64, f64),
    /// Vertical extent `(bottom, top)`
    pub y: (f64, f64),
}

impl Window {
    /// Window spanning the given extents
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Whether `point` lies inside or on the border
    pub fn contains(&self, (x, y): Point) -> bool {
        (self.x.0..=self.x.1).contains(&x) && (self.y.0..=self.y.1).contains(&y)
    }

    /// Nearest point of the window
    pub fn clamp(&self, (x, y): Point) -> Point {
        (x.clamp(self.x.0, self.x.1), y.clamp(self.y.0, self.y.1))
    }
}

/// Part of the segment `a -> b` inside the window, or `None` when it misses
///
/// Liang-Barsky: each window edge bounds the segment parameter `t` from one
/// side, and the visible part is what survives all four.
pub fn clip_segment(window: &Window, a: Point, b: Point) -> Option<(Point, Point)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, a.0 - window.x.0),
        (dx, window.x.1 - a.0),
        (-dy, a.1 - window.y.0),
        (dy, window.y.1 - a.1),
    ] {
        if p.abs() <= f64::EPSILON {
            // Parallel to this edge: fully outside or no constraint
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else if r < t0 {
            return None;
        } else {
            t1 = t1.min(r);
        }
    }

    Some((
        (t0.mul_add(dx, a.0), t0.mul_add(dy, a.1)),
        (t1.mul_add(dx, a.0), t1.mul_add(dy, a.1)),
    ))
}

/// Visible runs of a polyline; a run ends wherever the line leaves the window
pub fn clip_polyline(window: &Window, points: &[Point]) -> Vec<Vec<Point>> {
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut open = false;

    for pair in points.windows(2) {
        let [a, b] = pair else { continue };
        match clip_segment(window, *a, *b) {
            Some((start, end)) => {
                match runs.last_mut() {
                    Some(run) if open => run.push(end),
                    _ => runs.push(vec![start, end]),
                }
                open = window.contains(*b);
            }
            None => open = false,
        }
    }

    runs
}
