//! Tests for the angle layout

#[cfg(test)]
mod tests {
    use mathmatix_tools::diagram::angle::{RAY_LENGTH, build, label_anchor, ray_end};
    use mathmatix_tools::diagram::params::AngleParams;

    fn approx(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    // Tests ray ends and label anchors lie on the expected directions
    // Verified by measuring clockwise
    #[test]
    fn test_geometry() {
        assert!(approx(ray_end(90.0), (0.0, RAY_LENGTH)));
        assert!(approx(ray_end(0.0), (RAY_LENGTH, 0.0)));
        let (x, y) = label_anchor(90.0);
        assert!((x - y).abs() < 1e-9 && x > 0.0);
    }

    // Tests the default label includes the measure
    // Verified by omitting the measure
    #[test]
    fn test_default_angle() {
        let fig = build(&AngleParams::default()).unwrap();
        assert_eq!(fig.title(), Some("Angle Diagram"));
        assert_eq!(fig.limits(), ((-1.0, 5.0), (-1.0, 5.0)));

        let svg = fig.to_svg().unwrap();
        assert!(svg.contains("θ = 45.0°"));
        assert!(svg.to_ascii_lowercase().contains("#add8e6"));
    }

    // Tests the measure can be hidden
    // Verified by always appending the measure
    #[test]
    fn test_label_only() {
        let params = AngleParams {
            label: "∠ABC".to_string(),
            show_measure: false,
            ..AngleParams::default()
        };
        let svg = build(&params).unwrap().to_svg().unwrap();
        assert!(svg.contains(">∠ABC<"));
        assert!(!svg.contains("°"));
    }

    // Tests reflex angles draw and place the second ray below the x axis
    // Verified by always using the small arc
    #[test]
    fn test_reflex_angle() {
        let params = AngleParams {
            degrees: 270.0,
            ..AngleParams::default()
        };
        assert!(approx(ray_end(270.0), (0.0, -RAY_LENGTH)));
        let fig = build(&params).unwrap();
        assert_eq!(fig.mark_count(), 4);
        assert!(fig.to_svg().unwrap().contains("θ = 270.0°"));
    }

    // Tests non-finite measures are rejected
    // Verified by drawing NaN coordinates
    #[test]
    fn test_invalid_degrees() {
        let params = AngleParams {
            degrees: f64::INFINITY,
            ..AngleParams::default()
        };
        assert!(build(&params).is_err());
    }
}
