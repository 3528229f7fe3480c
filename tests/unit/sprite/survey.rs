//! Tests for boundary sampling and split recommendations

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use mathmatix_tools::sprite::bounds::PixelGrid;
    use mathmatix_tools::sprite::survey::{GridSurvey, rgb_label};

    fn grid(width: u32, height: u32) -> PixelGrid {
        let mut img = RgbaImage::from_pixel(width, height, Rgba([240, 240, 240, 255]));
        img.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        PixelGrid::from_image(&img).unwrap()
    }

    // Tests boundary samples stay inside the image
    // Verified by sampling the closing boundary at x = width
    #[test]
    fn test_boundary_samples() {
        let survey = GridSurvey::run(&grid(40, 50), 4, 5);

        let xs: Vec<usize> = survey.column_samples.iter().map(|s| s.offset).collect();
        assert_eq!(xs, vec![0, 10, 20, 30]);
        let ys: Vec<usize> = survey.row_samples.iter().map(|s| s.offset).collect();
        assert_eq!(ys, vec![0, 10, 20, 30, 40]);
        assert!(survey.row_samples.iter().all(|s| s.rgb == [240, 240, 240]));
    }

    // Tests fractional row height and pixels lost to integer division
    // Verified by dividing with integers
    #[test]
    fn test_row_height_accounting() {
        let survey = GridSurvey::run(&grid(40, 52), 4, 5);
        assert!((survey.exact_row_height() - 10.4).abs() < 1e-9);
        assert_eq!(survey.lost_rows(), 2);
        assert_eq!(survey.recommended_rows.last().copied(), Some((42, 52)));
        assert_eq!(survey.recommended_cols.len(), 4);
    }

    // Tests the corner colour and printed report
    // Verified by sampling the bottom-right corner
    #[test]
    fn test_report() {
        let survey = GridSurvey::run(&grid(40, 50), 4, 5);
        assert_eq!(survey.corner, Some([1, 2, 3]));

        let report = survey.to_string();
        assert!(report.contains("Image size: 40x50"));
        assert!(report.contains("=== RECOMMENDED SPLIT ==="));
        assert!(report.contains("Row 4: y=40 to y=50 (height=10)"));
        assert!(report.contains("Exact row height: 10.0\n"));
        assert!(report.contains("Column 1: pixel at x=10, RGB=[240 240 240]"));
        assert!(report.contains("Top-left corner color: [1 2 3]"));

        let uneven = GridSurvey::run(&grid(40, 52), 4, 5).to_string();
        assert!(uneven.contains("Exact row height: 10.4\n"));
    }

    // Tests colours print space-separated and right-aligned
    // Verified by printing the comma-separated array
    #[test]
    fn test_rgb_label() {
        assert_eq!(rgb_label([254, 254, 254]), "[254 254 254]");
        assert_eq!(rgb_label([0, 128, 255]), "[  0 128 255]");
        assert_eq!(rgb_label([1, 2, 3]), "[1 2 3]");
        assert_eq!(rgb_label([9, 10, 0]), "[ 9 10  0]");
    }
}
