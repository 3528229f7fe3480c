//! Tests for content detection and margin reports

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use mathmatix_tools::sprite::bounds::{
        ContentBounds, PixelGrid, VerticalMargins, first_cell_report, middle_cell_report,
        row_margins, rounded_row_span,
    };
    use std::ops::Range;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn sheet_with_block(width: u32, height: u32, rows: Range<u32>, cols: Range<u32>) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(width, height, WHITE);
        for y in rows {
            for x in cols.clone() {
                img.put_pixel(x, y, BLACK);
            }
        }
        img
    }

    // Tests bounds of a single dark block
    // Verified by reporting exclusive last indices
    #[test]
    fn test_content_bounds_block() {
        let grid = PixelGrid::from_image(&sheet_with_block(20, 20, 5..10, 3..7)).unwrap();
        let bounds = grid.content_bounds(0..20, 0..20, 250).unwrap();

        assert_eq!(
            bounds,
            ContentBounds {
                first_row: 5,
                last_row: 9,
                first_col: 3,
                last_col: 6
            }
        );
        assert_eq!(bounds.width(), 4);
        assert_eq!(bounds.height(), 5);
    }

    // Tests bounds are relative to the region
    // Verified by returning absolute coordinates
    #[test]
    fn test_content_bounds_relative_to_region() {
        let grid = PixelGrid::from_image(&sheet_with_block(20, 20, 12..14, 12..15)).unwrap();
        let bounds = grid.content_bounds(10..20, 10..20, 250).unwrap();
        assert_eq!((bounds.first_row, bounds.first_col), (2, 2));
        assert!(grid.content_bounds(0..10, 0..10, 250).is_none());
    }

    // Tests the threshold is strict and alpha is ignored
    // Verified by comparing with less-or-equal
    #[test]
    fn test_threshold_and_alpha() {
        let mut img = RgbaImage::from_pixel(3, 1, Rgba([250, 250, 250, 255]));
        let grid = PixelGrid::from_image(&img).unwrap();
        assert!(grid.content_bounds(0..1, 0..3, 250).is_none());

        img.put_pixel(1, 0, Rgba([255, 249, 255, 255]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 0]));
        let grid = PixelGrid::from_image(&img).unwrap();
        let bounds = grid.content_bounds(0..1, 0..3, 250).unwrap();
        assert_eq!((bounds.first_col, bounds.last_col), (1, 2));
    }

    // Tests margins of a cell and of a blank cell
    // Verified by omitting the off-by-one in the bottom margin
    #[test]
    fn test_vertical_margins() {
        let bounds = ContentBounds {
            first_row: 5,
            last_row: 9,
            first_col: 0,
            last_col: 0,
        };
        let margins = VerticalMargins::from_bounds(20, Some(bounds));
        assert_eq!(margins.content_height, 5);
        assert_eq!(margins.top_margin, 5);
        assert_eq!(margins.bottom_margin, 10);

        let blank = VerticalMargins::from_bounds(20, None);
        assert_eq!((blank.content_height, blank.top_margin, blank.bottom_margin), (0, 0, 0));
        assert!(blank.to_string().contains("content=0px"));
    }

    // Tests the first cell uses simple division
    // Verified by swapping rows and columns
    #[test]
    fn test_first_cell_report() {
        let grid = PixelGrid::from_image(&sheet_with_block(40, 50, 2..8, 1..4)).unwrap();
        let report = first_cell_report(&grid, 4, 5, 250);

        assert_eq!((report.cell_width, report.cell_height), (10, 10));
        let bounds = report.bounds.unwrap();
        assert_eq!((bounds.first_row, bounds.last_row), (2, 7));
        assert!(report.to_string().contains("Content height: 8 pixels"));
    }

    // Tests rounded row boundaries
    // Verified by truncating instead of rounding
    #[test]
    fn test_rounded_row_span() {
        assert_eq!(rounded_row_span(1356, 2, 5), (542, 814));
        assert_eq!(rounded_row_span(500, 0, 5), (0, 100));
    }

    // Tests per-row margins and the middle cell
    // Verified by measuring column 1 instead of column 0
    #[test]
    fn test_row_margins() {
        let grid = PixelGrid::from_image(&sheet_with_block(40, 50, 23..26, 0..2)).unwrap();
        let rows = row_margins(&grid, 4, 5, 250);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows.get(2).map(|m| m.content_height), Some(3));
        assert_eq!(rows.first().map(|m| m.content_height), Some(0));

        let middle = middle_cell_report(&grid, 4, 5, 250);
        assert_eq!(middle.top_margin, 3);
        assert_eq!(middle.bottom_margin, 4);
    }

    // Tests pixel access and region clamping
    // Verified by panicking on out-of-range regions
    #[test]
    fn test_pixel_access() {
        let grid = PixelGrid::from_image(&sheet_with_block(4, 3, 0..1, 0..1)).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.rgb(0, 0), Some([0, 0, 0]));
        assert_eq!(grid.rgb(2, 3), Some([255, 255, 255]));
        assert_eq!(grid.rgb(3, 0), None);
        assert_eq!(grid.region(0..10, 2..10).dim(), (3, 2, 4));
    }
}
