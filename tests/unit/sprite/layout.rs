//! Tests for sheet cell geometry and layout files

#[cfg(test)]
mod tests {
    use mathmatix_tools::ToolError;
    use mathmatix_tools::sprite::layout::{
        AVATAR_NAMES, CellRect, DEFAULT_ROW_BANDS, LayoutFile, SheetLayout, default_names,
        rounded_spans, uniform_spans,
    };
    use std::path::Path;

    // Tests uniform division in reading order
    // Verified by iterating columns before rows
    #[test]
    fn test_uniform_cells_reading_order() {
        let cells = SheetLayout::default().cells(400, 500).unwrap();
        assert_eq!(cells.len(), 20);
        assert_eq!(
            cells.first().copied(),
            Some(CellRect {
                x: 0,
                y: 0,
                width: 100,
                height: 100
            })
        );
        assert_eq!(cells.get(1).map(|c| (c.x, c.y)), Some((100, 0)));
        assert_eq!(cells.get(4).map(|c| (c.x, c.y)), Some((0, 100)));
        assert_eq!(cells.last().map(|c| (c.right(), c.bottom())), Some((400, 500)));
    }

    // Tests remainder pixels are dropped by integer division
    // Verified by rounding the cell size up
    #[test]
    fn test_uniform_drops_remainder() {
        let cells = SheetLayout::default().cells(403, 502).unwrap();
        assert!(cells.iter().all(|c| c.width == 100 && c.height == 100));
        assert_eq!(uniform_spans(403, 4).last().copied(), Some((300, 400)));
    }

    // Tests rounded boundaries use half-to-even rounding
    // Verified by rounding halves away from zero
    #[test]
    fn test_rounded_spans() {
        assert_eq!(
            rounded_spans(10, 4),
            vec![(0, 2), (2, 5), (5, 8), (8, 10)]
        );

        let layout = SheetLayout::Rounded { cols: 4, rows: 5 };
        let cells = layout.cells(10, 1356).unwrap();
        assert_eq!(cells.last().map(CellRect::bottom), Some(1356));
    }

    // Tests the measured band table
    // Verified by dividing the height uniformly instead
    #[test]
    fn test_banded_default() {
        let layout = SheetLayout::banded_default();
        assert_eq!(layout.rows(), DEFAULT_ROW_BANDS.len() as u32);

        let cells = layout.cells(1024, 1400).unwrap();
        assert_eq!(cells.len(), 20);
        let second_row = cells.get(4).copied().unwrap();
        assert_eq!((second_row.y, second_row.height), (289, 230));
        assert_eq!(second_row.width, 256);
    }

    // Tests bands past the sheet bottom or inverted are rejected
    // Verified by padding instead of rejecting
    #[test]
    fn test_banded_rejects_bad_bands() {
        let short_sheet = SheetLayout::banded_default().cells(1024, 1300);
        assert!(matches!(short_sheet, Err(ToolError::InvalidLayout { .. })));

        let inverted = SheetLayout::Banded {
            cols: 1,
            bands: vec![(50, 10)],
        };
        assert!(matches!(
            inverted.cells(10, 100),
            Err(ToolError::InvalidLayout { .. })
        ));
    }

    // Tests zero-sized grids and cells are rejected
    // Verified by allowing zero-width cells
    #[test]
    fn test_invalid_grids() {
        let no_cols = SheetLayout::Uniform { cols: 0, rows: 5 };
        assert!(matches!(
            no_cols.cells(100, 100),
            Err(ToolError::InvalidParameter { parameter: "cols", .. })
        ));

        let too_small = SheetLayout::default().cells(3, 3);
        assert!(matches!(too_small, Err(ToolError::InvalidLayout { .. })));
    }

    // Tests layout file overrides and defaults
    // Verified by ignoring the bands field
    #[test]
    fn test_layout_file_apply() {
        let file = LayoutFile::parse("cols = 2\nrows = 3\n", Path::new("layout.toml")).unwrap();
        assert_eq!(
            file.apply(SheetLayout::default()),
            SheetLayout::Uniform { cols: 2, rows: 3 }
        );
        assert_eq!(file.names(), default_names());

        let banded = LayoutFile::parse("bands = [[0, 5], [6, 9]]\n", Path::new("layout.toml"))
            .unwrap();
        assert_eq!(
            banded.apply(SheetLayout::Rounded { cols: 4, rows: 5 }),
            SheetLayout::Banded {
                cols: 4,
                bands: vec![(0, 5), (6, 9)]
            }
        );
    }

    // Tests unknown keys in a layout file are reported with the path
    // Verified by allowing unknown fields
    #[test]
    fn test_layout_file_rejects_unknown_keys() {
        let error = LayoutFile::parse("colums = 4\n", Path::new("sheet.toml")).unwrap_err();
        assert!(matches!(error, ToolError::LayoutFile { .. }));
        assert!(error.to_string().contains("sheet.toml"));
    }

    // Tests the avatar names stay in reading order
    // Verified by reordering the table
    #[test]
    fn test_avatar_names() {
        assert_eq!(AVATAR_NAMES.first().copied(), Some("lion"));
        assert_eq!(AVATAR_NAMES.get(4).copied(), Some("dragon"));
        assert_eq!(AVATAR_NAMES.last().copied(), Some("dinosaur"));
    }
}
