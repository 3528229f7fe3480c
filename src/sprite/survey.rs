//! Grid survey: samples boundary pixels and recommends a rounded split

use crate::diagram::labels::float_label;
use crate::sprite::bounds::PixelGrid;
use crate::sprite::layout::rounded_spans;
use std::fmt;

/// A pixel sampled on a candidate grid boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundarySample {
    /// Boundary index
    pub index: usize,
    /// Pixel coordinate along the sampled axis
    pub offset: usize,
    /// RGB colour at the sample
    pub rgb: [u8; 3],
}

/// Everything the survey learned about a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct GridSurvey {
    /// Sheet width
    pub width: usize,
    /// Sheet height
    pub height: usize,
    /// Columns assumed
    pub cols: usize,
    /// Rows assumed
    pub rows: usize,
    /// Samples along the middle pixel row at each column boundary
    pub column_samples: Vec<BoundarySample>,
    /// Samples along the middle pixel column at each row boundary
    pub row_samples: Vec<BoundarySample>,
    /// Top-left corner colour, usually the background
    pub corner: Option<[u8; 3]>,
    /// Recommended `(start, end)` rows
    pub recommended_rows: Vec<(u32, u32)>,
    /// Recommended `(start, end)` columns
    pub recommended_cols: Vec<(u32, u32)>,
}

impl GridSurvey {
    /// Survey `grid` assuming `cols` x `rows` cells
    pub fn run(grid: &PixelGrid, cols: usize, rows: usize) -> Self {
        let width = grid.width();
        let height = grid.height();
        let cols = cols.max(1);
        let rows = rows.max(1);

        let mid_row = height / 2;
        let col_step = width / cols;
        let column_samples = (0..=cols)
            .map(|i| (i, i * col_step))
            .filter(|&(_, x)| x < width)
            .filter_map(|(index, offset)| {
                grid.rgb(mid_row, offset).map(|rgb| BoundarySample { index, offset, rgb })
            })
            .collect();

        let mid_col = width / 2;
        let row_step = height / rows;
        let row_samples = (0..=rows)
            .map(|j| (j, j * row_step))
            .filter(|&(_, y)| y < height)
            .filter_map(|(index, offset)| {
                grid.rgb(offset, mid_col).map(|rgb| BoundarySample { index, offset, rgb })
            })
            .collect();

        Self {
            width,
            height,
            cols,
            rows,
            column_samples,
            row_samples,
            corner: grid.rgb(0, 0),
            recommended_rows: rounded_spans(height as u32, rows as u32),
            recommended_cols: rounded_spans(width as u32, cols as u32),
        }
    }

    /// Fractional row height
    pub fn exact_row_height(&self) -> f64 {
        self.height as f64 / self.rows as f64
    }

    /// Pixels discarded by integer row division
    pub const fn lost_rows(&self) -> usize {
        self.height % self.rows
    }
}

/// Channels separated by spaces and right-aligned to the widest, as `[  0 128 255]`
pub fn rgb_label(rgb: [u8; 3]) -> String {
    let cells = rgb.map(|c| c.to_string());
    let width = cells.iter().map(String::len).max().unwrap_or(1);
    let [r, g, b] = cells;
    format!("[{r:>width$} {g:>width$} {b:>width$}]")
}

impl fmt::Display for GridSurvey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image size: {}x{}", self.width, self.height)?;
        writeln!(
            f,
            "Simple division: {}x{} per avatar",
            self.width / self.cols,
            self.height / self.rows
        )?;

        writeln!(f, "\nAnalyzing potential column boundaries...")?;
        for sample in &self.column_samples {
            writeln!(
                f,
                "Column {}: pixel at x={}, RGB={}",
                sample.index,
                sample.offset,
                rgb_label(sample.rgb)
            )?;
        }

        writeln!(f, "\nAnalyzing potential row boundaries...")?;
        for sample in &self.row_samples {
            writeln!(
                f,
                "Row {}: pixel at y={}, RGB={}",
                sample.index,
                sample.offset,
                rgb_label(sample.rgb)
            )?;
        }

        writeln!(
            f,
            "\nExact row height: {}",
            float_label(self.exact_row_height())
        )?;
        writeln!(f, "Using integer division loses: {} pixels", self.lost_rows())?;

        if let Some(corner) = self.corner {
            writeln!(f, "\nTop-left corner color: {}", rgb_label(corner))?;
        }

        writeln!(f, "\n=== RECOMMENDED SPLIT ===")?;
        for (row, (start, end)) in self.recommended_rows.iter().enumerate() {
            writeln!(
                f,
                "Row {row}: y={start} to y={end} (height={})",
                end - start
            )?;
        }
        for (col, (start, end)) in self.recommended_cols.iter().enumerate() {
            writeln!(f, "Col {col}: x={start} to x={end} (width={})", end - start)?;
        }
        Ok(())
    }
}
