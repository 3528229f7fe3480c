//! Tool constants and runtime configuration defaults

// Avatar sheet defaults
/// Composite sheet read by the uniform splitter
pub const DEFAULT_SHEET_PATH: &str = "avatar-grid.png";
/// Composite sheet read by the banded splitter and the diagnostics
pub const DEFAULT_BANDED_SHEET_PATH: &str = "public/images/avatars/avitar-grid.png";
/// Directory receiving the individual avatar files
pub const DEFAULT_AVATAR_DIR: &str = "public/images/avatars";
/// Number of avatar columns in the composite sheet
pub const GRID_COLS: u32 = 4;
/// Number of avatar rows in the composite sheet
pub const GRID_ROWS: u32 = 5;

// Pixels brighter than this on every RGB channel count as background
/// Background brightness threshold for content detection
pub const BACKGROUND_THRESHOLD: u8 = 250;

// Item bank defaults
/// Item bank read by the repair tool
pub const DEFAULT_ITEM_BANK_INPUT: &str = "item-bank.csv";
/// Repaired item bank written by the repair tool
pub const DEFAULT_ITEM_BANK_OUTPUT: &str = "item-bank-fixed.csv";
/// First spreadsheet date serial treated as corruption
pub const SERIAL_WINDOW_START: u32 = 45_600;
/// Last spreadsheet date serial treated as corruption
pub const SERIAL_WINDOW_END: u32 = 46_050;
/// Question text longer than this many characters is harder
pub const LONG_QUESTION_CHARS: usize = 100;

// Diagram output settings
/// Raster resolution of rendered diagrams
pub const DIAGRAM_DPI: f64 = 150.0;
/// Samples along a parabola curve
pub const PARABOLA_SAMPLES: usize = 300;
/// Samples along an inequality boundary
pub const INEQUALITY_SAMPLES: usize = 300;
/// Samples along a slope-intercept line
pub const LINE_SAMPLES: usize = 100;
/// Most integer ticks a numbered number line draws
pub const MAX_NUMBER_LINE_TICKS: usize = 2_001;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "mathmatix_tools=info";
/// Tracing filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "mathmatix_tools=warn";
