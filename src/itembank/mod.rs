//! Item bank repair: date-serial cleanup, grade normalisation and scoring

/// Heuristic difficulty scoring
pub mod difficulty;
/// Grade level normalisation
pub mod grade;
/// Typed output rows
pub mod record;
/// File and stream repair pipeline
pub mod repair;
/// Date serial reverse mapping
pub mod serial;

pub use record::ItemRecord;
pub use repair::{RepairJob, RepairSummary, repair};
