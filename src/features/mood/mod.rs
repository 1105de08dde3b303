//! Daily mood log.
//!
//! One entry per local calendar day, plus a trailing trend.

pub mod entry;
pub mod storage;
pub mod trend;

pub use entry::{MoodEntry, MoodLevel};
pub use storage::MoodStorage;
pub use trend::{MoodTrend, TrendDay, MAX_TREND_DAYS};
