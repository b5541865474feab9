//! Statistics and achievements.
//!
//! [`Statistics`] holds the counters, [`achievement`] the fixed catalog of
//! rules over them, and [`StatsStore`] ties both to the statistics file.

pub mod achievement;
mod statistics;
mod store;

pub use achievement::{Achievement, Rule, CATALOG};
pub use statistics::{ModeRecord, Statistics};
pub use store::StatsStore;
