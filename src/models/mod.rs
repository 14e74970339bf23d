//! Domain models for the oncology rate pipeline

pub mod stats;
pub mod trial;

pub use stats::{RateTable, YearStats};
pub use trial::TrialRecord;
