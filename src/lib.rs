//! Per-year success rates of oncology clinical trials.
//!
//! Trials are classified as oncology-related from their disease names and
//! ICD-10 codes, joined against their start years, and aggregated into a
//! success percentage per year.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::oncology::{
    CcsCancerFilter, CodeClassifier, CodeMatch, Icd10NeoplasmFilter, OncologyClassifier,
};
pub use algorithm::rates::{AggregationSummary, RateAggregator, aggregate_trials, compute_rates};
pub use config::PipelineConfig;
pub use error::{OncoRateError, Result};
pub use loader::{StartYearIndex, UNKNOWN_YEAR, load_start_years};
pub use models::{RateTable, TrialRecord, YearStats};
pub use parse::{parse_disease_list, parse_icd_code_list};
pub use report::{format_report, write_report};
