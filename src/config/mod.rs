//! Configuration for the oncology rate pipeline.

use std::path::PathBuf;

/// Keywords that mark a disease list as oncology-related
pub const DEFAULT_ONCOLOGY_KEYWORDS: [&str; 3] = ["cancer", "neoplasm", "tumor"];

/// Configuration for a single pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Comma-separated trial table with a header row
    pub trial_table: PathBuf,
    /// Tab-separated `nctid`, start date, unused field
    pub start_year_file: PathBuf,
    /// Optional ICD-10 to CCS category mapping; the built-in
    /// neoplasm-chapter classifier is used when absent
    pub icd_mapping: Option<PathBuf>,
    /// Lowercase substrings searched for in the joined disease names
    pub oncology_keywords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            trial_table: PathBuf::from("data/raw_data.csv"),
            start_year_file: PathBuf::from("data/nctid_date.txt"),
            icd_mapping: None,
            oncology_keywords: DEFAULT_ONCOLOGY_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
        }
    }
}
