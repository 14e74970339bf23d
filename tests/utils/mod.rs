use std::fs;
use std::path::PathBuf;

use onco_rate::PipelineConfig;
use tempfile::TempDir;

pub const TRIAL_HEADER: &str = "nctid,status,why_stop,label,phase,diseases,icdcodes";

/// Input files for one pipeline run, removed when dropped
pub struct Fixture {
    pub dir: TempDir,
    pub config: PipelineConfig,
}

impl Fixture {
    /// Write a trial table (header added) and a start-year file
    pub fn new(trial_rows: &[&str], start_year_lines: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let trial_table = dir.path().join("raw_data.csv");
        let start_year_file = dir.path().join("nctid_date.txt");

        let mut trials = String::from(TRIAL_HEADER);
        trials.push('\n');
        for row in trial_rows {
            trials.push_str(row);
            trials.push('\n');
        }
        fs::write(&trial_table, trials).unwrap();

        let mut years = String::new();
        for line in start_year_lines {
            years.push_str(line);
            years.push('\n');
        }
        fs::write(&start_year_file, years).unwrap();

        Self {
            dir,
            config: PipelineConfig {
                trial_table,
                start_year_file,
                ..Default::default()
            },
        }
    }

    /// Write an ICD-10 to CCS mapping and use it for the run
    pub fn with_mapping(mut self, mapping: &str) -> Self {
        let path: PathBuf = self.dir.path().join("icd10_ccs.csv");
        fs::write(&path, mapping).unwrap();
        self.config.icd_mapping = Some(path);
        self
    }
}

/// A trial table row with the unused columns filled in
pub fn trial_row(nctid: &str, label: u8, diseases: &str, icd_codes: &str) -> String {
    format!(
        "{nctid},completed,,{label},phase 2,\"{}\",\"{}\"",
        diseases.replace('"', "\"\""),
        icd_codes.replace('"', "\"\"")
    )
}
