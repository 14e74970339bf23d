//! ICD-10 to CCS category mapping classifier
//!
//! Loads a comma-separated mapping of ICD-10 codes to Clinical
//! Classifications Software (CCS) single-level diagnosis categories and
//! treats the neoplasm categories as cancer. Codes missing from the mapping
//! are unrecognized.

use std::collections::HashMap;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Instant;

use log::debug;
use serde::Deserialize;

use crate::error::util::safe_open_file;
use crate::error::{OncoRateError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

use super::code_match::{CodeClassifier, CodeMatch};

/// CCS single-level categories covering neoplasms (11 head and neck cancer
/// through 45 maintenance chemotherapy/radiotherapy)
pub const CANCER_CCS_CATEGORIES: RangeInclusive<u16> = 11..=45;

#[derive(Debug, Deserialize)]
struct MappingRow {
    icd10_code: String,
    ccs_category: String,
}

/// Mapping-driven cancer classifier
#[derive(Debug, Clone, Default)]
pub struct CcsCancerFilter {
    categories: HashMap<String, u16>,
}

impl CcsCancerFilter {
    /// Load the mapping from a CSV file with `icd10_code` and `ccs_category`
    /// header columns
    pub fn from_path(path: &Path) -> Result<Self> {
        log_operation_start("Loading ICD-10 to CCS mapping from", path);
        let start = Instant::now();

        let file = safe_open_file(path, "loading ICD-10 to CCS mapping")?;
        let filter = Self::from_reader(file)?;

        log_operation_complete("loaded", path, filter.len(), Some(start.elapsed()));
        Ok(filter)
    }

    /// Load the mapping from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut categories = HashMap::new();

        for (index, row) in csv_reader.deserialize::<MappingRow>().enumerate() {
            let row = row?;
            let code = normalize_mapping_code(&row.icd10_code);
            let category_text = strip_quotes(&row.ccs_category);
            let category = category_text.parse::<u16>().map_err(|_| {
                OncoRateError::Mapping(format!(
                    "row {}: CCS category for {code} is not a number: {:?}",
                    index + 1,
                    row.ccs_category
                ))
            })?;

            if code.is_empty() {
                debug!("Skipping mapping row {} with an empty ICD-10 code", index + 1);
                continue;
            }
            categories.insert(code, category);
        }

        Ok(Self { categories })
    }

    /// Number of mapped codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// CCS category for a code, if mapped
    #[must_use]
    pub fn category(&self, code: &str) -> Option<u16> {
        self.categories.get(&normalize_mapping_code(code)).copied()
    }
}

impl CodeClassifier for CcsCancerFilter {
    fn classify(&self, code: &str) -> Result<CodeMatch> {
        Ok(match self.category(code) {
            Some(category) if CANCER_CCS_CATEGORIES.contains(&category) => CodeMatch::Match,
            Some(_) => CodeMatch::NoMatch,
            None => CodeMatch::Unrecognized,
        })
    }
}

/// HCUP distributes the mapping with values wrapped in single quotes
fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches('\'').trim()
}

fn normalize_mapping_code(code: &str) -> String {
    strip_quotes(code).replace('.', "").to_uppercase()
}
