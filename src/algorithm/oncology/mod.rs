//! Oncology classification of trial records
//!
//! A trial is oncology-related when its joined disease names contain one of
//! the oncology keywords, or failing that, when any of its ICD-10 codes is a
//! cancer code according to the configured [`CodeClassifier`].

pub mod ccs;
pub mod code_match;
pub mod neoplasm;

use itertools::Itertools;
use log::trace;

use crate::config::DEFAULT_ONCOLOGY_KEYWORDS;
use crate::error::Result;
use crate::models::TrialRecord;
use crate::parse::{parse_disease_list, parse_icd_code_list};

pub use ccs::{CANCER_CCS_CATEGORIES, CcsCancerFilter};
pub use code_match::{CodeClassifier, CodeMatch};
pub use neoplasm::Icd10NeoplasmFilter;

/// Keyword and ICD-10 based oncology classifier
pub struct OncologyClassifier {
    keywords: Vec<String>,
    code_classifier: Box<dyn CodeClassifier>,
}

impl OncologyClassifier {
    /// Create a classifier with the default keywords
    #[must_use]
    pub fn new(code_classifier: Box<dyn CodeClassifier>) -> Self {
        Self::with_keywords(DEFAULT_ONCOLOGY_KEYWORDS, code_classifier)
    }

    /// Create a classifier with custom keywords; they are lowercased since
    /// disease names are
    #[must_use]
    pub fn with_keywords<I, S>(keywords: I, code_classifier: Box<dyn CodeClassifier>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            code_classifier,
        }
    }

    /// Decide whether the encoded disease and ICD-10 fields describe an
    /// oncology trial.
    ///
    /// Only classifier failures propagate; malformed fields and unrecognized
    /// codes count as misses.
    pub fn is_oncology(&self, disease_text: &str, icd_text: &str) -> Result<bool> {
        let diseases = parse_disease_list(disease_text).join(" ");
        if let Some(keyword) = self.keywords.iter().find(|k| diseases.contains(k.as_str())) {
            trace!("Keyword {keyword:?} matched diseases {diseases:?}");
            return Ok(true);
        }

        for code in parse_icd_code_list(icd_text) {
            match self.code_classifier.classify(&code)? {
                CodeMatch::Match => {
                    trace!("ICD-10 code {code} classified as cancer");
                    return Ok(true);
                }
                CodeMatch::NoMatch => {}
                CodeMatch::Unrecognized => trace!("ICD-10 code {code} not recognized, skipping"),
            }
        }

        Ok(false)
    }

    /// Classify a trial record
    pub fn classify(&self, record: &TrialRecord) -> Result<bool> {
        self.is_oncology(&record.disease_text, &record.icd_text)
    }

    /// Keywords searched for in the disease names
    #[must_use]
    pub fn keywords(&self) -> String {
        self.keywords.iter().join(", ")
    }
}
