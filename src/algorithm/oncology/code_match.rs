//! Code classifier seam and outcomes
//!
//! A code classifier answers whether a single normalized ICD-10 code is a
//! cancer code. Codes the classifier does not know are reported as
//! [`CodeMatch::Unrecognized`] rather than as an error, so the oncology
//! classifier can treat them as a miss and move on.

use std::fmt;

use crate::error::Result;

/// Outcome of classifying one ICD-10 code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMatch {
    /// The code denotes a cancer diagnosis
    Match,
    /// The code is known and is not a cancer diagnosis
    NoMatch,
    /// The classifier has no entry for the code
    Unrecognized,
}

impl CodeMatch {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Match => "cancer",
            Self::NoMatch => "not cancer",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for CodeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Classifies normalized ICD-10 codes (no `.` separators) as cancer or not
pub trait CodeClassifier {
    /// Classify a single code.
    ///
    /// Errors are reserved for failures of the classifier itself; an unknown
    /// code is `Ok(CodeMatch::Unrecognized)`.
    fn classify(&self, code: &str) -> Result<CodeMatch>;
}
