//! Trial record model
//!
//! One row of the primary trial table. Only the columns the rate
//! computation needs are kept; the rest of the row is ignored.

use csv::StringRecord;

use crate::error::{OncoRateError, Result};

/// Column positions in the trial table
pub const NCTID_COLUMN: usize = 0;
pub const LABEL_COLUMN: usize = 3;
pub const DISEASE_COLUMN: usize = 5;
pub const ICD_COLUMN: usize = 6;

/// A single clinical trial row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRecord {
    /// Trial identifier, the join key against the start-year file
    pub nctid: String,
    /// Trial outcome, 1 for success and 0 otherwise
    pub label: u8,
    /// Literal-encoded list of disease names
    pub disease_text: String,
    /// Literal-encoded list of ICD-10 code lists
    pub icd_text: String,
}

impl TrialRecord {
    /// Build a record from a CSV row.
    ///
    /// `row` is the 1-based data row number used in error messages.
    pub fn from_csv_record(record: &StringRecord, row: usize) -> Result<Self> {
        let column = |index: usize, name: &str| {
            record.get(index).ok_or_else(|| {
                OncoRateError::trial_row(
                    row,
                    format!("missing {name} column {index} (row has {} fields)", record.len()),
                )
            })
        };

        let label_text = column(LABEL_COLUMN, "label")?;
        let label = match label_text.trim().parse::<u8>() {
            Ok(label @ (0 | 1)) => label,
            _ => {
                return Err(OncoRateError::trial_row(
                    row,
                    format!("label must be 0 or 1, found {label_text:?}"),
                ));
            }
        };

        Ok(Self {
            nctid: column(NCTID_COLUMN, "nctid")?.to_string(),
            label,
            disease_text: column(DISEASE_COLUMN, "disease")?.to_string(),
            icd_text: column(ICD_COLUMN, "icd")?.to_string(),
        })
    }
}
