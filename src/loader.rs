//! Trial start-year loading
//!
//! The start-year file is tab-separated with exactly three fields per line:
//! trial identifier, free-text start date whose last token is the year, and
//! an unused field. A line with any other field count fails the whole load.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, trace};

use crate::error::util::safe_open_file;
use crate::error::{OncoRateError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Year recorded for trials whose start date is missing or unparseable
pub const UNKNOWN_YEAR: u32 = 0;

/// Mapping from trial identifier to start year
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartYearIndex {
    years: HashMap<String, u32>,
}

impl StartYearIndex {
    /// Year recorded for a trial, [`UNKNOWN_YEAR`] included
    #[must_use]
    pub fn get(&self, nctid: &str) -> Option<u32> {
        self.years.get(nctid).copied()
    }

    /// Year for a trial, `None` when the trial is absent or its year unknown
    #[must_use]
    pub fn known_year(&self, nctid: &str) -> Option<u32> {
        self.get(nctid).filter(|year| *year != UNKNOWN_YEAR)
    }

    /// Number of indexed trials
    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Number of indexed trials with an unknown year
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.years.values().filter(|year| **year == UNKNOWN_YEAR).count()
    }
}

/// Load the start-year index from a file
pub fn load_start_years(path: &Path) -> Result<StartYearIndex> {
    log_operation_start("Loading trial start years from", path);
    let start = Instant::now();

    let file = safe_open_file(path, "loading trial start years")?;
    let index = read_start_years(BufReader::new(file), path)?;

    debug!(
        "{} of {} trials have an unknown start year",
        index.unknown_count(),
        index.len()
    );
    log_operation_complete("loaded", path, index.len(), Some(start.elapsed()));
    Ok(index)
}

/// Read the start-year index from any buffered source; `path` is only used
/// in error messages
pub fn read_start_years<R: BufRead>(reader: R, path: &Path) -> Result<StartYearIndex> {
    let mut years = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| {
            OncoRateError::io(path, format!("reading line {line_number}"), e)
        })?;
        let line = line.trim_end_matches(['\r', '\n']);

        let fields: Vec<&str> = line.split('\t').collect();
        let [nctid, start_date, _] = fields[..] else {
            return Err(OncoRateError::MalformedStartYearLine {
                path: PathBuf::from(path),
                line: line_number,
                found: fields.len(),
            });
        };

        let year = parse_start_year(start_date);
        if year == UNKNOWN_YEAR {
            trace!("No usable start year for {nctid}: {start_date:?}");
        }
        years.insert(nctid.to_string(), year);
    }

    Ok(StartYearIndex { years })
}

/// Year from the last whitespace-separated token of a start date such as
/// `"March 2015"`; [`UNKNOWN_YEAR`] when empty or not a number
#[must_use]
pub fn parse_start_year(start_date: &str) -> u32 {
    start_date
        .split_whitespace()
        .next_back()
        .and_then(|token| token.parse::<u32>().ok())
        .unwrap_or(UNKNOWN_YEAR)
}
