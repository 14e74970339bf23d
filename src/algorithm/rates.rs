//! Per-year oncology trial success rates
//!
//! Streams the trial table once, keeping only the per-year counters in
//! memory. Trials without a known start year and trials that are not
//! oncology-related never reach the counters.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use log::{debug, trace};

use crate::algorithm::oncology::OncologyClassifier;
use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::loader::{StartYearIndex, UNKNOWN_YEAR};
use crate::models::{RateTable, TrialRecord, YearStats};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Counters describing what happened to each trial table row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// Data rows read, header excluded
    pub rows_read: usize,
    /// Rows whose identifier is absent from the start-year index
    pub missing_year: usize,
    /// Rows whose indexed start year is unknown
    pub unknown_year: usize,
    /// Rows with a known year that are not oncology-related
    pub non_oncology: usize,
    /// Rows counted towards a year's statistics
    pub counted: usize,
}

impl fmt::Display for AggregationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows read, {} counted, {} without start year entry, {} with unknown start year, {} not oncology",
            self.rows_read, self.counted, self.missing_year, self.unknown_year, self.non_oncology
        )
    }
}

/// Accumulates oncology trial outcomes per start year
pub struct RateAggregator<'a> {
    year_index: &'a StartYearIndex,
    classifier: &'a OncologyClassifier,
    stats: BTreeMap<u32, YearStats>,
    summary: AggregationSummary,
}

impl<'a> RateAggregator<'a> {
    #[must_use]
    pub fn new(year_index: &'a StartYearIndex, classifier: &'a OncologyClassifier) -> Self {
        Self {
            year_index,
            classifier,
            stats: BTreeMap::new(),
            summary: AggregationSummary::default(),
        }
    }

    /// Add one trial record to the statistics
    pub fn add_record(&mut self, record: &TrialRecord) -> Result<()> {
        self.summary.rows_read += 1;

        let year = match self.year_index.get(&record.nctid) {
            None => {
                trace!("{} has no start year entry, skipping", record.nctid);
                self.summary.missing_year += 1;
                return Ok(());
            }
            Some(UNKNOWN_YEAR) => {
                trace!("{} has an unknown start year, skipping", record.nctid);
                self.summary.unknown_year += 1;
                return Ok(());
            }
            Some(year) => year,
        };

        if !self.classifier.classify(record)? {
            self.summary.non_oncology += 1;
            return Ok(());
        }

        self.stats.entry(year).or_default().record(record.label);
        self.summary.counted += 1;
        Ok(())
    }

    /// Counters accumulated so far
    #[must_use]
    pub fn stats(&self) -> &BTreeMap<u32, YearStats> {
        &self.stats
    }

    #[must_use]
    pub fn summary(&self) -> AggregationSummary {
        self.summary
    }

    /// Derive the rate table from the accumulated counters
    #[must_use]
    pub fn finish(self) -> (RateTable, AggregationSummary) {
        (RateTable::from_stats(&self.stats), self.summary)
    }
}

/// Stream a trial table with a header row and aggregate it
pub fn aggregate_trials<R: Read>(
    primary_table: R,
    year_index: &StartYearIndex,
    classifier: &OncologyClassifier,
) -> Result<(RateTable, AggregationSummary)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(primary_table);
    let mut aggregator = RateAggregator::new(year_index, classifier);
    let mut row = csv::StringRecord::new();
    let mut row_number = 0;

    while reader.read_record(&mut row)? {
        row_number += 1;
        let record = TrialRecord::from_csv_record(&row, row_number)?;
        aggregator.add_record(&record)?;
    }

    let (rates, summary) = aggregator.finish();
    debug!("Aggregation finished: {summary}");
    Ok((rates, summary))
}

/// Compute per-year success rates of oncology trials
pub fn compute_rates<R: Read>(
    primary_table: R,
    year_index: &StartYearIndex,
    classifier: &OncologyClassifier,
) -> Result<RateTable> {
    aggregate_trials(primary_table, year_index, classifier).map(|(rates, _)| rates)
}

/// Open the trial table at `path` and aggregate it
pub fn aggregate_trials_from_path(
    path: &Path,
    year_index: &StartYearIndex,
    classifier: &OncologyClassifier,
) -> Result<(RateTable, AggregationSummary)> {
    log_operation_start("Aggregating oncology trials from", path);
    let start = Instant::now();

    let file = safe_open_file(path, "reading trial table")?;
    let (rates, summary) = aggregate_trials(file, year_index, classifier)?;

    log_operation_complete("aggregated", path, summary.rows_read, Some(start.elapsed()));
    Ok((rates, summary))
}
