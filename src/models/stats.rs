//! Per-year success counters and the derived rate table

use std::collections::BTreeMap;

/// Success and total counts of oncology trials for one start year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearStats {
    pub success_count: u64,
    pub total_count: u64,
}

impl YearStats {
    /// Count one oncology trial with the given outcome label
    pub fn record(&mut self, label: u8) {
        self.success_count += u64::from(label);
        self.total_count += 1;
    }

    /// Percentage of successful trials, `None` when nothing was counted
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_count == 0 {
            return None;
        }
        Some(self.success_count as f64 / self.total_count as f64 * 100.0)
    }
}

/// Success rate (0-100) per trial start year, in ascending year order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<u32, f64>,
}

impl RateTable {
    /// Derive rates for every year with at least one counted trial
    #[must_use]
    pub fn from_stats(stats: &BTreeMap<u32, YearStats>) -> Self {
        let rates = stats
            .iter()
            .filter_map(|(year, s)| s.success_rate().map(|rate| (*year, rate)))
            .collect();
        Self { rates }
    }

    #[must_use]
    pub fn get(&self, year: u32) -> Option<f64> {
        self.rates.get(&year).copied()
    }

    /// Iterate `(year, rate)` pairs in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.rates.iter().map(|(year, rate)| (*year, *rate))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
