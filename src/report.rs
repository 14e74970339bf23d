//! Plain-text rate report

use std::io::{self, Write};

use crate::models::RateTable;

/// Write one `<year>\t<rate>` line per year in ascending year order, rates
/// with two decimals
pub fn write_report<W: Write>(rates: &RateTable, mut writer: W) -> io::Result<()> {
    writer.write_all(format_report(rates).as_bytes())?;
    writer.flush()
}

/// Render the report into a string
#[must_use]
pub fn format_report(rates: &RateTable) -> String {
    rates
        .iter()
        .map(|(year, rate)| format!("{year}\t{rate:.2}\n"))
        .collect()
}
