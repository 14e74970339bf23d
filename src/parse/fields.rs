//! Lenient extraction of disease names and ICD-10 codes from trial table fields
//!
//! Malformed fields never fail the caller: a field that cannot be parsed
//! yields an empty list, and a bad ICD-10 entry is skipped on its own.

use log::trace;

use super::literal::{Literal, parse_literal};

/// Parse a literal list of disease names into lowercase strings.
///
/// Returns an empty list if `text` is not a sequence of strings.
#[must_use]
pub fn parse_disease_list(text: &str) -> Vec<String> {
    match parse_literal(text).map(Literal::into_strings) {
        Ok(Some(names)) => names.into_iter().map(|name| name.to_lowercase()).collect(),
        Ok(None) => {
            trace!("Disease field is not a list of strings: {text:?}");
            Vec::new()
        }
        Err(e) => {
            trace!("Unparseable disease field {text:?}: {e}");
            Vec::new()
        }
    }
}

/// Parse a literal list of ICD-10 code groups into normalized codes.
///
/// Each entry of the outer list is either a string holding another encoded
/// list (`["['C50.1']"]`) or a list already (`[['C50.1']]`). Entries that do
/// not yield a list of strings are skipped. Codes have `.` removed.
#[must_use]
pub fn parse_icd_code_list(text: &str) -> Vec<String> {
    let entries = match parse_literal(text) {
        Ok(Literal::Seq(entries)) => entries,
        Ok(Literal::Str(_) | Literal::Scalar) => {
            trace!("ICD-10 field is not a list: {text:?}");
            return Vec::new();
        }
        Err(e) => {
            trace!("Unparseable ICD-10 field {text:?}: {e}");
            return Vec::new();
        }
    };

    let mut codes = Vec::new();
    for entry in entries {
        let group = match entry {
            Literal::Str(encoded) => parse_literal(&encoded)
                .ok()
                .and_then(Literal::into_strings),
            other => other.into_strings(),
        };

        match group {
            Some(group) => codes.extend(group.iter().map(|code| normalize_icd_code(code))),
            None => trace!("Skipping malformed ICD-10 entry in {text:?}"),
        }
    }
    codes
}

/// Remove `.` separators from an ICD-10 code (`C50.1` -> `C501`)
#[must_use]
pub fn normalize_icd_code(code: &str) -> String {
    code.replace('.', "")
}
