//! Built-in ICD-10 neoplasm classifier
//!
//! Classifies codes by their ICD-10 block: chapter II (Neoplasms) spans
//! `C00-D49`, which includes the `C7A`, `C7B` and `D3A` neuroendocrine
//! blocks. Codes that do not have the shape of an ICD-10 code are
//! unrecognized.

use crate::error::Result;

use super::code_match::{CodeClassifier, CodeMatch};

/// ICD-10 chapter II classifier needing no external data
#[derive(Debug, Clone, Copy, Default)]
pub struct Icd10NeoplasmFilter;

impl Icd10NeoplasmFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CodeClassifier for Icd10NeoplasmFilter {
    fn classify(&self, code: &str) -> Result<CodeMatch> {
        let code = code.trim().to_uppercase();
        let Some((chapter, block)) = split_category(&code) else {
            return Ok(CodeMatch::Unrecognized);
        };

        let is_neoplasm = match chapter {
            'C' => true,
            'D' => block == "3A" || block.parse::<u8>().is_ok_and(|b| b <= 49),
            _ => false,
        };

        Ok(if is_neoplasm {
            CodeMatch::Match
        } else {
            CodeMatch::NoMatch
        })
    }
}

/// Split a code like `C501` into its chapter letter and two-character block
/// (`'C'`, `"50"`), checking the overall ICD-10 shape on the way.
fn split_category(code: &str) -> Option<(char, &str)> {
    if !code.is_ascii() || code.len() < 3 || code.len() > 7 {
        return None;
    }

    let chapter = code.chars().next()?;
    if !chapter.is_ascii_uppercase() {
        return None;
    }

    let block = &code[1..3];
    let bytes = block.as_bytes();
    let block_ok = bytes[0].is_ascii_digit()
        && (bytes[1].is_ascii_digit()
            || matches!((chapter, block), ('C', "7A" | "7B") | ('D', "3A")));
    if !block_ok {
        return None;
    }

    if !code[3..].chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some((chapter, block))
}
