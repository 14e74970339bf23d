//! Parsing of the semi-structured text columns in the trial table

pub mod fields;
pub mod literal;

pub use fields::{normalize_icd_code, parse_disease_list, parse_icd_code_list};
pub use literal::{Literal, LiteralError, parse_literal};
