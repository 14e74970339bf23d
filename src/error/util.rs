//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{OncoRateError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.is_dir() {
        return Err(OncoRateError::io(
            path,
            format!("Expected a file for: {purpose}"),
            io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        // Provide different error messages based on the error kind
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            io::ErrorKind::NotFound => format!("File not found, needed for: {purpose}"),
            _ => format!("Failed to open file for: {purpose}"),
        };
        OncoRateError::io(path, context, e)
    })
}
