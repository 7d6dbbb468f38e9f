//! Configuration validation utilities
//!
//! Centralized validation rules for configuration values and for the
//! sample IDs read back from a metadata table.

use crate::config::Config;
use anyhow::{Result, anyhow};
use std::collections::HashSet;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// File extension is empty after trimming or contains a path separator
    InvalidExtension(String),
    /// Column name is empty or whitespace-only
    EmptyColumnName,
    /// Column listed more than once
    DuplicateColumnName(String),
    /// Sample ID is empty
    EmptySampleId,
    /// Sample ID cannot be used as a file name
    InvalidSampleId(String),
    /// Sample ID listed on more than one row
    DuplicateSampleId(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidExtension(ext) => {
                write!(f, "Invalid file extension: '{}'", ext)
            }
            ValidationError::EmptyColumnName => write!(f, "Column name cannot be empty"),
            ValidationError::DuplicateColumnName(name) => {
                write!(f, "Duplicate column name: '{}'", name)
            }
            ValidationError::EmptySampleId => write!(f, "Sample ID cannot be empty"),
            ValidationError::InvalidSampleId(id) => {
                write!(f, "Sample ID cannot be used as a file name: '{}'", id)
            }
            ValidationError::DuplicateSampleId(id) => {
                write!(f, "Sample ID listed more than once: '{}'", id)
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for extension in [
        &config.extract.extension,
        &config.strip.extension,
        &config.annotate.batch.extension,
    ]
    .into_iter()
    .flatten()
    {
        if let Err(error) = validate_extension(extension) {
            errors.push(error);
        }
    }

    if let Err(mut column_errors) = validate_column_names(&config.annotate.columns) {
        errors.append(&mut column_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a file extension given without its leading dot
///
/// An empty extension is allowed and means "any file".
pub fn validate_extension(extension: &str) -> Result<(), ValidationError> {
    if extension.is_empty() {
        return Ok(());
    }

    if extension.trim().is_empty()
        || extension.starts_with('.')
        || extension.contains(['/', '\\'])
    {
        return Err(ValidationError::InvalidExtension(extension.to_string()));
    }

    Ok(())
}

/// Validates a list of column names: non-empty and unique
pub fn validate_column_names(names: &[String]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for name in names {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyColumnName);
        } else if !seen.insert(name) {
            errors.push(ValidationError::DuplicateColumnName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that a sample ID can be joined onto a directory safely
pub fn validate_sample_id(sample: &str) -> Result<(), ValidationError> {
    if sample.trim().is_empty() {
        return Err(ValidationError::EmptySampleId);
    }

    if sample == "." || sample == ".." || sample.contains(['/', '\\']) {
        return Err(ValidationError::InvalidSampleId(sample.to_string()));
    }

    Ok(())
}

/// Validates every sample ID of a table: each safe and listed once
///
/// Two rows for one sample would rewrite the same output file.
pub fn validate_sample_ids(samples: &[String]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for sample in samples {
        if let Err(error) = validate_sample_id(sample) {
            errors.push(error);
        } else if !seen.insert(sample) {
            errors.push(ValidationError::DuplicateSampleId(sample.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Converts a list of validation errors to an anyhow::Error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation failed:\n{}", messages.join("\n"))
}
