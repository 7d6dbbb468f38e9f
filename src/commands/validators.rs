//! Command argument validation utilities
//!
//! Validation that runs after clap parsing and after command-line values
//! have been merged over the config file.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required value missing from both the command line and the config file
    MissingRequired { argument: String, config_key: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// Empty collection when at least one item is required
    EmptyCollection { argument: String },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired {
                argument,
                config_key,
            } => write!(
                f,
                "{} is required: pass it on the command line or set '{}' in the config file",
                argument, config_key
            ),
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::EmptyCollection { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Resolve a path that must be set by a flag or a config key
pub fn require_path(value: &Option<PathBuf>, argument: &str, config_key: &str) -> Result<PathBuf> {
    match value {
        Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
        _ => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: argument.to_string(),
                config_key: config_key.to_string(),
            },
        )),
    }
}

/// Validate that an input file exists before any output is written
pub fn validate_input_file(path: &Path, argument: &str) -> Result<()> {
    if !path.is_file() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: argument.to_string(),
                value: path.display().to_string(),
                reason: "file does not exist".to_string(),
            },
        ));
    }
    Ok(())
}

/// Parse `NAME=VALUE` column assignments
///
/// The value may be empty and may itself contain `=`.
pub fn parse_column_assignments(raw: &[String]) -> Result<Vec<(String, String)>> {
    if raw.is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyCollection {
                argument: "--column".to_string(),
            },
        ));
    }

    raw.iter()
        .map(|assignment| match assignment.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.to_string(), value.to_string()))
            }
            _ => Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "--column".to_string(),
                    value: assignment.clone(),
                    reason: "expected NAME=VALUE".to_string(),
                },
            )),
        })
        .collect()
}
