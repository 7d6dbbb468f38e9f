//! Configuration validation
//!
//! Thin wrapper over the rules in `utils::validators`, returning
//! `anyhow` errors for use while loading configuration.

use super::Config;
use crate::utils::validators;
use anyhow::Result;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a loaded configuration
    pub fn validate(config: &Config) -> Result<()> {
        validators::validate_config(config).map_err(validators::validation_errors_to_anyhow)
    }
}
