//! Configuration file loading and saving

use crate::constants;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for building the metadata table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub all_rows: bool,
    pub sort: bool,
}

/// Settings shared by commands that walk the metadata table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateConfig {
    #[serde(flatten)]
    pub batch: BatchConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub strip: BatchConfig,
    pub annotate: AnnotateConfig,
}

impl Config {
    /// Load configuration from a file
    ///
    /// An empty file yields the default configuration.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the named config file, or the default one if it exists
    ///
    /// Without an explicit path and without a default file in the working
    /// directory, an empty configuration is returned.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(constants::config::DEFAULT_CONFIG_FILE).exists() => {
                Self::load(constants::config::DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::new()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;

        // Add document marker for yamllint compliance
        let yaml_content = format!("---\n{}", yaml);

        std::fs::write(path, yaml_content)
            .with_context(|| format!("Failed to write config file {}", path))?;

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        super::ConfigValidator::validate(self)
    }

    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter configuration written by `init`
    pub fn template() -> Self {
        let metadata = PathBuf::from(constants::config::DEFAULT_METADATA_FILE);
        let extension = Some(constants::config::DEFAULT_EXTENSION.to_string());

        Self {
            extract: ExtractConfig {
                source_dir: Some(PathBuf::from("data")),
                output: Some(metadata.clone()),
                extension: extension.clone(),
                all_rows: false,
                sort: false,
            },
            strip: BatchConfig {
                metadata: Some(metadata.clone()),
                input_dir: Some(PathBuf::from("data")),
                output_dir: Some(PathBuf::from("stripped")),
                extension: extension.clone(),
            },
            annotate: AnnotateConfig {
                batch: BatchConfig {
                    metadata: Some(metadata),
                    input_dir: Some(PathBuf::from("stripped")),
                    output_dir: Some(PathBuf::from("annotated")),
                    extension,
                },
                columns: Vec::new(),
            },
        }
    }
}

impl ExtractConfig {
    /// Replace settings with the ones given on the command line
    pub fn apply_overrides(
        &mut self,
        source_dir: Option<PathBuf>,
        output: Option<PathBuf>,
        extension: Option<String>,
        all_rows: bool,
        sort: bool,
    ) {
        if source_dir.is_some() {
            self.source_dir = source_dir;
        }
        if output.is_some() {
            self.output = output;
        }
        if extension.is_some() {
            self.extension = extension;
        }
        self.all_rows |= all_rows;
        self.sort |= sort;
    }
}

impl BatchConfig {
    /// Replace settings with the ones given on the command line
    pub fn apply_overrides(
        &mut self,
        metadata: Option<PathBuf>,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        extension: Option<String>,
    ) {
        if metadata.is_some() {
            self.metadata = metadata;
        }
        if input_dir.is_some() {
            self.input_dir = input_dir;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        if extension.is_some() {
            self.extension = extension;
        }
    }
}
