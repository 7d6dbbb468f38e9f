//! Metadata rows and the metadata table

use crate::constants::metadata::{self as columns, CANCER_ABSENT, CANCER_PRESENT};
use crate::constants::{NOT_AVAILABLE, tags as labels};
use crate::tags::{TagList, TagLookupError};
use crate::tsv;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::path::Path;

/// Whether a sample carries a diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CancerStatus {
    #[serde(rename = "hasCancer")]
    HasCancer,
    #[serde(rename = "noCancer")]
    NoCancer,
}

impl CancerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancerStatus::HasCancer => CANCER_PRESENT,
            CancerStatus::NoCancer => CANCER_ABSENT,
        }
    }
}

impl std::fmt::Display for CancerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the metadata table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRow {
    pub sample: String,
    pub age: String,
    pub gender: String,
    pub diagnosis: String,
    pub cancer_status: CancerStatus,
    pub smoke_years: String,
    pub tissue_source: String,
    pub disease_stage: String,
}

impl MetadataRow {
    /// Build a row from a sample's tag list
    ///
    /// Every field is looked up on its own; a field that cannot be resolved
    /// becomes [`NOT_AVAILABLE`] without affecting the others.
    pub fn from_tags(sample: &str, tags: &TagList) -> Self {
        let diagnosis = tags.value(labels::DIAGNOSIS_LABEL);
        let cancer_status = if tags.position(labels::DIAGNOSIS_LABEL).is_ok() {
            CancerStatus::HasCancer
        } else {
            CancerStatus::NoCancer
        };

        Self {
            sample: sample.to_string(),
            age: or_not_available(tags.value(labels::AGE_LABEL)),
            gender: or_not_available(tags.value(labels::SEX_LABEL)),
            diagnosis: or_not_available(diagnosis),
            cancer_status,
            smoke_years: or_not_available(tags.value(labels::SMOKING_LABEL)),
            tissue_source: or_not_available(tags.value(labels::TISSUE_LABEL)),
            disease_stage: or_not_available(tags.value(labels::STAGE_LABEL)),
        }
    }

    /// Parse a raw tag string and build a row from it
    pub fn from_tag_string(sample: &str, text: &str) -> Self {
        Self::from_tags(sample, &TagList::parse(text))
    }

    /// Field values in [`columns::HEADER`] order
    pub fn to_record(&self) -> [&str; 8] {
        [
            self.sample.as_str(),
            self.age.as_str(),
            self.gender.as_str(),
            self.diagnosis.as_str(),
            self.cancer_status.as_str(),
            self.smoke_years.as_str(),
            self.tissue_source.as_str(),
            self.disease_stage.as_str(),
        ]
    }
}

fn or_not_available(value: Result<&str, TagLookupError>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// A metadata table read back from disk
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MetadataTable {
    /// Load a tab-delimited table with a header row
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = tsv::reader_from_path(path)?;

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Failed to read header of {}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Index of a named column
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| anyhow!("Metadata table has no '{}' column", name))
    }

    /// Value of a column in a row, empty when the row is short
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Sample IDs in table order
    pub fn sample_ids(&self) -> Result<Vec<String>> {
        let column = self.column_index(columns::SAMPLE)?;
        Ok((0..self.rows.len())
            .map(|row| self.value(row, column).to_string())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
