//! Extract command implementation

use super::validators::require_path;
use super::{Command, CommandContext};
use crate::constants::{self, metadata::HEADER, tags::SAMPLE_TAGS_COLUMN};
use crate::metadata::MetadataRow;
use crate::tsv;
use crate::utils::{list_sample_files, sample_id_from_path};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use colored::*;
use std::path::Path;

/// Extract command for building the metadata table from sample files
pub struct ExtractCommand {
    /// Print the extracted rows as JSON instead of progress lines
    pub json: bool,
}

#[async_trait]
impl Command for ExtractCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.config.extract;
        let source_dir = require_path(&settings.source_dir, "--source-dir", "extract.source_dir")?;
        let output = require_path(&settings.output, "--output", "extract.output")?;
        let extension = settings
            .extension
            .as_deref()
            .unwrap_or(constants::config::DEFAULT_EXTENSION);

        let files = list_sample_files(&source_dir, extension, Some(&output), settings.sort)?;

        if files.is_empty() && !self.json {
            println!(
                "{}",
                format!("No sample files found in {}", source_dir.display()).yellow()
            );
        }

        let mut writer = tsv::writer_from_path(&output)?;
        writer
            .write_record(HEADER)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        let mut extracted = Vec::new();
        for path in &files {
            let Some(sample) = sample_id_from_path(path) else {
                eprintln!(
                    "{}",
                    format!("Skipping {}: file name is not valid UTF-8", path.display()).yellow()
                );
                continue;
            };

            let rows = extract_rows(path, &sample, settings.all_rows)?;

            if !self.json {
                if rows.is_empty() {
                    println!("{} | {}", sample.cyan().bold(), "No data rows".yellow());
                } else {
                    println!("{} | {}", sample.cyan().bold(), "Extracted".green());
                }
            }

            for row in rows {
                writer
                    .write_record(row.to_record())
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                extracted.push(row);
            }
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write {}", output.display()))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&extracted)?);
        } else {
            println!(
                "{}",
                format!(
                    "Wrote {} metadata rows from {} files to {}",
                    extracted.len(),
                    files.len(),
                    output.display()
                )
                .green()
            );
        }

        Ok(())
    }
}

/// Build metadata rows from one sample file
///
/// Only the first data row is used unless `all_rows` is set. A file with no
/// header or no data rows yields no metadata rows.
pub fn extract_rows(path: &Path, sample: &str, all_rows: bool) -> Result<Vec<MetadataRow>> {
    let mut reader = tsv::reader_from_path(path)?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let Some(tags_column) = headers.iter().position(|h| h == SAMPLE_TAGS_COLUMN) else {
        bail!(
            "{} has no '{}' column",
            path.display(),
            SAMPLE_TAGS_COLUMN
        );
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
        let tags = record.get(tags_column).unwrap_or("");
        rows.push(MetadataRow::from_tag_string(sample, tags));

        if !all_rows {
            break;
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::NOT_AVAILABLE;
    use crate::metadata::CancerStatus;
    use std::fs;
    use tempfile::TempDir;

    fn write_sample(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_extract_rows_first_row_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_sample(
            temp_dir.path(),
            "S1.tsv",
            "id\tsample_tags\n1\tAge (Range): 30-40,Biological Sex: Male\n2\tDiagnosis: Melanoma\n",
        );

        let rows = extract_rows(&path, "S1", false).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].age, "30-40");
        assert_eq!(rows[0].gender, "Male");
        assert_eq!(rows[0].diagnosis, NOT_AVAILABLE);
        assert_eq!(rows[0].cancer_status, CancerStatus::NoCancer);
    }

    #[test]
    fn test_extract_rows_all_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_sample(
            temp_dir.path(),
            "S1.tsv",
            "id\tsample_tags\n1\tAge (Range): 30-40\n2\tDiagnosis: Melanoma\n",
        );

        let rows = extract_rows(&path, "S1", true).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].diagnosis, "Melanoma");
        assert_eq!(rows[1].cancer_status, CancerStatus::HasCancer);
    }

    #[test]
    fn test_extract_rows_quoted_tags() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_sample(
            temp_dir.path(),
            "S1.tsv",
            "sample_tags\n\"Tissue Source: Lung, upper lobe\"\n",
        );

        let rows = extract_rows(&path, "S1", false).unwrap();
        assert_eq!(rows[0].tissue_source, "Lung");
    }

    #[test]
    fn test_extract_rows_header_only_and_empty() {
        let temp_dir = TempDir::new().unwrap();
        let header_only = write_sample(temp_dir.path(), "a.tsv", "id\tsample_tags\n");
        let empty = write_sample(temp_dir.path(), "b.tsv", "");

        assert!(extract_rows(&header_only, "a", false).unwrap().is_empty());
        assert!(extract_rows(&empty, "b", false).unwrap().is_empty());
    }

    #[test]
    fn test_extract_rows_missing_tags_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_sample(temp_dir.path(), "S1.tsv", "id\ttags\n1\tx\n");

        let err = extract_rows(&path, "S1", false).unwrap_err();
        assert!(err.to_string().contains("no 'sample_tags' column"));
    }

    #[tokio::test]
    async fn test_extract_command_writes_table() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("data");
        fs::create_dir(&source).unwrap();
        write_sample(
            &source,
            "A.tsv",
            "sample_tags\nAge (Range): 30-40,Biological Sex: Male\n",
        );
        write_sample(&source, "B.tsv", "sample_tags\nDiagnosis: Glioma,Cancer stage: IV\n");
        write_sample(&source, "ignored.txt", "sample_tags\nDiagnosis: x\n");

        let output = temp_dir.path().join("metadata.tsv");
        let mut config = Config::new();
        config.extract.source_dir = Some(source);
        config.extract.output = Some(output.clone());
        config.extract.sort = true;

        ExtractCommand { json: false }
            .execute(&CommandContext::new(config))
            .await
            .unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Sample\tAge (Range)\tGender\tDiagnosis\thasCancer\tSmoke Years\tTissue Source\tDisease Stage"
        );
        assert_eq!(lines[1], "A\t30-40\tMale\tN\\A\tnoCancer\tN\\A\tN\\A\tN\\A");
        assert_eq!(lines[2], "B\tN\\A\tN\\A\tGlioma\thasCancer\tN\\A\tN\\A\tIV");
    }

    #[tokio::test]
    async fn test_extract_command_missing_source_dir_setting() {
        let mut config = Config::new();
        config.extract.output = Some("metadata.tsv".into());

        let err = ExtractCommand { json: true }
            .execute(&CommandContext::new(config))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("--source-dir is required"));
    }
}
