//! Per-sample batch processing driven by the metadata table

use super::validators::require_path;
use crate::config::BatchConfig;
use crate::constants;
use crate::metadata::MetadataTable;
use crate::utils::validators::{validate_sample_ids, validation_errors_to_anyhow};
use crate::utils::{ensure_directory_exists, sample_file_path};
use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

/// One sample file to rewrite
#[derive(Debug, Clone)]
pub struct SampleJob {
    pub sample: String,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Row of the metadata table this job came from
    pub row: usize,
}

/// The metadata table and the per-sample jobs it describes
#[derive(Debug)]
pub struct SampleBatch {
    pub table: MetadataTable,
    pub jobs: Vec<SampleJob>,
    pub output_dir: PathBuf,
}

impl SampleBatch {
    /// Load the metadata table and derive input/output paths per sample
    ///
    /// `section` names the config section used in error messages. Every
    /// sample ID is validated, and must appear only once, before anything
    /// is written.
    pub fn resolve(settings: &BatchConfig, section: &str) -> Result<Self> {
        let metadata = require_path(
            &settings.metadata,
            "--metadata",
            &format!("{}.metadata", section),
        )?;
        let input_dir = require_path(
            &settings.input_dir,
            "--input-dir",
            &format!("{}.input_dir", section),
        )?;
        let output_dir = require_path(
            &settings.output_dir,
            "--output-dir",
            &format!("{}.output_dir", section),
        )?;
        let extension = settings
            .extension
            .as_deref()
            .unwrap_or(constants::config::DEFAULT_EXTENSION);

        let table = MetadataTable::load(&metadata)?;
        let samples = table.sample_ids()?;

        validate_sample_ids(&samples)
            .map_err(validation_errors_to_anyhow)
            .with_context(|| format!("Invalid sample IDs in {}", metadata.display()))?;

        let jobs = samples
            .into_iter()
            .enumerate()
            .map(|(row, sample)| SampleJob {
                input: sample_file_path(&input_dir, &sample, extension),
                output: sample_file_path(&output_dir, &sample, extension),
                sample,
                row,
            })
            .collect();

        Ok(Self {
            table,
            jobs,
            output_dir,
        })
    }
}

/// Run `operation` on every job, printing one progress line per sample
///
/// Sequential runs stop at the first failure. Parallel runs process every
/// job on a blocking task and fail afterwards if any job failed. Returns
/// the number of samples processed.
pub async fn run_jobs<F>(
    batch: SampleBatch,
    parallel: bool,
    verb: &str,
    operation: F,
) -> Result<usize>
where
    F: Fn(&SampleJob) -> Result<usize> + Clone + Send + Sync + 'static,
{
    let SampleBatch {
        jobs, output_dir, ..
    } = batch;

    if jobs.is_empty() {
        println!("{}", "No samples listed in the metadata table".yellow());
        return Ok(0);
    }

    ensure_directory_exists(&output_dir)?;

    println!(
        "{}",
        format!("Processing {} samples...", jobs.len()).green()
    );

    let mut successful = 0;

    if parallel {
        let tasks: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                let operation = operation.clone();
                tokio::task::spawn_blocking(move || {
                    let result = operation(&job);
                    (job.sample, result)
                })
            })
            .collect();

        let mut errors = Vec::new();
        for task in tasks {
            match task.await {
                Ok((sample, Ok(rows))) => {
                    println!("{} | {} ({} rows)", sample.cyan().bold(), verb.green(), rows);
                    successful += 1;
                }
                Ok((sample, Err(e))) => {
                    eprintln!("{} | {}", sample.cyan().bold(), format!("Error: {e:#}").red());
                    errors.push((sample, e));
                }
                Err(e) => {
                    eprintln!("{}", format!("Task error: {e}").red());
                    errors.push(("unknown".to_string(), e.into()));
                }
            }
        }

        if !errors.is_empty() {
            println!(
                "{}",
                format!(
                    "Completed with {} successful, {} failed",
                    successful,
                    errors.len()
                )
                .yellow()
            );
            let (sample, error) = &errors[0];
            return Err(anyhow::anyhow!(
                "{} of {} samples failed. First error ({}): {:#}",
                errors.len(),
                successful + errors.len(),
                sample,
                error
            ));
        }
    } else {
        for job in &jobs {
            let rows = operation(job).with_context(|| format!("Sample '{}'", job.sample))?;
            println!("{} | {} ({} rows)", job.sample.cyan().bold(), verb.green(), rows);
            successful += 1;
        }
    }

    println!(
        "{}",
        format!("Done: {} samples written to {}", successful, output_dir.display()).green()
    );

    Ok(successful)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn batch_config(root: &Path, metadata: &str) -> BatchConfig {
        let metadata_path = root.join("metadata.tsv");
        fs::write(&metadata_path, metadata).unwrap();
        BatchConfig {
            metadata: Some(metadata_path),
            input_dir: Some(root.join("in")),
            output_dir: Some(root.join("out")),
            extension: None,
        }
    }

    #[test]
    fn test_resolve_builds_paths() {
        let temp_dir = TempDir::new().unwrap();
        let settings = batch_config(temp_dir.path(), "Sample\tGender\nA\tMale\nB\tFemale\n");

        let batch = SampleBatch::resolve(&settings, "strip").unwrap();

        assert_eq!(batch.jobs.len(), 2);
        assert_eq!(batch.jobs[1].sample, "B");
        assert_eq!(batch.jobs[1].row, 1);
        assert_eq!(batch.jobs[0].input, temp_dir.path().join("in").join("A.tsv"));
        assert_eq!(batch.jobs[0].output, temp_dir.path().join("out").join("A.tsv"));
    }

    #[test]
    fn test_resolve_rejects_unsafe_sample_ids() {
        let temp_dir = TempDir::new().unwrap();
        let settings = batch_config(temp_dir.path(), "Sample\nA\n../escape\n\n");

        let err = SampleBatch::resolve(&settings, "strip").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid sample IDs"));
        assert!(message.contains("../escape"));
    }

    #[test]
    fn test_resolve_rejects_repeated_sample() {
        let temp_dir = TempDir::new().unwrap();
        let settings = batch_config(
            temp_dir.path(),
            "Sample\thasCancer\nS1\thasCancer\nS2\tnoCancer\nS1\tnoCancer\n",
        );

        let err = SampleBatch::resolve(&settings, "annotate").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid sample IDs"));
        assert!(message.contains("Sample ID listed more than once: 'S1'"));
    }

    #[test]
    fn test_resolve_missing_setting_names_section() {
        let settings = BatchConfig::default();
        let err = SampleBatch::resolve(&settings, "annotate").unwrap_err();
        assert!(err.to_string().contains("'annotate.metadata'"));
    }

    #[tokio::test]
    async fn test_run_jobs_sequential_stops_at_first_failure() {
        let temp_dir = TempDir::new().unwrap();
        let settings = batch_config(temp_dir.path(), "Sample\nA\nB\nC\n");
        let batch = SampleBatch::resolve(&settings, "strip").unwrap();

        let result = run_jobs(batch, false, "Done", |job| {
            if job.sample == "B" {
                anyhow::bail!("boom");
            }
            Ok(1)
        })
        .await;

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Sample 'B'"));
        assert!(message.contains("boom"));
        assert!(temp_dir.path().join("out").is_dir());
    }

    #[tokio::test]
    async fn test_run_jobs_parallel_reports_failures() {
        let temp_dir = TempDir::new().unwrap();
        let settings = batch_config(temp_dir.path(), "Sample\nA\nB\nC\n");
        let batch = SampleBatch::resolve(&settings, "strip").unwrap();

        let result = run_jobs(batch, true, "Done", |job| {
            if job.sample == "B" {
                anyhow::bail!("boom");
            }
            Ok(2)
        })
        .await;

        let message = result.unwrap_err().to_string();
        assert!(message.contains("1 of 3 samples failed"));
        assert!(message.contains("(B)"));
    }

    #[tokio::test]
    async fn test_run_jobs_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let settings = batch_config(temp_dir.path(), "Sample\n");
        let batch = SampleBatch::resolve(&settings, "strip").unwrap();

        let processed = run_jobs(batch, false, "Done", |_| Ok(0)).await.unwrap();
        assert_eq!(processed, 0);
        assert!(!temp_dir.path().join("out").exists());
    }
}
