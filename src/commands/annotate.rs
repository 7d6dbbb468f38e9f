//! Annotate command implementation

use super::batch::{SampleBatch, SampleJob, run_jobs};
use super::{Command, CommandContext};
use crate::constants::metadata::{HEADER, SAMPLE};
use crate::metadata::MetadataTable;
use crate::tsv;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Annotate command for appending metadata columns to every sample file
/// listed in the metadata table
pub struct AnnotateCommand;

#[async_trait]
impl Command for AnnotateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.config.annotate;
        let batch = SampleBatch::resolve(&settings.batch, "annotate")?;

        let columns = if settings.columns.is_empty() {
            default_columns()
        } else {
            settings.columns.clone()
        };
        let values = Arc::new(column_values(&batch.table, &columns)?);
        let columns = Arc::new(columns);

        run_jobs(batch, context.parallel, "Annotated", move |job: &SampleJob| {
            tsv::append_columns(
                &job.input,
                &job.output,
                columns.as_slice(),
                values[job.row].as_slice(),
            )
        })
        .await?;

        Ok(())
    }
}

/// Every metadata column except the sample ID
pub fn default_columns() -> Vec<String> {
    HEADER
        .iter()
        .filter(|column| **column != SAMPLE)
        .map(|column| column.to_string())
        .collect()
}

/// Values of `columns` for every row of the table
///
/// Fails on the first column the table does not have.
pub fn column_values(table: &MetadataTable, columns: &[String]) -> Result<Vec<Vec<String>>> {
    let indices = columns
        .iter()
        .map(|column| table.column_index(column))
        .collect::<Result<Vec<_>>>()?;

    Ok((0..table.len())
        .map(|row| {
            indices
                .iter()
                .map(|&column| table.value(row, column).to_string())
                .collect()
        })
        .collect())
}
