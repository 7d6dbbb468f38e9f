//! Strip command implementation

use super::batch::{SampleBatch, run_jobs};
use super::{Command, CommandContext};
use crate::tsv;
use anyhow::Result;
use async_trait::async_trait;

/// Strip command for removing the first line of every sample file
/// listed in the metadata table
pub struct StripCommand;

#[async_trait]
impl Command for StripCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let batch = SampleBatch::resolve(&context.config.strip, "strip")?;

        run_jobs(batch, context.parallel, "Stripped", |job| {
            tsv::strip_first_row(&job.input, &job.output)
        })
        .await?;

        Ok(())
    }
}
