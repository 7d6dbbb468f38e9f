//! Append command implementation

use super::validators::validate_input_file;
use super::{Command, CommandContext};
use crate::tsv;
use crate::utils::validators::{validate_column_names, validation_errors_to_anyhow};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::PathBuf;

/// Append command for adding fixed-value columns to a single file
pub struct AppendCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Column names paired with the value written on every row
    pub columns: Vec<(String, String)>,
}

#[async_trait]
impl Command for AppendCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<()> {
        validate_input_file(&self.input, "--input")?;

        let (names, values): (Vec<String>, Vec<String>) = self.columns.iter().cloned().unzip();
        validate_column_names(&names).map_err(validation_errors_to_anyhow)?;

        let rows = tsv::append_columns(&self.input, &self.output, &names, &values)?;

        println!(
            "{}",
            format!(
                "Appended {} columns to {} rows in {}",
                names.len(),
                rows,
                self.output.display()
            )
            .green()
        );

        Ok(())
    }
}
