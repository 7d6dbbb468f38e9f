//! Tab-delimited file reading, writing and rewriting

use crate::constants::tsv::{DELIMITER, QUOTE};
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reader settings shared by every tab-delimited input
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .has_headers(true)
        .flexible(true);
    builder
}

/// Writer settings shared by every tab-delimited output
pub fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.delimiter(DELIMITER).quote(QUOTE).flexible(true);
    builder
}

/// Open a tab-delimited file for reading
pub fn reader_from_path(path: &Path) -> Result<csv::Reader<File>> {
    reader_builder()
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))
}

/// Create (or truncate) a tab-delimited file for writing
pub fn writer_from_path(path: &Path) -> Result<csv::Writer<File>> {
    writer_builder()
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))
}

/// Copy every line of `input` except the first to `output`
///
/// Lines are copied byte for byte, line endings included. Only `\n` ends a
/// line; a file that uses bare `\r` line endings is rejected rather than
/// read as one long header. Returns the number of lines written.
pub fn strip_first_row(input: &Path, output: &Path) -> Result<usize> {
    let infile =
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let mut reader = BufReader::new(infile);

    let mut line = Vec::new();
    reader
        .read_until(b'\n', &mut line)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    if !line.ends_with(b"\n") && line.contains(&b'\r') {
        bail!(
            "{} uses bare carriage-return line endings; convert it to \\n or \\r\\n first",
            input.display()
        );
    }

    let outfile =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(outfile);

    let mut rows = 0;
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        if read == 0 {
            break;
        }
        writer
            .write_all(&line)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        rows += 1;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(rows)
}

/// Copy `input` to `output` with extra columns appended to every row
///
/// The header gains `column_names`; every data row gains the same `values`.
/// Returns the number of data rows written.
pub fn append_columns<S: AsRef<str>>(
    input: &Path,
    output: &Path,
    column_names: &[S],
    values: &[S],
) -> Result<usize> {
    if column_names.len() != values.len() {
        bail!(
            "Got {} column names but {} values",
            column_names.len(),
            values.len()
        );
    }

    let mut reader = reader_from_path(input)?;
    let mut header = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", input.display()))?
        .clone();
    if header.is_empty() {
        bail!("{} has no header row", input.display());
    }
    for name in column_names {
        header.push_field(name.as_ref());
    }

    let mut writer = writer_from_path(output)?;
    writer
        .write_record(&header)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let mut rows = 0;
    for record in reader.records() {
        let mut record = record.with_context(|| format!("Failed to read {}", input.display()))?;
        for value in values {
            record.push_field(value.as_ref());
        }
        writer
            .write_record(&record)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        rows += 1;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(rows)
}
