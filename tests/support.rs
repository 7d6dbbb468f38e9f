//! Common test support utilities and fixtures

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::{fs, process::Command};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A temporary directory laid out like a sample data drop
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a new temporary workspace with an empty `data` directory
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(root.path().join("data")).expect("Failed to create data directory");
        Self { root }
    }

    /// Get the workspace root path
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path().join("data")
    }

    /// Write a sample file whose first line is junk, followed by a header
    /// with a `sample_tags` column and the given tag strings as data rows
    pub fn write_sample(&self, sample: &str, tags: &[&str]) -> PathBuf {
        let mut content = String::from("#exported by instrument\nrow\tsample_tags\n");
        for (i, tag) in tags.iter().enumerate() {
            content.push_str(&format!("{}\t{}\n", i + 1, tag));
        }
        let path = self.data_dir().join(format!("{}.tsv", sample));
        fs::write(&path, content).expect("Failed to write sample");
        path
    }

    /// Write a file with the given content relative to the workspace root
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Run the sample-meta CLI with given arguments
pub fn run_cli(args: &[&str], cwd: Option<&Path>) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--manifest-path"]);
    cmd.arg(Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"));
    cmd.arg("--");
    cmd.args(args);

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute cargo run");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
