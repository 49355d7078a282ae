//! Shared setup for the CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use scorecard_testing::{TraceFile, sample_trace};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    data_dir: PathBuf,
    trace: TraceFile,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".scorecard");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        let trace = TraceFile::write(&sample_trace()).expect("Failed to write trace");

        Self {
            temp_dir,
            data_dir,
            trace,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn trace_path(&self) -> &Path {
        self.trace.path()
    }

    /// Write a file next to the data directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn command(&self) -> Command {
        self.command_with_format("plain")
    }

    pub fn command_with_format(&self, format: &str) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("scorecard");
        cmd.env_remove("SCORECARD_API_KEY")
            .env_remove("SCORECARD_PATH")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format);
        cmd
    }
}
