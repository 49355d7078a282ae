//! Trace files on disk.
//!
//! Replay and CLI tests read JSON-lines traces; these helpers write them into
//! a temporary directory that lives as long as the returned handle.

use anyhow::Result;
use scorecard_types::{AgentOutput, TraceItem};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::step::StepFixture;

/// A JSON-lines trace written to a temporary directory
pub struct TraceFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TraceFile {
    pub fn write(items: &[TraceItem]) -> Result<Self> {
        let lines = items
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::write_raw(&lines.join("\n"))
    }

    /// Write arbitrary text, e.g. to exercise malformed lines
    pub fn write_raw(content: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("trace.jsonl");
        fs::write(&path, content)?;
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The two-step college lookup run used across the test suites
pub fn sample_trace() -> Vec<TraceItem> {
    vec![
        StepFixture::new(1)
            .model_output("Let's search")
            .tool_call("search", json!({"query": "MIT"}))
            .observations("Execution logs: found 1 result")
            .build()
            .into(),
        StepFixture::new(2).build().into(),
        AgentOutput::text("MIT tuition is $55000").into(),
    ]
}
