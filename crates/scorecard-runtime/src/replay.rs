//! Replay executor.
//!
//! Plays back a recorded agent run stored as JSON lines, one `TraceItem` per
//! line. Token counts recorded on a step are handed out through
//! `last_token_usage` the way a live model reports its last call, so the
//! stream decides what the footnote shows.

use scorecard_types::{AgentExecutor, Error, ExtraArgs, Result, TokenUsage, TraceItem};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Entry {
    Line { number: usize, text: String },
    Item(TraceItem),
}

#[derive(Debug, Default)]
pub struct ReplayAgent {
    path: Option<PathBuf>,
    entries: Vec<Entry>,
    loaded: bool,
    position: usize,
    last_usage: Option<TokenUsage>,
}

impl ReplayAgent {
    /// Replay the file at `path`. Nothing is read until a run starts.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn from_items(items: Vec<TraceItem>) -> Self {
        Self {
            entries: items.into_iter().map(Entry::Item).collect(),
            loaded: true,
            ..Default::default()
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Items not yet handed out
    pub fn remaining(&self) -> usize {
        self.entries.len().saturating_sub(self.position)
    }

    fn load(&mut self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = std::fs::read_to_string(path).map_err(|err| {
            Error::Unavailable(format!("cannot read trace {}: {}", path.display(), err))
        })?;

        self.entries = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| Entry::Line {
                number: idx + 1,
                text: line.to_string(),
            })
            .collect();
        self.loaded = true;

        tracing::debug!(
            path = %path.display(),
            items = self.entries.len(),
            "trace loaded"
        );
        Ok(())
    }
}

impl AgentExecutor for ReplayAgent {
    fn start_run(
        &mut self,
        task: &str,
        reset_memory: bool,
        extra_args: Option<&ExtraArgs>,
    ) -> Result<()> {
        if reset_memory || !self.loaded {
            self.load()?;
            self.position = 0;
        }
        self.last_usage = None;

        tracing::debug!(
            task,
            reset_memory,
            extra_args = extra_args.map_or(0, |args| args.len()),
            position = self.position,
            "replay run started"
        );
        Ok(())
    }

    fn next_item(&mut self) -> Option<Result<TraceItem>> {
        let entry = self.entries.get(self.position)?.clone();
        self.position += 1;

        let mut item = match entry {
            Entry::Item(item) => item,
            Entry::Line { number, text } => match serde_json::from_str::<TraceItem>(&text) {
                Ok(item) => item,
                Err(err) => {
                    tracing::warn!(line = number, error = %err, "malformed trace line");
                    self.last_usage = None;
                    return Some(Err(Error::Json(err)));
                }
            },
        };

        self.last_usage = match &mut item {
            TraceItem::Step(step) => step.token_usage.take(),
            TraceItem::FinalAnswer { .. } => None,
        };
        Some(Ok(item))
    }

    fn last_token_usage(&self) -> Option<TokenUsage> {
        self.last_usage
    }
}
