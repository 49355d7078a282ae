use scorecard_types::{AgentExecutor, Error, ExtraArgs, Result, TokenUsage, TraceItem};

/// Arguments of the most recent `start_run`
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub task: String,
    pub reset_memory: bool,
    pub extra_args: Option<ExtraArgs>,
}

/// Executor double that hands out a fixed trace.
///
/// Token usage, when scripted, is reported per pulled item: after the n-th
/// pull `last_token_usage` returns the n-th entry.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    items: Vec<TraceItem>,
    token_usage: Vec<TokenUsage>,
    fail_at: Option<(usize, String)>,
    unavailable: Option<String>,
    position: usize,
    pulls: usize,
    last_run: Option<RunRecord>,
}

impl ScriptedAgent {
    pub fn new(items: Vec<TraceItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// An executor whose `start_run` always fails
    pub fn unavailable(reason: &str) -> Self {
        Self {
            unavailable: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn with_token_usage(mut self, usage: Vec<TokenUsage>) -> Self {
        self.token_usage = usage;
        self
    }

    /// Make the pull with the given zero-based index fail
    pub fn fail_at(mut self, index: usize, message: &str) -> Self {
        self.fail_at = Some((index, message.to_string()));
        self
    }

    pub fn pulls(&self) -> usize {
        self.pulls
    }

    pub fn last_run(&self) -> Option<&RunRecord> {
        self.last_run.as_ref()
    }
}

impl AgentExecutor for ScriptedAgent {
    fn start_run(
        &mut self,
        task: &str,
        reset_memory: bool,
        extra_args: Option<&ExtraArgs>,
    ) -> Result<()> {
        if let Some(reason) = &self.unavailable {
            return Err(Error::Unavailable(reason.clone()));
        }
        if reset_memory {
            self.position = 0;
        }
        self.last_run = Some(RunRecord {
            task: task.to_string(),
            reset_memory,
            extra_args: extra_args.cloned(),
        });
        Ok(())
    }

    fn next_item(&mut self) -> Option<Result<TraceItem>> {
        let index = self.pulls;
        self.pulls += 1;

        if let Some((fail_index, message)) = &self.fail_at
            && *fail_index == index
        {
            return Some(Err(Error::Executor(message.clone())));
        }

        let item = self.items.get(self.position).cloned()?;
        self.position += 1;
        Some(Ok(item))
    }

    fn last_token_usage(&self) -> Option<TokenUsage> {
        let index = self.pulls.checked_sub(1)?;
        self.token_usage.get(index).copied()
    }
}
