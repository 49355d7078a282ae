use serde_json::{Map, Value};

use super::error::Result;
use super::step::TokenUsage;
use super::trace::TraceItem;

/// Free-form arguments forwarded to the executor unchanged
pub type ExtraArgs = Map<String, Value>;

/// The autonomous agent as seen from the trace pipeline.
///
/// The executor is a pull-based producer: `start_run` prepares a run and
/// `next_item` hands out its trace one item at a time until `None`.
pub trait AgentExecutor {
    /// Begin a run for `task`. Failing here means nothing was requested yet.
    fn start_run(
        &mut self,
        task: &str,
        reset_memory: bool,
        extra_args: Option<&ExtraArgs>,
    ) -> Result<()>;

    /// Produce the next trace item of the current run
    fn next_item(&mut self) -> Option<Result<TraceItem>>;

    /// Token counts of the most recent model call, when the model reports them
    fn last_token_usage(&self) -> Option<TokenUsage> {
        None
    }
}

impl<A: AgentExecutor + ?Sized> AgentExecutor for Box<A> {
    fn start_run(
        &mut self,
        task: &str,
        reset_memory: bool,
        extra_args: Option<&ExtraArgs>,
    ) -> Result<()> {
        (**self).start_run(task, reset_memory, extra_args)
    }

    fn next_item(&mut self) -> Option<Result<TraceItem>> {
        (**self).next_item()
    }

    fn last_token_usage(&self) -> Option<TokenUsage> {
        (**self).last_token_usage()
    }
}
