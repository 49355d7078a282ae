use serde::{Deserialize, Serialize};
use scorecard_types::{AgentExecutor, ExtraArgs, Message, TokenUsage, TraceItem};
use std::collections::VecDeque;

use crate::error::Result;
use crate::render::{FinalAnswer, FootnoteStyle};
use crate::render_step;
use crate::tool_call::CODE_TOOL_NAME;

/// Which token counts a step's footnote shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenTally {
    /// The model's last-call delta observed when the step arrived
    #[default]
    PerStep,
    /// Running totals over the run so far
    Cumulative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOptions {
    pub token_tally: TokenTally,
    pub footnote_style: FootnoteStyle,
    pub code_tool_name: String,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            token_tally: TokenTally::default(),
            footnote_style: FootnoteStyle::default(),
            code_tool_name: CODE_TOOL_NAME.to_string(),
        }
    }
}

/// Cumulative token counts of one stream invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningTotals {
    usage: TokenUsage,
}

impl RunningTotals {
    pub fn add(&mut self, delta: TokenUsage) {
        self.usage += delta;
    }

    pub fn usage(&self) -> TokenUsage {
        self.usage
    }
}

/// Start a run and return the lazy message stream for it.
///
/// The executor is started before this returns, so an unavailable executor
/// fails here rather than on the first pull.
pub fn stream<'a, A>(
    agent: &'a mut A,
    task: &str,
    reset_memory: bool,
    extra_args: Option<&ExtraArgs>,
    options: StreamOptions,
) -> Result<TraceStream<'a, A>>
where
    A: AgentExecutor + ?Sized,
{
    agent.start_run(task, reset_memory, extra_args)?;
    tracing::debug!(task, reset_memory, "agent run started");

    Ok(TraceStream {
        agent,
        options,
        totals: RunningTotals::default(),
        pending: VecDeque::new(),
        last_item: None,
        finished: false,
    })
}

/// Pull-based stream of display messages for one agent run.
///
/// The next trace item is requested only after every message derived from
/// the previous one has been pulled. An executor failure is yielded once as
/// `Err` and ends the stream.
pub struct TraceStream<'a, A: AgentExecutor + ?Sized> {
    agent: &'a mut A,
    options: StreamOptions,
    totals: RunningTotals,
    pending: VecDeque<Message>,
    last_item: Option<TraceItem>,
    finished: bool,
}

impl<A: AgentExecutor + ?Sized> TraceStream<'_, A> {
    pub fn totals(&self) -> RunningTotals {
        self.totals
    }

    fn process(&mut self, mut item: TraceItem) {
        if let Some(delta) = self.agent.last_token_usage() {
            self.totals.add(delta);
            tracing::debug!(
                step_tokens = delta.total(),
                run_tokens = self.totals.usage().total(),
                "token usage recorded"
            );
            if let TraceItem::Step(step) = &mut item {
                step.token_usage = Some(match self.options.token_tally {
                    TokenTally::PerStep => delta,
                    TokenTally::Cumulative => self.totals.usage(),
                });
            }
        }

        if let TraceItem::Step(step) = &item {
            self.pending.extend(render_step(step, &self.options));
        }

        self.last_item = Some(item);
    }

    fn finish(&mut self) {
        self.finished = true;
        match self.last_item.take() {
            Some(last) => self
                .pending
                .push_back(FinalAnswer::resolve(&last).into_message()),
            None => tracing::warn!("agent produced an empty trace; no final answer to show"),
        }
    }
}

impl<A: AgentExecutor + ?Sized> Iterator for TraceStream<'_, A> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(message) = self.pending.pop_front() {
                return Some(Ok(message));
            }
            if self.finished {
                return None;
            }

            match self.agent.next_item() {
                Some(Ok(item)) => self.process(item),
                Some(Err(err)) => {
                    self.finished = true;
                    tracing::warn!(error = %err, "agent trace aborted");
                    return Some(Err(err.into()));
                }
                None => self.finish(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use scorecard_testing::{ScriptedAgent, StepFixture};
    use scorecard_types::AgentOutput;

    #[test]
    fn test_unavailable_agent_fails_before_streaming() {
        let mut agent = ScriptedAgent::unavailable("model endpoint down");
        let result = stream(&mut agent, "compare", false, None, StreamOptions::default());
        assert!(matches!(
            result,
            Err(Error::Agent(scorecard_types::Error::Unavailable(_)))
        ));
        assert_eq!(agent.pulls(), 0);
    }

    #[test]
    fn test_task_and_flags_are_passed_through() {
        let mut agent = ScriptedAgent::new(vec![]);
        let mut extra = ExtraArgs::new();
        extra.insert("college".to_string(), serde_json::json!("MIT"));
        let messages: Vec<_> = stream(
            &mut agent,
            "compare",
            true,
            Some(&extra),
            StreamOptions::default(),
        )
        .unwrap()
        .collect();
        assert!(messages.is_empty());
        let run = agent.last_run().unwrap();
        assert_eq!(run.task, "compare");
        assert!(run.reset_memory);
        assert_eq!(run.extra_args, Some(extra));
    }

    #[test]
    fn test_one_step_in_flight() {
        let mut agent = ScriptedAgent::new(vec![
            StepFixture::new(1).build().into(),
            StepFixture::new(2).build().into(),
        ]);
        let mut messages = stream(&mut agent, "t", false, None, StreamOptions::default()).unwrap();

        messages.next().unwrap().unwrap();
        assert_eq!(messages.agent.pulls(), 1);
        // header, footnote and separator of step 1 are served from the buffer
        messages.next().unwrap().unwrap();
        messages.next().unwrap().unwrap();
        assert_eq!(messages.agent.pulls(), 1);
        messages.next().unwrap().unwrap();
        assert_eq!(messages.agent.pulls(), 2);
    }

    #[test]
    fn test_per_step_tokens_recorded_from_model_delta() {
        let mut agent = ScriptedAgent::new(vec![
            StepFixture::new(1).build().into(),
            StepFixture::new(2).build().into(),
        ])
        .with_token_usage(vec![TokenUsage::new(1000, 10), TokenUsage::new(2000, 20)]);

        let mut messages = stream(
            &mut agent,
            "t",
            false,
            None,
            StreamOptions {
                footnote_style: FootnoteStyle::Plain,
                ..Default::default()
            },
        )
        .unwrap();
        let texts: Vec<String> = messages
            .by_ref()
            .map(|m| m.unwrap().text().unwrap_or_default().to_string())
            .collect();

        assert!(texts.contains(&"Step 1 | Input-tokens:1,000 | Output-tokens:10".to_string()));
        assert!(texts.contains(&"Step 2 | Input-tokens:2,000 | Output-tokens:20".to_string()));
        assert_eq!(messages.totals().usage(), TokenUsage::new(3000, 30));
    }

    #[test]
    fn test_cumulative_tokens() {
        let mut agent = ScriptedAgent::new(vec![
            StepFixture::new(1).build().into(),
            StepFixture::new(2).build().into(),
        ])
        .with_token_usage(vec![TokenUsage::new(1000, 10), TokenUsage::new(2000, 20)]);

        let options = StreamOptions {
            token_tally: TokenTally::Cumulative,
            footnote_style: FootnoteStyle::Plain,
            ..Default::default()
        };
        let texts: Vec<String> = stream(&mut agent, "t", false, None, options)
            .unwrap()
            .map(|m| m.unwrap().text().unwrap_or_default().to_string())
            .collect();

        assert!(texts.contains(&"Step 2 | Input-tokens:3,000 | Output-tokens:30".to_string()));
    }

    #[test]
    fn test_cumulative_tokens_saturate_instead_of_overflowing() {
        let mut agent = ScriptedAgent::new(vec![
            StepFixture::new(1).build().into(),
            StepFixture::new(2).build().into(),
        ])
        .with_token_usage(vec![TokenUsage::new(u64::MAX, 1), TokenUsage::new(1, 1)]);

        let options = StreamOptions {
            token_tally: TokenTally::Cumulative,
            footnote_style: FootnoteStyle::Plain,
            ..Default::default()
        };
        let mut messages = stream(&mut agent, "t", false, None, options).unwrap();
        let texts: Vec<String> = messages
            .by_ref()
            .map(|m| m.unwrap().text().unwrap_or_default().to_string())
            .collect();

        assert!(texts.contains(
            &"Step 2 | Input-tokens:18,446,744,073,709,551,615 | Output-tokens:2".to_string()
        ));
        assert_eq!(messages.totals().usage(), TokenUsage::new(u64::MAX, 2));
    }

    #[test]
    fn test_without_model_usage_footnote_has_no_tokens() {
        let mut agent = ScriptedAgent::new(vec![StepFixture::new(1).build().into()]);
        let options = StreamOptions {
            footnote_style: FootnoteStyle::Plain,
            ..Default::default()
        };
        let texts: Vec<String> = stream(&mut agent, "t", false, None, options)
            .unwrap()
            .map(|m| m.unwrap().text().unwrap_or_default().to_string())
            .collect();
        assert_eq!(texts[1], "Step 1");
    }

    #[test]
    fn test_upstream_failure_is_yielded_once_then_stream_ends() {
        let mut agent = ScriptedAgent::new(vec![
            StepFixture::new(1).build().into(),
            StepFixture::new(2).build().into(),
        ])
        .fail_at(1, "connection reset");

        let results: Vec<_> = stream(&mut agent, "t", false, None, StreamOptions::default())
            .unwrap()
            .collect();

        // header, footnote, separator of step 1, then the failure
        assert_eq!(results.len(), 4);
        assert!(results[..3].iter().all(|r| r.is_ok()));
        assert!(matches!(
            results[3],
            Err(Error::Agent(scorecard_types::Error::Executor(_)))
        ));
    }

    #[test]
    fn test_final_answer_resolved_from_last_item() {
        let mut agent = ScriptedAgent::new(vec![
            StepFixture::new(1).build().into(),
            AgentOutput::text("done").into(),
        ]);
        let messages: Vec<Message> = stream(&mut agent, "t", false, None, StreamOptions::default())
            .unwrap()
            .map(|m| m.unwrap())
            .collect();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[3].text(), Some("Final answer:\ndone"));
    }
}
