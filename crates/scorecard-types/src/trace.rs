use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use super::step::{Step, value_text};

/// One item of an agent run, as yielded by the executor.
///
/// A run is a sequence of steps, normally terminated by the run's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceItem {
    Step(Step),
    FinalAnswer { answer: AgentOutput },
}

impl TraceItem {
    pub fn as_step(&self) -> Option<&Step> {
        match self {
            TraceItem::Step(step) => Some(step),
            TraceItem::FinalAnswer { .. } => None,
        }
    }
}

impl From<Step> for TraceItem {
    fn from(step: Step) -> Self {
        TraceItem::Step(step)
    }
}

impl From<AgentOutput> for TraceItem {
    fn from(answer: AgentOutput) -> Self {
        TraceItem::FinalAnswer { answer }
    }
}

/// Value returned by the agent at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentOutput {
    Text { text: String },
    Image { path: PathBuf },
    Audio { path: PathBuf },
    Other { value: Value },
}

impl AgentOutput {
    pub fn text(text: impl Into<String>) -> Self {
        AgentOutput::Text { text: text.into() }
    }

    pub fn to_text(&self) -> String {
        match self {
            AgentOutput::Text { text } => text.clone(),
            AgentOutput::Image { path } | AgentOutput::Audio { path } => {
                path.display().to_string()
            }
            AgentOutput::Other { value } => value_text(value),
        }
    }
}
