use regex::Regex;
use scorecard_types::{MessageStatus, Step};
use std::sync::LazyLock;

use crate::fence::normalize;
use crate::footnote::footnote;
use crate::tool_call::format_tool_call;

static EXECUTION_LOGS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Execution logs:\s*").unwrap());

/// One display-ready part of a step, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum StepIntent {
    Header {
        label: String,
    },
    Reasoning {
        text: String,
    },
    ToolCall {
        name: String,
        parent_id: String,
        content: String,
        used_code: bool,
        status: MessageStatus,
    },
    ExecutionLog {
        parent_id: String,
        content: String,
    },
    /// `parent_id` is set when the error belongs to the step's tool call
    Error {
        parent_id: Option<String>,
        content: String,
    },
    Footnote {
        text: String,
    },
    Separator,
}

impl StepIntent {
    pub fn kind(&self) -> &'static str {
        match self {
            StepIntent::Header { .. } => "header",
            StepIntent::Reasoning { .. } => "reasoning",
            StepIntent::ToolCall { .. } => "tool_call",
            StepIntent::ExecutionLog { .. } => "execution_log",
            StepIntent::Error { .. } => "error",
            StepIntent::Footnote { .. } => "footnote",
            StepIntent::Separator => "separator",
        }
    }
}

/// Decompose a step into its display intents.
///
/// Order: header, reasoning, tool call with its log and error (or a
/// standalone error), footnote, separator. Only the first tool call of a
/// step is rendered.
pub fn classify(step: &Step, code_tool_name: &str) -> Vec<StepIntent> {
    let mut intents = vec![StepIntent::Header {
        label: step.label(),
    }];

    if let Some(output) = step.model_output.as_deref()
        && !output.trim().is_empty()
    {
        intents.push(StepIntent::Reasoning {
            text: normalize(output, false),
        });
    }

    if let Some(call) = step.first_tool_call() {
        if step.tool_calls.len() > 1 {
            tracing::debug!(
                step = step.step_number,
                rendered = %call.name,
                dropped = step.tool_calls.len() - 1,
                "step has several tool calls; rendering the first one only"
            );
        }

        let parent_id = format!("call_{}", step.tool_calls.len());
        let rendered = format_tool_call(&call.name, &call.arguments, code_tool_name);

        let tool_index = intents.len();
        intents.push(StepIntent::ToolCall {
            name: call.name.clone(),
            parent_id: parent_id.clone(),
            content: rendered.content,
            used_code: rendered.used_code,
            status: MessageStatus::Pending,
        });

        if let Some(observations) = step.observations.as_deref()
            && !observations.trim().is_empty()
        {
            let content = EXECUTION_LOGS_LABEL
                .replace(observations.trim(), "")
                .into_owned();
            intents.push(StepIntent::ExecutionLog {
                parent_id: parent_id.clone(),
                content,
            });
        }

        if let Some(error) = &step.error {
            intents.push(StepIntent::Error {
                parent_id: Some(parent_id),
                content: error.to_string(),
            });
        }

        // The tool call entry is complete once its children are known.
        if let StepIntent::ToolCall { status, .. } = &mut intents[tool_index] {
            *status = MessageStatus::Done;
        }
    } else if let Some(error) = &step.error {
        intents.push(StepIntent::Error {
            parent_id: None,
            content: error.to_string(),
        });
    }

    intents.push(StepIntent::Footnote {
        text: footnote(step),
    });
    intents.push(StepIntent::Separator);
    intents
}
