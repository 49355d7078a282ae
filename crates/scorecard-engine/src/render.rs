use serde::{Deserialize, Serialize};
use scorecard_types::{AgentOutput, Message, MessageMetadata, MessageStatus, TraceItem};
use std::path::PathBuf;

use crate::classify::StepIntent;

pub const SEPARATOR: &str = "-----";
pub const FINAL_ANSWER_LABEL: &str = "Final answer:";

/// How footnotes are wrapped for the chat UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootnoteStyle {
    /// Small grey `<span>` for HTML-capable chat widgets
    #[default]
    Html,
    Plain,
}

/// Turn one intent into the message the UI receives
pub fn render_intent(intent: StepIntent, style: FootnoteStyle) -> Message {
    match intent {
        StepIntent::Header { label } => {
            if label.is_empty() {
                Message::assistant("")
            } else {
                Message::assistant(format!("**{}**", label))
            }
        }
        StepIntent::Reasoning { text } => Message::assistant(text),
        StepIntent::ToolCall {
            name,
            parent_id,
            content,
            status,
            ..
        } => Message::assistant(content).with_metadata(MessageMetadata {
            title: Some(format!("🛠️ Used tool {}", name)),
            id: Some(parent_id),
            parent_id: None,
            status: Some(status),
        }),
        StepIntent::ExecutionLog { parent_id, content } => {
            Message::assistant(content).with_metadata(MessageMetadata {
                title: Some("📝 Execution Logs".to_string()),
                id: None,
                parent_id: Some(parent_id),
                status: Some(MessageStatus::Done),
            })
        }
        StepIntent::Error { parent_id, content } => {
            let status = parent_id.as_ref().map(|_| MessageStatus::Done);
            Message::assistant(content).with_metadata(MessageMetadata {
                title: Some("💥 Error".to_string()),
                id: None,
                parent_id,
                status,
            })
        }
        StepIntent::Footnote { text } => match style {
            FootnoteStyle::Html => Message::assistant(format!(
                r#"<span style="color: #bbbbc2; font-size: 12px;">{}</span> "#,
                text
            )),
            FootnoteStyle::Plain => Message::assistant(text),
        },
        StepIntent::Separator => Message::assistant(SEPARATOR),
    }
}

/// Terminal value of a run, resolved once when the trace ends
#[derive(Debug, Clone, PartialEq)]
pub enum FinalAnswer {
    Text(String),
    Image(PathBuf),
    Audio(PathBuf),
    Other(String),
}

impl FinalAnswer {
    /// Resolve from the last item the executor produced.
    ///
    /// A trace that ends on a step (no explicit answer) resolves to the
    /// step's text form.
    pub fn resolve(last: &TraceItem) -> Self {
        match last {
            TraceItem::FinalAnswer { answer } => match answer {
                AgentOutput::Text { text } => FinalAnswer::Text(text.clone()),
                AgentOutput::Image { path } => FinalAnswer::Image(path.clone()),
                AgentOutput::Audio { path } => FinalAnswer::Audio(path.clone()),
                AgentOutput::Other { .. } => FinalAnswer::Other(answer.to_text()),
            },
            TraceItem::Step(step) => FinalAnswer::Other(step.to_string()),
        }
    }

    pub fn into_message(self) -> Message {
        match self {
            FinalAnswer::Text(text) => {
                Message::assistant(format!("{}\n{}", FINAL_ANSWER_LABEL, text))
            }
            FinalAnswer::Image(path) => Message::assistant_file(path, "image/png"),
            FinalAnswer::Audio(path) => Message::assistant_file(path, "audio/wav"),
            FinalAnswer::Other(text) => {
                Message::assistant(format!("{} {}", FINAL_ANSWER_LABEL, text))
            }
        }
    }
}
