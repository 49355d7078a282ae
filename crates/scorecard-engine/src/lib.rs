// Engine module - trace-to-message pipeline and comparison rendering
// This layer sits between the executor boundary (types) and the chat UI / CLI

pub mod chart;
pub mod classify;
pub mod compare;
pub mod error;
pub mod export;
pub mod fence;
pub mod footnote;
pub mod render;
pub mod stream;
pub mod tool_call;

pub use chart::{ChartFigure, comparison_chart};
pub use classify::{StepIntent, classify};
pub use compare::{comparison_report, side_by_side};
pub use error::{Error, Result};
pub use export::{html_table, write_csv};
pub use fence::normalize;
pub use footnote::footnote;
pub use render::{FinalAnswer, FootnoteStyle, render_intent};
pub use stream::{RunningTotals, StreamOptions, TokenTally, TraceStream, stream};
pub use tool_call::{CODE_TOOL_NAME, RenderedToolCall, format_tool_call};

use scorecard_types::{Message, Step};

// Façade API - Stable public interface for the runtime and CLI layers

/// Render a single step the way the stream would, without an executor
pub fn render_step(step: &Step, options: &StreamOptions) -> Vec<Message> {
    classify(step, &options.code_tool_name)
        .into_iter()
        .map(|intent| render_intent(intent, options.footnote_style))
        .collect()
}
