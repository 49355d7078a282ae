use scorecard_types::{ToolArguments, value_text};

use crate::fence::{normalize, strip_code_markup};

/// Tool name the code agent uses for running generated code
pub const CODE_TOOL_NAME: &str = "python_interpreter";

/// Display block for a tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToolCall {
    pub content: String,
    pub used_code: bool,
}

/// Render a tool call's arguments for display.
///
/// Key-value arguments with an `answer` key show only that value; anything
/// else shows the whole arguments. Never fails: arguments that are not
/// key-value shaped are shown as their raw text.
pub fn format_tool_call(
    name: &str,
    arguments: &ToolArguments,
    code_tool_name: &str,
) -> RenderedToolCall {
    let used_code = name == code_tool_name;

    let content = match arguments {
        ToolArguments::Map(_) => match arguments.get("answer") {
            Some(answer) => value_text(answer),
            None => arguments.to_text(),
        },
        ToolArguments::Raw(_) => arguments.to_text().trim().to_string(),
    };

    let content = if used_code {
        normalize(&strip_code_markup(&content), true)
    } else {
        content
    };

    RenderedToolCall { content, used_code }
}
