//! Code fence normalization for agent reasoning and code tool calls.
//!
//! Code agents are trained to terminate code blocks with an `<end_code>`
//! sentinel, which leaks into the reasoning text next to the closing fence.

use regex::Regex;
use std::sync::LazyLock;

pub const CODE_FENCE_OPEN: &str = "```python";

static FENCE_THEN_END_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*<end_code>").unwrap());
static END_CODE_THEN_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<end_code>\s*```").unwrap());
static BARE_END_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*<end_code>\s*").unwrap());
// Opening fence of a one-line snippet, with an optional language tag
static INLINE_FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(?:(?:python|py)\b)?\s*").unwrap());

/// Collapse fence/sentinel pairs, trim, and optionally wrap as a python block.
///
/// Idempotent: `normalize(&normalize(t, c), c) == normalize(t, c)`.
pub fn normalize(text: &str, is_code: bool) -> String {
    let mut current = text.to_string();
    // Removing one sentinel can make another one adjacent to a fence.
    loop {
        let collapsed = END_CODE_THEN_FENCE
            .replace_all(&FENCE_THEN_END_CODE.replace_all(&current, "```"), "```")
            .into_owned();
        if collapsed == current {
            break;
        }
        current = collapsed;
    }

    let trimmed = current.trim();
    if !is_code {
        return trimmed.to_string();
    }

    // A sentinel is never part of the code itself.
    let code = BARE_END_CODE.replace_all(trimmed, "");
    let code = code.trim();
    if code.starts_with(CODE_FENCE_OPEN) {
        code.to_string()
    } else {
        format!("{}\n{}\n```", CODE_FENCE_OPEN, code)
    }
}

/// Remove sentinels and an enclosing fence, leaving the bare code
pub fn strip_code_markup(text: &str) -> String {
    let without_sentinel = BARE_END_CODE.replace_all(text, "");
    let mut code = without_sentinel.trim();

    if code.starts_with("```") {
        code = match code.find('\n') {
            Some(pos) => &code[pos + 1..],
            None => match INLINE_FENCE_OPEN.find(code) {
                Some(open) => &code[open.end()..],
                None => code,
            },
        };
    }
    if let Some(stripped) = code.trim_end().strip_suffix("```") {
        code = stripped;
    }

    code.trim().to_string()
}
