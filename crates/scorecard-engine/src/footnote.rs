use scorecard_types::{Step, TokenUsage};

/// Single-line telemetry summary for one step.
///
/// Reads only the step's own counters; segments whose source is absent are
/// left out entirely.
pub fn footnote(step: &Step) -> String {
    footnote_with(&step.label(), step.token_usage, step.duration)
}

pub fn footnote_with(label: &str, usage: Option<TokenUsage>, duration: Option<f64>) -> String {
    let mut line = label.to_string();

    if let Some(usage) = usage {
        line.push_str(&format!(
            " | Input-tokens:{} | Output-tokens:{}",
            format_thousands(usage.input_tokens),
            format_thousands(usage.output_tokens)
        ));
    }

    if let Some(duration) = duration.and_then(format_duration) {
        line.push_str(&format!(" | Duration: {}", duration));
    }

    line
}

/// `1234567` -> `"1,234,567"`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-decimal seconds; zero, negative and non-finite durations are not shown
pub fn format_duration(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    Some(format!("{:.2}", seconds))
}
