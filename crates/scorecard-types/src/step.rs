use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One decision/action cycle recorded by the agent executor.
///
/// Every optional field has explicit absent-vs-empty semantics:
/// - `step_number: None` means no numbering is shown for the step
/// - `tool_calls` empty means no action was taken
/// - `observations` may be present but blank; blank is treated like absent
/// - `token_usage` carries both counts or neither
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_output: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<StepError>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_usage: Option<TokenUsage>,

    /// Wall-clock seconds spent on the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Step {
    pub fn new(step_number: u32) -> Self {
        Self {
            step_number: Some(step_number),
            ..Default::default()
        }
    }

    /// Display label used by headers and footnotes ("Step 3", or empty)
    pub fn label(&self) -> String {
        match self.step_number {
            Some(n) => format!("Step {}", n),
            None => String::new(),
        }
    }

    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.tool_calls.first()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        if label.is_empty() {
            write!(f, "Step")
        } else {
            write!(f, "{}", label)
        }
    }
}

/// Token counts of a single model call (or the sum of several)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(rename = "input_token_count")]
    pub input_tokens: u64,
    #[serde(rename = "output_token_count")]
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    pub fn total(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

impl std::ops::AddAssign for TokenUsage {
    fn add_assign(&mut self, rhs: Self) {
        self.input_tokens = self.input_tokens.saturating_add(rhs.input_tokens);
        self.output_tokens = self.output_tokens.saturating_add(rhs.output_tokens);
    }
}

/// A named capability invocation recorded in a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default = "ToolArguments::empty")]
    pub arguments: ToolArguments,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<ToolArguments>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// Tool arguments as the executor recorded them.
///
/// Executors usually pass key-value data, but raw strings (and occasionally
/// other JSON values) show up when the model produced unparseable arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolArguments {
    Map(Map<String, Value>),
    Raw(Value),
}

impl ToolArguments {
    pub fn empty() -> Self {
        ToolArguments::Map(Map::new())
    }

    /// Look up a key when the arguments are key-value shaped
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            ToolArguments::Map(map) => map.get(key),
            ToolArguments::Raw(_) => None,
        }
    }

    /// Textual form: raw strings verbatim, everything else as compact JSON
    pub fn to_text(&self) -> String {
        match self {
            ToolArguments::Map(map) => Value::Object(map.clone()).to_string(),
            ToolArguments::Raw(value) => value_text(value),
        }
    }
}

impl From<Value> for ToolArguments {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ToolArguments::Map(map),
            other => ToolArguments::Raw(other),
        }
    }
}

impl From<&str> for ToolArguments {
    fn from(raw: &str) -> Self {
        ToolArguments::Raw(Value::String(raw.to_string()))
    }
}

impl From<String> for ToolArguments {
    fn from(raw: String) -> Self {
        ToolArguments::Raw(Value::String(raw))
    }
}

/// Text form of a JSON value: strings without quotes, the rest as JSON
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Error recorded by the executor on a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StepErrorRepr")]
pub struct StepError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub message: String,
}

impl StepError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// Traces written by hand often carry the error as a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum StepErrorRepr {
    Message(String),
    Full {
        #[serde(default)]
        kind: Option<String>,
        message: String,
    },
}

impl From<StepErrorRepr> for StepError {
    fn from(repr: StepErrorRepr) -> Self {
        match repr {
            StepErrorRepr::Message(message) => StepError {
                kind: None,
                message,
            },
            StepErrorRepr::Full { kind, message } => StepError { kind, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_label() {
        assert_eq!(Step::new(3).label(), "Step 3");
        assert_eq!(Step::default().label(), "");
        assert_eq!(Step::default().to_string(), "Step");
    }

    #[test]
    fn test_step_deserialize_minimal() {
        let step: Step = serde_json::from_value(json!({"step_number": 1})).unwrap();
        assert_eq!(step.step_number, Some(1));
        assert!(step.tool_calls.is_empty());
        assert!(step.token_usage.is_none());
        assert!(step.duration.is_none());
    }

    #[test]
    fn test_tool_arguments_shapes() {
        let call: ToolCall =
            serde_json::from_value(json!({"name": "search", "arguments": {"query": "MIT"}}))
                .unwrap();
        assert_eq!(call.arguments.get("query"), Some(&json!("MIT")));
        assert_eq!(call.arguments.to_text(), r#"{"query":"MIT"}"#);

        let raw: ToolCall =
            serde_json::from_value(json!({"name": "search", "arguments": "{not json"})).unwrap();
        assert_eq!(raw.arguments.get("query"), None);
        assert_eq!(raw.arguments.to_text(), "{not json");
    }

    #[test]
    fn test_tool_call_missing_arguments_defaults_to_empty_map() {
        let call: ToolCall = serde_json::from_value(json!({"name": "final_answer"})).unwrap();
        assert_eq!(call.arguments, ToolArguments::empty());
    }

    #[test]
    fn test_step_error_accepts_string_or_struct() {
        let bare: StepError = serde_json::from_value(json!("boom")).unwrap();
        assert_eq!(bare.message, "boom");
        assert!(bare.kind.is_none());

        let full: StepError =
            serde_json::from_value(json!({"kind": "AgentExecutionError", "message": "boom"}))
                .unwrap();
        assert_eq!(full.kind.as_deref(), Some("AgentExecutionError"));
        assert_eq!(full.to_string(), "boom");
    }

    #[test]
    fn test_token_usage_accumulates() {
        let mut total = TokenUsage::default();
        total += TokenUsage::new(10, 2);
        total += TokenUsage::new(5, 1);
        assert_eq!(total, TokenUsage::new(15, 3));
        assert_eq!(total.total(), 18);
    }

    #[test]
    fn test_token_usage_saturates_at_max() {
        let mut total = TokenUsage::new(u64::MAX, 1);
        total += TokenUsage::new(1, 1);
        assert_eq!(total, TokenUsage::new(u64::MAX, 2));
        assert_eq!(total.total(), u64::MAX);
    }
}
