use scorecard_types::{Step, StepError, TokenUsage, ToolArguments, ToolCall};

/// Builder for `Step` test values
#[derive(Debug, Clone, Default)]
pub struct StepFixture {
    step: Step,
}

impl StepFixture {
    pub fn new(step_number: u32) -> Self {
        Self {
            step: Step::new(step_number),
        }
    }

    pub fn unnumbered() -> Self {
        Self::default()
    }

    pub fn model_output(mut self, text: &str) -> Self {
        self.step.model_output = Some(text.to_string());
        self
    }

    pub fn tool_call(mut self, name: &str, arguments: impl Into<ToolArguments>) -> Self {
        self.step.tool_calls.push(ToolCall::new(name, arguments));
        self
    }

    pub fn observations(mut self, text: &str) -> Self {
        self.step.observations = Some(text.to_string());
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.step.error = Some(StepError::new(message));
        self
    }

    pub fn tokens(mut self, input: u64, output: u64) -> Self {
        self.step.token_usage = Some(TokenUsage::new(input, output));
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.step.duration = Some(seconds);
        self
    }

    pub fn build(self) -> Step {
        self.step
    }
}
