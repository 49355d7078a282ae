//! Testing utilities for scorecard.
//!
//! - [`ScriptedAgent`]: an in-memory `AgentExecutor` that replays a fixed trace
//! - [`StepFixture`]: builder for `Step` values
//! - [`fixtures`]: trace files on disk for replay and CLI tests

pub mod agent;
pub mod fixtures;
pub mod step;

pub use agent::{RunRecord, ScriptedAgent};
pub use fixtures::{TraceFile, sample_trace};
pub use step::StepFixture;
