// The `scorecard` binary: replays recorded agent runs as a chat transcript
// and compares colleges straight from the Scorecard API.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
