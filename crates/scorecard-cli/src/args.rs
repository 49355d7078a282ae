use crate::types::{FootnoteFormat, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scorecard")]
#[command(about = "Compare colleges and replay agent runs as chat transcripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to $SCORECARD_PATH, then the XDG data directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a recorded agent trace (JSON lines) as chat messages
    Run {
        trace: PathBuf,

        #[arg(long)]
        task: String,

        /// Start the replay from the beginning
        #[arg(long)]
        reset: bool,

        /// Extra argument forwarded to the agent, as key=value
        #[arg(long = "extra", value_parser = parse_key_value)]
        extra: Vec<(String, String)>,

        /// Show running token totals in footnotes instead of per-step counts
        #[arg(long)]
        cumulative_tokens: bool,

        #[arg(long)]
        footnotes: Option<FootnoteFormat>,

        /// File to upload and mention in the task
        #[arg(long)]
        upload: Vec<PathBuf>,
    },

    /// Compare up to three colleges
    Compare {
        #[arg(required = true, num_args = 1..=3)]
        names: Vec<String>,

        /// Print the two-college summary instead of the full report
        #[arg(long)]
        side_by_side: bool,

        #[arg(long)]
        csv: Option<PathBuf>,

        #[arg(long)]
        html: Option<PathBuf>,

        /// Write the grouped bar chart as Plotly JSON
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Store a document in the upload folder
    Upload { file: PathBuf },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default settings
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}
