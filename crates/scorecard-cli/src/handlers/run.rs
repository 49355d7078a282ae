use crate::presentation::{DisplayOptions, MessageView};
use crate::types::{FootnoteFormat, OutputFormat};
use anyhow::Result;
use scorecard_engine::TokenTally;
use scorecard_runtime::{ChatSession, Config, ReplayAgent, upload_file};
use scorecard_types::{ExtraArgs, Message};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub struct RunRequest {
    pub trace: PathBuf,
    pub task: String,
    pub reset: bool,
    pub extra: Vec<(String, String)>,
    pub cumulative_tokens: bool,
    pub footnotes: Option<FootnoteFormat>,
    pub uploads: Vec<PathBuf>,
}

pub fn handle(data_dir: &Path, format: OutputFormat, request: RunRequest) -> Result<()> {
    let config = Config::load(data_dir)?;

    let mut options = config.stream.to_options();
    if request.cumulative_tokens {
        options.token_tally = TokenTally::Cumulative;
    }
    if let Some(footnotes) = request.footnotes {
        options.footnote_style = footnotes.into();
    }

    let mut session = ChatSession::new();
    if !request.uploads.is_empty() {
        let folder = config.upload_folder(data_dir);
        for path in &request.uploads {
            let stored = upload_file(path, &folder, &config.uploads.allowed_types)?;
            session.add_upload(stored);
        }
    }

    let extra_args = to_extra_args(&request.extra);
    let display = DisplayOptions::for_stdout();
    let print = |message: &Message| print_message(message, format, &display);

    print(&Message::user(session.user_message(&request.task)));

    let mut agent = ReplayAgent::open(&request.trace);
    session.interact(
        &mut agent,
        &request.task,
        request.reset,
        extra_args.as_ref(),
        options,
        print,
    )?;

    tracing::debug!(
        session = %session.id,
        messages = session.history.len(),
        "run finished"
    );
    Ok(())
}

fn print_message(message: &Message, format: OutputFormat, display: &DisplayOptions) {
    match format {
        OutputFormat::Plain => println!("{}", MessageView::new(message, display)),
        OutputFormat::Json => match serde_json::to_string(message) {
            Ok(line) => println!("{}", line),
            Err(err) => tracing::warn!(error = %err, "message not serializable"),
        },
    }
}

/// Values that parse as JSON keep their type; anything else is a string
fn to_extra_args(pairs: &[(String, String)]) -> Option<ExtraArgs> {
    if pairs.is_empty() {
        return None;
    }
    let args = pairs
        .iter()
        .map(|(key, raw)| {
            let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()));
            (key.clone(), value)
        })
        .collect();
    Some(args)
}
