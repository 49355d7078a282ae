use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::Result;
use scorecard_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command {
        Commands::Run {
            trace,
            task,
            reset,
            extra,
            cumulative_tokens,
            footnotes,
            upload,
        } => handlers::run::handle(
            &data_dir,
            cli.format,
            handlers::run::RunRequest {
                trace,
                task,
                reset,
                extra,
                cumulative_tokens,
                footnotes,
                uploads: upload,
            },
        ),

        Commands::Compare {
            names,
            side_by_side,
            csv,
            html,
            chart,
        } => handlers::compare::handle(
            &data_dir,
            cli.format,
            handlers::compare::CompareRequest {
                names,
                side_by_side,
                csv,
                html,
                chart,
            },
        ),

        Commands::Upload { file } => handlers::upload::handle(&data_dir, cli.format, &file),

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&data_dir, force),
            ConfigCommand::Show => handlers::config::show(&data_dir, cli.format),
        },
    }
}
