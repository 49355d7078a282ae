use crate::types::OutputFormat;
use anyhow::{Result, bail};
use scorecard_runtime::Config;
use std::path::Path;

const MASK: &str = "********";

pub fn init(data_dir: &Path, force: bool) -> Result<()> {
    let path = Config::path_in(data_dir);
    if path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(data_dir)?;
    println!("Config written to {}", path.display());
    Ok(())
}

pub fn show(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let mut config = Config::load(data_dir)?;
    if config.api.api_key.is_some() {
        config.api.api_key = Some(MASK.to_string());
    }

    match format {
        OutputFormat::Plain => print!("{}", toml::to_string_pretty(&config)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
