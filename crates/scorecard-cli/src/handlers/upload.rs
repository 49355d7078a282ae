use crate::types::OutputFormat;
use anyhow::Result;
use scorecard_runtime::{Config, upload_file};
use std::path::Path;

pub fn handle(data_dir: &Path, format: OutputFormat, file: &Path) -> Result<()> {
    let config = Config::load(data_dir)?;
    let folder = config.upload_folder(data_dir);
    let stored = upload_file(file, &folder, &config.uploads.allowed_types)?;

    match format {
        OutputFormat::Plain => println!("File uploaded: {}", stored.display()),
        OutputFormat::Json => println!("{}", serde_json::json!({ "path": stored })),
    }
    Ok(())
}
