use crate::upload::DEFAULT_ALLOWED_TYPES;
use crate::{Error, Result};
use scorecard_engine::{CODE_TOOL_NAME, FootnoteStyle, StreamOptions, TokenTally};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "SCORECARD_API_KEY";
pub const DATA_DIR_ENV: &str = "SCORECARD_PATH";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SCORECARD_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.scorecard (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("scorecard"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".scorecard"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.data.gov/ed/collegescorecard".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub footnote_tokens: TokenTally,
    pub footnote_style: FootnoteStyle,
    pub code_tool_name: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            footnote_tokens: TokenTally::PerStep,
            footnote_style: FootnoteStyle::Html,
            code_tool_name: CODE_TOOL_NAME.to_string(),
        }
    }
}

impl StreamConfig {
    pub fn to_options(&self) -> StreamOptions {
        StreamOptions {
            token_tally: self.footnote_tokens,
            footnote_style: self.footnote_style,
            code_tool_name: self.code_tool_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Defaults to `<data dir>/uploads`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,
    pub allowed_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            folder: None,
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
}

impl Config {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = Self::load_from(&Self::path_in(data_dir))?;
        Ok(config.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        self.save_to(&Self::path_in(data_dir))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::path_in(&resolve_data_dir(None)?))
    }

    /// Apply `SCORECARD_API_KEY` on top of the file contents
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            self.api.api_key = Some(key);
        }
        self
    }

    pub fn upload_folder(&self, data_dir: &Path) -> PathBuf {
        self.uploads
            .folder
            .clone()
            .unwrap_or_else(|| data_dir.join("uploads"))
    }
}
