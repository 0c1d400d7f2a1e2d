//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Where accepted submissions are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Structured log event
    #[default]
    Log,
    /// JSON printed to stdout once the terminal is restored
    Stdout,
    /// JSON lines appended to `output_path`
    File,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Submission sink
    pub sink: Option<SinkKind>,
    /// Target file for the file sink
    pub output_path: Option<PathBuf>,
    /// Tracing filter directive, used when RUST_LOG is unset
    pub log_filter: Option<String>,
    /// Log file location
    pub log_path: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "devreg", "devreg-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    fn data_file(name: &str) -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(name))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.sink.unwrap_or_default()
    }

    /// File sink target, defaulting to the data directory
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path
            .clone()
            .or_else(|| Self::data_file("submissions.jsonl"))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("devreg_tui=info")
    }

    /// Log file location, `None` when no data directory is available
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| Self::data_file("devreg-tui.log"))
    }
}
