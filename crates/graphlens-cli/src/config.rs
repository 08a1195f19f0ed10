//! CLI configuration

use anyhow::Context;
use graphlens_executor::ExecutorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Executor settings
    pub executor: ExecutorConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty: true,
            executor: ExecutorConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Builder: set log level
    pub fn log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    /// Builder: emit compact JSON
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}
