use crate::cli::FormatArg;
use anyhow::{Context, Result};
use essay_graph::StatementFormat;
use serde::Deserialize;
use std::path::Path;

/// Settings read from `--config`; command-line flags win
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub statement_format: StatementFormat,
    pub pretty_json: bool,
}

impl CliConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    pub fn resolve(path: Option<&Path>, format: Option<FormatArg>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };
        if let Some(format) = format {
            config.statement_format = format.into();
        }
        log::debug!("Resolved configuration: {config:?}");
        Ok(config)
    }
}
