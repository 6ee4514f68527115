//! Settings: built-in defaults, then an optional TOML file (only when
//! `--config` is given), then command-line flags.

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

/// Report rendering on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Log line rendering on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Resolved settings. File keys: `domain`, `phrase`, `format`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Regulatory domain name (default FCC915).
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Binding phrase (default "42,13,9,8").
    #[serde(default = "default_phrase")]
    pub phrase: String,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_domain() -> String {
    fhss_core::DEFAULT_DOMAIN.to_string()
}
fn default_phrase() -> String {
    "42,13,9,8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            phrase: default_phrase(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Parse settings from TOML text.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Read and parse a config file.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Apply command-line overrides on top of these settings.
    pub fn merge(
        mut self,
        domain: Option<String>,
        phrase: Option<String>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(d) = domain {
            self.domain = d;
        }
        if let Some(p) = phrase {
            self.phrase = p;
        }
        if let Some(f) = format {
            self.format = f;
        }
        self
    }
}

/// Defaults, overlaid with `path` when one is given.
pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Config::load_file(p),
        None => Ok(Config::default()),
    }
}
