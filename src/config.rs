// src/config.rs
// =============================================================================
// Optional settings file.
//
// Everything has a default, so the file is only needed to change something.
// Example:
//
//   social_domains = ["youtube.com", "bandcamp.com", "mixcloud.com"]
//   timeout_secs = 20
//   format = "csv"
//
// Command-line flags still win over anything set here.
// =============================================================================

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::export::Format;
use crate::scrape::DEFAULT_SOCIAL_DOMAINS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Domains the `social` scrape keeps
    pub social_domains: Vec<String>,
    /// How long to wait when downloading a page
    pub timeout_secs: u64,
    /// Output format when `--format` isn't given
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            social_domains: DEFAULT_SOCIAL_DOMAINS.iter().map(|d| d.to_string()).collect(),
            timeout_secs: 10,
            format: Format::default(),
        }
    }
}

impl Config {
    /// Reads the config file, or returns the defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.social_domains.contains(&"bandcamp.com".to_string()));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            social_domains = ["mixcloud.com"]
            format = "domain-path"
            "#,
        )
        .unwrap();
        assert_eq!(config.social_domains, vec!["mixcloud.com"]);
        assert_eq!(config.format, Format::DomainPath);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_text_format_by_name() {
        let config = Config::from_toml("format = \"text\"").unwrap();
        assert_eq!(config.format, Format::Text);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
