//! CLI configuration.
//!
//! Sources, lowest precedence first: the JSON config file, then the
//! `FLIPSET_EXHAUSTIVE` / `FLIPSET_WORKERS` environment variables, then
//! command-line flags (applied by each command).

use anyhow::Context;
use clap::ValueEnum;
use flipset_search::{MonomialOrder, SearchConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Valid V_s found: [...]` line per flip set.
    #[default]
    Text,
    /// The outcomes as pretty-printed JSON.
    Json,
}

/// CLI configuration loaded from file or environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Enumerate every flip set by default.
    pub exhaustive: bool,
    /// Default monomial processing order.
    pub order: MonomialOrder,
    /// Default number of sweep workers (None = one per core).
    pub workers: Option<usize>,
    /// Default format of printed results.
    pub output_format: OutputFormat,
}

impl CliConfig {
    /// `~/.flipset/config.json`, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".flipset").join("config.json"))
    }

    /// Loads configuration from file, then applies environment overrides.
    ///
    /// An explicit path must exist; the default path is optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(value) = lookup("FLIPSET_EXHAUSTIVE") {
            self.exhaustive = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => anyhow::bail!("FLIPSET_EXHAUSTIVE: expected a boolean, got {other:?}"),
            };
        }
        if let Some(value) = lookup("FLIPSET_WORKERS") {
            let workers = value
                .trim()
                .parse()
                .with_context(|| format!("FLIPSET_WORKERS: expected a number, got {value:?}"))?;
            self.workers = Some(workers);
        }
        Ok(())
    }

    /// Search configuration with command-line overrides applied.
    ///
    /// `exhaustive` is `None` when neither `--all` nor `--first` was given.
    pub fn search_config(
        &self,
        exhaustive: Option<bool>,
        order: Option<MonomialOrder>,
    ) -> SearchConfig {
        SearchConfig {
            exhaustive: exhaustive.unwrap_or(self.exhaustive),
            order: order.unwrap_or(self.order),
        }
    }

    /// Output format with the command-line override applied.
    pub fn output_format(&self, format: Option<OutputFormat>) -> OutputFormat {
        format.unwrap_or(self.output_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "exhaustive": true, "order": "forward" }}"#).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert!(config.exhaustive);
        assert_eq!(config.order, MonomialOrder::Forward);
        assert_eq!(config.workers, None);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "output_format": "json", "workers": 2 }}"#).unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.output_format(None), OutputFormat::Json);
        assert_eq!(config.output_format(Some(OutputFormat::Text)), OutputFormat::Text);

        let bad: Result<CliConfig, _> = serde_json::from_str(r#"{ "output_format": "xml" }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "exhaustiv": true }}"#).unwrap();
        assert!(CliConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(Some(&dir.path().join("nope.json"))).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[("FLIPSET_EXHAUSTIVE", "yes"), ("FLIPSET_WORKERS", "3")]))
            .unwrap();
        assert!(config.exhaustive);
        assert_eq!(config.workers, Some(3));

        assert!(config.apply_env(env(&[("FLIPSET_WORKERS", "many")])).is_err());
        assert!(config.apply_env(env(&[("FLIPSET_EXHAUSTIVE", "perhaps")])).is_err());
    }

    #[test]
    fn test_flags_win() {
        let config = CliConfig::default();
        let search = config.search_config(Some(true), Some(MonomialOrder::Forward));
        assert!(search.exhaustive);
        assert_eq!(search.order, MonomialOrder::Forward);

        let search = config.search_config(None, None);
        assert!(!search.exhaustive);
        assert_eq!(search.order, MonomialOrder::Reverse);
    }

    #[test]
    fn test_first_flag_overrides_exhaustive_config() {
        let mut config = CliConfig {
            exhaustive: true,
            ..CliConfig::default()
        };
        assert!(config.search_config(None, None).exhaustive);
        assert!(!config.search_config(Some(false), None).exhaustive);

        config.apply_env(env(&[("FLIPSET_EXHAUSTIVE", "1")])).unwrap();
        assert!(!config.search_config(Some(false), None).exhaustive);
    }
}
