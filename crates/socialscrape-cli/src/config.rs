use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "socialscrape.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scrape: ScrapeSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeSettings {
    pub max_posts: u32,
    pub include_comments: bool,
    /// Empty means the block default platform list.
    pub platforms: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            max_posts: 10,
            include_comments: true,
            platforms: Vec::new(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Append JSON log lines to this file.
    pub json_path: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_path: None,
        }
    }
}

/// Load settings from `path`, or from [`DEFAULT_CONFIG_PATH`] if it exists.
///
/// An explicit path must exist; the default path falls back to built-in defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    if !explicit && !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = parse_settings("").expect("parse empty config");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.scrape.max_posts, 10);
        assert!(settings.scrape.include_comments);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = parse_settings(
            r#"
            [scrape]
            max_posts = 3
            seed = 99

            [logging]
            json_path = "logs/socialscrape.ndjson"
            "#,
        )
        .expect("parse config");

        assert_eq!(settings.scrape.max_posts, 3);
        assert_eq!(settings.scrape.seed, Some(99));
        assert!(settings.scrape.include_comments);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(
            settings.logging.json_path.as_deref(),
            Some(Path::new("logs/socialscrape.ndjson"))
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join(format!(
            "socialscrape_missing_{}.toml",
            uuid::Uuid::new_v4()
        ));
        let err = load_settings(Some(&missing)).expect_err("missing config");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = parse_settings("[scrape\nmax_posts = ").expect_err("bad toml");
        assert!(matches!(err, ConfigError::TomlDecode(_)));
    }
}
