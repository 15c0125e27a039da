use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::SearchLimits;

pub const CONFIG_ENV_VAR: &str = "MAPLE_CONFIG";
pub const HOME_ENV_VAR: &str = "MAPLE_HOME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid toml in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid json in {path}: {source}")]
    Json {
        path: PathBuf,
        source: json5::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub relevance_threshold: f64,
    pub max_knowledge_results: usize,
    pub max_visible_results: usize,
    pub fallback_min_query_chars: usize,
    pub debounce_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base_path: Option<PathBuf>,
    pub log_filter: String,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let limits = SearchLimits::default();
        Self {
            relevance_threshold: limits.relevance_threshold,
            max_knowledge_results: limits.max_knowledge_results,
            max_visible_results: 5,
            fallback_min_query_chars: limits.fallback_min_query_chars,
            debounce_ms: 300,
            knowledge_base_path: None,
            log_filter: "info".to_string(),
            config_path: default_config_path(),
        }
    }
}

impl Config {
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            relevance_threshold: self.relevance_threshold,
            max_knowledge_results: self.max_knowledge_results,
            fallback_min_query_chars: self.fallback_min_query_chars,
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

pub fn stable_app_data_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::temp_dir().join("maple"),
    }
}

pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => stable_app_data_dir().join("config.toml"),
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(0.0..1.0).contains(&cfg.relevance_threshold) {
        return Err(ConfigError::Invalid(
            "relevance_threshold must be within [0, 1)".into(),
        ));
    }

    if cfg.max_knowledge_results == 0 {
        return Err(ConfigError::Invalid(
            "max_knowledge_results must be at least 1".into(),
        ));
    }

    if !(1..=20).contains(&cfg.max_visible_results) {
        return Err(ConfigError::Invalid(
            "max_visible_results must be between 1 and 20".into(),
        ));
    }

    if cfg.debounce_ms > 5_000 {
        return Err(ConfigError::Invalid(
            "debounce_ms must not exceed 5000".into(),
        ));
    }

    if cfg.log_filter.trim().is_empty() {
        return Err(ConfigError::Invalid("log_filter is required".into()));
    }

    Ok(())
}

/// Reads the config at `path` (or the default location). A missing file
/// yields defaults. `.json`/`.json5` files are read as JSON5, anything else
/// as TOML.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if !path.exists() {
        return Ok(Config {
            config_path: path,
            ..Config::default()
        });
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    let mut cfg: Config = if is_json(&path) {
        json5::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.clone(),
            source,
        })?
    } else {
        toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.clone(),
            source,
        })?
    };

    cfg.config_path = path;
    validate(&cfg)?;
    Ok(cfg)
}

/// Writes `cfg` as TOML to `cfg.config_path`, creating parent directories.
pub fn save(cfg: &Config) -> Result<(), ConfigError> {
    validate(cfg)?;
    let io_error = |source| ConfigError::Io {
        path: cfg.config_path.clone(),
        source,
    };

    if let Some(parent) = cfg.config_path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let body = toml::to_string_pretty(cfg)?;
    std::fs::write(&cfg.config_path, body).map_err(io_error)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("json5"))
        .unwrap_or(false)
}
