use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::environment::StaticLocation;

/// How a query segment without `=` is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsentValue {
    /// Literal `undefined`, matching what legacy browser redirectors emit.
    #[default]
    Undefined,
    /// Empty string, as if the segment had been `key=`.
    Empty,
}

impl AbsentValue {
    pub fn as_str(self) -> &'static str {
        match self {
            AbsentValue::Undefined => "undefined",
            AbsentValue::Empty => "",
        }
    }
}

/// Keys to drop from the forwarded query: a single key or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IgnoreKeys {
    One(String),
    Many(Vec<String>),
}

impl Default for IgnoreKeys {
    fn default() -> Self {
        IgnoreKeys::Many(Vec::new())
    }
}

impl IgnoreKeys {
    /// Ordered key list with `key_destination` appended.
    pub fn normalize(&self, key_destination: &str) -> Vec<String> {
        let mut keys = match self {
            IgnoreKeys::One(key) => vec![key.clone()],
            IgnoreKeys::Many(keys) => keys.clone(),
        };
        keys.push(key_destination.to_string());
        keys
    }
}

impl From<&str> for IgnoreKeys {
    fn from(key: &str) -> Self {
        IgnoreKeys::One(key.to_string())
    }
}

impl From<Vec<String>> for IgnoreKeys {
    fn from(keys: Vec<String>) -> Self {
        IgnoreKeys::Many(keys)
    }
}

impl<const N: usize> From<[&str; N]> for IgnoreKeys {
    fn from(keys: [&str; N]) -> Self {
        IgnoreKeys::Many(keys.iter().map(|k| k.to_string()).collect())
    }
}

/// Settings for one redirect decision.
///
/// `query`, `protocol` and `host` fall back to the injected
/// [`Location`](crate::environment::Location) when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectorConfig {
    /// Query parameter carrying the destination path.
    pub key_destination: String,
    /// Parameters never forwarded (the destination key is always added).
    pub ignore: IgnoreKeys,
    pub query: Option<String>,
    pub protocol: Option<String>,
    pub host: Option<String>,
    /// Fixed destination; wins over the query when non-empty.
    pub dest: String,
    /// Strip `<>()` and their encodings from the raw query before parsing.
    pub should_sanitize: bool,
    pub absent_value: AbsentValue,
}

impl Default for RedirectorConfig {
    fn default() -> Self {
        Self {
            key_destination: "d".to_string(),
            ignore: IgnoreKeys::default(),
            query: None,
            protocol: None,
            host: None,
            dest: String::new(),
            should_sanitize: true,
            absent_value: AbsentValue::default(),
        }
    }
}

/// Global configuration loaded from `~/.config/qsr/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QsrConfig {
    /// Ambient location used when a redirect does not supply its own values.
    #[serde(default)]
    pub location: StaticLocation,
    /// Defaults for every redirector built by the CLI.
    #[serde(default)]
    pub redirector: RedirectorConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qsr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QsrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QsrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<QsrConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: QsrConfig = toml::from_str(&data)?;
    Ok(cfg)
}
