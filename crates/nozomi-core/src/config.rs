use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,nozomi_core=debug";

/// How the CLI prints resolved URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One URL per line.
    #[default]
    Plain,
    /// A JSON array of `{ "input", "url" }` objects.
    Json,
}

/// Global configuration loaded from `~/.config/nozomi/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NozomiConfig {
    /// tracing `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Output format for the CLI.
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for NozomiConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            output: OutputFormat::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Read from an existing file.
    File(PathBuf),
    /// No file existed; defaults were written here.
    Created(PathBuf),
    /// The config could not be read or written; built-in defaults are in use.
    Defaults(anyhow::Error),
}

impl ConfigOrigin {
    /// Report the origin; call once a subscriber is installed.
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => tracing::debug!("loaded config from {}", path.display()),
            ConfigOrigin::Created(path) => {
                tracing::info!("created default config at {}", path.display())
            }
            ConfigOrigin::Defaults(err) => {
                tracing::warn!("config unavailable, using defaults: {:#}", err)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nozomi")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("create nozomi config directory")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<(NozomiConfig, ConfigOrigin)> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<(NozomiConfig, ConfigOrigin)> {
    if path.exists() {
        return Ok((load_from(path)?, ConfigOrigin::File(path.to_path_buf())));
    }

    let default_cfg = NozomiConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok((default_cfg, ConfigOrigin::Created(path.to_path_buf())))
}

/// Falls back to [`NozomiConfig::default`] when loading failed.
pub fn or_defaults(
    loaded: Result<(NozomiConfig, ConfigOrigin)>,
) -> (NozomiConfig, ConfigOrigin) {
    loaded.unwrap_or_else(|err| (NozomiConfig::default(), ConfigOrigin::Defaults(err)))
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<NozomiConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: NozomiConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
