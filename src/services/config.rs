use crate::cli::RunMode;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/ordgate/config.toml"))
}

pub fn load_config() -> anyhow::Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Flag wins over environment, environment over config file. An explicitly
/// empty value counts as unset, so `BASE_URL= ordgate run` forces offline
/// mode regardless of the config file.
pub fn resolve_base_url(flag: Option<String>, config: &Config) -> Option<String> {
    resolve_base_url_from(flag, std::env::var("BASE_URL").ok(), config)
}

fn resolve_base_url_from(
    flag: Option<String>,
    env: Option<String>,
    config: &Config,
) -> Option<String> {
    flag.or(env)
        .or_else(|| config.base_url.clone())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Explicit run mode threaded from here; nothing below the command handler
/// reads the environment.
pub fn resolve_mode(flag: Option<RunMode>) -> RunMode {
    if let Some(mode) = flag {
        return mode;
    }
    match std::env::var("MODE")
        .unwrap_or_default()
        .to_ascii_lowercase()
        .as_str()
    {
        "raw" | "raw_v2" => RunMode::Raw,
        "compat" => RunMode::Compat,
        _ => RunMode::Both,
    }
}
