use std::{env, fs};

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// ================================
/// Backend endpoint
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// admin-ajax.php URL the token action is registered on
    pub ajax_url: String,
    pub nonce: NonceValue,
}

/// Nonce sources
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum NonceValue {
    Literal { value: String },
    FromEnv { from_env: String },
    FromFile { path: String },
}

impl NonceValue {
    /// Resolve the nonce at call time. Nonces are short-lived, so env and
    /// file sources are re-read on every resolution instead of captured
    /// at startup.
    pub fn resolve(&self) -> Result<String> {
        match self {
            NonceValue::Literal { value } => Ok(value.to_owned()),
            NonceValue::FromEnv { from_env } => {
                env::var(from_env).map_err(|err| anyhow!("nonce env '{}': {}", from_env, err))
            }
            NonceValue::FromFile { path } => fs::read_to_string(path)
                .map(|raw| raw.trim().to_string())
                .map_err(|err| anyhow!("nonce file '{}': {}", path, err)),
        }
    }
}

/// ================================
/// Global service-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    /// directory the persisted token table lives in
    pub storage_dir: Option<String>,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}
