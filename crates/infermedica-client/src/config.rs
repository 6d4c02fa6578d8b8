//! Client configuration.
//!
//! A config can be written as TOML:
//!
//! ```toml
//! app_id = "my-app-id"
//! app_key = "my-app-key"
//! model = "infermedica-en"
//! dev_mode = true
//! timeout_secs = 5
//! ```
//!
//! or read from the environment with [`ClientConfig::from_env`]. Nothing is
//! read implicitly; callers decide where credentials come from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};

/// Environment variable holding the application ID.
pub const APP_ID_ENV: &str = "INFERMEDICA_APP_ID";
/// Environment variable holding the application key.
pub const APP_KEY_ENV: &str = "INFERMEDICA_APP_KEY";
pub const MODEL_ENV: &str = "INFERMEDICA_MODEL";
pub const INTERVIEW_ID_ENV: &str = "INFERMEDICA_INTERVIEW_ID";
pub const DEV_MODE_ENV: &str = "INFERMEDICA_DEV_MODE";
pub const BASE_URL_ENV: &str = "INFERMEDICA_BASE_URL";

/// Settings needed to build an [`InfermedicaClient`](crate::InfermedicaClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    pub app_id: String,

    pub app_key: String,

    /// Knowledge model, e.g. `infermedica-es`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_id: Option<String>,

    #[serde(default)]
    pub dev_mode: bool,

    /// Default request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl ClientConfig {
    /// Config with credentials and defaults for everything else.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            app_id: app_id.into(),
            app_key: app_key.into(),
            model: None,
            interview_id: None,
            dev_mode: false,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ReadConfig {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), "loaded client config");
        Ok(config)
    }

    /// Read the config from `INFERMEDICA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let app_id = get(APP_ID_ENV)
            .ok_or_else(|| Error::Config(format!("{} is not set", APP_ID_ENV)))?;
        let app_key = get(APP_KEY_ENV)
            .ok_or_else(|| Error::Config(format!("{} is not set", APP_KEY_ENV)))?;

        let mut config = Self::new(app_id, app_key);
        if let Some(base_url) = get(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.model = get(MODEL_ENV);
        config.interview_id = get(INTERVIEW_ID_ENV);
        if let Some(value) = get(DEV_MODE_ENV) {
            config.dev_mode = parse_bool(DEV_MODE_ENV, &value)?;
        }
        Ok(config)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!(
            "{} must be a boolean, got {:?}",
            name, value
        ))),
    }
}
