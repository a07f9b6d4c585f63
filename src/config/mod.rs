//! Configuration management for InsightOps
//!
//! Settings come from a YAML file (`~/.insightops/config.yaml` by default) with
//! credential environment variables layered on top. The resulting [`Config`]
//! is handed to the API clients explicitly; nothing below the CLI layer reads
//! the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::pagination::MAX_PAGE_SIZE;
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// InsightVM console connection settings
    #[serde(default)]
    pub insightvm: InsightVmConfig,

    /// Cortex XDR connection settings
    #[serde(default)]
    pub xdr: XdrConfig,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// InsightVM console settings (HTTP Basic Auth)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightVmConfig {
    /// Console base URL, e.g. `https://insightvm.example.com:3780`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// API password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Verify the console's TLS certificate
    #[serde(default = "default_true")]
    pub verify_ssl: bool,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Read timeout in seconds
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
}

/// Cortex XDR settings (advanced API key authentication)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XdrConfig {
    /// Tenant API base URL, e.g. `https://api-tenant.xdr.us.paloaltonetworks.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API key ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_id: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_xdr_timeout")]
    pub timeout_secs: u64,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Page size used by fetch-all listings
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Ask for confirmation before a live bulk delete
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,
}

/// Resolved InsightVM credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightVmCredentials<'a> {
    pub base_url: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Resolved Cortex XDR credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdrCredentials<'a> {
    pub base_url: &'a str,
    pub api_key: &'a str,
    pub api_key_id: &'a str,
}

fn default_true() -> bool {
    true
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_read_timeout() -> u64 {
    90
}

fn default_xdr_timeout() -> u64 {
    10
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

impl Default for InsightVmConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            username: None,
            password: None,
            verify_ssl: true,
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
        }
    }
}

impl Default for XdrConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_key_id: None,
            timeout_secs: default_xdr_timeout(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            confirm_destructive: true,
        }
    }
}

impl InsightVmConfig {
    /// Return the credentials, or an error naming what must be configured.
    pub fn credentials(&self) -> Result<InsightVmCredentials<'_>> {
        match (
            non_empty(&self.base_url),
            non_empty(&self.username),
            non_empty(&self.password),
        ) {
            (Some(base_url), Some(username), Some(password)) => Ok(InsightVmCredentials {
                base_url,
                username,
                password,
            }),
            _ => Err(ConfigError::MissingInsightVmCredentials.into()),
        }
    }
}

impl XdrConfig {
    /// Return the credentials, or an error naming what must be configured.
    pub fn credentials(&self) -> Result<XdrCredentials<'_>> {
        match (
            non_empty(&self.base_url),
            non_empty(&self.api_key),
            non_empty(&self.api_key_id),
        ) {
            (Some(base_url), Some(api_key), Some(api_key_id)) => Ok(XdrCredentials {
                base_url,
                api_key,
                api_key_id,
            }),
            _ => Err(ConfigError::MissingXdrCredentials.into()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a boolean flag the way the console tooling always has: `true`, `1`
/// and `yes` (any case) are true, everything else is false.
pub fn parse_bool_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".insightops").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override.
    ///
    /// A missing file is not an error: credentials may come entirely from
    /// the environment.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Overlay credential environment variables on top of file settings.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |target: &mut Option<String>, key: &str| {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *target = Some(value);
            }
        };

        set(&mut self.insightvm.username, "INSIGHTVM_API_USERNAME");
        set(&mut self.insightvm.password, "INSIGHTVM_API_PASSWORD");
        set(&mut self.insightvm.base_url, "INSIGHTVM_BASE_URL");
        set(&mut self.xdr.api_key, "XDR_API_KEY");
        set(&mut self.xdr.api_key_id, "XDR_API_KEY_ID");
        set(&mut self.xdr.base_url, "XDR_BASE_URL");

        if let Some(verify) = lookup("INSIGHTVM_VERIFY_SSL") {
            self.insightvm.verify_ssl = parse_bool_flag(&verify);
        }
    }

    /// Check that InsightVM credentials are present.
    pub fn validate_insightvm(&self) -> Result<()> {
        self.insightvm.credentials().map(|_| ())
    }

    /// Check that Cortex XDR credentials are present.
    pub fn validate_xdr(&self) -> Result<()> {
        self.xdr.credentials().map(|_| ())
    }

    /// Load from file and apply the process environment
    pub fn load_with_env(path: Option<&str>) -> Result<Self> {
        let mut config = Self::load_at(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }
}
