//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file (or a file named
//! with `--config`), then `SDBCLI__…` environment overrides. Credentials given as flags
//! or `AWS_*` variables win over anything in the files.

use crate::error::AppError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::{global_config_path, resolve_global_config_path};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdbConfig {
    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credentials section. Normally left empty and supplied through flags or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "eu-west-1".to_string()
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            region: default_region(),
        }
    }
}

/// Web viewer bind address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Store backend settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// TOML fixture used to seed the in-memory store
    pub fixture: Option<PathBuf>,
}

/// Resolved credentials. Only ever built with both keys present.
#[derive(Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

pub const MISSING_ACCESS_KEY: &str = "accessKey: AWS Access Key ID is not set";
pub const MISSING_SECRET_KEY: &str = "secret: AWS Secret Key ID is not set";

impl Credentials {
    /// Flag/env values first, then the config file. Empty strings count as missing.
    pub fn resolve(
        access_key: Option<&str>,
        secret_key: Option<&str>,
        region: Option<&str>,
        config: &CredentialsConfig,
    ) -> Result<Self, AppError> {
        let pick = |flag: Option<&str>, file: &Option<String>| {
            flag.filter(|s| !s.is_empty())
                .map(str::to_string)
                .or_else(|| file.clone().filter(|s| !s.is_empty()))
        };

        let access_key = pick(access_key, &config.access_key)
            .ok_or_else(|| AppError::MissingCredential(MISSING_ACCESS_KEY.to_string()))?;
        let secret_key = pick(secret_key, &config.secret_key)
            .ok_or_else(|| AppError::MissingCredential(MISSING_SECRET_KEY.to_string()))?;
        let region = region
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| config.region.clone());

        Ok(Self {
            access_key,
            secret_key,
            region,
        })
    }
}
