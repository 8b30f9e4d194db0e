//! Langfuse connection configuration
//!
//! Read from the environment, the way Cursor hook processes receive it:
//!
//! - `LANGFUSE_PUBLIC_KEY` / `LANGFUSE_SECRET_KEY`: API key pair (required)
//! - `LANGFUSE_BASE_URL`: self-hosted instance URL (optional)
//!
//! A missing key pair is not fatal to the hook: the caller converts it
//! into process-wide degraded mode and the host event proceeds untouched.

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const ENV_PUBLIC_KEY: &str = "LANGFUSE_PUBLIC_KEY";
pub const ENV_SECRET_KEY: &str = "LANGFUSE_SECRET_KEY";
pub const ENV_BASE_URL: &str = "LANGFUSE_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://cloud.langfuse.com";

/// Outbound requests get ample headroom; the flush deadline upstream is
/// what actually bounds the process lifetime.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingKey(&'static str),
}

/// Connection settings for one Langfuse project
#[derive(Debug, Clone)]
pub struct LangfuseConfig {
    pub public_key: String,
    pub secret_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl LangfuseConfig {
    /// Build the configuration from environment variables.
    ///
    /// Empty values count as unset; editor config UIs write empty strings
    /// for cleared fields.
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_key = require(ENV_PUBLIC_KEY)?;
        let secret_key = require(ENV_SECRET_KEY)?;
        let base_url = env::var(ENV_BASE_URL)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            public_key,
            secret_key,
            base_url,
            request_timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn ingestion_url(&self) -> String {
        format!("{}/api/public/ingestion", self.base())
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/public/health", self.base())
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingKey(name))
}
