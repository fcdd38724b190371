//! Client configuration: backend location, request timeout and the defaults
//! substituted for omitted or disabled query fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Values used when a query field is left empty or disabled by the form rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDefaults {
    #[serde(default = "default_k_shortest")]
    pub k_shortest: u32,
    #[serde(default = "default_max_per_node")]
    pub max_per_node: u32,
    #[serde(default = "default_depth_limit")]
    pub depth_limit: u32,
    #[serde(default = "default_const_c")]
    pub const_c: u32,
    #[serde(default = "default_const_tk")]
    pub const_tk: u32,
    /// Seconds the backend may spend on a search.
    #[serde(default = "default_user_timeout")]
    pub user_timeout: f64,
    #[serde(default)]
    pub belief_cutoff: f64,
}

fn default_k_shortest() -> u32 {
    50
}
fn default_max_per_node() -> u32 {
    5
}
fn default_depth_limit() -> u32 {
    2
}
fn default_const_c() -> u32 {
    1
}
fn default_const_tk() -> u32 {
    10
}
fn default_user_timeout() -> f64 {
    30.0
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            k_shortest: default_k_shortest(),
            max_per_node: default_max_per_node(),
            depth_limit: default_depth_limit(),
            const_c: default_const_c(),
            const_tk: default_const_tk(),
            user_timeout: default_user_timeout(),
            belief_cutoff: 0.0,
        }
    }
}

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the network search API, without trailing slash.
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// HTTP request timeout; kept above `user_timeout` so the backend can
    /// report `timed_out` itself.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub defaults: QueryDefaults,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            defaults: QueryDefaults::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load config from a JSON file, falling back to defaults, then env vars.
    pub fn load(path: &Path) -> Self {
        let mut config: ClientConfig = match std::fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.apply_env();
        config
    }

    /// Save config to disk as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("Saved client config to {}", path.display());
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("NETSEARCH_API_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        if let Some(secs) = std::env::var("NETSEARCH_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.request_timeout_secs = secs;
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
    }

    /// Full URL for an API path such as `/query`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Check the configuration is usable before creating a client.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs must be > 0".into()));
        }
        if self.defaults.user_timeout <= 0.0 {
            return Err(Error::Config("defaults.user_timeout must be > 0".into()));
        }
        Ok(())
    }
}
