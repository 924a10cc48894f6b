// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::entitlement::DEFAULT_MAX_FREE_USAGE;
use crate::infra::errors::ToolNestError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub entitlement: EntitlementConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    /// Latencies of the simulated collaborators.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Identity returned by the simulated identity provider.
    #[serde(default)]
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementConfig {
    pub max_free_usage: u32,
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self {
            max_free_usage: DEFAULT_MAX_FREE_USAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Upper bound on a login round trip. 0 disables the timeout.
    pub timeout_seconds: u64,
    /// OAuth provider shown on the sign-in button.
    #[serde(default = "default_oauth_provider")]
    pub provider: String,
}

fn default_oauth_provider() -> String {
    "google".into()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            provider: default_oauth_provider(),
        }
    }
}

impl AuthConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub login_latency_ms: u64,
    pub processing_latency_ms: u64,
    pub billing_latency_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: 1_500,
            processing_latency_ms: 2_000,
            billing_latency_ms: 1_500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub display_name: String,
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            display_name: "Alex Johnson".into(),
            email: "alex@example.com".into(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, ToolNestError> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ToolNestError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ToolNestError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ToolNestError> {
        if self.identity.display_name.trim().is_empty() {
            return Err(ToolNestError::Config(
                "identity.display_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
