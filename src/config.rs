//! Secret and settings loading.
//!
//! # Responsibilities
//! - Load the funding private key and required API keys at startup
//! - Fail fast when any required secret is absent
//!
//! # Security Constraints
//! - Secrets come from environment variables only
//! - Never logged or serialized; `Debug` output is redacted

use std::fmt;

use serde::Deserialize;

use crate::error::{FundingError, FundingResult};

/// Environment variable holding the funding account's private key.
pub const FUNDING_PRIVATE_KEY_ENV: &str = "FUNDING_PRIVATE_KEY";

/// Environment variable for the orchestration service API key.
///
/// Not called by this crate; the surrounding application requires it,
/// so its absence is treated as a fatal startup failure here.
pub const RHINESTONE_API_KEY_ENV: &str = "RHINESTONE_API_KEY";

/// Environment variable for the bundler service API key. Presence-only,
/// same as [`RHINESTONE_API_KEY_ENV`].
pub const PIMLICO_API_KEY_ENV: &str = "PIMLICO_API_KEY";

fn default_confirmation_timeout_secs() -> u64 {
    60
}

/// Startup configuration for the funding core.
#[derive(Clone, Deserialize)]
pub struct FundingConfig {
    /// Hex-encoded private key of the funding account (with or without
    /// `0x` prefix).
    pub funding_private_key: String,

    /// Orchestration service API key (presence-checked only).
    pub rhinestone_api_key: String,

    /// Bundler service API key (presence-checked only).
    pub pimlico_api_key: String,

    /// Maximum time to wait for a transaction receipt, in seconds.
    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,
}

impl FundingConfig {
    /// Load configuration from the environment.
    ///
    /// Every required variable must be present and non-empty; a missing
    /// one is [`FundingError::MissingConfiguration`] and the process
    /// must not proceed.
    pub fn from_env() -> FundingResult<Self> {
        Ok(Self {
            funding_private_key: require_env(FUNDING_PRIVATE_KEY_ENV)?,
            rhinestone_api_key: require_env(RHINESTONE_API_KEY_ENV)?,
            pimlico_api_key: require_env(PIMLICO_API_KEY_ENV)?,
            confirmation_timeout_secs: default_confirmation_timeout_secs(),
        })
    }
}

fn require_env(name: &'static str) -> FundingResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(FundingError::MissingConfiguration(name)),
    }
}

impl fmt::Debug for FundingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FundingConfig")
            .field("funding_private_key", &"<redacted>")
            .field("rhinestone_api_key", &"<redacted>")
            .field("pimlico_api_key", &"<redacted>")
            .field("confirmation_timeout_secs", &self.confirmation_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment mutation is process-wide; serialize these tests.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(FUNDING_PRIVATE_KEY_ENV);
        std::env::remove_var(RHINESTONE_API_KEY_ENV);
        std::env::remove_var(PIMLICO_API_KEY_ENV);
    }

    #[test]
    fn from_env_loads_all_secrets() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(FUNDING_PRIVATE_KEY_ENV, "0xdeadbeef");
        std::env::set_var(RHINESTONE_API_KEY_ENV, "rh-key");
        std::env::set_var(PIMLICO_API_KEY_ENV, "pm-key");

        let config = FundingConfig::from_env().unwrap();
        assert_eq!(config.funding_private_key, "0xdeadbeef");
        assert_eq!(config.rhinestone_api_key, "rh-key");
        assert_eq!(config.pimlico_api_key, "pm-key");
        assert_eq!(config.confirmation_timeout_secs, 60);
        clear_env();
    }

    #[test]
    fn missing_secret_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(FUNDING_PRIVATE_KEY_ENV, "0xdeadbeef");
        std::env::set_var(RHINESTONE_API_KEY_ENV, "rh-key");
        // PIMLICO_API_KEY left unset.

        let err = FundingConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            FundingError::MissingConfiguration(PIMLICO_API_KEY_ENV)
        ));
        clear_env();
    }

    #[test]
    fn empty_secret_is_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(FUNDING_PRIVATE_KEY_ENV, "");

        let err = FundingConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            FundingError::MissingConfiguration(FUNDING_PRIVATE_KEY_ENV)
        ));
        clear_env();
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = FundingConfig {
            funding_private_key: "0xsecret".to_string(),
            rhinestone_api_key: "rh".to_string(),
            pimlico_api_key: "pm".to_string(),
            confirmation_timeout_secs: 60,
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("0xsecret"));
        assert!(debug.contains("<redacted>"));
    }
}
