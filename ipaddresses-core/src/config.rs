//! Application configuration
//!
//! Built once in `main` and passed by reference to everything that needs it.

use std::time::Duration;

use crate::i18n::{resolve_locale, Locale};

/// Default address-echo endpoint
pub const DEFAULT_ENDPOINT: &str = "https://ip.app/";

/// Default timeout for the public address request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Endpoint override
pub const ENV_ENDPOINT: &str = "IPADDRESSES_ENDPOINT";
/// Timeout override, whole seconds
pub const ENV_TIMEOUT_SECS: &str = "IPADDRESSES_TIMEOUT_SECS";
/// Locale override, same rules as the OS locale tag
pub const ENV_LANG: &str = "IPADDRESSES_LANG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub locale: Locale,
    /// URL of the service that echoes the caller's public address
    pub endpoint: String,
    /// Upper bound for the whole public address request
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment and OS locale.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), Locale::detect)
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// `detect_locale` is only called when no locale override is set.
    pub fn from_lookup<F, L>(lookup: F, detect_locale: L) -> Self
    where
        F: Fn(&str) -> Option<String>,
        L: FnOnce() -> Locale,
    {
        let locale = match lookup(ENV_LANG) {
            Some(tag) => resolve_locale(Some(&tag)),
            None => detect_locale(),
        };

        let endpoint = lookup(ENV_ENDPOINT)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = lookup(ENV_TIMEOUT_SECS).map_or(DEFAULT_TIMEOUT, |raw| {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!(
                        "Ignoring {ENV_TIMEOUT_SECS}={raw:?}, using {}s",
                        DEFAULT_TIMEOUT.as_secs()
                    );
                    DEFAULT_TIMEOUT
                }
            }
        });

        Self {
            locale,
            endpoint,
            timeout,
        }
    }
}
