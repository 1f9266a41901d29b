use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::guidance::DEFAULT_TIMEOUT_SECS;

/// Application-level constants
pub const APP_NAME: &str = "Symptom Guide";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 5000;

/// Tracing filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "symptom_guide_lib=info,symptom_guide=info,tower_http=info"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Generative-model endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub provider: ProviderConfig,
    pub hospitals_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let ip = match var("BIND_ADDR") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue { name: "BIND_ADDR", value })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let timeout_secs = match var("GEMINI_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "GEMINI_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            provider: ProviderConfig {
                api_url: var("GEMINI_API_URL"),
                api_key: var("GEMINI_API_KEY"),
                timeout_secs,
            },
            hospitals_path: var("HOSPITALS_PATH").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));
        assert_eq!(config.provider.timeout_secs, 15);
        assert!(config.provider.api_url.is_none());
        assert!(config.provider.api_key.is_none());
        assert!(config.hospitals_path.is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "8081"),
            ("BIND_ADDR", "127.0.0.1"),
            ("GEMINI_API_URL", "https://example.test/generate"),
            ("GEMINI_API_KEY", "abc"),
            ("GEMINI_TIMEOUT_SECS", "30"),
            ("HOSPITALS_PATH", "/srv/hospitals.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8081)));
        assert_eq!(config.provider.api_url.as_deref(), Some("https://example.test/generate"));
        assert_eq!(config.provider.api_key.as_deref(), Some("abc"));
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.hospitals_path, Some(PathBuf::from("/srv/hospitals.json")));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  "), ("PORT", "")])).unwrap();
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PORT",
                value: "http".into()
            }
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("GEMINI_TIMEOUT_SECS", "0")])).is_err());
    }

    #[test]
    fn app_name_and_version() {
        assert_eq!(APP_NAME, "Symptom Guide");
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
