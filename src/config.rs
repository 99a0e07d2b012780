use std::{net::SocketAddr, str::FromStr};

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// Which identity provider and document store the service talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Memory,
    Firebase(FirebaseConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_url: String,
    pub firestore_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: String,
    pub format: LoggingFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingFormat {
    Json,
    Pretty,
    Full,
    Compact,
}

impl FromStr for LoggingFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            _ => Err(ConfigError::Invalid {
                name: "LOG_FORMAT",
                value: value.to_string(),
            }),
        }
    }
}

impl AppConfig {
    /// Load settings from the process environment, after reading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let bind_addr_value = var("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr_value
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_addr_value.clone(),
            })?;

        let backend = match var("REGISTRATION_BACKEND", "memory").to_ascii_lowercase().as_str() {
            "memory" => BackendConfig::Memory,
            "firebase" => BackendConfig::Firebase(FirebaseConfig {
                api_key: required("FIREBASE_API_KEY")?,
                project_id: required("FIREBASE_PROJECT_ID")?,
                auth_url: var("FIREBASE_AUTH_URL", DEFAULT_AUTH_URL),
                firestore_url: var("FIRESTORE_URL", DEFAULT_FIRESTORE_URL),
            }),
            other => {
                return Err(ConfigError::Invalid {
                    name: "REGISTRATION_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        let logging = LoggingConfig {
            filter: var("LOG_FILTER", DEFAULT_LOG_FILTER),
            format: var("LOG_FORMAT", "compact").parse()?,
        };

        Ok(Self {
            bind_addr,
            backend,
            logging,
        })
    }
}
