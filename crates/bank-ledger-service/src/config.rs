//! Service configuration.

use std::str::FromStr;

/// Default listen address.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default maximum request body size (1 MiB).
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default cap on in-flight API requests.
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 256;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Maximum number of API requests processed at once.
    pub max_concurrent_requests: usize,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into()),
            cors_origins: lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            request_timeout_seconds: parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            ),
            max_concurrent_requests: parse_or(
                &lookup,
                "MAX_CONCURRENT_REQUESTS",
                DEFAULT_MAX_CONCURRENT_REQUESTS,
            ),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable configuration value");
            default
        }),
        None => default,
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }
}
