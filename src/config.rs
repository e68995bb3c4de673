//! Gateway configuration parsed from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 50;

/// Errors produced while reading gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl UpstreamTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub port: u16,
    /// Base URL of the verification backend, without a trailing slash.
    pub backend_url: String,
    pub timeouts: UpstreamTimeouts,
    pub max_upload_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            timeouts: UpstreamTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            max_upload_bytes: megabytes(DEFAULT_MAX_UPLOAD_MB),
        }
    }
}

impl GatewayConfig {
    /// Build typed gateway config from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `VERITAS_BACKEND_URL`: default `http://localhost:5000`
    /// - `VERITAS_REQUEST_TIMEOUT_SECS`: default 90
    /// - `VERITAS_CONNECT_TIMEOUT_SECS`: default 10
    /// - `VERITAS_MAX_UPLOAD_MB`: default 50
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to something
    /// that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let backend_url = lookup("VERITAS_BACKEND_URL")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "VERITAS_BACKEND_URL",
                value: backend_url,
                reason: "expected an http:// or https:// URL",
            });
        }
        let timeouts = UpstreamTimeouts {
            request_secs: parse_positive(
                "VERITAS_REQUEST_TIMEOUT_SECS",
                lookup("VERITAS_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_positive(
                "VERITAS_CONNECT_TIMEOUT_SECS",
                lookup("VERITAS_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let max_upload_mb =
            parse_positive("VERITAS_MAX_UPLOAD_MB", lookup("VERITAS_MAX_UPLOAD_MB"), DEFAULT_MAX_UPLOAD_MB)?;

        Ok(Self {
            port,
            backend_url: backend_url.trim_end_matches('/').to_owned(),
            timeouts,
            max_upload_bytes: megabytes(max_upload_mb),
        })
    }

    /// Address the gateway listens on.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Absolute backend URL for an endpoint path.
    #[must_use]
    pub fn backend_endpoint(&self, path: &str) -> String {
        wire::endpoint(&self.backend_url, path)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid {
            var,
            value: value.to_owned(),
            reason: "not a number in range",
        }),
    }
}

fn parse_positive(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let value = parse_or(var, raw, default)?;
    if value == 0 {
        return Err(ConfigError::Invalid { var, value: "0".to_owned(), reason: "must be greater than zero" });
    }
    Ok(value)
}

fn megabytes(mb: u64) -> usize {
    usize::try_from(mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
