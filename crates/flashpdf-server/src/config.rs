use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_VAR: &str = "FLASHPDF_BIND";
pub const MAX_UPLOAD_VAR: &str = "FLASHPDF_MAX_UPLOAD_BYTES";
pub const LOG_FORMAT_VAR: &str = "FLASHPDF_LOG_FORMAT";

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Upper bound on a whole upload request body.
    pub max_upload_bytes: usize,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source. Unset variables
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            var: BIND_VAR,
            value: bind.clone(),
        })?;

        let max_upload_bytes = match lookup(MAX_UPLOAD_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: MAX_UPLOAD_VAR,
                        value,
                    });
                }
            },
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let log_format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: LOG_FORMAT_VAR,
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            bind,
            max_upload_bytes,
            log_format,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8501)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_format: LogFormat::default(),
        }
    }
}
