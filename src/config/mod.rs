//! Environment-backed configuration.
//!
//! `GEMINI_API_KEY` is required. Everything else has defaults overridable
//! with `PROMPTGAUGE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

use crate::rubric::RubricPreset;

/// Server configuration loaded once at process start.
///
/// Use [`Config::from_env`] to read `PROMPTGAUGE_*` overrides on top of
/// defaults. All of it is immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential for the model provider. Required; startup fails
    /// without it.
    pub api_key: String,

    /// HTTP server port. Default: `5001`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Model identifier passed to the provider. Default: `gemini-2.5-flash`.
    pub model: String,

    /// Rubric preset selecting instruction text and generation parameters.
    /// Default: [`RubricPreset::Standard`].
    pub rubric: RubricPreset,
}

/// Default model identifier used when `PROMPTGAUGE_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default HTTP port used when `PROMPTGAUGE_PORT` is not set.
pub const DEFAULT_PORT: u16 = 5001;

impl Config {
    /// Environment variable holding the model-provider credential. The
    /// provider client resolves the same variable when issuing calls.
    pub const ENV_API_KEY: &'static str = "GEMINI_API_KEY";
    const ENV_PORT: &'static str = "PROMPTGAUGE_PORT";
    const ENV_BIND_ADDR: &'static str = "PROMPTGAUGE_BIND_ADDR";
    const ENV_MODEL: &'static str = "PROMPTGAUGE_MODEL";
    const ENV_RUBRIC: &'static str = "PROMPTGAUGE_RUBRIC";

    /// Loads configuration from environment variables (falling back to
    /// defaults for everything except the API credential).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = Self::parse_required_from_env(Self::ENV_API_KEY)?;
        let port = Self::parse_port_from_env(DEFAULT_PORT)?;
        let bind_addr = Self::parse_bind_addr_from_env(IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED))?;
        let model = Self::parse_string_from_env(Self::ENV_MODEL, DEFAULT_MODEL.to_string());
        let rubric = Self::parse_rubric_from_env(RubricPreset::Standard)?;

        Ok(Self {
            api_key,
            port,
            bind_addr,
            model,
            rubric,
        })
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_required_from_env(var_name: &'static str) -> Result<String, ConfigError> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEnvVar { name: var_name })
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_rubric_from_env(default: RubricPreset) -> Result<RubricPreset, ConfigError> {
        match env::var(Self::ENV_RUBRIC) {
            Ok(value) => {
                RubricPreset::from_name(&value).ok_or(ConfigError::UnknownRubric { value })
            }
            Err(_) => Ok(default),
        }
    }
}
