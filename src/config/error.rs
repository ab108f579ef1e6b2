//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    ///
    /// `GEMINI_API_KEY` is the only required variable; without it the process
    /// refuses to start, since every request would fail at the provider call.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Rubric preset name does not match any known preset.
    #[error("unknown rubric preset '{value}': expected 'standard' or 'concise'")]
    UnknownRubric { value: String },
}
