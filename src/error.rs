//! Error types for Vehicle Manager
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Form data rejected before reaching the store
    #[snafu(display("Validation failed: {message}"))]
    Validation { message: String },

    /// Network-level request failure (connect, TLS, timeout, body read)
    #[snafu(display("Request to {url} failed: {source}"))]
    Request { url: String, source: reqwest::Error },

    /// Remote endpoint answered with a non-success status
    #[snafu(display("Unexpected HTTP status {status} from {url}"))]
    Status { url: String, status: u16 },

    /// Response body is not a JSON array of vehicles
    #[snafu(display("Failed to decode vehicles: {source}"))]
    Decode { source: serde_json::Error },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// No platform configuration directory could be resolved
    #[snafu(display("Could not find configuration directory"))]
    ConfigDir,
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
