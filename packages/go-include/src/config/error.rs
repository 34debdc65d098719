//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Build tag is not a valid Go build constraint term
    #[error("Invalid build tag '{0}': use letters, digits, '_' and '.' only")]
    InvalidTag(String),

    /// Namespace is not a Go identifier
    #[error("Invalid namespace '{0}': must be a Go identifier")]
    InvalidNamespace(String),

    /// No generator names configured
    #[error("At least one generator name is required to recognize go:generate directives")]
    NoGenerators,

    /// Unknown formatter name
    #[error("Unknown formatter '{0}'. Valid formatters: goimports, gofmt, none")]
    UnknownFormatter(String),

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
