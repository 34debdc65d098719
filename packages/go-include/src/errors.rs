//! Error types for go-include
//!
//! Every failure aborts the whole transformation; callers receive the first
//! error only and never a partially rewritten buffer.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::parsing::TextSpan;

/// Process exit code for an invalid invocation (bad flags, options or config)
pub const EXIT_USAGE: u8 = 1;
/// Process exit code when the input could not be transformed
pub const EXIT_TRANSFORM: u8 = 2;
/// Process exit code when the generated source could not be written
pub const EXIT_WRITE: u8 = 3;

/// Main error type for go-include operations
#[derive(Debug, Error)]
pub enum IncludeError {
    /// Source file or include target could not be read
    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not syntactically valid Go
    #[error("failed to parse source file {file}: syntax error at {line}:{column}")]
    Parse {
        file: String,
        line: usize,
        column: usize,
    },

    /// Placeholder argument is not an interpreted string literal
    #[error("unsupported argument when calling include.{selector} in {file}: only strings are supported")]
    UnsupportedArgument { selector: String, file: String },

    /// Placeholder selector is neither `String` nor `Bytes`
    #[error("unsupported function call include.{selector} in {file}")]
    UnsupportedFunction { selector: String, file: String },

    /// External formatter rejected the assembled buffer
    #[error("failed to process imports of {file}: {message}")]
    Format { file: String, message: String },

    /// Two edits claim the same source bytes
    #[error("conflicting edits {first} and {second} in {file}")]
    OverlappingSplices {
        file: String,
        first: TextSpan,
        second: TextSpan,
    },

    /// Invalid options
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl IncludeError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IncludeError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a format error
    pub fn format(file: impl Into<String>, message: impl Into<String>) -> Self {
        IncludeError::Format {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable category
    pub fn kind(&self) -> &'static str {
        match self {
            IncludeError::Read { .. } => "read",
            IncludeError::Parse { .. } => "parse",
            IncludeError::UnsupportedArgument { .. } => "unsupported_argument",
            IncludeError::UnsupportedFunction { .. } => "unsupported_function",
            IncludeError::Format { .. } => "format",
            IncludeError::OverlappingSplices { .. } => "internal",
            IncludeError::Config(_) => "config",
        }
    }

    /// Exit code reported by the CLI for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            IncludeError::Config(_) => EXIT_USAGE,
            IncludeError::Read { .. }
            | IncludeError::Parse { .. }
            | IncludeError::UnsupportedArgument { .. }
            | IncludeError::UnsupportedFunction { .. }
            | IncludeError::Format { .. }
            | IncludeError::OverlappingSplices { .. } => EXIT_TRANSFORM,
        }
    }
}

/// Result type alias for go-include operations
pub type Result<T> = std::result::Result<T, IncludeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IncludeError::UnsupportedFunction {
            selector: "Foo".to_string(),
            file: "main.go".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported function call include.Foo in main.go"
        );
        assert_eq!(err.kind(), "unsupported_function");
    }

    #[test]
    fn test_read_error_names_path() {
        let err = IncludeError::read(
            "/tmp/missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("/tmp/missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.exit_code(), EXIT_TRANSFORM);
    }

    #[test]
    fn test_config_error_is_a_usage_error() {
        let err = IncludeError::from(ConfigError::InvalidTag("in clude".to_string()));
        assert_eq!(err.kind(), "config");
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }
}
