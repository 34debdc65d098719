//! In-process formatter that only validates

use crate::errors::{IncludeError, Result};
use crate::features::formatting::ports::SourceFormatter;
use crate::features::parsing::{GoTreeSitterParser, SourceParser};

/// Returns the buffer unchanged if it parses as Go
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxCheckFormatter {
    parser: GoTreeSitterParser,
}

impl SyntaxCheckFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SourceFormatter for SyntaxCheckFormatter {
    fn format(&self, filename: &str, source: &[u8]) -> Result<Vec<u8>> {
        match self.parser.parse(source, filename) {
            Ok(_) => Ok(source.to_vec()),
            Err(IncludeError::Parse { line, column, .. }) => Err(IncludeError::format(
                filename,
                format!("generated source is not valid Go ({}:{})", line, column),
            )),
            Err(other) => Err(other),
        }
    }

    fn name(&self) -> &str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_source_is_unchanged() {
        let source = b"package main\n\nvar x = []byte{1,2,}\n";
        let out = SyntaxCheckFormatter::new().format("main.go", source).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn test_invalid_source_is_format_error() {
        let err = SyntaxCheckFormatter::new()
            .format("main.go", b"package main\n\nvar x = \n}\n")
            .unwrap_err();
        assert!(matches!(err, IncludeError::Format { .. }));
    }
}
