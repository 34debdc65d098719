//! Parser port (interface)
//!
//! Defines the contract for parsing source code.

use crate::errors::Result;
use crate::features::parsing::domain::SourceDocument;

/// Parser trait - abstraction over parsing implementation
pub trait SourceParser: Send + Sync {
    /// Parse source bytes into a SourceDocument.
    ///
    /// Fails with `IncludeError::Parse` when the source is not valid.
    fn parse(&self, source: &[u8], file_path: &str) -> Result<SourceDocument>;
}
