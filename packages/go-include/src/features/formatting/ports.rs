//! Formatter port (interface)

use crate::errors::Result;

/// Normalizes an assembled Go source buffer.
///
/// The transformer never inspects the returned bytes.
pub trait SourceFormatter: Send + Sync {
    /// Format `source`; `filename` is used for diagnostics and import lookup
    fn format(&self, filename: &str, source: &[u8]) -> Result<Vec<u8>>;

    fn name(&self) -> &str;
}

impl<F: SourceFormatter + ?Sized> SourceFormatter for Box<F> {
    fn format(&self, filename: &str, source: &[u8]) -> Result<Vec<u8>> {
        (**self).format(filename, source)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
