//! Placeholder Scanner & Splicer
//!
//! Finds `include.String("file")` / `include.Bytes("file")` calls used as
//! top-level `var`/`const` initializers and replaces them with literals.

mod domain;
mod scanner;
mod splicer;

pub use domain::{PlaceholderCall, Selector};
pub use scanner::PlaceholderScanner;
pub use splicer::PlaceholderSplicer;
