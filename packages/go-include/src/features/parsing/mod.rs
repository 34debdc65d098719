//! Parsing Feature
//!
//! Turns raw Go source bytes into a syntax tree with byte offsets.
//!
//! ## Structure
//! - `domain/` - SourceDocument, TextSpan
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - GoTreeSitterParser

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{SourceDocument, TextSpan};
pub use infrastructure::GoTreeSitterParser;
pub use ports::SourceParser;
