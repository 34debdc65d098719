//! Feature modules
//!
//! - parsing: Go source → syntax tree with byte offsets
//! - directives: build/generate directive rewriting
//! - placeholders: placeholder call discovery and replacement
//! - encoding: Go literal encoders
//! - splicing: ordered edit plan over the original bytes
//! - resolution: include target lookup
//! - formatting: final formatter pass

pub mod directives;
pub mod encoding;
pub mod formatting;
pub mod parsing;
pub mod placeholders;
pub mod resolution;
pub mod splicing;
