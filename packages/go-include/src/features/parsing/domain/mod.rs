//! Parsing domain models

mod source_document;
mod text_span;

pub use source_document::SourceDocument;
pub use text_span::TextSpan;
