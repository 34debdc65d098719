//! Placeholder call model

use crate::features::parsing::TextSpan;

/// Supported placeholder functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `include.String` - replaced by a string literal
    String,
    /// `include.Bytes` - replaced by a `[]byte{...}` literal
    Bytes,
}

impl Selector {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Selector::String),
            "Bytes" => Some(Selector::Bytes),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Selector::String => "String",
            Selector::Bytes => "Bytes",
        }
    }
}

/// A recognized `<namespace>.<Selector>("<target>")` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCall {
    pub selector: Selector,
    /// String literal content with the quotes stripped
    pub target: String,
    /// The whole call expression, arguments and parentheses included
    pub span: TextSpan,
}
