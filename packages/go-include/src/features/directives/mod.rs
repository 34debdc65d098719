//! Directive Rewriter
//!
//! Drops the stub file's `//go:build <tag>`, `// +build <tag>` and
//! `//go:generate <this tool>` comments and inserts the negated `!<tag>` pair,
//! so the stub and the generated file are mutually exclusive build variants.

mod matcher;
mod rewriter;

pub use matcher::{CompilerDirective, DirectiveKind, DirectiveMatcher};
pub use rewriter::{negated_directives, DirectiveRewriter};
