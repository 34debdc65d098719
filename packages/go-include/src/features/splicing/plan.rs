//! Splice plan and its single-cursor application

use crate::errors::{IncludeError, Result};
use crate::features::parsing::TextSpan;

/// Where a splice came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceKind {
    /// Removed build/generate directive comment
    Directive,
    /// Inserted `!tag` directive lines
    NegatedDirectives,
    /// Replaced placeholder call
    Placeholder,
}

/// Replace `span` of the original source with `replacement`.
/// An empty span is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub span: TextSpan,
    pub replacement: String,
    pub kind: SpliceKind,
}

/// Outcome of applying a plan
#[derive(Debug, Clone, Default)]
pub struct SpliceResult {
    /// Assembled bytes
    pub output: Vec<u8>,
    /// Original ranges copied verbatim, in output order
    pub copied: Vec<TextSpan>,
    /// Original ranges dropped or replaced, in output order
    pub consumed: Vec<TextSpan>,
}

/// Ordered collection of splices over one source buffer
#[derive(Debug, Clone, Default)]
pub struct SplicePlan {
    splices: Vec<Splice>,
}

impl SplicePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, span: TextSpan, replacement: impl Into<String>, kind: SpliceKind) {
        self.splices.push(Splice {
            span,
            replacement: replacement.into(),
            kind,
        });
    }

    pub fn remove(&mut self, span: TextSpan, kind: SpliceKind) {
        self.replace(span, String::new(), kind);
    }

    pub fn insert(&mut self, offset: usize, text: impl Into<String>, kind: SpliceKind) {
        self.replace(TextSpan::empty_at(offset), text, kind);
    }

    pub fn is_empty(&self) -> bool {
        self.splices.is_empty()
    }

    /// Sort by offset and reject overlapping spans.
    ///
    /// Insertions sort before a replacement starting at the same offset.
    fn sorted(mut self, file: &str, source_len: usize) -> Result<Vec<Splice>> {
        self.splices.sort_by_key(|s| (s.span.start, s.span.end));

        for pair in self.splices.windows(2) {
            if pair[1].span.start < pair[0].span.end {
                return Err(IncludeError::OverlappingSplices {
                    file: file.to_string(),
                    first: pair[0].span,
                    second: pair[1].span,
                });
            }
        }
        if let Some(last) = self.splices.last() {
            if last.span.end > source_len {
                return Err(IncludeError::OverlappingSplices {
                    file: file.to_string(),
                    first: last.span,
                    second: TextSpan::empty_at(source_len),
                });
            }
        }

        Ok(self.splices)
    }

    /// Copy `source` into `out` with every splice applied, including the tail
    /// after the last splice. The cursor only moves forward.
    pub fn apply(self, file: &str, source: &[u8], out: Vec<u8>) -> Result<SpliceResult> {
        let splices = self.sorted(file, source.len())?;

        let mut result = SpliceResult {
            output: out,
            ..Default::default()
        };
        let mut cursor = 0usize;

        for splice in splices {
            if splice.span.start > cursor {
                let copy = TextSpan::new(cursor, splice.span.start);
                result.output.extend_from_slice(&source[copy.range()]);
                result.copied.push(copy);
            }
            result.output.extend_from_slice(splice.replacement.as_bytes());
            if !splice.span.is_empty() {
                result.consumed.push(splice.span);
            }
            cursor = splice.span.end;
        }

        if cursor < source.len() {
            let tail = TextSpan::new(cursor, source.len());
            result.output.extend_from_slice(&source[tail.range()]);
            result.copied.push(tail);
        }

        Ok(result)
    }
}
