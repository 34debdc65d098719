//! Directive removal and negated-tag insertion

use crate::features::directives::matcher::{CompilerDirective, DirectiveMatcher};
use crate::features::parsing::{SourceDocument, TextSpan};
use crate::features::splicing::{SpliceKind, SplicePlan};
use crate::shared::utils::tree_sitter::{children, find_child_by_kind};

/// Lines marking the generated file as the `!tag` variant
pub fn negated_directives(tag: &str) -> String {
    format!("//go:build !{tag}\n// +build !{tag}\n\n")
}

/// Plans directive edits for one document
pub struct DirectiveRewriter<'a> {
    matcher: DirectiveMatcher<'a>,
    tag: &'a str,
}

impl<'a> DirectiveRewriter<'a> {
    pub fn new(tag: &'a str, generators: &'a [String]) -> Self {
        Self {
            matcher: DirectiveMatcher::new(tag, generators),
            tag,
        }
    }

    /// Top-level comments that are directives of this tool, in source order.
    ///
    /// Each span includes the line break ending the comment and the blank
    /// lines after it, so removal leaves no gap behind.
    pub fn find_directives(&self, doc: &SourceDocument) -> Vec<CompilerDirective> {
        let source = doc.source();

        children(&doc.root())
            .into_iter()
            .filter(|node| node.kind() == "comment")
            .filter_map(|node| {
                let text = doc.node_text(&node).trim_end_matches('\r');
                let kind = self.matcher.classify(text)?;
                let span = TextSpan::new(node.start_byte(), removal_end(source, node.end_byte()));
                Some(CompilerDirective {
                    kind,
                    span,
                    text: text.to_string(),
                })
            })
            .collect()
    }

    /// Add directive removals and the negated-tag insertion to `plan`.
    ///
    /// The negated lines go after the last removed directive that precedes the
    /// package clause, or at the start of the file when there is none.
    pub fn plan(&self, doc: &SourceDocument, plan: &mut SplicePlan) -> Vec<CompilerDirective> {
        let package_start = find_child_by_kind(&doc.root(), "package_clause")
            .map(|n| n.start_byte())
            .unwrap_or(doc.len());

        let directives = self.find_directives(doc);
        let mut insert_at = 0;

        for directive in &directives {
            tracing::debug!(
                kind = directive.kind.as_str(),
                span = %directive.span,
                "removing directive"
            );
            plan.remove(directive.span, SpliceKind::Directive);
            if directive.span.start < package_start {
                insert_at = directive.span.end;
            }
        }

        plan.insert(insert_at, negated_directives(self.tag), SpliceKind::NegatedDirectives);
        directives
    }
}

/// Offset just past the line break directly following `offset` and any
/// whitespace-only lines after it. Returns `offset` when no line break follows.
fn removal_end(source: &[u8], offset: usize) -> usize {
    let mut end = match source.get(offset..) {
        Some([b'\n', ..]) => offset + 1,
        Some([b'\r', b'\n', ..]) => offset + 2,
        _ => return offset,
    };

    loop {
        let rest = &source[end..];
        let blank = rest
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\r'))
            .count();
        match rest.get(blank) {
            Some(b'\n') => end += blank + 1,
            _ => return end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{GoTreeSitterParser, SourceParser};

    fn rewrite(source: &str) -> String {
        let doc = GoTreeSitterParser::new()
            .parse(source.as_bytes(), "main.go")
            .unwrap();
        let generators = vec!["go-include".to_string()];
        let mut plan = SplicePlan::new();
        DirectiveRewriter::new("include", &generators).plan(&doc, &mut plan);
        let result = plan.apply("main.go", doc.source(), Vec::new()).unwrap();
        String::from_utf8(result.output).unwrap()
    }

    #[test]
    fn test_directives_replaced_by_negation() {
        let source = "//go:build include\n// +build include\n\n//go:generate go-include --out main_gen.go $GOFILE\n\npackage main\n";
        assert_eq!(
            rewrite(source),
            "//go:build !include\n// +build !include\n\npackage main\n"
        );

        let crlf = "//go:build include\r\n\r\n//go:generate go-include $GOFILE\r\n\r\npackage main\r\n";
        assert_eq!(
            rewrite(crlf),
            format!("{}package main\r\n", negated_directives("include"))
        );
    }

    #[test]
    fn test_removal_end() {
        let source = b"//x\r\n  \r\n\t\npackage main\n";
        assert_eq!(removal_end(source, 3), 11);
        assert_eq!(removal_end(source, 2), 2);
        assert_eq!(removal_end(b"//x\n  var", 3), 4);
        assert_eq!(removal_end(b"//x", 3), 3);
    }

    #[test]
    fn test_no_directives_inserts_at_top() {
        assert_eq!(
            rewrite("package main\n"),
            "//go:build !include\n// +build !include\n\npackage main\n"
        );
    }

    #[test]
    fn test_unrelated_comments_survive() {
        let source = "// Package main is a demo.\n//go:build linux\npackage main\n";
        assert_eq!(
            rewrite(source),
            format!("{}{}", negated_directives("include"), source)
        );
    }

    #[test]
    fn test_generate_after_package_clause_removed_in_place() {
        let source = "//go:build include\n\npackage main\n\n//go:generate go-include $GOFILE\nvar x = 1\n";
        assert_eq!(
            rewrite(source),
            "//go:build !include\n// +build !include\n\npackage main\n\nvar x = 1\n"
        );
    }
}
