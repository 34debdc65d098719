//! Tree-sitter Go parser
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser};

use crate::errors::{IncludeError, Result};
use crate::features::parsing::domain::SourceDocument;
use crate::features::parsing::ports::SourceParser;
use crate::shared::utils::tree_sitter::find_child_by_kind;

/// Go parser backed by `tree-sitter-go`
#[derive(Debug, Default, Clone, Copy)]
pub struct GoTreeSitterParser;

impl GoTreeSitterParser {
    pub fn new() -> Self {
        Self
    }

    /// Depth-first search for the first ERROR or MISSING node
    fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        children.into_iter().find_map(Self::first_error)
    }

    fn parse_error(file_path: &str, node: Option<Node>) -> IncludeError {
        let (line, column) = node
            .map(|n| (n.start_position().row + 1, n.start_position().column + 1))
            .unwrap_or((1, 1));
        IncludeError::Parse {
            file: file_path.to_string(),
            line,
            column,
        }
    }
}

impl SourceParser for GoTreeSitterParser {
    fn parse(&self, source: &[u8], file_path: &str) -> Result<SourceDocument> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| IncludeError::Parse {
                file: format!("{} (grammar: {})", file_path, e),
                line: 0,
                column: 0,
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Self::parse_error(file_path, None))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(Self::parse_error(file_path, Self::first_error(root)));
        }
        // Go requires a package clause; tree-sitter accepts files without one.
        if find_child_by_kind(&root, "package_clause").is_none() {
            return Err(Self::parse_error(file_path, None));
        }

        tracing::debug!(file = file_path, bytes = source.len(), "parsed go source");
        Ok(SourceDocument::new(source.to_vec(), file_path, tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_file() {
        let source = b"package main\n\nvar x = 1\n";
        let doc = GoTreeSitterParser::new().parse(source, "main.go").unwrap();
        assert_eq!(doc.root().kind(), "source_file");
        assert_eq!(doc.source(), source);
        assert_eq!(doc.file_path(), "main.go");
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let source = b"package main\n\nvar x = (\n";
        let err = GoTreeSitterParser::new().parse(source, "bad.go").unwrap_err();
        match err {
            IncludeError::Parse { file, line, .. } => {
                assert_eq!(file, "bad.go");
                assert!(line >= 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_package_clause() {
        let err = GoTreeSitterParser::new().parse(b"var x = 1\n", "x.go");
        assert!(matches!(err, Err(IncludeError::Parse { .. })));
    }
}
