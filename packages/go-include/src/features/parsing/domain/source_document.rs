//! Parsed Go source file

use tree_sitter::{Node, Tree};

/// Source bytes, their origin and the syntax tree parsed from them.
///
/// Never mutated; rewriting builds a separate output buffer.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    source: Vec<u8>,
    file_path: String,
    tree: Tree,
}

impl SourceDocument {
    pub fn new(source: Vec<u8>, file_path: impl Into<String>, tree: Tree) -> Self {
        Self {
            source,
            file_path: file_path.into(),
            tree,
        }
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// File path (for error messages)
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// The `source_file` node
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Source text of `node`, lossily decoded
    pub fn node_text(&self, node: &Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}
