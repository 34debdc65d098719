//! Tree-sitter based parser implementation

mod tree_sitter_go;

pub use tree_sitter_go::GoTreeSitterParser;
