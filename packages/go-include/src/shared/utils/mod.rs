//! Shared utility modules

pub mod tree_sitter;
