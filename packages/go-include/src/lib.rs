/*
 * go-include - inline file contents into Go sources at build time
 *
 * A stub file carries `//go:build include` and placeholder calls such as
 * `include.Bytes("./index.html")`. The rewriter emits a `//go:build !include`
 * twin in which each placeholder is replaced by a literal of the file's bytes.
 *
 * Layout:
 * - config/     : Options, YAML loading
 * - features/   : parsing, directives, placeholders, encoding, splicing, ...
 * - usecases/   : Transformation driver
 */

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

/// Shared utilities
pub mod shared;

/// Usecase layer (transformation driver)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, FormatterKind, Options, DEFAULT_BUILD_TAG};
pub use errors::{IncludeError, Result};
pub use features::encoding::{encode_bytes, encode_string};
pub use features::formatting::{CommandFormatter, SourceFormatter, SyntaxCheckFormatter};
pub use features::parsing::{GoTreeSitterParser, SourceParser};
pub use usecases::{transform, transform_file, Assembly, IncludeTransformer, GENERATED_HEADER};
