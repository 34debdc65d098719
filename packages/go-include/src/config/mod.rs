//! Configuration system
//!
//! - `options`: per-call `Options` with defaults, builder setters and validation
//! - `io`: YAML schema (`version: 1`) and file loading
//! - `error`: `ConfigError`

pub mod error;
pub mod io;
mod options;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use options::{FormatterKind, Options, DEFAULT_BUILD_TAG, DEFAULT_GENERATORS, DEFAULT_NAMESPACE};
