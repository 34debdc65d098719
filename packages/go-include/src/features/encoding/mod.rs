//! Literal Encoders
//!
//! Pure functions turning file bytes into Go literal expressions.
//! - `string_literal`: `include.String` replacement
//! - `byte_slice`: `include.Bytes` replacement

mod byte_slice;
mod string_literal;

pub use byte_slice::encode_bytes;
pub use string_literal::encode_string;
