//! Go byte slice literal encoding

use std::fmt::Write;

/// A line break follows every byte whose index is a positive multiple of this
const BYTES_PER_LINE: usize = 20;

/// Encode `content` as a `[]byte{...}` composite literal.
///
/// Each byte is written as its decimal value followed by a comma. A newline is
/// inserted after the comma of index `i` when `i > 0 && i % 20 == 0`, so the
/// first line holds 21 values and the following ones 20.
pub fn encode_bytes(content: &[u8]) -> String {
    // "255," is the widest element
    let mut out = String::with_capacity(content.len() * 4 + content.len() / BYTES_PER_LINE + 8);
    out.push_str("[]byte{");

    for (i, b) in content.iter().enumerate() {
        let _ = write!(out, "{},", b);
        if i > 0 && i % BYTES_PER_LINE == 0 {
            out.push('\n');
        }
    }

    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode_bytes(b""), "[]byte{}");
    }

    #[test]
    fn test_small_input() {
        assert_eq!(encode_bytes(b"Hi\n"), "[]byte{72,105,10,}");
    }

    #[test]
    fn test_first_break_after_index_20() {
        let content: Vec<u8> = (0..22).collect();
        let encoded = encode_bytes(&content);
        assert!(encoded.contains("19,20,\n21,}"));
        assert_eq!(encoded.matches('\n').count(), 1);
    }
}
