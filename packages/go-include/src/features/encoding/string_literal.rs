//! Go string literal encoding

use std::fmt::Write;

/// Encode `content` as a Go string literal whose value is exactly `content`.
///
/// A raw (backquoted) literal is used whenever Go can represent the content
/// verbatim inside one. Raw literals cannot hold a backquote, drop carriage
/// returns, and the compiler rejects NUL, BOM and invalid UTF-8 in source text;
/// any of those switches to an interpreted literal with escapes.
pub fn encode_string(content: &[u8]) -> String {
    match raw_literal_body(content) {
        Some(text) => {
            let mut out = String::with_capacity(text.len() + 2);
            out.push('`');
            out.push_str(text);
            out.push('`');
            out
        }
        None => interpreted_literal(content),
    }
}

fn raw_literal_body(content: &[u8]) -> Option<&str> {
    let text = std::str::from_utf8(content).ok()?;
    let representable = !text
        .chars()
        .any(|c| matches!(c, '`' | '\r' | '\0' | '\u{FEFF}'));
    representable.then_some(text)
}

fn interpreted_literal(content: &[u8]) -> String {
    let mut out = String::with_capacity(content.len() + 2);
    out.push('"');

    let mut rest = content;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(text) => {
                escape_str(text, &mut out);
                break;
            }
            Err(e) => {
                let (valid, tail) = rest.split_at(e.valid_up_to());
                // valid_up_to marks a UTF-8 prefix
                if let Ok(text) = std::str::from_utf8(valid) {
                    escape_str(text, &mut out);
                }
                let bad = e.error_len().unwrap_or(tail.len());
                for b in &tail[..bad] {
                    let _ = write!(out, "\\x{:02x}", b);
                }
                rest = &tail[bad..];
            }
        }
    }

    out.push('"');
    out
}

fn escape_str(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{FEFF}' => out.push_str("\\uFEFF"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_uses_raw_literal() {
        assert_eq!(encode_string(b"<h1>hi</h1>\n"), "`<h1>hi</h1>\n`");
        assert_eq!(encode_string(b""), "``");
    }

    #[test]
    fn test_backquote_switches_to_interpreted() {
        assert_eq!(encode_string(b"a`b\"c"), "\"a`b\\\"c\"");
    }

    #[test]
    fn test_carriage_return_and_invalid_utf8() {
        assert_eq!(encode_string(b"a\r\nb"), "\"a\\r\\nb\"");
        assert_eq!(encode_string(&[b'x', 0xff, b'y']), "\"x\\xffy\"");
        assert_eq!(encode_string(&[0xe2, 0x82]), "\"\\xe2\\x82\"");
    }

    #[test]
    fn test_unicode_is_kept_verbatim() {
        assert_eq!(encode_string("héllo ✓".as_bytes()), "`héllo ✓`");
        assert_eq!(encode_string("é\0".as_bytes()), "\"é\\x00\"");
    }
}
