//! Common test utilities for go-include
//!
//! Fixture paths and a small decoder for the Go literals the encoders emit.

#![allow(dead_code)]

use std::path::PathBuf;

use go_include::{IncludeTransformer, GoTreeSitterParser, SyntaxCheckFormatter};

pub fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Transformer that validates instead of shelling out to goimports
pub fn offline_transformer() -> IncludeTransformer<GoTreeSitterParser, SyntaxCheckFormatter> {
    IncludeTransformer::with_formatter(SyntaxCheckFormatter::new())
}

/// Value of a Go string literal (raw or interpreted)
pub fn decode_go_string(literal: &str) -> Vec<u8> {
    if let Some(raw) = literal.strip_prefix('`').and_then(|l| l.strip_suffix('`')) {
        return raw.as_bytes().to_vec();
    }

    let body = literal
        .strip_prefix('"')
        .and_then(|l| l.strip_suffix('"'))
        .expect("quoted literal");
    let mut out = Vec::new();
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next().expect("escape") {
            'n' => out.push(b'\n'),
            't' => out.push(b'\t'),
            'r' => out.push(b'\r'),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                out.push(u8::from_str_radix(&hex, 16).expect("hex escape"));
            }
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                let c = char::from_u32(u32::from_str_radix(&hex, 16).expect("unicode escape"))
                    .expect("scalar value");
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            other => panic!("unexpected escape \\{}", other),
        }
    }
    out
}

/// Values of a `[]byte{...}` literal
pub fn decode_go_bytes(literal: &str) -> Vec<u8> {
    let body = literal
        .strip_prefix("[]byte{")
        .and_then(|l| l.strip_suffix('}'))
        .expect("byte slice literal");
    body.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<u8>().expect("decimal byte"))
        .collect()
}
