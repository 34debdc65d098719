//! Structured recognition of directive comments
//!
//! Comments are matched against the directive grammar, not by substring, so
//! `// see go:build include docs` or `//go:build !include` are left alone.

use std::path::Path;

use crate::features::parsing::TextSpan;

/// Directive families handled by the rewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `//go:build <expr>`
    GoBuild,
    /// `// +build <options>`
    PlusBuild,
    /// `//go:generate <command>`
    GoGenerate,
}

impl DirectiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::GoBuild => "go:build",
            DirectiveKind::PlusBuild => "+build",
            DirectiveKind::GoGenerate => "go:generate",
        }
    }
}

/// A matched directive comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerDirective {
    pub kind: DirectiveKind,
    pub span: TextSpan,
    pub text: String,
}

/// Matches directive comments for one tag and set of generator commands
#[derive(Debug, Clone, Copy)]
pub struct DirectiveMatcher<'a> {
    tag: &'a str,
    generators: &'a [String],
}

impl<'a> DirectiveMatcher<'a> {
    pub fn new(tag: &'a str, generators: &'a [String]) -> Self {
        Self { tag, generators }
    }

    /// Classify a comment's full text (including the `//`)
    pub fn classify(&self, comment: &str) -> Option<DirectiveKind> {
        let comment = comment.trim_end();

        if let Some(expr) = directive_args(comment, "//go:build") {
            return self.build_expr_requires_tag(expr).then_some(DirectiveKind::GoBuild);
        }

        if let Some(rest) = comment.strip_prefix("//") {
            if let Some(options) = directive_args(rest.trim_start(), "+build") {
                let matched = options
                    .split_whitespace()
                    .flat_map(|opt| opt.split(','))
                    .any(|term| term == self.tag);
                return matched.then_some(DirectiveKind::PlusBuild);
            }
        }

        if let Some(command) = directive_args(comment, "//go:generate") {
            return self
                .is_own_generator(command)
                .then_some(DirectiveKind::GoGenerate);
        }

        None
    }

    /// True when `tag` appears in the expression under an even number of `!`
    fn build_expr_requires_tag(&self, expr: &str) -> bool {
        // negation state of each open parenthesis group
        let mut groups = vec![false];
        let mut pending = false;

        for token in tokenize_build_expr(expr) {
            let outer = groups.last().copied().unwrap_or(false);
            match token {
                "!" => pending = !pending,
                "(" => {
                    groups.push(outer ^ pending);
                    pending = false;
                }
                ")" => {
                    if groups.len() > 1 {
                        groups.pop();
                    }
                    pending = false;
                }
                "&" | "|" => pending = false,
                term => {
                    if term == self.tag && !(outer ^ pending) {
                        return true;
                    }
                    pending = false;
                }
            }
        }
        false
    }

    fn is_own_generator(&self, command: &str) -> bool {
        let mut words = command.split_whitespace();
        let program = match words.next() {
            // `go run <pkg>` runs the tool from its import path
            Some("go") => match (words.next(), words.next()) {
                (Some("run"), Some(pkg)) => pkg.split('@').next().unwrap_or(pkg),
                _ => return false,
            },
            Some(word) => word,
            None => return false,
        };

        let name = Path::new(program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(program);
        let name = name.strip_suffix(".exe").unwrap_or(name);

        self.generators.iter().any(|g| g == name)
    }
}

/// Arguments after a directive keyword, which must be followed by whitespace
/// or end the comment
fn directive_args<'c>(comment: &'c str, keyword: &str) -> Option<&'c str> {
    let rest = comment.strip_prefix(keyword)?;
    if rest.is_empty() || rest.starts_with([' ', '\t']) {
        Some(rest.trim())
    } else {
        None
    }
}

fn tokenize_build_expr(expr: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in expr.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == '.' {
            start.get_or_insert(i);
            continue;
        }
        if let Some(s) = start.take() {
            tokens.push(&expr[s..i]);
        }
        if matches!(c, '!' | '(' | ')' | '&' | '|') {
            tokens.push(&expr[i..i + c.len_utf8()]);
        }
    }
    if let Some(s) = start {
        tokens.push(&expr[s..]);
    }

    tokens
}
