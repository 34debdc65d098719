//! Transformation options

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Build tag toggled when generating code
pub const DEFAULT_BUILD_TAG: &str = "include";

/// Receiver identifier of placeholder calls (`include.String(...)`)
pub const DEFAULT_NAMESPACE: &str = "include";

/// Commands whose `//go:generate` lines are dropped from generated files
pub const DEFAULT_GENERATORS: &[&str] = &["go-include", "include"];

/// Formatter applied to the assembled buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Pipe through `goimports`
    #[default]
    Goimports,
    /// Pipe through `gofmt`
    Gofmt,
    /// Syntax check only, bytes are returned unchanged
    None,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Goimports => "goimports",
            FormatterKind::Gofmt => "gofmt",
            FormatterKind::None => "none",
        }
    }
}

impl FromStr for FormatterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "goimports" => Ok(FormatterKind::Goimports),
            "gofmt" => Ok(FormatterKind::Gofmt),
            "none" => Ok(FormatterKind::None),
            other => Err(ConfigError::UnknownFormatter(other.to_string())),
        }
    }
}

/// Options passed to a single transformation.
///
/// Immutable once handed to the transformer; an empty `tag` is replaced by
/// [`DEFAULT_BUILD_TAG`] when the call starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Options {
    /// Build tag to toggle in the generated source
    pub tag: String,

    /// Directory used to resolve relative include targets.
    /// `None` means the process' current working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,

    /// Receiver identifier of placeholder calls
    pub namespace: String,

    /// `go:generate` command names belonging to this tool
    pub generators: Vec<String>,

    /// Formatter run over the assembled buffer
    pub formatter: FormatterKind,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tag: DEFAULT_BUILD_TAG.to_string(),
            working_dir: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            generators: DEFAULT_GENERATORS.iter().map(|g| g.to_string()).collect(),
            formatter: FormatterKind::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn generators<I, S>(mut self, generators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generators = generators.into_iter().map(Into::into).collect();
        self
    }

    pub fn formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = formatter;
        self
    }

    /// Fill unset values with their defaults
    pub fn resolved(&self) -> Self {
        let mut resolved = self.clone();
        if resolved.tag.is_empty() {
            resolved.tag = DEFAULT_BUILD_TAG.to_string();
        }
        if resolved.namespace.is_empty() {
            resolved.namespace = DEFAULT_NAMESPACE.to_string();
        }
        resolved
    }

    /// Validate the options
    pub fn validate(&self) -> ConfigResult<()> {
        let tag_ok = !self.tag.is_empty()
            && self
                .tag
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '.');
        if !tag_ok {
            return Err(ConfigError::InvalidTag(self.tag.clone()));
        }

        if !is_go_identifier(&self.namespace) {
            return Err(ConfigError::InvalidNamespace(self.namespace.clone()));
        }

        if self.generators.iter().all(|g| g.trim().is_empty()) {
            return Err(ConfigError::NoGenerators);
        }

        Ok(())
    }
}

fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.tag, "include");
        assert_eq!(options.namespace, "include");
        assert_eq!(options.working_dir, None);
        assert_eq!(options.formatter, FormatterKind::Goimports);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_resolved_fills_empty_tag() {
        let options = Options::new().tag("");
        assert!(options.validate().is_err());
        assert_eq!(options.resolved().tag, DEFAULT_BUILD_TAG);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            Options::new().tag("in clude").validate(),
            Err(ConfigError::InvalidTag(_))
        ));
        assert!(matches!(
            Options::new().namespace("1nc").validate(),
            Err(ConfigError::InvalidNamespace(_))
        ));
        assert!(matches!(
            Options::new().generators(Vec::<String>::new()).validate(),
            Err(ConfigError::NoGenerators)
        ));
    }

    #[test]
    fn test_formatter_from_str() {
        assert_eq!("GoFmt".parse::<FormatterKind>().unwrap(), FormatterKind::Gofmt);
        assert!("prettier".parse::<FormatterKind>().is_err());
    }
}
