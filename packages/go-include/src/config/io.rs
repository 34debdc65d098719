//! Configuration I/O (YAML loading)
//!
//! Schema v1:
//!
//! ```yaml
//! version: 1
//! tag: include
//! namespace: include
//! working_dir: assets
//! generators: [go-include]
//! formatter: gofmt
//! ```
//!
//! Every field but `version` is optional; absent fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::options::{FormatterKind, Options};

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generators: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<FormatterKind>,
}

impl ConfigFileV1 {
    /// Parse and version-check a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(yaml)?;
        match file.version {
            None => Err(ConfigError::MissingVersion),
            Some(v) if !SUPPORTED_VERSIONS.contains(&v) => Err(ConfigError::UnsupportedVersion {
                found: v,
                supported: SUPPORTED_VERSIONS.to_vec(),
            }),
            Some(_) => Ok(file),
        }
    }

    /// Overlay the file's values on `base`
    pub fn apply(self, base: Options) -> Options {
        let mut options = base;
        if let Some(tag) = self.tag {
            options.tag = tag;
        }
        if let Some(dir) = self.working_dir {
            options.working_dir = Some(dir);
        }
        if let Some(namespace) = self.namespace {
            options.namespace = namespace;
        }
        if let Some(generators) = self.generators {
            options.generators = generators;
        }
        if let Some(formatter) = self.formatter {
            options.formatter = formatter;
        }
        options
    }
}

impl Options {
    /// Load options from a YAML string on top of the defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let options = ConfigFileV1::from_yaml_str(yaml)?.apply(Options::default());
        options.validate()?;
        Ok(options)
    }

    /// Load options from a YAML file.
    ///
    /// A relative `working_dir` is resolved against the file's directory.
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut options = Self::from_yaml_str(&content)?;

        if let (Some(dir), Some(parent)) = (options.working_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                options.working_dir = Some(parent.join(dir));
            }
        }

        tracing::debug!(config = %path.display(), tag = %options.tag, "loaded configuration");
        Ok(options)
    }

    /// Serialize to YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            tag: Some(self.tag.clone()),
            working_dir: self.working_dir.clone(),
            namespace: Some(self.namespace.clone()),
            generators: Some(self.generators.clone()),
            formatter: Some(self.formatter),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_loading() {
        let options = Options::from_yaml_str("version: 1\ntag: embed\nformatter: none\n").unwrap();
        assert_eq!(options.tag, "embed");
        assert_eq!(options.formatter, FormatterKind::None);
        assert_eq!(options.namespace, "include");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let options = Options::new().tag("assets").formatter(FormatterKind::Gofmt);
        let yaml = options.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("tag: assets"));
        assert_eq!(Options::from_yaml_str(&yaml).unwrap(), options);
    }

    #[test]
    fn test_missing_version() {
        assert!(matches!(
            Options::from_yaml_str("tag: include\n"),
            Err(ConfigError::MissingVersion)
        ));
    }

    #[test]
    fn test_unsupported_version() {
        assert!(matches!(
            Options::from_yaml_str("version: 7\n"),
            Err(ConfigError::UnsupportedVersion { found: 7, .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            Options::from_yaml_str("version: 1\nbuild_tag: x\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_relative_working_dir_follows_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "version: 1\nworking_dir: assets").unwrap();

        let options = Options::from_yaml(file.path()).unwrap();
        let expected = file.path().parent().unwrap().join("assets");
        assert_eq!(options.working_dir, Some(expected));
    }
}
