//! Configuration I/O (YAML loading)

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::extract_config::ExtractConfig;
use super::validation::Validatable;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// Every setting is optional and falls back to [`ExtractConfig::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_async: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_positional_only: Option<bool>,
}

impl ConfigExportV1 {
    fn into_config(self) -> ConfigResult<ExtractConfig> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = ExtractConfig::default();
        if let Some(name) = self.exports_name {
            config.exports_name = name;
        }
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        if let Some(enabled) = self.include_async {
            config.include_async = enabled;
        }
        if let Some(enabled) = self.include_positional_only {
            config.include_positional_only = enabled;
        }
        config.validate()?;
        Ok(config)
    }
}

impl ExtractConfig {
    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;
        export.into_config()
    }

    /// Serialize to YAML (schema v1, every field written)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            exports_name: Some(self.exports_name.clone()),
            indent: Some(self.indent),
            include_async: Some(self.include_async),
            include_positional_only: Some(self.include_positional_only),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}
