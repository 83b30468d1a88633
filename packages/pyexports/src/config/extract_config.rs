//! Extraction settings

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::{is_python_identifier, Validatable};

/// Identifier naming the export list
pub const DEFAULT_EXPORTS_NAME: &str = "__all__";

/// Indentation width of the serialized result (matches `json.dumps(indent=4)`)
pub const DEFAULT_INDENT: usize = 4;

const MAX_INDENT: usize = 16;

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractConfig {
    /// Name of the module-level list that declares the exports
    pub exports_name: String,

    /// JSON indentation width
    pub indent: usize,

    /// Also report `async def` functions
    pub include_async: bool,

    /// Also report parameters declared before a bare `/`
    pub include_positional_only: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            exports_name: DEFAULT_EXPORTS_NAME.to_string(),
            indent: DEFAULT_INDENT,
            include_async: false,
            include_positional_only: false,
        }
    }
}

impl ExtractConfig {
    pub fn exports_name(mut self, name: impl Into<String>) -> Self {
        self.exports_name = name.into();
        self
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn include_async(mut self, enabled: bool) -> Self {
        self.include_async = enabled;
        self
    }

    pub fn include_positional_only(mut self, enabled: bool) -> Self {
        self.include_positional_only = enabled;
        self
    }

    /// Validate and return self
    pub fn validated(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

impl Validatable for ExtractConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !is_python_identifier(&self.exports_name) {
            return Err(ConfigError::InvalidExportsName(self.exports_name.clone()));
        }
        if self.indent == 0 || self.indent > MAX_INDENT {
            return Err(ConfigError::range_with_hint(
                "indent",
                self.indent,
                1,
                MAX_INDENT,
                "Use 4 to match json.dumps(indent=4)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ExtractConfig::default();
        assert_eq!(config.exports_name, "__all__");
        assert_eq!(config.indent, 4);
        assert!(!config.include_async);
        assert!(!config.include_positional_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = ExtractConfig::default()
            .exports_name("__public__")
            .indent(2)
            .include_async(true)
            .include_positional_only(true)
            .validated()
            .unwrap();

        assert_eq!(config.exports_name, "__public__");
        assert_eq!(config.indent, 2);
        assert!(config.include_async);
        assert!(config.include_positional_only);
    }

    #[test]
    fn test_rejects_zero_indent() {
        let err = ExtractConfig::default().indent(0).validated().unwrap_err();
        assert!(matches!(err, ConfigError::Range { ref field, .. } if field == "indent"));
    }

    #[test]
    fn test_rejects_non_identifier_exports_name() {
        let err = ExtractConfig::default()
            .exports_name("not valid")
            .validated()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidExportsName(_)));
    }
}
