//! Extraction configuration
//!
//! Two ways to get an [`ExtractConfig`]:
//!
//! ```rust,ignore
//! use pyexports::config::ExtractConfig;
//!
//! // Builder
//! let config = ExtractConfig::default().indent(2).include_async(true).validated()?;
//!
//! // YAML file (every field optional, `version: 1` required)
//! let config = ExtractConfig::from_yaml("pyexports.yaml")?;
//! ```
//!
//! Defaults reproduce `json.dumps(result, indent=4)` byte for byte.

pub mod error;
pub mod extract_config;
pub mod io;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use extract_config::{ExtractConfig, DEFAULT_EXPORTS_NAME, DEFAULT_INDENT};
pub use io::ConfigExportV1;
pub use validation::Validatable;
