//! Extraction pipeline
//!
//! ```text
//! START → PARSE ─ok─→ RESOLVE_EXPORTS → PROJECT → [FORMAT_OK]
//!               └err─→ [FORMAT_ERROR]
//! ```
//!
//! Every stage failure is folded into [`ExtractionResult::Error`]; nothing
//! escapes [`Extractor::run`] or [`extract`].

use tracing::debug;

use crate::config::{ConfigResult, ExtractConfig, Validatable};
use crate::errors::{ExportsError, Result};
use crate::features::exports::{project_functions, resolve_exports, FunctionRecord};
use crate::features::output::ExtractionResult;
use crate::features::parsing::{ModuleParser, TreeSitterParser};

/// Extraction pipeline over a [`ModuleParser`]
pub struct Extractor<P: ModuleParser = TreeSitterParser> {
    parser: P,
    config: ExtractConfig,
}

impl Extractor<TreeSitterParser> {
    /// Tree-sitter parser with default settings
    pub fn new() -> Self {
        Self {
            parser: TreeSitterParser::new(),
            config: ExtractConfig::default(),
        }
    }
}

impl Default for Extractor<TreeSitterParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ModuleParser> Extractor<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            config: ExtractConfig::default(),
        }
    }

    /// Replace the settings; rejected if they do not validate
    pub fn with_config(mut self, config: ExtractConfig) -> ConfigResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Parse, resolve and project, propagating the first failure
    pub fn try_extract(&self, source: &str) -> Result<Vec<FunctionRecord>> {
        let tree = self.parser.parse(source)?;
        let exported = resolve_exports(&tree, &self.config.exports_name);
        let records = project_functions(&tree, &exported, (&self.config).into());

        debug!(
            "{} parser: {} exported names, {} functions reported",
            self.parser.language_name(),
            exported.len(),
            records.len()
        );
        Ok(records)
    }

    /// Run the pipeline; failures become the `error` shape
    pub fn run(&self, source: &str) -> ExtractionResult {
        match self.try_extract(source) {
            Ok(records) => ExtractionResult::Functions(records),
            Err(err) => err.into(),
        }
    }

    /// Serialize a result with the configured indentation
    pub fn render(&self, result: &ExtractionResult) -> String {
        render_or_fallback(result, self.config.indent)
    }

    /// Run the pipeline and serialize the result
    pub fn extract(&self, source: &str) -> String {
        self.render(&self.run(source))
    }
}

/// Extract with default settings; always returns serialized JSON
pub fn extract(source: &str) -> String {
    Extractor::new().extract(source)
}

fn render_or_fallback(result: &ExtractionResult, indent: usize) -> String {
    match result.to_json_with_indent(indent) {
        Ok(json) => json,
        Err(err) => {
            // Serializing a plain string cannot fail
            let fallback = ExtractionResult::Error(err.to_string());
            fallback
                .to_json_with_indent(indent)
                .unwrap_or_else(|_| String::from("{\"error\": \"serialization failed\"}"))
        }
    }
}

impl From<ExportsError> for ExtractionResult {
    fn from(err: ExportsError) -> Self {
        ExtractionResult::Error(err.to_string())
    }
}
