//! Extraction result shape

use serde::{Deserialize, Serialize};

use super::ascii_formatter::AsciiPrettyFormatter;
use crate::config::DEFAULT_INDENT;
use crate::errors::Result;
use crate::features::exports::FunctionRecord;

/// Outcome of one extraction: exactly one of the two fields is present
///
/// ```text
/// { "functions": [ { "name": ..., "parameters": [...] }, ... ] }
/// { "error": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionResult {
    #[serde(rename = "functions")]
    Functions(Vec<FunctionRecord>),
    #[serde(rename = "error")]
    Error(String),
}

impl ExtractionResult {
    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Error(_))
    }

    pub fn functions(&self) -> Option<&[FunctionRecord]> {
        match self {
            ExtractionResult::Functions(records) => Some(records),
            ExtractionResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionResult::Error(message) => Some(message),
            ExtractionResult::Functions(_) => None,
        }
    }

    /// Render with the given indentation width
    pub fn to_json_with_indent(&self, indent: usize) -> Result<String> {
        let indent = " ".repeat(indent);
        let mut out = Vec::with_capacity(128);
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut out,
            AsciiPrettyFormatter::with_indent(indent.as_bytes()),
        );
        self.serialize(&mut serializer)?;

        // The formatter only ever writes ASCII
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Render with the default 4-space indentation
    pub fn to_json(&self) -> Result<String> {
        self.to_json_with_indent(DEFAULT_INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_functions_shape() {
        let result = ExtractionResult::Functions(vec![FunctionRecord::new(
            "foo",
            vec!["x".to_string(), "y".to_string()],
        )]);

        let expected = r#"{
    "functions": [
        {
            "name": "foo",
            "parameters": [
                "x",
                "y"
            ]
        }
    ]
}"#;
        assert_eq!(result.to_json().unwrap(), expected);
    }

    #[test]
    fn test_empty_functions_shape() {
        let result = ExtractionResult::Functions(vec![]);
        assert_eq!(result.to_json().unwrap(), "{\n    \"functions\": []\n}");
    }

    #[test]
    fn test_empty_parameters_inline() {
        let result = ExtractionResult::Functions(vec![FunctionRecord::new("f", vec![])]);
        let expected = r#"{
    "functions": [
        {
            "name": "f",
            "parameters": []
        }
    ]
}"#;
        assert_eq!(result.to_json().unwrap(), expected);
    }

    #[test]
    fn test_error_shape() {
        let result = ExtractionResult::Error("invalid syntax (<unknown>, line 1)".to_string());
        assert_eq!(
            result.to_json().unwrap(),
            "{\n    \"error\": \"invalid syntax (<unknown>, line 1)\"\n}"
        );
        assert!(result.is_error());
        assert!(result.functions().is_none());
    }

    #[test]
    fn test_custom_indent() {
        let result = ExtractionResult::Functions(vec![]);
        assert_eq!(result.to_json_with_indent(2).unwrap(), "{\n  \"functions\": []\n}");
    }

    #[test]
    fn test_json_parses_back() {
        let result = ExtractionResult::Functions(vec![FunctionRecord::new("é", vec![])]);
        let json = result.to_json().unwrap();
        let back: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
