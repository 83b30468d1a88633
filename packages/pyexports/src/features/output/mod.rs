//! Output Feature
//!
//! The two result shapes and their deterministic JSON rendering.

mod ascii_formatter;
mod extraction_result;

pub use ascii_formatter::AsciiPrettyFormatter;
pub use extraction_result::ExtractionResult;
