//! Pipeline orchestration
//!
//! `parse → resolve exports → project functions → format`, single pass.

mod extractor;

pub use extractor::{extract, Extractor};
