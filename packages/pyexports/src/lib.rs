/*
 * pyexports - Python export surface extraction
 *
 * Reports the functions a Python module lists in `__all__`, with their
 * positional parameter names, as JSON. Static only: the source is parsed
 * with tree-sitter, never executed.
 *
 * Feature-First Layout:
 * - shared/      : Common models (Span)
 * - features/    : parsing → exports → output, codegen
 * - pipeline/    : Extractor (single-pass orchestration)
 * - config/      : ExtractConfig (builder + YAML)
 */

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::ExtractConfig;
pub use features::codegen::{render_javascript, render_type_definitions, ModuleInfo};
pub use errors::{ExportsError, Result};
pub use features::exports::{ExportSet, FunctionRecord};
pub use features::output::ExtractionResult;
pub use features::parsing::{ModuleParser, SyntaxTree, TreeSitterParser};
pub use pipeline::{extract, Extractor};
