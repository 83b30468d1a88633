//! Parser port (interface)
//!
//! Defines the contract for turning source text into a [`SyntaxTree`].

use crate::errors::Result;
use crate::features::parsing::domain::SyntaxTree;

/// Parser trait - abstraction over the grammar implementation
///
/// Implementations fail with [`ExportsError::Syntax`](crate::errors::ExportsError::Syntax)
/// when the source is not valid and never return a partial tree.
pub trait ModuleParser: Send + Sync {
    /// Parse a whole module into its top-level statements
    fn parse(&self, source: &str) -> Result<SyntaxTree>;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
