//! Parsing Feature
//!
//! Turns Python source text into the top-level statements the extraction
//! stages need.
//!
//! ## Structure
//! - `domain/` - SyntaxTree, Statement, Expr models
//! - `ports/` - ModuleParser trait
//! - `infrastructure/` - TreeSitterParser (tree-sitter-python)

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{
    AssignTarget, Assignment, Expr, FunctionDef, Parameter, ParameterKind, Statement, SyntaxTree,
};
pub use infrastructure::TreeSitterParser;
pub use ports::ModuleParser;
