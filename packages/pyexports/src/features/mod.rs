//! Feature modules
//!
//! - `parsing`  : source text → language-neutral [`SyntaxTree`](parsing::SyntaxTree)
//! - `exports`  : export-set resolution and function projection
//! - `output`   : result shape and JSON formatting
//! - `codegen`  : JavaScript wrapper and `.d.ts` rendering

pub mod codegen;
pub mod exports;
pub mod output;
pub mod parsing;
