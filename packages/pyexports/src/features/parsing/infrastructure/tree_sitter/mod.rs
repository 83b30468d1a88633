//! Tree-sitter based parser implementation

pub mod languages;
mod parameters;
mod parser;
mod starred_rhs;
mod string_literal;
mod syntax_rules;

pub use parser::TreeSitterParser;
