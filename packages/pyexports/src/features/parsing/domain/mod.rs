//! Parsing domain models

mod syntax_tree;

pub use syntax_tree::{
    AssignTarget, Assignment, Expr, FunctionDef, Parameter, ParameterKind, Statement, SyntaxTree,
};
