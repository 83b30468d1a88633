//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives. The rest of the crate only
//! sees the [`SyntaxTree`] produced here.

use tracing::{debug, warn};
use tree_sitter::{Node, Parser as TSParser, Tree};

use super::languages::python::{self, fields, node_kinds};
use super::parameters::extract_parameters;
use super::string_literal;
use super::{starred_rhs, syntax_rules};
use crate::errors::{ExportsError, Result};
use crate::features::parsing::domain::{
    AssignTarget, Assignment, Expr, FunctionDef, Statement, SyntaxTree,
};
use crate::features::parsing::ports::ModuleParser;
use crate::shared::models::Span;

/// Tree-sitter based Python parser
///
/// Stateless: a fresh `tree_sitter::Parser` is built per call, so one
/// instance can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterParser;

impl TreeSitterParser {
    pub fn new() -> Self {
        Self
    }

    /// Apply the rules the grammar does not enforce, then convert
    fn convert_checked(&self, root: &Node, source: &str) -> Result<SyntaxTree> {
        if let Err(err) = syntax_rules::check(root) {
            warn!("python source rejected: {}", err);
            return Err(err);
        }

        let module = self.convert_module(root, source)?;
        debug!("parsed {} top-level statements", module.len());
        Ok(module)
    }

    /// Convert the `module` node's direct children
    fn convert_module(&self, root: &Node, source: &str) -> Result<SyntaxTree> {
        if root.kind() != node_kinds::MODULE {
            return Err(ExportsError::extraction(format!(
                "expected a module root, found '{}'",
                root.kind()
            )));
        }

        let mut statements = Vec::with_capacity(root.named_child_count());
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.is_extra() {
                continue; // comments
            }
            statements.push(self.convert_statement(&child, source)?);
        }

        Ok(SyntaxTree::new(statements))
    }

    fn convert_statement(&self, node: &Node, source: &str) -> Result<Statement> {
        match node.kind() {
            node_kinds::FUNCTION_DEF => self.convert_function(node, source),

            // Decorators do not change what the definition is
            node_kinds::DECORATED_DEF => match node.child_by_field_name(fields::DEFINITION) {
                Some(definition) => self.convert_statement(&definition, source),
                None => Err(ExportsError::extraction(format!(
                    "decorated definition without a body at {}",
                    to_span(node)
                ))),
            },

            node_kinds::EXPRESSION_STATEMENT => {
                match single_named_child(node) {
                    Some(inner) if inner.kind() == node_kinds::ASSIGNMENT => {
                        self.convert_assignment(&inner, source)
                    }
                    // augmented assignment, bare expression, tuple of expressions
                    Some(inner) => Ok(other(&inner)),
                    None => Ok(other(node)),
                }
            }

            _ => Ok(other(node)),
        }
    }

    fn convert_function(&self, node: &Node, source: &str) -> Result<Statement> {
        let span = to_span(node);
        let name = node
            .child_by_field_name(fields::NAME)
            .map(|n| node_text(&n, source).to_string())
            .ok_or_else(|| {
                ExportsError::extraction(format!("function definition without a name at {span}"))
            })?;

        let parameters = node
            .child_by_field_name(fields::PARAMETERS)
            .map(|params| extract_parameters(&params, source))
            .unwrap_or_default();

        let is_async = node
            .child(0)
            .map(|first| first.kind() == node_kinds::ASYNC)
            .unwrap_or(false);

        Ok(Statement::FunctionDef(FunctionDef {
            name,
            parameters,
            is_async,
            span,
        }))
    }

    /// `a = b = value` arrives as nested `assignment` nodes in the `right` field
    fn convert_assignment(&self, node: &Node, source: &str) -> Result<Statement> {
        let span = to_span(node);

        // `x: T = value` is an annotated assignment, not a plain one
        if node.child_by_field_name(fields::TYPE).is_some() {
            return Ok(Statement::Other {
                kind: "annotated_assignment".to_string(),
                span,
            });
        }

        let mut targets = Vec::new();
        let mut current = *node;
        let value = loop {
            let left = current.child_by_field_name(fields::LEFT).ok_or_else(|| {
                ExportsError::extraction(format!("assignment without a target at {span}"))
            })?;
            targets.push(convert_target(&left, source));

            let right = current.child_by_field_name(fields::RIGHT).ok_or_else(|| {
                ExportsError::extraction(format!("assignment without a value at {span}"))
            })?;

            if right.kind() == node_kinds::ASSIGNMENT
                && right.child_by_field_name(fields::TYPE).is_none()
            {
                current = right;
                continue;
            }
            break convert_expr(&right, source);
        };

        Ok(Statement::Assignment(Assignment {
            targets,
            value,
            span,
        }))
    }
}

impl ModuleParser for TreeSitterParser {
    fn parse(&self, source: &str) -> Result<SyntaxTree> {
        let tree = parse_tree(source)?;
        let root = tree.root_node();

        if root.has_error() {
            if let Some(rewritten) = starred_rhs::parenthesize(source) {
                let retry = parse_tree(&rewritten)?;
                if !retry.root_node().has_error() {
                    debug!("reparsed with starred right-hand sides parenthesized");
                    return self.convert_checked(&retry.root_node(), &rewritten);
                }
            }

            let err = syntax_error(&root);
            warn!("python source rejected: {}", err);
            return Err(err);
        }

        self.convert_checked(&root, source)
    }

    fn language_name(&self) -> &'static str {
        "python"
    }
}

fn parse_tree(source: &str) -> Result<Tree> {
    let mut parser = TSParser::new();
    parser
        .set_language(&python::language())
        .map_err(|e| ExportsError::extraction(format!("Failed to set language: {}", e)))?;

    parser
        .parse(source, None)
        .ok_or_else(|| ExportsError::extraction("Failed to parse source code"))
}

fn convert_target(node: &Node, source: &str) -> AssignTarget {
    if node.kind() == node_kinds::IDENTIFIER {
        AssignTarget::Name(node_text(node, source).to_string())
    } else {
        AssignTarget::Other
    }
}

fn convert_expr(node: &Node, source: &str) -> Expr {
    match node.kind() {
        node_kinds::LIST => {
            let mut cursor = node.walk();
            let elements = node
                .named_children(&mut cursor)
                .filter(|c| !c.is_extra())
                .map(|c| convert_expr(&c, source))
                .collect();
            Expr::List(elements)
        }

        node_kinds::STRING => match string_literal::decode(node_text(node, source)) {
            Some(value) => Expr::Str(value),
            None => Expr::Other("non_str_literal".to_string()),
        },

        // "a" "b" is a single constant when every part is a str literal
        node_kinds::CONCATENATED_STRING => {
            let mut cursor = node.walk();
            let parts: Option<Vec<String>> = node
                .named_children(&mut cursor)
                .filter(|c| !c.is_extra())
                .map(|c| string_literal::decode(node_text(&c, source)))
                .collect();
            match parts {
                Some(parts) => Expr::Str(parts.concat()),
                None => Expr::Other("non_str_literal".to_string()),
            }
        }

        node_kinds::PARENTHESIZED_EXPR => match single_named_child(node) {
            Some(inner) => convert_expr(&inner, source),
            None => Expr::Other(node.kind().to_string()),
        },

        other => Expr::Other(other.to_string()),
    }
}

/// Build the error for the first ERROR or MISSING node in document order
fn syntax_error(root: &Node) -> ExportsError {
    match first_error(root) {
        Some(node) if node.is_missing() => {
            let pos = node.start_position();
            ExportsError::syntax(
                format!("invalid syntax: expected '{}'", node.kind()),
                pos.row as u32 + 1,
                pos.column as u32,
            )
        }
        Some(node) => {
            let pos = node.start_position();
            ExportsError::syntax("invalid syntax", pos.row as u32 + 1, pos.column as u32)
        }
        None => ExportsError::syntax("invalid syntax", 1, 0),
    }
}

fn first_error<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
    children.iter().find_map(first_error)
}

fn single_named_child<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let mut named = node.named_children(&mut cursor).filter(|c| !c.is_extra());
    let first = named.next()?;
    match named.next() {
        Some(_) => None,
        None => Some(first),
    }
}

fn other(node: &Node) -> Statement {
    Statement::Other {
        kind: node.kind().to_string(),
        span: to_span(node),
    }
}

fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

fn to_span(node: &Node) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}
