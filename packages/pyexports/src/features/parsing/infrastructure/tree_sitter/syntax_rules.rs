/*
 * Python Rules Outside the Grammar
 *
 * tree-sitter-python accepts some input that `ast.parse` rejects. A tree with
 * no ERROR node is still rejected when it contains:
 * - a Python 2 `print x` / `exec code` statement
 * - a parameter without a default after one with a default (until `*`)
 * - a bare `*` that no named parameter follows
 * - an unparenthesized `x := value` as a statement or right-hand side
 * - a top-level statement that does not start in column 0
 */

use tree_sitter::Node;

use super::languages::python::{fields, node_kinds};
use crate::errors::{ExportsError, Result};

/// Reject the first rule violation in document order
pub(super) fn check(root: &Node) -> Result<()> {
    check_top_level_indent(root)?;
    check_node(root)
}

fn check_top_level_indent(root: &Node) -> Result<()> {
    let mut previous_end_row = None;
    let mut cursor = root.walk();

    for statement in root.named_children(&mut cursor) {
        if statement.is_extra() {
            continue;
        }
        let start = statement.start_position();
        // `a = 1; b = 2` puts the second statement mid-line
        let after_semicolon = previous_end_row == Some(start.row);
        if start.column != 0 && !after_semicolon {
            return Err(error_at(&statement, "unexpected indent"));
        }
        previous_end_row = Some(statement.end_position().row);
    }

    Ok(())
}

fn check_node(node: &Node) -> Result<()> {
    match node.kind() {
        node_kinds::PRINT_STATEMENT if !has_child(node, node_kinds::CHEVRON) => {
            return Err(missing_parentheses(node, "print"));
        }
        node_kinds::EXEC_STATEMENT => return Err(missing_parentheses(node, "exec")),
        node_kinds::PARAMETERS | node_kinds::LAMBDA_PARAMETERS => check_parameters(node)?,
        node_kinds::EXPRESSION_STATEMENT => {
            if let Some(walrus) = find_child(node, node_kinds::NAMED_EXPRESSION) {
                return Err(error_at(&walrus, "invalid syntax"));
            }
        }
        node_kinds::ASSIGNMENT | node_kinds::AUGMENTED_ASSIGNMENT => {
            if let Some(right) = node.child_by_field_name(fields::RIGHT) {
                if right.kind() == node_kinds::NAMED_EXPRESSION {
                    return Err(error_at(&right, "invalid syntax"));
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        check_node(&child)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Plain,
    Defaulted,
    BareStar,
    VarArgs,
    VarKeyword,
    Punctuation,
}

fn slot_of(node: &Node) -> Slot {
    match node.kind() {
        node_kinds::IDENTIFIER | node_kinds::TUPLE_PATTERN => Slot::Plain,
        node_kinds::DEFAULT_PARAMETER | node_kinds::TYPED_DEFAULT_PARAMETER => Slot::Defaulted,
        node_kinds::KEYWORD_SEPARATOR | "*" => Slot::BareStar,
        node_kinds::LIST_SPLAT_PATTERN => Slot::VarArgs,
        node_kinds::DICTIONARY_SPLAT_PATTERN => Slot::VarKeyword,
        node_kinds::TYPED_PARAMETER => match node.named_child(0).map(|inner| inner.kind()) {
            Some(node_kinds::LIST_SPLAT_PATTERN) => Slot::VarArgs,
            Some(node_kinds::DICTIONARY_SPLAT_PATTERN) => Slot::VarKeyword,
            _ => Slot::Plain,
        },
        // `/`, commas, parentheses
        _ => Slot::Punctuation,
    }
}

/// `/` does not lift the default ordering rule; only `*` or `*args` does
fn check_parameters(node: &Node) -> Result<()> {
    let mut seen_default = false;
    let mut keyword_only = false;
    let mut open_star: Option<Node> = None;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_extra() {
            continue;
        }

        match slot_of(&child) {
            Slot::Plain => {
                if seen_default && !keyword_only {
                    return Err(error_at(
                        &child,
                        "non-default argument follows default argument",
                    ));
                }
                open_star = None;
            }
            Slot::Defaulted => {
                seen_default |= !keyword_only;
                open_star = None;
            }
            Slot::BareStar => {
                keyword_only = true;
                open_star = Some(child);
            }
            Slot::VarArgs => keyword_only = true,
            Slot::VarKeyword => {
                if let Some(star) = open_star {
                    return Err(bare_star(&star));
                }
            }
            Slot::Punctuation => {}
        }
    }

    match open_star {
        Some(star) => Err(bare_star(&star)),
        None => Ok(()),
    }
}

fn bare_star(star: &Node) -> ExportsError {
    error_at(star, "named arguments must follow bare *")
}

fn missing_parentheses(node: &Node, keyword: &str) -> ExportsError {
    error_at(
        node,
        format!("Missing parentheses in call to '{keyword}'. Did you mean {keyword}(...)?"),
    )
}

fn error_at(node: &Node, message: impl Into<String>) -> ExportsError {
    let pos = node.start_position();
    ExportsError::syntax(message, pos.row as u32 + 1, pos.column as u32)
}

fn has_child(node: &Node, kind: &str) -> bool {
    find_child(node, kind).is_some()
}

fn find_child<'tree>(node: &Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn check_source(code: &str) -> Result<()> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::language()).unwrap();
        let tree = parser.parse(code, None).unwrap();
        assert!(!tree.root_node().has_error(), "grammar rejected {code:?}");
        check(&tree.root_node())
    }

    fn rejected(code: &str) -> (String, u32) {
        match check_source(code) {
            Err(ExportsError::Syntax { message, line, .. }) => (message, line),
            other => panic!("expected a syntax error for {code:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_module_passes() {
        let code = "__all__ = ['f']\n\n@wrap\ndef f(a, b=1, *args, c, d=2, **kw):\n    x = 1; y = 2\n    return (n := 3)\n\nprint('ok')\n";
        assert!(check_source(code).is_ok());
    }

    #[test]
    fn test_print_statement_rejected() {
        let (message, line) = rejected("__all__ = ['f']\nprint 'hi'\ndef f(a): pass\n");
        assert_eq!(message, "Missing parentheses in call to 'print'. Did you mean print(...)?");
        assert_eq!(line, 2);
    }

    #[test]
    fn test_print_chevron_is_an_expression() {
        // `print >> f, x` is a shift and a tuple in Python 3
        assert!(check_source("print >> f, 'x'\n").is_ok());
    }

    #[test]
    fn test_exec_statement_rejected() {
        let (message, _) = rejected("exec 'x = 1'\n");
        assert!(message.contains("'exec'"));
    }

    #[test]
    fn test_plain_parameter_after_default_rejected() {
        let (message, line) = rejected("__all__ = ['f']\ndef f(x=1, y): pass\n");
        assert_eq!(message, "non-default argument follows default argument");
        assert_eq!(line, 2);
    }

    #[test]
    fn test_positional_separator_keeps_default_ordering() {
        rejected("def f(a=1, /, b): pass\n");
        assert!(check_source("def f(a, /, b=1, *, c): pass\n").is_ok());
    }

    #[test]
    fn test_keyword_only_parameters_may_skip_defaults() {
        assert!(check_source("def f(a=1, *, b, c=2, d): pass\n").is_ok());
        assert!(check_source("def f(a=1, *rest, b): pass\n").is_ok());
    }

    #[test]
    fn test_typed_parameter_after_default_rejected() {
        rejected("def f(x: int = 1, y: int): pass\n");
    }

    #[test]
    fn test_bare_star_without_named_parameter_rejected() {
        let (message, _) = rejected("def f(*, **kw): pass\n");
        assert_eq!(message, "named arguments must follow bare *");
        rejected("def f(a, *): pass\n");
    }

    #[test]
    fn test_lambda_parameters_checked() {
        rejected("g = lambda x=1, y: 0\n");
    }

    #[test]
    fn test_walrus_statement_rejected() {
        let (message, line) = rejected("x := 1\n");
        assert_eq!(message, "invalid syntax");
        assert_eq!(line, 1);
    }

    #[test]
    fn test_parenthesized_walrus_statement_allowed() {
        assert!(check_source("(x := 1)\n").is_ok());
    }

    #[test]
    fn test_indented_top_level_statement_rejected() {
        let (message, line) = rejected("\n  def f(a): pass\n");
        assert_eq!(message, "unexpected indent");
        assert_eq!(line, 2);
    }

    #[test]
    fn test_semicolon_statements_share_a_line() {
        assert!(check_source("a = 1; b = 2\n").is_ok());
    }
}
