/*
 * Parameter Extraction
 *
 * Walks a `parameters` node in declaration order and classifies each entry:
 * - plain / typed / defaulted names  → Positional (or KeywordOnly after `*`)
 * - names before a bare `/`          → PositionalOnly
 * - `*args`, `**kwargs`              → VarArgs, VarKeyword
 *
 * Defaults and annotations are not recorded.
 */

use tree_sitter::Node;

use super::languages::python::{fields, node_kinds};
use crate::features::parsing::domain::{Parameter, ParameterKind};

/// Extract parameters from a `parameters` node
pub(super) fn extract_parameters(node: &Node, source: &str) -> Vec<Parameter> {
    let mut params = Vec::new();

    if node.kind() != node_kinds::PARAMETERS {
        return params;
    }

    let mut keyword_only = false;
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        if child.is_extra() {
            continue;
        }

        match child.kind() {
            // Bare `/`
            node_kinds::POSITIONAL_SEPARATOR | "/" => {
                for param in params.iter_mut() {
                    if param.kind == ParameterKind::Positional {
                        param.kind = ParameterKind::PositionalOnly;
                    }
                }
            }

            // Bare `*`
            node_kinds::KEYWORD_SEPARATOR | "*" => keyword_only = true,

            node_kinds::IDENTIFIER => {
                params.push(Parameter::new(node_text(&child, source), named_kind(keyword_only)));
            }

            // x=1, x: int = 1
            node_kinds::DEFAULT_PARAMETER | node_kinds::TYPED_DEFAULT_PARAMETER => {
                if let Some(name) = child.child_by_field_name(fields::NAME) {
                    if name.kind() == node_kinds::IDENTIFIER {
                        params.push(Parameter::new(
                            node_text(&name, source),
                            named_kind(keyword_only),
                        ));
                    }
                }
            }

            // x: int, *args: int, **kwargs: int
            node_kinds::TYPED_PARAMETER => {
                if let Some(inner) = child.named_child(0) {
                    if let Some(param) = classify(&inner, source, keyword_only) {
                        if param.kind == ParameterKind::VarArgs {
                            keyword_only = true;
                        }
                        params.push(param);
                    }
                }
            }

            node_kinds::LIST_SPLAT_PATTERN | node_kinds::DICTIONARY_SPLAT_PATTERN => {
                if let Some(param) = classify(&child, source, keyword_only) {
                    params.push(param);
                }
                if child.kind() == node_kinds::LIST_SPLAT_PATTERN {
                    keyword_only = true; // After *args, all params are keyword-only
                }
            }

            _ => {}
        }
    }

    params
}

fn classify(node: &Node, source: &str, keyword_only: bool) -> Option<Parameter> {
    match node.kind() {
        node_kinds::IDENTIFIER => Some(Parameter::new(
            node_text(node, source),
            named_kind(keyword_only),
        )),
        node_kinds::LIST_SPLAT_PATTERN => {
            splat_name(node, source).map(|name| Parameter::new(name, ParameterKind::VarArgs))
        }
        node_kinds::DICTIONARY_SPLAT_PATTERN => {
            splat_name(node, source).map(|name| Parameter::new(name, ParameterKind::VarKeyword))
        }
        _ => None,
    }
}

fn named_kind(keyword_only: bool) -> ParameterKind {
    if keyword_only {
        ParameterKind::KeywordOnly
    } else {
        ParameterKind::Positional
    }
}

fn splat_name(node: &Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let ident = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == node_kinds::IDENTIFIER)?;
    Some(node_text(&ident, source))
}

fn node_text(node: &Node, source: &str) -> String {
    source.get(node.byte_range()).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn params_of(code: &str) -> Vec<Parameter> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::language()).unwrap();
        let tree = parser.parse(code, None).unwrap();

        let func = tree.root_node().named_child(0).unwrap();
        let params = func.child_by_field_name("parameters").unwrap();
        extract_parameters(&params, code)
    }

    fn kinds(params: &[Parameter]) -> Vec<(&str, ParameterKind)> {
        params.iter().map(|p| (p.name.as_str(), p.kind)).collect()
    }

    #[test]
    fn test_simple_parameters() {
        let params = params_of("def func(x, y, z): pass");
        assert_eq!(
            kinds(&params),
            vec![
                ("x", ParameterKind::Positional),
                ("y", ParameterKind::Positional),
                ("z", ParameterKind::Positional),
            ]
        );
    }

    #[test]
    fn test_typed_and_default_parameters() {
        let params = params_of("def func(x: int, y=1, z: str = \"a\"): pass");
        assert_eq!(
            kinds(&params),
            vec![
                ("x", ParameterKind::Positional),
                ("y", ParameterKind::Positional),
                ("z", ParameterKind::Positional),
            ]
        );
    }

    #[test]
    fn test_varargs_kwargs() {
        let params = params_of("def func(a, *args, b, **kwargs): pass");
        assert_eq!(
            kinds(&params),
            vec![
                ("a", ParameterKind::Positional),
                ("args", ParameterKind::VarArgs),
                ("b", ParameterKind::KeywordOnly),
                ("kwargs", ParameterKind::VarKeyword),
            ]
        );
    }

    #[test]
    fn test_keyword_separator() {
        let params = params_of("def func(a, *, b=2): pass");
        assert_eq!(
            kinds(&params),
            vec![("a", ParameterKind::Positional), ("b", ParameterKind::KeywordOnly)]
        );
    }

    #[test]
    fn test_positional_separator() {
        let params = params_of("def func(a, b, /, c): pass");
        assert_eq!(
            kinds(&params),
            vec![
                ("a", ParameterKind::PositionalOnly),
                ("b", ParameterKind::PositionalOnly),
                ("c", ParameterKind::Positional),
            ]
        );
    }

    #[test]
    fn test_typed_varargs() {
        let params = params_of("def func(*args: int, key): pass");
        assert_eq!(
            kinds(&params),
            vec![("args", ParameterKind::VarArgs), ("key", ParameterKind::KeywordOnly)]
        );
    }

    #[test]
    fn test_no_parameters() {
        assert!(params_of("def func(): pass").is_empty());
    }
}
