//! Python-specific tree-sitter configuration

/// Python node kinds for quick lookup
pub mod node_kinds {
    pub const MODULE: &str = "module";
    pub const FUNCTION_DEF: &str = "function_definition";
    pub const DECORATED_DEF: &str = "decorated_definition";
    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const ASSIGNMENT: &str = "assignment";
    pub const IDENTIFIER: &str = "identifier";
    pub const LIST: &str = "list";
    pub const STRING: &str = "string";
    pub const CONCATENATED_STRING: &str = "concatenated_string";
    pub const PARENTHESIZED_EXPR: &str = "parenthesized_expression";
    pub const PARAMETERS: &str = "parameters";
    pub const TYPED_PARAMETER: &str = "typed_parameter";
    pub const DEFAULT_PARAMETER: &str = "default_parameter";
    pub const TYPED_DEFAULT_PARAMETER: &str = "typed_default_parameter";
    pub const LIST_SPLAT_PATTERN: &str = "list_splat_pattern";
    pub const DICTIONARY_SPLAT_PATTERN: &str = "dictionary_splat_pattern";
    pub const POSITIONAL_SEPARATOR: &str = "positional_separator";
    pub const KEYWORD_SEPARATOR: &str = "keyword_separator";
    pub const ASYNC: &str = "async";
    pub const AUGMENTED_ASSIGNMENT: &str = "augmented_assignment";
    pub const NAMED_EXPRESSION: &str = "named_expression";
    pub const LAMBDA_PARAMETERS: &str = "lambda_parameters";
    pub const TUPLE_PATTERN: &str = "tuple_pattern";
    pub const PRINT_STATEMENT: &str = "print_statement";
    pub const EXEC_STATEMENT: &str = "exec_statement";
    pub const CHEVRON: &str = "chevron";
}

/// Field names used on Python nodes
pub mod fields {
    pub const NAME: &str = "name";
    pub const PARAMETERS: &str = "parameters";
    pub const DEFINITION: &str = "definition";
    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const TYPE: &str = "type";
}

/// Tree-sitter language handle for Python
pub fn language() -> tree_sitter::Language {
    tree_sitter_python::language()
}
