//! Language-neutral module representation
//!
//! Only the shapes the extraction stages look at are modelled; everything
//! else collapses into an `Other` variant that keeps its raw kind for logs.

use crate::shared::models::Span;

/// Parsed module: its top-level statements in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntaxTree {
    pub statements: Vec<Statement>,
}

/// Top-level statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Plain `=` assignment (annotated and augmented forms are `Other`)
    Assignment(Assignment),
    /// `def` statement, decorated or not
    FunctionDef(FunctionDef),
    Other { kind: String, span: Span },
}

/// `a = b = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Every target of the chain, left to right
    pub targets: Vec<AssignTarget>,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    /// Bare identifier
    Name(String),
    /// Attribute, subscript, tuple/list unpacking, ...
    Other,
}

/// Right-hand side expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    List(Vec<Expr>),
    /// String literal with escapes already decoded
    Str(String),
    /// Anything else, tagged with its raw grammar kind
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub is_async: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
}

/// Parameter kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    PositionalOnly, // x, /
    Positional,     // x
    KeywordOnly,    // *, x
    VarArgs,        // *args
    VarKeyword,     // **kwargs
}

impl SyntaxTree {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::Assignment(assign) => Some(assign),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::FunctionDef(func) => Some(func),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Assignment {
    /// Whether any target is the bare identifier `name`
    pub fn binds(&self, name: &str) -> bool {
        self.targets
            .iter()
            .any(|target| matches!(target, AssignTarget::Name(n) if n == name))
    }
}

impl Expr {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Grammar kind for log messages
    pub fn kind(&self) -> &str {
        match self {
            Expr::List(_) => "list",
            Expr::Str(_) => "string",
            Expr::Other(kind) => kind,
        }
    }
}

impl FunctionDef {
    /// Names of the parameters bound by position, in declaration order
    pub fn positional_names(&self, include_positional_only: bool) -> Vec<String> {
        self.parameters
            .iter()
            .filter(|param| match param.kind {
                ParameterKind::Positional => true,
                ParameterKind::PositionalOnly => include_positional_only,
                _ => false,
            })
            .map(|param| param.name.clone())
            .collect()
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
