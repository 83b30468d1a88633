//! Export-set resolution
//!
//! Scans top-level assignments for the export list. Only string literals
//! inside a list literal count; everything else is skipped without error.

use tracing::{debug, warn};

use crate::features::exports::domain::ExportSet;
use crate::features::parsing::domain::{Expr, SyntaxTree};

/// Resolve the names bound to `exports_name` (normally `__all__`).
///
/// The last list-valued assignment wins; earlier ones are replaced, not
/// merged. An assignment whose value is not a list literal leaves the
/// current set untouched.
pub fn resolve_exports(tree: &SyntaxTree, exports_name: &str) -> ExportSet {
    let mut exported = ExportSet::new();

    for assign in tree.assignments().filter(|a| a.binds(exports_name)) {
        let Expr::List(elements) = &assign.value else {
            warn!(
                "{} at {} is a {}, not a list literal; ignored",
                exports_name,
                assign.span,
                assign.value.kind()
            );
            continue;
        };

        for skipped in elements.iter().filter(|e| e.as_str().is_none()) {
            warn!(
                "{} at {} has a non-string element ({}); skipped",
                exports_name,
                assign.span,
                skipped.kind()
            );
        }

        exported = elements.iter().filter_map(Expr::as_str).collect();
    }

    debug!("resolved {} exported names", exported.len());
    exported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{ModuleParser, TreeSitterParser};

    fn resolve(source: &str) -> Vec<String> {
        let tree = TreeSitterParser::new().parse(source).unwrap();
        resolve_exports(&tree, "__all__")
            .sorted_names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_declaration_is_empty() {
        assert!(resolve("def foo(): pass\n").is_empty());
    }

    #[test]
    fn test_simple_list() {
        assert_eq!(resolve("__all__ = ['foo', 'bar']\n"), vec!["bar", "foo"]);
    }

    #[test]
    fn test_last_assignment_wins() {
        assert_eq!(resolve("__all__ = ['a', 'b']\n__all__ = ['b']\n"), vec!["b"]);
    }

    #[test]
    fn test_non_list_value_keeps_previous_set() {
        assert_eq!(resolve("__all__ = ['a']\n__all__ = compute()\n"), vec!["a"]);
        assert!(resolve("__all__ = ('a', 'b')\n").is_empty());
    }

    #[test]
    fn test_non_string_elements_skipped() {
        assert_eq!(resolve("__all__ = ['a', name, 3, b'x', ['c']]\n"), vec!["a"]);
    }

    #[test]
    fn test_declaration_inside_block_is_not_top_level() {
        assert!(resolve("if True:\n    __all__ = ['a']\n").is_empty());
    }

    #[test]
    fn test_custom_exports_name() {
        let tree = TreeSitterParser::new()
            .parse("__public__ = ['x']\n__all__ = ['y']\n")
            .unwrap();
        let set = resolve_exports(&tree, "__public__");
        assert_eq!(set.sorted_names(), vec!["x"]);
    }

    #[test]
    fn test_chained_target() {
        assert_eq!(resolve("names = __all__ = ['z']\n"), vec!["z"]);
    }
}
