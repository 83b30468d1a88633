//! Function projection
//!
//! Keeps exported top-level `def`s in source order and reduces each to its
//! name and positional parameter names.

use tracing::debug;

use crate::config::ExtractConfig;
use crate::features::exports::domain::{ExportSet, FunctionRecord};
use crate::features::parsing::domain::SyntaxTree;

/// Which declarations and parameters the projection keeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Report `async def` functions too
    pub include_async: bool,
    /// Report parameters declared before a bare `/`
    pub include_positional_only: bool,
}

impl From<&ExtractConfig> for ProjectionOptions {
    fn from(config: &ExtractConfig) -> Self {
        Self {
            include_async: config.include_async,
            include_positional_only: config.include_positional_only,
        }
    }
}

/// Project every exported top-level function, in source order.
pub fn project_functions(
    tree: &SyntaxTree,
    exported: &ExportSet,
    options: ProjectionOptions,
) -> Vec<FunctionRecord> {
    let records: Vec<FunctionRecord> = tree
        .functions()
        .filter(|func| exported.contains(&func.name))
        .filter(|func| options.include_async || !func.is_async)
        .map(|func| {
            FunctionRecord::new(
                func.name.clone(),
                func.positional_names(options.include_positional_only),
            )
        })
        .collect();

    debug!(
        "projected {} of {} top-level functions",
        records.len(),
        tree.functions().count()
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{ModuleParser, TreeSitterParser};

    fn project(source: &str, exported: &[&str], options: ProjectionOptions) -> Vec<FunctionRecord> {
        let tree = TreeSitterParser::new().parse(source).unwrap();
        let set: ExportSet = exported.iter().copied().collect();
        project_functions(&tree, &set, options)
    }

    #[test]
    fn test_source_order_not_export_order() {
        let records = project(
            "def b(): pass\ndef a(x): pass\n",
            &["a", "b"],
            ProjectionOptions::default(),
        );
        assert_eq!(
            records,
            vec![
                FunctionRecord::new("b", vec![]),
                FunctionRecord::new("a", vec!["x".to_string()]),
            ]
        );
    }

    #[test]
    fn test_unexported_functions_skipped() {
        let records = project(
            "def keep(a): pass\ndef drop(b): pass\n",
            &["keep", "missing"],
            ProjectionOptions::default(),
        );
        assert_eq!(records, vec![FunctionRecord::new("keep", vec!["a".to_string()])]);
    }

    #[test]
    fn test_empty_export_set_projects_nothing() {
        assert!(project("def foo(): pass\n", &[], ProjectionOptions::default()).is_empty());
    }

    #[test]
    fn test_async_functions_opt_in() {
        let source = "async def fetch(url): pass\n";
        assert!(project(source, &["fetch"], ProjectionOptions::default()).is_empty());

        let options = ProjectionOptions {
            include_async: true,
            ..Default::default()
        };
        assert_eq!(
            project(source, &["fetch"], options),
            vec![FunctionRecord::new("fetch", vec!["url".to_string()])]
        );
    }

    #[test]
    fn test_positional_only_opt_in() {
        let source = "def f(a, /, b, *args, c, **kw): pass\n";
        assert_eq!(
            project(source, &["f"], ProjectionOptions::default()),
            vec![FunctionRecord::new("f", vec!["b".to_string()])]
        );

        let options = ProjectionOptions {
            include_positional_only: true,
            ..Default::default()
        };
        assert_eq!(
            project(source, &["f"], options),
            vec![FunctionRecord::new("f", vec!["a".to_string(), "b".to_string()])]
        );
    }

    #[test]
    fn test_redefinition_reported_twice() {
        let records = project(
            "def f(a): pass\ndef f(b): pass\n",
            &["f"],
            ProjectionOptions::default(),
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].parameters, vec!["b"]);
    }
}
