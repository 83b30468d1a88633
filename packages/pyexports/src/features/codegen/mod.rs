//! Code generation from extracted records
//!
//! A bundler importing a `.py` file serves a JavaScript wrapper module in its
//! place, plus `.d.ts` declarations for editors. Both are rendered here from
//! the same [`FunctionRecord`](crate::FunctionRecord) list the JSON output
//! carries.

mod identifiers;
mod javascript;
mod type_definitions;

use std::path::Path;

pub use javascript::render_javascript;
pub use type_definitions::render_type_definitions;

/// Package that provides `PythonApiClient` at runtime
pub const DEFAULT_CLIENT_PACKAGE: &str = "@disguise-one/designer-pythonapi";

/// Name used when none can be derived from a path
pub const DEFAULT_MODULE_NAME: &str = "module";

/// Identity of the generated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    name: String,
    client_package: String,
}

impl ModuleInfo {
    /// `name` is turned into a JavaScript identifier
    pub fn new(name: &str) -> Self {
        Self {
            name: identifiers::module_identifier(name),
            client_package: DEFAULT_CLIENT_PACKAGE.to_string(),
        }
    }

    /// Module named after the file stem (`pkg/api.py` → `api`)
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(DEFAULT_MODULE_NAME);
        Self::new(stem)
    }

    pub fn with_client_package(mut self, package: impl Into<String>) -> Self {
        self.client_package = package.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client_package(&self) -> &str {
        &self.client_package
    }
}

impl Default for ModuleInfo {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_path_stem() {
        assert_eq!(ModuleInfo::from_path(Path::new("src/api.py")).name(), "api");
        assert_eq!(ModuleInfo::from_path(Path::new("show-control.v2.py")).name(), "show_control_v2");
        assert_eq!(ModuleInfo::from_path(Path::new("/")).name(), "module");
    }

    #[test]
    fn test_client_package_override() {
        let module = ModuleInfo::new("api").with_client_package("./client.js");
        assert_eq!(module.client_package(), "./client.js");
        assert_eq!(ModuleInfo::default().client_package(), DEFAULT_CLIENT_PACKAGE);
    }
}
