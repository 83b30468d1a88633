//! Exports Feature
//!
//! Resolves the module's declared export list and projects the exported
//! top-level functions into [`FunctionRecord`]s.
//!
//! ## Structure
//! - `domain/` - ExportSet, FunctionRecord
//! - `application/` - resolve_exports, project_functions

pub mod application;
pub mod domain;

pub use application::{project_functions, resolve_exports, ProjectionOptions};
pub use domain::{ExportSet, FunctionRecord};
