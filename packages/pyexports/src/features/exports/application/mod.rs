//! Exports use cases

mod project_functions;
mod resolve_exports;

pub use project_functions::{project_functions, ProjectionOptions};
pub use resolve_exports::resolve_exports;
