//! Exports domain models

mod export_set;
mod function_record;

pub use export_set::ExportSet;
pub use function_record::FunctionRecord;
