//! Grammar-specific tables

pub mod python;
