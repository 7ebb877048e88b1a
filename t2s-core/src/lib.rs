//! Core types for the table2struct code generator.
//!
//! This crate holds the schema data model shared by the mapping, codegen and
//! CLI crates, plus helpers for parsing raw MySQL column types and writing
//! generated files.

mod file;
mod sql_type;
mod types;

// File operations
pub use file::{OutputFile, Overwrite, WriteResult};
// Raw SQL type parsing
pub use sql_type::SqlType;
// Schema model
pub use types::{
    ColumnDescriptor, FieldDescriptor, TableDescriptor, TIME_TYPE, WrapperFamily,
};
