//! Core operations.
//!
//! The logic behind each command, separated from argument parsing and
//! output rendering.

pub mod check;
pub mod generate;
pub mod query;

pub use check::check;
pub use generate::{GenerateOptions, generate, read_tables, resolve_tables};
pub use query::{QueryRequest, query};
