//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`ImportCollector`] - Deduplicated, grouped Go imports

mod code_builder;
mod imports;

pub use code_builder::CodeBuilder;
pub use imports::ImportCollector;
