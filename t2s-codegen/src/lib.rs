//! Name and type resolution plus Go source emission for table2struct.
//!
//! # Module Organization
//!
//! - [`naming`] - Database names to Go identifiers ([`Transliterator`])
//! - [`types`] - SQL types to Go types ([`TypeResolver`])
//! - [`model`] - Raw columns to resolved tables ([`TableBuilder`])
//! - [`emit`] - Resolved tables to Go files ([`Emitter`])
//! - [`builder`] - Code generation building blocks ([`CodeBuilder`], [`ImportCollector`])

pub mod builder;
pub mod emit;
mod error;
pub mod model;
pub mod naming;
mod settings;
pub mod types;

pub use builder::{CodeBuilder, ImportCollector};
pub use emit::Emitter;
pub use error::{Error, Result};
pub use model::TableBuilder;
pub use naming::{INITIALISMS, Transliterator, normalize_initialisms};
pub use settings::{EmitOptions, Settings};
pub use types::{GoType, ResolvedType, TypeResolver};
