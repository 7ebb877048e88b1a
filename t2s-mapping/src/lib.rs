//! Name mapping rules and configuration for table2struct.
//!
//! Users override generated identifiers and types with mapping specs such as
//! `orders.qty:Quantity,type:int32`, given on the command line, in a mapping
//! file or in `table2struct.toml`. This crate parses those specs into a
//! [`MappingStore`] and loads the configuration file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod spec;
mod store;

pub use config::{CONFIG_FILE, Config, DatabaseConfig, GenerateConfig, NullableMode, Tag};
pub use error::{Error, FLAG_SOURCE, Result, SourceContext};
pub use file::{MappingFile, parse_specs};
pub use spec::MappingSpec;
pub use store::{GLOBAL_SCOPE, MappingEntry, MappingStore};
