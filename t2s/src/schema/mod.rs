//! Database introspection.
//!
//! Commands talk to the database through [`SchemaSource`] so that table
//! discovery can be replaced in tests.

mod mysql;

pub use mysql::{MySqlSource, connection_url, redact};

use eyre::Result;
use table2struct_core::ColumnDescriptor;

/// One table as read from the database, before name and type resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub name: String,
    pub comment: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// Read access to a schema.
pub trait SchemaSource {
    /// Name of the schema being read.
    fn database(&self) -> &str;

    /// Base tables of the schema, sorted by name.
    fn table_names(&mut self) -> Result<Vec<String>>;

    /// Columns of `name` in declaration order. Fails when the table does not exist.
    fn table(&mut self, name: &str) -> Result<RawTable>;
}
