use miette::Diagnostic;
use thiserror::Error;

/// Result type for name and type resolution.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("unknown SQL type '{sql_type}' for column '{table}.{column}'")]
    #[diagnostic(
        code(t2s::unknown_type),
        help("add a type override, e.g. --map '{table}.{column}:,type:string', or pass --lenient")
    )]
    UnknownType {
        table: String,
        column: String,
        sql_type: String,
    },

    #[error("cannot derive an identifier from '{name}'")]
    #[diagnostic(
        code(t2s::naming),
        help("the name contains no ASCII letter; map it explicitly, e.g. --map '{table}.{name}:Name'")
    )]
    Naming { table: String, name: String },
}
