//! SQL column types to Go types.

use table2struct_core::{ColumnDescriptor, SqlType, TIME_TYPE, WrapperFamily};
use table2struct_mapping::{MappingStore, NullableMode};

use crate::{Error, Result, Settings};

/// Go scalar types a SQL keyword can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoType {
    Int8,
    Int,
    Int64,
    Float64,
    Bool,
    String,
    Time,
    Bytes,
}

impl GoType {
    /// Look up a lowercase SQL keyword. `wide` maps every integer to `int64`.
    pub fn from_keyword(keyword: &str, wide: bool) -> Option<Self> {
        let ty = match keyword {
            "tinyint" if wide => GoType::Int64,
            "tinyint" => GoType::Int8,
            "smallint" | "mediumint" | "integer" | "int" if wide => GoType::Int64,
            "smallint" | "mediumint" | "integer" | "int" => GoType::Int,
            "bigint" => GoType::Int64,
            "float" | "double" | "decimal" | "numeric" => GoType::Float64,
            "bool" | "boolean" => GoType::Bool,
            "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" => GoType::String,
            "enum" | "set" | "json" => GoType::String,
            "date" | "datetime" | "time" | "timestamp" => GoType::Time,
            "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
                GoType::Bytes
            }
            _ => return None,
        };
        Some(ty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoType::Int8 => "int8",
            GoType::Int => "int",
            GoType::Int64 => "int64",
            GoType::Float64 => "float64",
            GoType::Bool => "bool",
            GoType::String => "string",
            GoType::Time => TIME_TYPE,
            GoType::Bytes => "[]byte",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, GoType::Int8 | GoType::Int | GoType::Int64)
    }

    /// Unsigned counterpart of an integer type.
    pub fn unsigned_name(&self) -> Option<&'static str> {
        match self {
            GoType::Int8 => Some("uint8"),
            GoType::Int => Some("uint"),
            GoType::Int64 => Some("uint64"),
            _ => None,
        }
    }

    /// Nullable wrapper of this type in the given family.
    ///
    /// Unsigned `int` columns need 32 bits of magnitude, so they use the
    /// 64-bit std wrapper.
    pub fn wrapper(&self, family: WrapperFamily, unsigned: bool) -> Option<&'static str> {
        let name = match (family, self) {
            (WrapperFamily::Std, GoType::Int8) => "sql.NullInt16",
            (WrapperFamily::Std, GoType::Int) if unsigned => "sql.NullInt64",
            (WrapperFamily::Std, GoType::Int) => "sql.NullInt32",
            (WrapperFamily::Std, GoType::Int64) => "sql.NullInt64",
            (WrapperFamily::Std, GoType::Float64) => "sql.NullFloat64",
            (WrapperFamily::Std, GoType::Bool) => "sql.NullBool",
            (WrapperFamily::Std, GoType::String) => "sql.NullString",
            (WrapperFamily::Std, GoType::Time) => "sql.NullTime",
            (WrapperFamily::External, GoType::Int8 | GoType::Int | GoType::Int64) => "null.Int",
            (WrapperFamily::External, GoType::Float64) => "null.Float",
            (WrapperFamily::External, GoType::Bool) => "null.Bool",
            (WrapperFamily::External, GoType::String) => "null.String",
            (WrapperFamily::External, GoType::Time) => "null.Time",
            (_, GoType::Bytes) => return None,
        };
        Some(name)
    }
}

/// Wrapper type spellings recognised in type overrides.
const WRAPPER_TYPES: &[(&str, WrapperFamily)] = &[
    ("sql.NullBool", WrapperFamily::Std),
    ("sql.NullByte", WrapperFamily::Std),
    ("sql.NullFloat64", WrapperFamily::Std),
    ("sql.NullInt16", WrapperFamily::Std),
    ("sql.NullInt32", WrapperFamily::Std),
    ("sql.NullInt64", WrapperFamily::Std),
    ("sql.NullString", WrapperFamily::Std),
    ("sql.NullTime", WrapperFamily::Std),
    ("null.Bool", WrapperFamily::External),
    ("null.Float", WrapperFamily::External),
    ("null.Int", WrapperFamily::External),
    ("null.String", WrapperFamily::External),
    ("null.Time", WrapperFamily::External),
];

fn canonical_wrapper(name: &str) -> Option<(&'static str, WrapperFamily)> {
    WRAPPER_TYPES
        .iter()
        .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
        .copied()
}

/// Outcome of type resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedType {
    /// Go type name. Empty when a lenient run met an unknown SQL type.
    pub name: String,
    pub wrapper: Option<WrapperFamily>,
}

impl ResolvedType {
    fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wrapper: None,
        }
    }

    fn wrapped(name: &str, family: WrapperFamily) -> Self {
        Self {
            name: name.to_string(),
            wrapper: Some(family),
        }
    }

    /// Interpret a user supplied type, normalising known wrapper spellings.
    fn from_override(ty: &str) -> Self {
        match canonical_wrapper(ty) {
            Some((canonical, family)) => Self::wrapped(canonical, family),
            None => Self::plain(ty),
        }
    }

    pub fn is_std_wrapper(&self) -> bool {
        self.wrapper == Some(WrapperFamily::Std)
    }

    pub fn is_ext_wrapper(&self) -> bool {
        self.wrapper == Some(WrapperFamily::External)
    }
}

/// Maps declared column types to Go types.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    settings: &'a Settings,
    store: &'a MappingStore,
}

impl<'a> TypeResolver<'a> {
    pub fn new(settings: &'a Settings, store: &'a MappingStore) -> Self {
        Self { settings, store }
    }

    /// Resolve the Go type of `table.column` declared as `raw_type`.
    ///
    /// `unsigned` is combined with an `unsigned` keyword in `raw_type`. A
    /// type override for the column replaces the computed type and also
    /// stands in for SQL types that have no mapping.
    pub fn resolve(
        &self,
        raw_type: &str,
        unsigned: bool,
        nullable: bool,
        table: &str,
        column: &str,
    ) -> Result<ResolvedType> {
        let sql = SqlType::parse(raw_type);
        let unsigned = unsigned || sql.unsigned;
        let override_type = self.store.target_type(table, column);

        let resolved = match GoType::from_keyword(&sql.keyword, self.settings.wide_integers) {
            Some(base) => self.apply_modes(base, unsigned, nullable),
            None if override_type.is_some() => ResolvedType::default(),
            None if self.settings.strict_types => {
                return Err(Error::UnknownType {
                    table: table.to_string(),
                    column: column.to_string(),
                    sql_type: raw_type.to_string(),
                });
            }
            None => {
                tracing::warn!(table, column, sql_type = raw_type, "no Go type for SQL type");
                ResolvedType::default()
            }
        };

        Ok(match override_type {
            Some(ty) => ResolvedType::from_override(ty),
            None => resolved,
        })
    }

    /// Resolve the type of an introspected column.
    pub fn resolve_column(&self, column: &ColumnDescriptor, table: &str) -> Result<ResolvedType> {
        self.resolve(
            &column.sql_type,
            false,
            column.nullable,
            table,
            &column.name,
        )
    }

    fn apply_modes(&self, base: GoType, unsigned: bool, nullable: bool) -> ResolvedType {
        let family = match self.settings.nullable {
            NullableMode::None => None,
            NullableMode::Std => Some(WrapperFamily::Std),
            NullableMode::Ext => Some(WrapperFamily::External),
        };

        if nullable {
            if let Some((name, family)) =
                family.and_then(|family| Some((base.wrapper(family, unsigned)?, family)))
            {
                return ResolvedType::wrapped(name, family);
            }
        }

        if self.settings.unsigned && unsigned && !self.settings.wide_integers {
            if let Some(name) = base.unsigned_name() {
                return ResolvedType::plain(name);
            }
        }

        ResolvedType::plain(base.as_str())
    }
}
