//! Schema data model.
//!
//! [`ColumnDescriptor`] is what introspection reports for a column,
//! [`FieldDescriptor`] is the fully resolved form handed to the emitter.

/// Go type used for every temporal SQL type.
pub const TIME_TYPE: &str = "time.Time";

/// Raw column attributes as reported by schema introspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name as declared in the database.
    pub name: String,
    /// Declared type, e.g. `int(11) unsigned` or `varchar(255)`.
    pub sql_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub default: Option<String>,
    pub comment: String,
}

impl ColumnDescriptor {
    /// Create a non-nullable column with the given name and raw type.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            ..Self::default()
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Family of a nullable wrapper type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperFamily {
    /// `database/sql` types such as `sql.NullString`.
    Std,
    /// `gopkg.in/guregu/null.v4` types such as `null.String`.
    External,
}

impl WrapperFamily {
    /// Go import path providing the wrapper types.
    pub fn import_path(&self) -> &'static str {
        match self {
            WrapperFamily::Std => "database/sql",
            WrapperFamily::External => "gopkg.in/guregu/null.v4",
        }
    }
}

/// A column with its identifier and target type resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Raw column name.
    pub name: String,
    /// Exported Go identifier.
    pub identifier: String,
    /// Go type name.
    pub target_type: String,
    /// Set when `target_type` is a nullable wrapper.
    pub wrapper: Option<WrapperFamily>,
    pub unsigned: bool,
    pub nullable: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub default: Option<String>,
    pub comment: String,
    /// Declared SQL type, kept for type-annotated tags.
    pub raw_type: String,
}

impl FieldDescriptor {
    pub fn is_std_wrapper(&self) -> bool {
        self.wrapper == Some(WrapperFamily::Std)
    }

    pub fn is_ext_wrapper(&self) -> bool {
        self.wrapper == Some(WrapperFamily::External)
    }

    pub fn is_time(&self) -> bool {
        self.target_type == TIME_TYPE
    }
}

/// A table ready for emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Raw table name, used for `TableName()` and tags.
    pub name: String,
    /// Table name with the configured prefix stripped.
    pub display_name: String,
    /// Struct name.
    pub identifier: String,
    pub fields: Vec<FieldDescriptor>,
    /// Whether any field needs the `time` package.
    pub has_time: bool,
    pub comment: String,
}

impl TableDescriptor {
    /// Wrapper families used by the fields, in first-use order.
    pub fn wrapper_families(&self) -> Vec<WrapperFamily> {
        let mut families = Vec::new();
        for family in self.fields.iter().filter_map(|f| f.wrapper) {
            if !families.contains(&family) {
                families.push(family);
            }
        }
        families
    }

    /// Name of the generated source file.
    pub fn file_name(&self) -> String {
        format!("{}.go", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, target_type: &str, wrapper: Option<WrapperFamily>) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            identifier: name.to_uppercase(),
            target_type: target_type.to_string(),
            wrapper,
            unsigned: false,
            nullable: wrapper.is_some(),
            primary_key: false,
            auto_increment: false,
            default: None,
            comment: String::new(),
            raw_type: String::new(),
        }
    }

    #[test]
    fn test_column_builder() {
        let column = ColumnDescriptor::new("id", "int(11) unsigned")
            .primary_key()
            .auto_increment()
            .comment("row id");

        assert_eq!(column.name, "id");
        assert!(column.primary_key);
        assert!(column.auto_increment);
        assert!(!column.nullable);
        assert_eq!(column.default, None);
        assert_eq!(column.comment, "row id");
    }

    #[test]
    fn test_wrapper_flags() {
        let std = field("a", "sql.NullString", Some(WrapperFamily::Std));
        assert!(std.is_std_wrapper());
        assert!(!std.is_ext_wrapper());

        let ext = field("b", "null.Int", Some(WrapperFamily::External));
        assert!(ext.is_ext_wrapper());
        assert!(!ext.is_std_wrapper());
    }

    #[test]
    fn test_wrapper_families_deduplicated() {
        let table = TableDescriptor {
            name: "t_users".to_string(),
            display_name: "users".to_string(),
            identifier: "Users".to_string(),
            fields: vec![
                field("a", "null.String", Some(WrapperFamily::External)),
                field("b", "string", None),
                field("c", "sql.NullInt64", Some(WrapperFamily::Std)),
                field("d", "null.Int", Some(WrapperFamily::External)),
            ],
            has_time: false,
            comment: String::new(),
        };

        assert_eq!(
            table.wrapper_families(),
            vec![WrapperFamily::External, WrapperFamily::Std]
        );
        assert_eq!(table.file_name(), "users.go");
    }
}
