//! Normalizing introspected tables into [`TableDescriptor`]s.

use table2struct_core::{ColumnDescriptor, FieldDescriptor, SqlType, TableDescriptor};
use table2struct_mapping::MappingStore;

use crate::{Result, Settings, Transliterator, TypeResolver};

/// Builds fully resolved table descriptors from raw column rows.
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder<'a> {
    settings: &'a Settings,
    names: Transliterator<'a>,
    types: TypeResolver<'a>,
}

impl<'a> TableBuilder<'a> {
    pub fn new(settings: &'a Settings, store: &'a MappingStore) -> Self {
        Self {
            settings,
            names: Transliterator::new(store),
            types: TypeResolver::new(settings, store),
        }
    }

    /// Table name without the configured prefix.
    pub fn display_name<'n>(&self, table: &'n str) -> &'n str {
        self.settings
            .strip_prefix
            .as_deref()
            .and_then(|prefix| table.strip_prefix(prefix))
            .filter(|stripped| !stripped.is_empty())
            .unwrap_or(table)
    }

    /// Resolve every column of `table`, in declaration order.
    pub fn build(
        &self,
        table: &str,
        comment: &str,
        columns: &[ColumnDescriptor],
    ) -> Result<TableDescriptor> {
        let display_name = self.display_name(table);
        let identifier = self.names.to_identifier(display_name, table)?;
        tracing::debug!(table, %identifier, columns = columns.len(), "building table");

        let fields = columns
            .iter()
            .map(|column| self.field(table, column))
            .collect::<Result<Vec<_>>>()?;
        let has_time = fields.iter().any(FieldDescriptor::is_time);

        Ok(TableDescriptor {
            name: table.to_string(),
            display_name: display_name.to_string(),
            identifier,
            fields,
            has_time,
            comment: comment.to_string(),
        })
    }

    fn field(&self, table: &str, column: &ColumnDescriptor) -> Result<FieldDescriptor> {
        let identifier = self.names.to_identifier(&column.name, table)?;
        let resolved = self.types.resolve_column(column, table)?;
        let unsigned = SqlType::parse(&column.sql_type).unsigned;
        tracing::debug!(
            table,
            column = %column.name,
            %identifier,
            target_type = %resolved.name,
            "resolved column"
        );

        Ok(FieldDescriptor {
            name: column.name.clone(),
            identifier,
            target_type: resolved.name,
            wrapper: resolved.wrapper,
            unsigned,
            nullable: column.nullable,
            primary_key: column.primary_key,
            auto_increment: column.auto_increment,
            default: column.default.clone(),
            comment: column.comment.clone(),
            raw_type: column.sql_type.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use table2struct_core::WrapperFamily;
    use table2struct_mapping::NullableMode;

    use super::*;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "int(10) unsigned")
                .primary_key()
                .auto_increment(),
            ColumnDescriptor::new("user_id", "bigint(20)"),
            ColumnDescriptor::new("nickname", "varchar(64)")
                .nullable(true)
                .comment("display name"),
            ColumnDescriptor::new("created_at", "datetime").default_value("CURRENT_TIMESTAMP"),
        ]
    }

    #[test]
    fn test_build_resolves_fields_in_order() {
        let settings = Settings::default();
        let store = MappingStore::new();
        let table = TableBuilder::new(&settings, &store)
            .build("user_profiles", "profiles", &columns())
            .unwrap();

        assert_eq!(table.name, "user_profiles");
        assert_eq!(table.display_name, "user_profiles");
        assert_eq!(table.identifier, "UserProfiles");
        assert_eq!(table.comment, "profiles");
        assert!(table.has_time);

        let names: Vec<_> = table.fields.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(names, ["ID", "UserID", "Nickname", "CreatedAt"]);

        let types: Vec<_> = table.fields.iter().map(|f| f.target_type.as_str()).collect();
        assert_eq!(types, ["uint", "int64", "string", "time.Time"]);

        let id = &table.fields[0];
        assert!(id.primary_key && id.auto_increment && id.unsigned);
        assert_eq!(id.raw_type, "int(10) unsigned");
        assert_eq!(table.fields[2].comment, "display name");
        assert_eq!(
            table.fields[3].default.as_deref(),
            Some("CURRENT_TIMESTAMP")
        );
    }

    #[test]
    fn test_has_time_false_without_temporal_fields() {
        let settings = Settings::default();
        let store = MappingStore::new();
        let table = TableBuilder::new(&settings, &store)
            .build("tags", "", &[ColumnDescriptor::new("name", "varchar(32)")])
            .unwrap();

        assert!(!table.has_time);
    }

    #[test]
    fn test_wrapped_time_is_not_time_import() {
        let settings = Settings {
            nullable: NullableMode::Std,
            ..Settings::default()
        };
        let store = MappingStore::new();
        let table = TableBuilder::new(&settings, &store)
            .build(
                "events",
                "",
                &[ColumnDescriptor::new("at", "datetime").nullable(true)],
            )
            .unwrap();

        assert!(!table.has_time);
        assert_eq!(table.fields[0].target_type, "sql.NullTime");
        assert_eq!(table.wrapper_families(), vec![WrapperFamily::Std]);
    }

    #[test]
    fn test_prefix_stripped_for_names_only() {
        let settings = Settings {
            strip_prefix: Some("t_".to_string()),
            ..Settings::default()
        };
        let mut store = MappingStore::new();
        store.load(["t_orders.qty:Quantity"]).unwrap();
        let table = TableBuilder::new(&settings, &store)
            .build("t_orders", "", &[ColumnDescriptor::new("qty", "int(11)")])
            .unwrap();

        assert_eq!(table.name, "t_orders");
        assert_eq!(table.display_name, "orders");
        assert_eq!(table.identifier, "Orders");
        assert_eq!(table.fields[0].identifier, "Quantity");
        assert_eq!(table.file_name(), "orders.go");
    }

    #[test]
    fn test_prefix_equal_to_name_is_kept() {
        let settings = Settings {
            strip_prefix: Some("log".to_string()),
            ..Settings::default()
        };
        let store = MappingStore::new();
        let builder = TableBuilder::new(&settings, &store);

        assert_eq!(builder.display_name("log"), "log");
        assert_eq!(builder.display_name("logins"), "ins");
        assert_eq!(builder.display_name("users"), "users");
    }

    #[test]
    fn test_struct_name_mapping() {
        let settings = Settings::default();
        let mut store = MappingStore::new();
        store.load(["people:Person"]).unwrap();
        let table = TableBuilder::new(&settings, &store)
            .build("people", "", &[ColumnDescriptor::new("name", "varchar(32)")])
            .unwrap();

        assert_eq!(table.identifier, "Person");
    }

    #[test]
    fn test_unknown_type_aborts_build() {
        let settings = Settings::default();
        let store = MappingStore::new();
        let result = TableBuilder::new(&settings, &store).build(
            "places",
            "",
            &[ColumnDescriptor::new("shape", "geometry")],
        );

        assert!(matches!(result, Err(crate::Error::UnknownType { .. })));
    }
}
