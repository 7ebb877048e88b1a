//! Query operation - resolve one name without touching the database.

use table2struct_codegen::{Result, Settings, Transliterator, TypeResolver};
use table2struct_mapping::{GLOBAL_SCOPE, MappingStore};

use crate::reports::QueryReport;

/// What to resolve.
#[derive(Debug, Default)]
pub struct QueryRequest<'a> {
    pub name: &'a str,
    /// Scope for mapping lookups; global when absent.
    pub table: Option<&'a str>,
    pub sql_type: Option<&'a str>,
    pub nullable: bool,
}

pub fn query(
    request: &QueryRequest,
    settings: &Settings,
    store: &MappingStore,
) -> Result<QueryReport> {
    let table = request.table.unwrap_or(GLOBAL_SCOPE);
    let identifier = Transliterator::new(store).to_identifier(request.name, table)?;

    let go_type = request
        .sql_type
        .map(|sql_type| {
            TypeResolver::new(settings, store)
                .resolve(sql_type, false, request.nullable, table, request.name)
                .map(|resolved| resolved.name)
        })
        .transpose()?;

    Ok(QueryReport {
        identifier,
        go_type,
    })
}

#[cfg(test)]
mod tests {
    use table2struct_mapping::NullableMode;

    use super::*;

    #[test]
    fn test_identifier_only() {
        let report = query(
            &QueryRequest {
                name: "user_id",
                ..QueryRequest::default()
            },
            &Settings::default(),
            &MappingStore::new(),
        )
        .unwrap();

        assert_eq!(report.identifier, "UserID");
        assert_eq!(report.go_type, None);
    }

    #[test]
    fn test_with_type_and_table_scope() {
        let settings = Settings {
            nullable: NullableMode::Ext,
            ..Settings::default()
        };
        let mut store = MappingStore::new();
        store.load(["orders.qty:Quantity"]).unwrap();

        let report = query(
            &QueryRequest {
                name: "qty",
                table: Some("orders"),
                sql_type: Some("int(11)"),
                nullable: true,
            },
            &settings,
            &store,
        )
        .unwrap();

        assert_eq!(report.identifier, "Quantity");
        assert_eq!(report.go_type.as_deref(), Some("null.Int"));
    }

    #[test]
    fn test_unknown_type_is_error() {
        let result = query(
            &QueryRequest {
                name: "shape",
                sql_type: Some("geometry"),
                ..QueryRequest::default()
            },
            &Settings::default(),
            &MappingStore::new(),
        );

        assert!(matches!(
            result,
            Err(table2struct_codegen::Error::UnknownType { .. })
        ));
    }
}
