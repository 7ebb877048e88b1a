//! Snapshot tests for Go emission.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use table2struct_codegen::{EmitOptions, Emitter, Settings, TableBuilder};
use table2struct_core::ColumnDescriptor;
use table2struct_mapping::{MappingStore, NullableMode, Tag};

fn render(
    settings: &Settings,
    options: &EmitOptions,
    table: &str,
    comment: &str,
    columns: &[ColumnDescriptor],
) -> (String, String) {
    let store = MappingStore::new();
    let table = TableBuilder::new(settings, &store)
        .build(table, comment, columns)
        .expect("table should resolve");
    let file = Emitter::new(options).emit(&table);
    (
        file.path().display().to_string(),
        file.content().to_string(),
    )
}

#[test]
fn test_std_wrappers_with_gorm_tags() {
    let settings = Settings {
        nullable: NullableMode::Std,
        ..Settings::default()
    };
    let options = EmitOptions {
        tags: vec![Tag::Json, Tag::Gorm],
        ..EmitOptions::default()
    };
    let (path, source) = render(
        &settings,
        &options,
        "user_profiles",
        "profiles",
        &[
            ColumnDescriptor::new("id", "int(10) unsigned")
                .primary_key()
                .auto_increment(),
            ColumnDescriptor::new("user_id", "bigint(20)"),
            ColumnDescriptor::new("nickname", "varchar(64)")
                .nullable(true)
                .comment("display name"),
            ColumnDescriptor::new("avatar_url", "varchar(255)"),
            ColumnDescriptor::new("created_at", "datetime"),
        ],
    );

    assert_eq!(path, "user_profiles.go");
    insta::assert_snapshot!("std_wrappers_with_gorm_tags", source);
}

#[test]
fn test_external_wrappers_with_prefix() {
    let settings = Settings {
        nullable: NullableMode::Ext,
        strip_prefix: Some("t_".to_string()),
        ..Settings::default()
    };
    let options = EmitOptions {
        tags: vec![Tag::Db, Tag::Xorm],
        ..EmitOptions::default()
    };
    let (path, source) = render(
        &settings,
        &options,
        "t_orders",
        "",
        &[
            ColumnDescriptor::new("id", "bigint(20) unsigned")
                .primary_key()
                .auto_increment(),
            ColumnDescriptor::new("amount", "decimal(10,2)").nullable(true),
            ColumnDescriptor::new("note", "text").nullable(true),
        ],
    );

    assert_eq!(path, "orders.go");
    insta::assert_snapshot!("external_wrappers_with_prefix", source);
}
