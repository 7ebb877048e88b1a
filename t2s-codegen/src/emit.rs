//! Rendering [`TableDescriptor`]s as Go source.

use table2struct_core::{FieldDescriptor, OutputFile, TableDescriptor};
use table2struct_mapping::Tag;

use crate::{CodeBuilder, EmitOptions, ImportCollector};

/// Renders one Go file per table.
///
/// The output is valid Go but column alignment is left to `gofmt`.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    options: &'a EmitOptions,
}

impl<'a> Emitter<'a> {
    pub fn new(options: &'a EmitOptions) -> Self {
        Self { options }
    }

    /// Render `table` and name the file after its display name.
    pub fn emit(&self, table: &TableDescriptor) -> OutputFile {
        OutputFile::new(table.file_name(), self.render(table))
    }

    pub fn render(&self, table: &TableDescriptor) -> String {
        let imports = Self::imports(table);
        let doc = if table.comment.trim().is_empty() {
            &table.name
        } else {
            &table.comment
        };

        CodeBuilder::go()
            .line(&format!("package {}", self.options.package))
            .blank()
            .when(!imports.is_empty(), |b| {
                imports
                    .render()
                    .lines()
                    .fold(b, |b, line| b.line(line))
                    .blank()
            })
            .comment(&format!("{} {}", table.identifier, single_line(doc)))
            .block_with_close(&format!("type {} struct {{", table.identifier), "}", |b| {
                b.each(&table.fields, |b, field| b.line(&self.field_line(field)))
            })
            .blank()
            .comment(&format!("TableName {}", table.name))
            .block_with_close(
                &format!("func (t *{}) TableName() string {{", table.identifier),
                "}",
                |b| b.line(&format!("return \"{}\"", table.name)),
            )
            .build()
    }

    fn imports(table: &TableDescriptor) -> ImportCollector {
        let mut imports = ImportCollector::new();
        if table.has_time {
            imports.add("time");
        }
        for family in table.wrapper_families() {
            imports.add(family.import_path());
        }
        imports
    }

    fn field_line(&self, field: &FieldDescriptor) -> String {
        let mut line = format!("{} {}", field.identifier, field.target_type);

        let tags = self
            .options
            .tags
            .iter()
            .map(|tag| render_tag(*tag, field))
            .collect::<Vec<_>>();
        if !tags.is_empty() {
            line.push_str(&format!(" `{}`", tags.join(" ")));
        }

        let comment = single_line(&field.comment);
        if !comment.is_empty() {
            line.push_str(" // ");
            line.push_str(&comment);
        }

        line
    }
}

fn render_tag(tag: Tag, field: &FieldDescriptor) -> String {
    let column = &field.name;
    match tag {
        Tag::Json => format!("json:\"{column}\""),
        Tag::Db => format!("db:\"{column}\""),
        Tag::Gorm => {
            let mut parts = vec![format!("column:{column}")];
            if !field.raw_type.is_empty() {
                parts.push(format!("type:{}", field.raw_type));
            }
            if field.primary_key {
                parts.push("primaryKey".to_string());
            }
            if field.auto_increment {
                parts.push("autoIncrement".to_string());
            }
            format!("gorm:\"{}\"", parts.join(";"))
        }
        Tag::Xorm => {
            let mut parts = vec![format!("'{column}'")];
            if field.primary_key {
                parts.push("pk".to_string());
            }
            if field.auto_increment {
                parts.push("autoincr".to_string());
            }
            format!("xorm:\"{}\"", parts.join(" "))
        }
    }
}

/// Collapse line breaks so a comment stays on one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
