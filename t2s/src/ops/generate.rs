//! Generate operation - Go files from introspected tables.

use std::path::Path;

use eyre::{Result, bail};
use table2struct_codegen::{EmitOptions, Emitter, Settings, TableBuilder};
use table2struct_core::{Overwrite, TableDescriptor, WriteResult};
use table2struct_mapping::MappingStore;

use crate::{
    format::Gofmt,
    reports::{
        GenerateReport, GenerationResult, PreviewFile, PreviewResult, TableSummary,
        WrittenResult,
    },
    schema::{RawTable, SchemaSource},
};

/// Options for writing generated files.
pub struct GenerateOptions<'a> {
    pub output_dir: &'a Path,
    pub overwrite: Overwrite,
    /// Preview instead of writing.
    pub dry_run: bool,
    /// Formatter, or `None` to keep the raw output.
    pub formatter: Option<&'a Gofmt>,
}

/// Read `requested` tables, or every base table when none are named.
pub fn read_tables(source: &mut dyn SchemaSource, requested: &[String]) -> Result<Vec<RawTable>> {
    let names = if requested.is_empty() {
        let names = source.table_names()?;
        if names.is_empty() {
            bail!("no tables found in '{}'", source.database());
        }
        names
    } else {
        requested.to_vec()
    };

    names.iter().map(|name| source.table(name)).collect()
}

/// Resolve names and types of every table.
pub fn resolve_tables(
    tables: &[RawTable],
    settings: &Settings,
    store: &MappingStore,
) -> table2struct_codegen::Result<Vec<TableDescriptor>> {
    let builder = TableBuilder::new(settings, store);
    tables
        .iter()
        .map(|table| builder.build(&table.name, &table.comment, &table.columns))
        .collect()
}

/// Render, format and write (or preview) one file per table.
pub fn generate(
    database: &str,
    tables: &[TableDescriptor],
    emit: &EmitOptions,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let emitter = Emitter::new(emit);
    let mut written = WrittenResult {
        output_dir: opts.output_dir.to_path_buf(),
        ..WrittenResult::default()
    };
    let mut preview = PreviewResult::default();

    for table in tables {
        let mut file = emitter.emit(table);
        if let Some(formatter) = opts.formatter {
            file = formatter.format(file)?;
        }

        if opts.dry_run {
            preview.files.push(PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            });
            continue;
        }

        match file.write(opts.output_dir, opts.overwrite)? {
            WriteResult::Written => written.written.push(file.path().to_path_buf()),
            WriteResult::Skipped => {
                tracing::info!(path = %file.path().display(), "exists, skipped");
                written.skipped.push(file.path().to_path_buf());
            }
        }
    }

    let mut warnings = Vec::new();
    if opts.formatter.is_some_and(Gofmt::is_missing) {
        warnings.push("gofmt not found; output is unformatted".to_string());
    }

    Ok(GenerateReport {
        database: database.to_string(),
        tables: tables
            .iter()
            .map(|table| TableSummary {
                name: table.name.clone(),
                identifier: table.identifier.clone(),
                fields: table.fields.len(),
            })
            .collect(),
        warnings,
        result: if opts.dry_run {
            GenerationResult::Preview(preview)
        } else {
            GenerationResult::Written(written)
        },
    })
}
