//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema the tables were read from.
    pub database: String,

    /// Tables in generation order.
    pub tables: Vec<TableSummary>,

    /// Non-fatal problems, e.g. a missing formatter.
    pub warnings: Vec<String>,

    pub result: GenerationResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: String,
    pub identifier: String,
    pub fields: usize,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug, Default)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files created or replaced.
    pub written: Vec<PathBuf>,
    /// Existing files left untouched.
    pub skipped: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Database", &self.database);
        out.newline();

        out.section(&format!("Tables ({})", self.tables.len()));
        for table in &self.tables {
            out.list_item(&format!(
                "{} -> {} ({} field{})",
                table.name,
                table.identifier,
                table.fields,
                if table.fields == 1 { "" } else { "s" }
            ));
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        for path in &written.skipped {
            out.skipped_item(&format!("{} (exists)", path.display()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            if preview.files.len() == 1 { "" } else { "s" }
        ));
    }
}
