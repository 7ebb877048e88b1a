//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
    /// Connection URL with the password hidden.
    pub target: Option<String>,
    pub package: String,
    pub tags: Vec<String>,
    /// Requested tables; empty means all.
    pub tables: Vec<String>,
    /// Mapping count per scope.
    pub mappings: Vec<(String, usize)>,
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        if !self.is_valid() {
            return;
        }

        let source = match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "default configuration".to_string(),
        };
        out.preformatted(&format!("✓ {} is valid", source));
        out.newline();

        if let Some(target) = &self.target {
            out.key_value("Database", target);
        }
        out.key_value("Package", &self.package);
        out.key_value("Tags", &self.tags.join(", "));
        if self.tables.is_empty() {
            out.key_value("Tables", "all");
        } else {
            out.key_value("Tables", &self.tables.join(", "));
        }

        let total: usize = self.mappings.iter().map(|(_, count)| count).sum();
        if total > 0 {
            out.newline();
            out.section(&format!("Mappings ({})", total));
            for (scope, count) in self.mappings.iter().filter(|(_, count)| *count > 0) {
                out.key_value_indented(scope, &count.to_string());
            }
        }
    }
}
