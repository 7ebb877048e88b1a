//! Query command report.

use super::output::{Output, Report};

/// Resolution of a single name, and optionally a type.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryReport {
    pub identifier: String,
    /// Go type, when a SQL type was asked for.
    pub go_type: Option<String>,
}

impl Report for QueryReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.identifier);
        if let Some(go_type) = &self.go_type {
            out.preformatted(go_type);
        }
    }
}
