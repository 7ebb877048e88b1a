use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for mapping and config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Pseudo file name used when mapping specs come from the command line.
pub const FLAG_SOURCE: &str = "<--map>";

/// Source context for error reporting.
///
/// Carries the text being parsed and its file name so that error factories
/// only need the span and the message.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a mapping format error pointing at `span`.
    pub fn format_error(
        &self,
        spec: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Format {
            src: self.named_source(),
            span: span.into(),
            spec: spec.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(t2s::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file")]
    #[diagnostic(code(t2s::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("malformed mapping '{spec}': {reason}")]
    #[diagnostic(
        code(t2s::mapping_format),
        help("expected 'column:Name', 'table.column:Name' or 'column:Name,type:GoType'")
    )]
    Format {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        spec: String,
        reason: String,
    },
}

impl Error {
    /// Whether this is a malformed mapping spec.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}
