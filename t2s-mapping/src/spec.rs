//! Parsing of single mapping specs.
//!
//! A spec has the form `origin:destination`:
//!
//! - `origin` is `column` (global scope) or `table.column`
//! - `destination` is `Name` or `Name,attr:value,...`; the only attribute
//!   understood is `type`

use std::str::FromStr;

use crate::{
    Error, Result,
    error::{FLAG_SOURCE, SourceContext},
    store::{GLOBAL_SCOPE, MappingEntry},
};

/// A parsed mapping spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSpec {
    /// `global` or a table name.
    pub scope: String,
    /// Raw column (or table) name the override applies to.
    pub name: String,
    pub entry: MappingEntry,
}

impl FromStr for MappingSpec {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        let ctx = SourceContext::new(s, FLAG_SOURCE);
        MappingSpec::parse_in(&ctx, s, 0)
    }
}

impl MappingSpec {
    /// Parse `text`, which starts at byte `offset` of the context source.
    ///
    /// Errors point at the whole spec inside the context source.
    pub fn parse_in(ctx: &SourceContext, text: &str, offset: usize) -> Result<Self> {
        let fail = |reason: &str| ctx.format_error(text, reason, (offset, text.len()));

        let Some(sep) = text.find(':') else {
            return Err(fail("missing ':' separator"));
        };
        if sep == 0 {
            return Err(fail("empty origin"));
        }
        if sep + 2 >= text.len() {
            return Err(fail("destination is too short"));
        }

        let origin = &text[..sep];
        let (scope, name) = match origin.split_once('.') {
            None => (GLOBAL_SCOPE, origin),
            Some((table, column)) => {
                if table.is_empty() || column.is_empty() || column.contains('.') {
                    return Err(fail("origin must be 'column' or 'table.column'"));
                }
                (table, column)
            }
        };

        let mut parts = text[sep + 1..].split(',');
        let identifier = parts
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let mut target_type = None;
        for attr in parts {
            let Some((key, value)) = attr.split_once(':') else {
                return Err(fail("attribute must be 'key:value'"));
            };
            match key.trim() {
                "type" => target_type = Some(value.trim().to_string()),
                other => {
                    tracing::warn!(
                        spec = text,
                        attribute = other,
                        "ignoring unknown mapping attribute"
                    );
                }
            }
        }

        Ok(Self {
            scope: scope.to_string(),
            name: name.to_string(),
            entry: MappingEntry {
                identifier,
                target_type,
            },
        })
    }
}
