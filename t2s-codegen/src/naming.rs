//! Database names to exported Go identifiers.
//!
//! `user_id` becomes `UserID`, `created_at` becomes `CreatedAt`. Mapping
//! overrides win over the algorithm.

use table2struct_mapping::MappingStore;

use crate::{Error, Result};

/// Lowercase spelling and canonical form of the common Go initialisms.
///
/// Order matters: at a given position the first entry that matches wins, so
/// `https` is rewritten through `http` and `uid` through `ui`.
pub const INITIALISMS: &[(&str, &str)] = &[
    ("api", "API"),
    ("ascii", "ASCII"),
    ("cpu", "CPU"),
    ("css", "CSS"),
    ("dns", "DNS"),
    ("eof", "EOF"),
    ("guid", "GUID"),
    ("html", "HTML"),
    ("http", "HTTP"),
    ("https", "HTTPS"),
    ("id", "ID"),
    ("ip", "IP"),
    ("json", "JSON"),
    ("lhs", "LHS"),
    ("qps", "QPS"),
    ("ram", "RAM"),
    ("rhs", "RHS"),
    ("rpc", "RPC"),
    ("sla", "SLA"),
    ("smtp", "SMTP"),
    ("ssh", "SSH"),
    ("tls", "TLS"),
    ("ttl", "TTL"),
    ("ui", "UI"),
    ("uid", "UID"),
    ("uuid", "UUID"),
    ("uri", "URI"),
    ("url", "URL"),
    ("utf8", "UTF8"),
    ("vm", "VM"),
    ("xml", "XML"),
    ("xsrf", "XSRF"),
    ("xss", "XSS"),
];

/// Replace every lowercase initialism spelling with its canonical form.
///
/// This is a plain left-to-right substring replacement that ignores word
/// boundaries: `video` becomes `vIDeo`.
pub fn normalize_initialisms(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        match INITIALISMS
            .iter()
            .find(|(lower, _)| rest.starts_with(lower))
        {
            Some((lower, canonical)) => {
                out.push_str(canonical);
                rest = &rest[lower.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

/// Capitalize the first character and every character following `_` or `-`,
/// dropping the separators.
fn capitalize_segments(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev = None;

    for (i, c) in value.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if is_separator(c) {
            // dropped; the next character is uppercased
        } else if prev.is_some_and(is_separator) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

/// Converts raw column and table names to Go identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'a> {
    store: &'a MappingStore,
}

impl<'a> Transliterator<'a> {
    pub fn new(store: &'a MappingStore) -> Self {
        Self { store }
    }

    /// Convert `raw` to an exported identifier, consulting overrides for
    /// `table` first.
    pub fn to_identifier(&self, raw: &str, table: &str) -> Result<String> {
        if let Some(identifier) = self.store.identifier(table, raw) {
            return Ok(identifier.to_string());
        }

        if raw.chars().count() == 1 {
            return Ok(raw.to_uppercase());
        }

        let Some(start) = raw.find(|c: char| c.is_ascii_alphabetic()) else {
            return Err(Error::Naming {
                table: table.to_string(),
                name: raw.to_string(),
            });
        };

        let normalized = normalize_initialisms(&raw[start..]);
        Ok(capitalize_segments(&normalized))
    }
}
