//! Check operation - configuration validation.

use std::path::Path;

use table2struct_mapping::{Config, MappingStore};

use crate::{reports::CheckReport, schema};

/// Validate everything a generation run needs short of connecting.
///
/// Mapping syntax errors are reported earlier, while loading the store.
pub fn check(config: &Config, config_path: Option<&Path>, store: &MappingStore) -> CheckReport {
    let mut errors = Vec::new();

    let target = match schema::connection_url(&config.database) {
        Ok(url) => Some(schema::redact(&url)),
        Err(e) => {
            errors.push(e.to_string());
            None
        }
    };

    let generate = &config.generate;
    if generate.package.trim().is_empty() {
        errors.push("package name is empty".to_string());
    }
    for (scope, name, entry) in store.entries() {
        tracing::debug!(scope, name, ?entry, "mapping");
    }
    if generate.tags.is_empty() {
        tracing::info!("no tags configured, fields will be untagged");
    }

    CheckReport {
        config_path: config_path.map(Path::to_path_buf),
        target,
        package: generate.package.clone(),
        tags: generate.tags.iter().map(ToString::to_string).collect(),
        tables: generate.tables.clone(),
        mappings: store
            .scopes()
            .map(|(scope, entries)| (scope.to_string(), entries.len()))
            .collect(),
        errors,
    }
}
