//! Scoped store of name and type overrides.

use std::path::Path;

use indexmap::IndexMap;

use crate::{MappingFile, MappingSpec, Result};

/// Scope that applies to every table.
pub const GLOBAL_SCOPE: &str = "global";

/// A user override for one raw name within one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingEntry {
    /// Identifier to use verbatim. `None` for type-only overrides.
    pub identifier: Option<String>,
    /// Target type replacing the resolved one.
    pub target_type: Option<String>,
}

/// Overrides keyed by scope, then by raw name.
///
/// The `global` scope always exists. Keys are exact and case-sensitive and
/// later inserts replace earlier ones.
#[derive(Debug, Clone)]
pub struct MappingStore {
    scopes: IndexMap<String, IndexMap<String, MappingEntry>>,
}

impl Default for MappingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingStore {
    pub fn new() -> Self {
        let mut scopes = IndexMap::new();
        scopes.insert(GLOBAL_SCOPE.to_string(), IndexMap::new());
        Self { scopes }
    }

    /// Insert one parsed spec, replacing any previous entry for the same key.
    pub fn insert(&mut self, spec: MappingSpec) {
        let previous = self
            .scopes
            .entry(spec.scope.clone())
            .or_default()
            .insert(spec.name.clone(), spec.entry);
        if previous.is_some() {
            tracing::debug!(scope = %spec.scope, name = %spec.name, "mapping overridden");
        }
    }

    /// Parse and insert raw specs in order.
    ///
    /// Stops at the first malformed spec.
    pub fn load<I, S>(&mut self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for spec in specs {
            self.insert(spec.as_ref().parse()?);
        }
        Ok(())
    }

    /// Load every spec of a mapping file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = MappingFile::open(path)?;
        for spec in file.specs() {
            self.insert(spec.clone());
        }
        Ok(())
    }

    /// Look up `name` in `scope`, falling back to the global scope.
    pub fn lookup(&self, scope: &str, name: &str) -> Option<&MappingEntry> {
        self.scopes
            .get(scope)
            .and_then(|entries| entries.get(name))
            .or_else(|| self.scopes.get(GLOBAL_SCOPE)?.get(name))
    }

    /// Identifier override for `name`, if the matching entry carries one.
    pub fn identifier(&self, scope: &str, name: &str) -> Option<&str> {
        self.lookup(scope, name)?.identifier.as_deref()
    }

    /// Type override for `name`, if the matching entry carries one.
    pub fn target_type(&self, scope: &str, name: &str) -> Option<&str> {
        self.lookup(scope, name)?.target_type.as_deref()
    }

    /// Iterate scopes and their entries in insertion order.
    pub fn scopes(&self) -> impl Iterator<Item = (&str, &IndexMap<String, MappingEntry>)> {
        self.scopes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every `(scope, name, entry)` in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &MappingEntry)> {
        self.scopes.iter().flat_map(|(scope, entries)| {
            entries
                .iter()
                .map(move |(name, entry)| (scope.as_str(), name.as_str(), entry))
        })
    }

    /// Total number of entries across all scopes.
    pub fn len(&self) -> usize {
        self.scopes.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(specs: &[&str]) -> MappingStore {
        let mut store = MappingStore::new();
        store.load(specs).unwrap();
        store
    }

    #[test]
    fn test_global_scope_always_exists() {
        let store = MappingStore::new();
        assert!(store.is_empty());
        assert_eq!(store.scopes().count(), 1);
        assert_eq!(store.scopes().next().unwrap().0, "global");
    }

    #[test]
    fn test_table_scope_round_trip() {
        let store = store(&["orders.qty:Quantity,type:int32"]);

        let entry = store.lookup("orders", "qty").unwrap();
        assert_eq!(entry.identifier.as_deref(), Some("Quantity"));
        assert_eq!(entry.target_type.as_deref(), Some("int32"));

        assert_eq!(store.lookup("other_table", "qty"), None);
    }

    #[test]
    fn test_table_scope_wins_over_global() {
        let store = store(&["qty:Qty", "orders.qty:Quantity"]);

        assert_eq!(store.identifier("orders", "qty"), Some("Quantity"));
        assert_eq!(store.identifier("invoices", "qty"), Some("Qty"));
    }

    #[test]
    fn test_table_entry_without_identifier_still_wins() {
        let store = store(&["qty:Qty", "orders.qty:,type:int32"]);

        assert_eq!(store.identifier("orders", "qty"), None);
        assert_eq!(store.target_type("orders", "qty"), Some("int32"));
    }

    #[test]
    fn test_last_writer_wins() {
        let store = store(&["qty:First", "qty:Second"]);
        assert_eq!(store.identifier("any", "qty"), Some("Second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = store(&["Orders.qty:Quantity"]);
        assert_eq!(store.lookup("orders", "qty"), None);
        assert_eq!(store.lookup("Orders", "QTY"), None);
    }

    #[test]
    fn test_load_stops_at_malformed_spec() {
        let mut store = MappingStore::new();
        let err = store.load(["qty:Quantity", "broken"]).unwrap_err();

        assert!(err.is_format());
        assert_eq!(store.identifier("global", "qty"), Some("Quantity"));
    }

    #[test]
    fn test_entries_in_insertion_order() {
        let store = store(&["orders.qty:Quantity", "uid:UserID", "orders.sku:SKU"]);
        let names: Vec<_> = store
            .entries()
            .map(|(scope, name, _)| format!("{scope}.{name}"))
            .collect();

        assert_eq!(names, ["global.uid", "orders.qty", "orders.sku"]);
    }
}
