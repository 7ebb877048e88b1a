//! Go import collection.

use indexmap::IndexSet;

/// Deduplicated Go import paths.
///
/// Renders the two blocks `gofmt` and `goimports` agree on: standard library
/// packages first, then third-party packages, each sorted.
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    paths: IndexSet<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: &str) {
        self.paths.insert(path.to_string());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Standard library paths, then third-party paths, both sorted.
    pub fn groups(&self) -> Vec<Vec<&str>> {
        let (mut std, mut third_party): (Vec<&str>, Vec<&str>) = self
            .paths
            .iter()
            .map(String::as_str)
            .partition(|path| is_std(path));
        std.sort_unstable();
        third_party.sort_unstable();

        [std, third_party]
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect()
    }

    /// The import declaration, or an empty string when nothing is imported.
    pub fn render(&self) -> String {
        let groups = self.groups();
        match groups.as_slice() {
            [] => String::new(),
            [group] if group.len() == 1 => format!("import \"{}\"\n", group[0]),
            _ => {
                let mut out = String::from("import (\n");
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    for path in group {
                        out.push_str(&format!("\t\"{path}\"\n"));
                    }
                }
                out.push_str(")\n");
                out
            }
        }
    }
}

/// Standard library import paths have no dot in their first element.
fn is_std(path: &str) -> bool {
    path.split('/').next().is_some_and(|first| !first.contains('.'))
}
