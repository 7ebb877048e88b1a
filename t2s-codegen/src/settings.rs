//! Run-wide generation settings.

use table2struct_mapping::{GenerateConfig, NullableMode, Tag};

/// Switches that drive name and type resolution.
///
/// Built once at startup and shared by reference; nothing mutates it during
/// a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Widen every integer type to `int64`.
    pub wide_integers: bool,
    /// Map unsigned integer columns to unsigned Go types.
    pub unsigned: bool,
    pub nullable: NullableMode,
    /// Fail on unknown SQL types instead of leaving the type empty.
    pub strict_types: bool,
    /// Prefix stripped from table names for struct and file names.
    pub strip_prefix: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wide_integers: false,
            unsigned: true,
            nullable: NullableMode::None,
            strict_types: true,
            strip_prefix: None,
        }
    }
}

impl From<&GenerateConfig> for Settings {
    fn from(config: &GenerateConfig) -> Self {
        Self {
            wide_integers: config.int64,
            unsigned: config.unsigned,
            nullable: config.nullable,
            strict_types: config.strict,
            strip_prefix: config.strip_prefix.clone().filter(|p| !p.is_empty()),
        }
    }
}

/// Options for rendering Go source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Package clause.
    pub package: String,
    /// Tag families, in output order.
    pub tags: Vec<Tag>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package: "models".to_string(),
            tags: vec![Tag::Json],
        }
    }
}

impl From<&GenerateConfig> for EmitOptions {
    fn from(config: &GenerateConfig) -> Self {
        let mut tags = Vec::new();
        for tag in &config.tags {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
        Self {
            package: config.package.clone(),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_config() {
        let config = GenerateConfig {
            int64: true,
            nullable: NullableMode::Std,
            strip_prefix: Some(String::new()),
            ..GenerateConfig::default()
        };
        let settings = Settings::from(&config);

        assert!(settings.wide_integers);
        assert!(settings.unsigned);
        assert_eq!(settings.nullable, NullableMode::Std);
        assert_eq!(settings.strip_prefix, None);
    }

    #[test]
    fn test_emit_options_dedupe_tags() {
        let config = GenerateConfig {
            tags: vec![Tag::Json, Tag::Db, Tag::Json],
            ..GenerateConfig::default()
        };
        let options = EmitOptions::from(&config);

        assert_eq!(options.package, "models");
        assert_eq!(options.tags, vec![Tag::Json, Tag::Db]);
    }
}
