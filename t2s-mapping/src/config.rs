//! `table2struct.toml` configuration file.
//!
//! Every field is optional; missing values fall back to the defaults of the
//! command line tool, and command line flags override file values.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "table2struct.toml";

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub database: DatabaseConfig,
    pub generate: GenerateConfig,
}

/// Connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Full `mysql://` URL. Takes precedence over the individual parts.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Schema to introspect.
    pub name: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: "root".to_string(),
            name: None,
        }
    }
}

/// Code generation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Go package clause of the generated files.
    pub package: String,
    /// Output directory, defaults to the working directory.
    pub output: Option<PathBuf>,
    /// Tags emitted on every field.
    pub tags: Vec<Tag>,
    /// Widen every integer type to `int64`.
    pub int64: bool,
    /// Map unsigned columns to unsigned Go types.
    pub unsigned: bool,
    /// Nullable wrapper family for nullable columns.
    pub nullable: NullableMode,
    /// Fail on SQL types without a mapping instead of leaving them empty.
    pub strict: bool,
    /// Prefix removed from table names before naming structs and files.
    pub strip_prefix: Option<String>,
    /// Line-oriented mapping file loaded before `mappings`.
    pub mapping_file: Option<PathBuf>,
    /// Inline mapping specs.
    pub mappings: Vec<String>,
    /// Tables to generate; empty means every table in the schema.
    pub tables: Vec<String>,
    /// Run generated files through `gofmt`.
    pub gofmt: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            package: "models".to_string(),
            output: None,
            tags: vec![Tag::Json],
            int64: false,
            unsigned: true,
            nullable: NullableMode::None,
            strict: true,
            strip_prefix: None,
            mapping_file: None,
            mappings: Vec::new(),
            tables: Vec::new(),
            gofmt: true,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Config::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Config::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.parse_error(e))
    }
}

/// Struct tag families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// `json:"column"`
    Json,
    /// sqlx `db:"column"`
    Db,
    /// `gorm:"column:..."`
    Gorm,
    /// `xorm:"'column'"`
    Xorm,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Json => "json",
            Tag::Db => "db",
            Tag::Gorm => "gorm",
            Tag::Xorm => "xorm",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Tag::Json),
            "db" | "sqlx" => Ok(Tag::Db),
            "gorm" => Ok(Tag::Gorm),
            "xorm" => Ok(Tag::Xorm),
            _ => Err(format!(
                "unknown tag '{}', expected one of: json, db, gorm, xorm",
                s
            )),
        }
    }
}

/// How nullable columns are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullableMode {
    /// Bare scalar types.
    #[default]
    None,
    /// `database/sql` wrappers (`sql.NullString`, ...).
    Std,
    /// `gopkg.in/guregu/null.v4` wrappers (`null.String`, ...).
    Ext,
}

impl NullableMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NullableMode::None => "none",
            NullableMode::Std => "std",
            NullableMode::Ext => "ext",
        }
    }
}

impl fmt::Display for NullableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NullableMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(NullableMode::None),
            "std" | "sql" => Ok(NullableMode::Std),
            "ext" | "null" => Ok(NullableMode::Ext),
            _ => Err(format!(
                "unknown nullable mode '{}', expected 'none', 'std' or 'ext'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli() {
        let config = Config::from_str("").unwrap();

        assert_eq!(config.database.host, "127.0.0.1");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.name, None);
        assert_eq!(config.generate.package, "models");
        assert_eq!(config.generate.tags, vec![Tag::Json]);
        assert!(config.generate.unsigned);
        assert!(config.generate.strict);
        assert!(config.generate.gofmt);
        assert_eq!(config.generate.nullable, NullableMode::None);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str(
            r#"
            [database]
            host = "db.internal"
            port = 3307
            name = "shop"

            [generate]
            package = "entity"
            tags = ["json", "gorm"]
            int64 = true
            nullable = "ext"
            strip_prefix = "t_"
            mappings = ["orders.qty:Quantity"]
            tables = ["t_orders"]
            "#,
        )
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.name.as_deref(), Some("shop"));
        assert_eq!(config.generate.package, "entity");
        assert_eq!(config.generate.tags, vec![Tag::Json, Tag::Gorm]);
        assert!(config.generate.int64);
        assert_eq!(config.generate.nullable, NullableMode::Ext);
        assert_eq!(config.generate.strip_prefix.as_deref(), Some("t_"));
        assert_eq!(config.generate.mappings, vec!["orders.qty:Quantity"]);
        assert_eq!(config.generate.tables, vec!["t_orders"]);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_str("[generate]\npackages = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_bad_nullable_mode() {
        let err = Config::from_str("[generate]\nnullable = \"maybe\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_tag_from_str() {
        assert_eq!(Tag::from_str("JSON").unwrap(), Tag::Json);
        assert_eq!(Tag::from_str("sqlx").unwrap(), Tag::Db);
        assert!(Tag::from_str("yaml").is_err());
    }

    #[test]
    fn test_nullable_mode_from_str() {
        assert_eq!(NullableMode::from_str("std").unwrap(), NullableMode::Std);
        assert_eq!(NullableMode::from_str("null").unwrap(), NullableMode::Ext);
        assert_eq!(NullableMode::from_str("off").unwrap(), NullableMode::None);
        assert!(NullableMode::from_str("maybe").is_err());
        assert_eq!(NullableMode::Ext.to_string(), "ext");
    }
}
