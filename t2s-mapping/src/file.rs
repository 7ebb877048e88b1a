use std::path::{Path, PathBuf};

use crate::{Error, MappingSpec, Result, error::SourceContext};

/// A line-oriented mapping file.
///
/// One spec per line. Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct MappingFile {
    path: PathBuf,
    specs: Vec<MappingSpec>,
}

impl MappingFile {
    /// Read and parse a mapping file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let specs = parse_specs(&content, &path.display().to_string())?;

        Ok(Self { path, specs })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn specs(&self) -> &[MappingSpec] {
        &self.specs
    }
}

/// Parse mapping specs from file content, reporting errors against `filename`.
pub fn parse_specs(content: &str, filename: &str) -> Result<Vec<MappingSpec>> {
    let ctx = SourceContext::new(content, filename);
    let mut specs = Vec::new();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let start = offset + (line.len() - line.trim_start().len());
        offset += line.len();

        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        specs.push(MappingSpec::parse_in(&ctx, text, start)?);
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use miette::SourceSpan;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let content = "# overrides\n\nuid:UserID\n  orders.qty:Quantity,type:int32  \n\n";
        let specs = parse_specs(content, "mapping.txt").unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "uid");
        assert_eq!(specs[1].scope, "orders");
        assert_eq!(specs[1].entry.target_type.as_deref(), Some("int32"));
    }

    #[test]
    fn test_error_points_at_offending_line() {
        let content = "uid:UserID\n  broken\n";
        let err = parse_specs(content, "mapping.txt").unwrap_err();

        match *err {
            Error::Format { span, spec, .. } => {
                assert_eq!(spec, "broken");
                assert_eq!(span, SourceSpan::from((13, 6)));
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mapping.txt");
        std::fs::write(&path, "id:ID\r\nname:Title\r\n").unwrap();

        let file = MappingFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.specs().len(), 2);
        assert_eq!(file.specs()[1].entry.identifier.as_deref(), Some("Title"));
    }

    #[test]
    fn test_open_missing_file() {
        let err = MappingFile::open("/nonexistent/mapping.txt").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
