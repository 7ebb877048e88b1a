//! Parsing of raw MySQL column types.

/// A declared column type split into its parts.
///
/// `int(10) unsigned zerofill` becomes keyword `int`, params `10`,
/// `unsigned` and `zerofill` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlType {
    /// Lowercase type keyword without length or precision.
    pub keyword: String,
    /// Text between the parentheses, if any (`255`, `10,2`, `'a','b'`).
    pub params: Option<String>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl SqlType {
    /// Parse a declared type such as `varchar(255)` or `bigint unsigned`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let keyword_end = raw
            .find(|c: char| c == '(' || c.is_whitespace())
            .unwrap_or(raw.len());
        let keyword = raw[..keyword_end].to_ascii_lowercase();

        let mut rest = &raw[keyword_end..];
        let mut params = None;
        if let Some(inner) = rest.strip_prefix('(') {
            // Quoted enum members may contain parentheses, so find the close
            // paren outside of quotes.
            let close = find_closing_paren(inner).unwrap_or(inner.len());
            params = Some(inner[..close].to_string());
            rest = inner.get(close + 1..).unwrap_or("");
        }

        let mut unsigned = false;
        let mut zerofill = false;
        for attr in rest.split_whitespace() {
            match attr.to_ascii_lowercase().as_str() {
                "unsigned" => unsigned = true,
                "zerofill" => zerofill = true,
                _ => {}
            }
        }

        Self {
            keyword,
            params,
            unsigned,
            zerofill,
        }
    }
}

fn find_closing_paren(s: &str) -> Option<usize> {
    let mut in_quote = false;
    for (i, c) in s.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            ')' if !in_quote => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_keyword() {
        let ty = SqlType::parse("datetime");
        assert_eq!(ty.keyword, "datetime");
        assert_eq!(ty.params, None);
        assert!(!ty.unsigned);
    }

    #[test]
    fn test_parse_length_suffix() {
        let ty = SqlType::parse("varchar(255)");
        assert_eq!(ty.keyword, "varchar");
        assert_eq!(ty.params.as_deref(), Some("255"));
    }

    #[test]
    fn test_parse_unsigned() {
        let ty = SqlType::parse("int(10) unsigned");
        assert_eq!(ty.keyword, "int");
        assert_eq!(ty.params.as_deref(), Some("10"));
        assert!(ty.unsigned);
        assert!(!ty.zerofill);

        let ty = SqlType::parse("BIGINT UNSIGNED ZEROFILL");
        assert_eq!(ty.keyword, "bigint");
        assert!(ty.unsigned);
        assert!(ty.zerofill);
    }

    #[test]
    fn test_parse_precision() {
        let ty = SqlType::parse("decimal(10,2)");
        assert_eq!(ty.keyword, "decimal");
        assert_eq!(ty.params.as_deref(), Some("10,2"));
    }

    #[test]
    fn test_parse_enum_members() {
        let ty = SqlType::parse("enum('on hold','done (final)')");
        assert_eq!(ty.keyword, "enum");
        assert_eq!(ty.params.as_deref(), Some("'on hold','done (final)'"));
        assert!(!ty.unsigned);
    }
}
