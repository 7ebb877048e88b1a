//! Fluent builder for indented Go source.

/// One indentation level, as `gofmt` writes it.
const INDENT: &str = "\t";

/// Accumulates lines of code at a tracked indentation level.
///
/// # Example
///
/// ```
/// use table2struct_codegen::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .block_with_close("type User struct {", "}", |b| b.line("ID uint"))
///     .build();
///
/// assert_eq!(code, "type User struct {\n\tID uint\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Empty builder with tab indentation.
    pub fn go() -> Self {
        Self::default()
    }

    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` comment line. Multi-line text yields one comment per line.
    pub fn comment(mut self, text: &str) -> Self {
        for line in text.lines() {
            self.write_indent();
            self.buffer.push_str("//");
            if !line.is_empty() {
                self.buffer.push(' ');
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    /// Add an indented block followed by a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
