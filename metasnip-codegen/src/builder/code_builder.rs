//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use metasnip_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::python()
///     .line("def main():")
///     .indent()
///     .line("print(\"Hello, world!\")")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "def main():\n    print(\"Hello, world!\")\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn r() -> Self {
        Self::new(Indent::R)
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn yaml() -> Self {
        Self::new(Indent::YAML)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with automatic indentation and no closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use metasnip_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::python()
    ///     .block("def f():", |b: CodeBuilder| b.line("return 1"))
    ///     .build();
    ///
    /// assert_eq!(code, "def f():\n    return 1\n");
    /// ```
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Add content only when a value is present.
    pub fn when_some<T, F>(self, value: Option<T>, f: F) -> Self
    where
        F: FnOnce(Self, T) -> Self,
    {
        match value {
            Some(v) => f(self, v),
            None => self,
        }
    }

    /// Iterate and add content for each item.
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

    /// Add one line per item, ending every line but the last with `separator`.
    pub fn separated<S: AsRef<str>>(mut self, items: &[S], separator: &str) -> Self {
        let last = items.len().saturating_sub(1);
        for (i, item) in items.iter().enumerate() {
            if i < last {
                self = self.line(&format!("{}{}", item.as_ref(), separator));
            } else {
                self = self.line(item.as_ref());
            }
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::python()
    }
}
