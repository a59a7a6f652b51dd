//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, JSON, etc).
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a success line.
    fn success(&mut self, text: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render an informational note.
    fn note(&mut self, msg: &str);

    /// Render text exactly as given, without adding a newline.
    fn verbatim(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Diagnostics go to stderr so that stdout can be piped or copied as-is.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn success(&mut self, text: &str) {
        println!("✓ {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn note(&mut self, msg: &str) {
        eprintln!("note: {}", msg);
    }

    fn verbatim(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records rendered lines, for asserting on reports in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.stdout.push_str(&format!("{}:\n", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push_str(&format!("  {}: {}\n", key, value));
    }

    fn success(&mut self, text: &str) {
        self.stdout.push_str(&format!("✓ {}\n", text));
    }

    fn error(&mut self, msg: &str) {
        self.stderr.push_str(&format!("error: {}\n", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push_str(&format!("warning: {}\n", msg));
    }

    fn note(&mut self, msg: &str) {
        self.stderr.push_str(&format!("note: {}\n", msg));
    }

    fn verbatim(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn newline(&mut self) {
        self.stdout.push('\n');
    }
}
