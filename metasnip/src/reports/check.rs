//! Check command report data structures.

use metasnip_codegen::lint::{self, Diagnostic};
use metasnip_core::{FrameworkKind, MetaFieldSet};

use super::{
    output::{Output, Report},
    render_diagnostic,
};

/// Report data from validating a meta.toml.
#[derive(Debug)]
pub struct CheckReport {
    /// Path of the checked manifest.
    pub path: String,

    /// Fields as they would be used for generation.
    pub fields: MetaFieldSet,

    /// Configured (or requested) framework.
    pub framework: Option<FrameworkKind>,

    /// Lint diagnostics. Framework-specific lints only run when a framework
    /// is known.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Returns true if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        lint::has_errors(&self.diagnostics)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            render_diagnostic(out, diag);
        }

        if self.has_errors() {
            let count = self
                .diagnostics
                .iter()
                .filter(|d| d.severity.is_error())
                .count();
            out.error(&format!("{} has {} error(s)", self.path, count));
            return;
        }

        out.success(&format!("{} is valid", self.path));
        out.newline();

        out.section("Page");
        out.key_value("title", &self.fields.title);
        out.key_value("description", &self.fields.description);
        out.key_value("url", self.fields.url().unwrap_or("(not set)"));
        out.key_value("image_url", self.fields.image_url().unwrap_or("(not set)"));
        out.newline();

        out.section("Output");
        match self.framework {
            Some(kind) => out.key_value("framework", &format!("{} ({})", kind.label(), kind)),
            None => out.key_value("framework", "(not set, pass --framework)"),
        }
    }
}
