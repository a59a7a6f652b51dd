//! Generate command report data structures.

use std::path::PathBuf;

use metasnip_codegen::lint::Diagnostic;
use metasnip_core::{DisplayLanguage, FrameworkKind};

use super::{
    output::{Output, Report},
    render_diagnostic,
};

/// Report data from snippet generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Framework the snippet targets.
    pub framework: FrameworkKind,

    /// Non-blocking lint diagnostics.
    pub diagnostics: Vec<Diagnostic>,

    /// Where the snippet went.
    pub result: GenerationResult,
}

/// Result of snippet generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Snippet code for stdout.
    Printed(String),
    /// Snippet and highlight hint serialized as JSON.
    Json(String),
    /// Snippet written to a file.
    Written {
        path: PathBuf,
        display_language: DisplayLanguage,
    },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Printed(code) => out.verbatim(code),
            GenerationResult::Json(json) => {
                out.verbatim(json);
                out.newline();
            }
            GenerationResult::Written {
                path,
                display_language,
            } => {
                out.success(&format!(
                    "Wrote {} snippet to {}",
                    self.framework.label(),
                    path.display()
                ));
                out.key_value("Language", display_language.as_str());
            }
        }

        for diag in &self.diagnostics {
            render_diagnostic(out, diag);
        }
    }
}
