//! Checks run on the fields before a snippet is generated.
//!
//! ```
//! use metasnip_codegen::lint::{Severity, run_lints};
//! use metasnip_core::{FrameworkKind, MetaFieldSet};
//!
//! let fields = MetaFieldSet::new("My Page", "");
//! let diagnostics = run_lints(Some(FrameworkKind::Dash), &fields);
//! assert!(diagnostics.iter().any(|d| d.severity == Severity::Error));
//! ```

mod diagnostic;
mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{RequiredFieldsLint, StreamlitPreviewLint, SurroundingWhitespaceLint};
use metasnip_core::{FrameworkKind, MetaFieldSet};

/// A lint that checks a field set, optionally for a target framework.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the fields and add any diagnostics.
    ///
    /// `framework` is `None` when only the fields are being checked.
    fn check(
        &self,
        framework: Option<FrameworkKind>,
        fields: &MetaFieldSet,
        diagnostics: &mut Vec<Diagnostic>,
    );
}

/// The lints run before every generation.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(RequiredFieldsLint),
        Box::new(SurroundingWhitespaceLint),
        Box::new(StreamlitPreviewLint),
    ]
}

/// Run the default lints.
pub fn run_lints(framework: Option<FrameworkKind>, fields: &MetaFieldSet) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints() {
        lint.check(framework, fields, &mut diagnostics);
        tracing::trace!(lint = lint.name(), total = diagnostics.len(), "lint ran");
    }
    diagnostics
}

/// Returns true if any diagnostic blocks generation.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity.is_error())
}
