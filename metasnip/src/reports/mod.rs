//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult};
use metasnip_codegen::lint::{Diagnostic, Severity};
pub use output::{Report, TerminalOutput};

/// Render a lint diagnostic at the matching severity.
fn render_diagnostic(out: &mut dyn output::Output, diag: &Diagnostic) {
    let text = match &diag.location {
        Some(loc) => format!("{} (at {})", diag.message, loc),
        None => diag.message.clone(),
    };
    match diag.severity {
        Severity::Error => out.error(&text),
        Severity::Warning => out.warning(&text),
        Severity::Info => out.note(&text),
    }
}
