//! Lint for empty title or description.

use metasnip_core::{Error, FrameworkKind, MetaFieldSet};

use super::super::{Diagnostic, Lint};

/// Lint that rejects a field set whose title or description is blank.
pub struct RequiredFieldsLint;

impl Lint for RequiredFieldsLint {
    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn check(
        &self,
        _framework: Option<FrameworkKind>,
        fields: &MetaFieldSet,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for field in fields.missing_required() {
            diagnostics.push(
                Diagnostic::error(self.name(), Error::missing(field).to_string()).at(field),
            );
        }
    }
}
