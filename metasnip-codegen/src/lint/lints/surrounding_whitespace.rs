//! Lint for values with leading or trailing whitespace.

use metasnip_core::{FrameworkKind, MetaFieldSet};

use super::super::{Diagnostic, Lint};

/// Warns about padded values, which are emitted verbatim.
pub struct SurroundingWhitespaceLint;

impl Lint for SurroundingWhitespaceLint {
    fn name(&self) -> &'static str {
        "surrounding-whitespace"
    }

    fn check(
        &self,
        _framework: Option<FrameworkKind>,
        fields: &MetaFieldSet,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let values = [
            ("title", fields.title()),
            ("description", fields.description()),
            ("url", fields.url()),
            ("image_url", fields.image_url()),
        ];

        for (field, value) in values {
            let Some(value) = value else { continue };
            // Blank required fields are reported by `required-fields`.
            if value.trim().is_empty() {
                continue;
            }
            if value.trim() != value {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("{} has leading or trailing whitespace", field),
                    )
                    .at(field),
                );
            }
        }
    }
}
