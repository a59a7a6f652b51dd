//! Lint noting Streamlit's limited preview metadata support.

use metasnip_core::{FrameworkKind, MetaFieldSet};

use super::super::{Diagnostic, Lint};

/// Informs the user that Streamlit snippets only configure the page.
pub struct StreamlitPreviewLint;

impl Lint for StreamlitPreviewLint {
    fn name(&self) -> &'static str {
        "streamlit-preview"
    }

    fn check(
        &self,
        framework: Option<FrameworkKind>,
        fields: &MetaFieldSet,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if framework != Some(FrameworkKind::Streamlit) {
            return;
        }

        diagnostics.push(Diagnostic::info(
            self.name(),
            "Streamlit currently has limited support for custom social media preview metadata. \
             The generated code provides basic page configuration.",
        ));

        if fields.url().is_some() {
            diagnostics.push(
                Diagnostic::info(self.name(), "the page URL is not used by Streamlit").at("url"),
            );
        }
    }
}
