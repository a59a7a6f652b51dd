use serde::Serialize;

use crate::DisplayLanguage;

/// A generated snippet and the language to highlight it with.
///
/// `code` must be displayed verbatim; `display_language` never affects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSnippet {
    pub code: String,
    pub display_language: DisplayLanguage,
}

impl GeneratedSnippet {
    pub fn new(code: impl Into<String>, display_language: DisplayLanguage) -> Self {
        Self {
            code: code.into(),
            display_language,
        }
    }
}
