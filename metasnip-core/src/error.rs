use thiserror::Error;

/// Result type for metasnip core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required field was empty after trimming.
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },

    /// A framework selector that names none of the supported frameworks.
    #[error(
        "unknown framework '{name}', expected one of: streamlit, dash, shiny-python, shiny-r, quarto"
    )]
    UnknownFramework { name: String },
}

impl Error {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    pub fn unknown_framework(name: impl Into<String>) -> Self {
        Self::UnknownFramework { name: name.into() }
    }
}
