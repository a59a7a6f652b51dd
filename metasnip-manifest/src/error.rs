use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a missing required field error.
    pub fn missing_field_error(&self, field: &'static str, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingRequiredField {
            src: self.named_source(),
            span,
            field,
        })
    }

    /// Create an unknown framework error.
    pub fn unknown_framework_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownFramework {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'metasnip init' to create a meta.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse meta.toml")]
    #[diagnostic(code(metasnip::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} is required")]
    #[diagnostic(
        code(metasnip::missing_field),
        help("set a non-empty `{field}` under [page], or pass --{field}")
    )]
    MissingRequiredField {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty after trimming")]
        span: Option<SourceSpan>,
        field: &'static str,
    },

    #[error("unknown framework '{name}'")]
    #[diagnostic(
        code(metasnip::unknown_framework),
        help("valid frameworks are: streamlit, dash, shiny-python, shiny-r, quarto")
    )]
    UnknownFramework {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a supported framework")]
        span: Option<SourceSpan>,
        name: String,
    },
}
