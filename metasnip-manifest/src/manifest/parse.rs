//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{FrameworkSelector, Manifest, validate::find_value_span};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "meta.toml")
    }
}

impl Manifest {
    /// Parse a meta.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a meta.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if let Some(FrameworkSelector::Unknown(name)) = &manifest.output.framework {
        return Err(ctx.unknown_framework_error(name, find_value_span(ctx.src(), "framework")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use metasnip_core::FrameworkKind;
    use miette::SourceSpan;

    use super::*;

    #[test]
    fn test_parse_full() {
        let manifest = Manifest::from_str(
            r#"
            [page]
            title = "My Page"
            description = "A test page"
            url = "https://example.com"
            image_url = "https://example.com/i.png"

            [output]
            framework = "Shiny for R"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.framework(), Some(FrameworkKind::ShinyR));
        let fields = manifest.fields();
        assert_eq!(fields.title, "My Page");
        assert_eq!(fields.url(), Some("https://example.com"));
        assert_eq!(fields.image_url(), Some("https://example.com/i.png"));
    }

    #[test]
    fn test_parse_empty() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest.framework(), None);
        assert_eq!(manifest.fields().title, "");
    }

    #[test]
    fn test_unknown_framework() {
        let err = Manifest::from_str("[output]\nframework = \"flask\"\n").unwrap_err();
        match *err {
            Error::UnknownFramework { name, span, .. } => {
                assert_eq!(name, "flask");
                assert_eq!(span, Some(SourceSpan::from((21, 7))));
            }
            other => panic!("expected UnknownFramework, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str("[page]\nimage-url = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/definitely/not/here/meta.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
