use std::path::{Path, PathBuf};

use metasnip_core::{FrameworkKind, MetaFieldSet};

use super::{Manifest, validate::find_value_span};
use crate::{Error, Result, error::SourceContext};

/// Represents a meta.toml file with both raw content and parsed manifest.
pub struct MetaToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl MetaToml {
    /// Open and parse a meta.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Check the required fields of `fields`, pointing at this file on failure.
    ///
    /// `fields` is usually [`Manifest::fields`] merged with CLI overrides; the
    /// error span is only set when the offending key is written in the file.
    pub fn check_fields(&self, fields: &MetaFieldSet) -> Result<()> {
        let ctx = SourceContext::new(self.content.as_str(), self.path.display().to_string());
        match fields.validate() {
            Ok(()) => Ok(()),
            Err(metasnip_core::Error::MissingRequiredField { field }) => Err(
                ctx.missing_field_error(field, find_value_span(&self.content, field)),
            ),
            Err(metasnip_core::Error::UnknownFramework { name }) => {
                Err(ctx.unknown_framework_error(name, None))
            }
        }
    }
}

/// Starter content for a new meta.toml.
pub fn template(title: &str, framework: FrameworkKind) -> String {
    let title = title.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        r#"# Page metadata for Open Graph snippets.
# Run `metasnip generate` in this directory to print a snippet.

[page]
title = "{title}"
description = "A short description of {title}"
# url = "https://example.com"
# image_url = "https://example.com/preview.png"

[output]
framework = "{framework}"
"#
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_template_parses() {
        let content = template("My \"Site\"", FrameworkKind::Quarto);
        let manifest: Manifest = content.parse().unwrap();

        assert_eq!(manifest.framework(), Some(FrameworkKind::Quarto));
        let fields = manifest.fields();
        assert_eq!(fields.title, "My \"Site\"");
        assert!(fields.validate().is_ok());
        assert_eq!(fields.url(), None);
    }

    #[test]
    fn test_open_and_check_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.toml");
        fs::write(&path, "[page]\ntitle = \"T\"\ndescription = \"  \"\n").unwrap();

        let meta_toml = MetaToml::open(&path).unwrap();
        assert_eq!(meta_toml.path(), path.as_path());

        let err = meta_toml
            .check_fields(&meta_toml.manifest().fields())
            .unwrap_err();
        match *err {
            Error::MissingRequiredField { field, span, .. } => {
                assert_eq!(field, "description");
                assert!(span.is_some());
            }
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn test_check_fields_with_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.toml");
        fs::write(&path, "[page]\ndescription = \"D\"\n").unwrap();

        let meta_toml = MetaToml::open(&path).unwrap();
        let mut fields = meta_toml.manifest().fields();
        assert!(meta_toml.check_fields(&fields).is_err());

        fields.title = "From the command line".to_string();
        assert!(meta_toml.check_fields(&fields).is_ok());
    }
}
