//! Framework dispatch.

use metasnip_core::{FrameworkKind, GeneratedSnippet, MetaFieldSet, Result};

use crate::frameworks::{Dash, Quarto, ShinyPython, ShinyR, Streamlit};

/// Trait for framework-specific snippet generators.
///
/// Implementations are pure: the same fields always render the same text.
pub trait FrameworkCodegen: Sync {
    /// The framework this generator targets.
    fn framework(&self) -> FrameworkKind;

    /// Render the snippet text.
    fn render(&self, fields: &MetaFieldSet) -> String;
}

/// Look up the generator for a framework.
pub fn codegen_for(framework: FrameworkKind) -> &'static dyn FrameworkCodegen {
    match framework {
        FrameworkKind::Streamlit => &Streamlit,
        FrameworkKind::Dash => &Dash,
        FrameworkKind::ShinyPython => &ShinyPython,
        FrameworkKind::ShinyR => &ShinyR,
        FrameworkKind::Quarto => &Quarto,
    }
}

/// Generate the snippet for a framework.
///
/// Title and description must already have been checked with
/// [`MetaFieldSet::validate`].
pub fn generate(framework: FrameworkKind, fields: &MetaFieldSet) -> GeneratedSnippet {
    let codegen = codegen_for(framework);
    let code = codegen.render(fields);
    tracing::debug!(
        framework = %framework,
        has_url = fields.url().is_some(),
        has_image = fields.image_url().is_some(),
        bytes = code.len(),
        "rendered snippet"
    );
    GeneratedSnippet::new(code, framework.display_language())
}

/// Generate the snippet for a framework selector string.
///
/// Fails with [`metasnip_core::Error::UnknownFramework`] when `name` is not
/// one of the supported frameworks.
pub fn generate_named(name: &str, fields: &MetaFieldSet) -> Result<GeneratedSnippet> {
    let framework: FrameworkKind = name.parse()?;
    Ok(generate(framework, fields))
}

#[cfg(test)]
mod tests {
    use metasnip_core::{DisplayLanguage, Error};

    use super::*;

    fn full_fields() -> MetaFieldSet {
        MetaFieldSet::new("My Page", "A test page")
            .with_url("https://a.test")
            .with_image_url("https://a.test/i.png")
    }

    #[test]
    fn test_codegen_for_matches_framework() {
        for kind in FrameworkKind::ALL {
            assert_eq!(codegen_for(kind).framework(), kind);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let fields = full_fields();
        for kind in FrameworkKind::ALL {
            assert_eq!(generate(kind, &fields), generate(kind, &fields.clone()));
        }
    }

    #[test]
    fn test_display_language() {
        let fields = full_fields();
        assert_eq!(
            generate(FrameworkKind::ShinyR, &fields).display_language,
            DisplayLanguage::R
        );
        assert_eq!(
            generate(FrameworkKind::Quarto, &fields).display_language,
            DisplayLanguage::Python
        );
    }

    #[test]
    fn test_generate_named() {
        let fields = full_fields();
        let snippet = generate_named("Shiny for R", &fields).unwrap();
        assert_eq!(snippet, generate(FrameworkKind::ShinyR, &fields));
    }

    #[test]
    fn test_generate_named_unknown_framework() {
        let err = generate_named("flask", &full_fields()).unwrap_err();
        assert_eq!(err, Error::unknown_framework("flask"));
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let fields = MetaFieldSet::new("My Page", "A test page")
            .with_url("")
            .with_image_url("");
        for kind in FrameworkKind::ALL {
            let code = generate(kind, &fields).code;
            assert!(!code.contains("og:url"), "{kind} emitted og:url");
            assert!(!code.contains("og:image"), "{kind} emitted og:image");
        }
    }

    #[test]
    fn test_url_emitted_before_image() {
        let fields = full_fields();
        for kind in FrameworkKind::ALL
            .into_iter()
            .filter(|k| *k != FrameworkKind::Streamlit)
        {
            let code = generate(kind, &fields).code;
            let url = code.find("og:url").expect("og:url missing");
            let image = code.find("og:image").expect("og:image missing");
            assert!(url < image, "{kind} emitted og:image before og:url");
        }
    }
}
