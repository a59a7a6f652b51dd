use metasnip_core::{FrameworkKind, MetaFieldSet, escape};

use crate::{builder::CodeBuilder, codegen::FrameworkCodegen, open_graph::OpenGraph};

/// A full `app.index_string` template with Open Graph tags in `<head>`.
///
/// The `{%...%}` placeholders are the ones Dash requires in a custom index.
pub struct Dash;

impl FrameworkCodegen for Dash {
    fn framework(&self) -> FrameworkKind {
        FrameworkKind::Dash
    }

    fn render(&self, fields: &MetaFieldSet) -> String {
        let og = OpenGraph::new(fields);

        CodeBuilder::python()
            .line("app.index_string = '''")
            .line("<!DOCTYPE html>")
            .line("<html>")
            .indent()
            .block_with_close("<head>", "</head>", |b| {
                b.line("{%metas%}")
                    .line(&format!(
                        "<title>{}</title>",
                        escape::html_in_python(&fields.title)
                    ))
                    .each(og.iter(), |b, (property, content)| {
                        b.line(&format!(
                            "<meta property=\"{}\" content=\"{}\" />",
                            property,
                            escape::html_in_python(content)
                        ))
                    })
                    .line("{%css%}")
            })
            .block_with_close("<body>", "</body>", |b| {
                b.line("{%app_entry%}")
                    .block_with_close("<footer>", "</footer>", |b| {
                        b.line("{%config%}")
                            .line("{%scripts%}")
                            .line("{%renderer%}")
                    })
            })
            .dedent()
            .line("</html>")
            .line("'''")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_image() {
        let fields = MetaFieldSet::new("My Page", "A test page")
            .with_url("https://example.com")
            .with_image_url("");
        let code = Dash.render(&fields);

        let og_lines: Vec<&str> = code
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("<meta property=\"og:"))
            .collect();
        assert_eq!(
            og_lines,
            vec![
                r#"<meta property="og:title" content="My Page" />"#,
                r#"<meta property="og:description" content="A test page" />"#,
                r#"<meta property="og:url" content="https://example.com" />"#,
            ]
        );
        assert!(!code.contains("og:image"));
    }

    #[test]
    fn test_optional_tags_follow_description() {
        let fields = MetaFieldSet::new("T", "D")
            .with_url("https://a.test")
            .with_image_url("https://a.test/i.png");
        let code = Dash.render(&fields);
        let lines: Vec<&str> = code.lines().map(str::trim).collect();

        let description = lines
            .iter()
            .position(|l| l.contains("og:description"))
            .unwrap();
        assert!(lines[description + 1].contains("og:url"));
        assert!(lines[description + 2].contains("og:image"));
        assert_eq!(lines[description + 3], "{%css%}");
    }

    #[test]
    fn test_template_is_a_single_string() {
        let fields = MetaFieldSet::new("T", "D").with_url("https://a.test");
        let code = Dash.render(&fields);
        assert_eq!(code.matches("'''").count(), 2);
        assert!(code.starts_with("app.index_string = '''\n"));
        assert!(code.ends_with("</html>\n'''\n"));
    }

    #[test]
    fn test_escapes_markup() {
        let fields = MetaFieldSet::new("Tom & Jerry", r#"A "quoted" <b>page</b>"#);
        let code = Dash.render(&fields);
        assert!(code.contains("<title>Tom &amp; Jerry</title>"));
        assert!(code.contains(
            r#"content="A &quot;quoted&quot; &lt;b&gt;page&lt;/b&gt;""#
        ));
    }

    #[test]
    fn test_values_cannot_add_placeholders() {
        let fields = MetaFieldSet::new("{%css%}", "D").with_url("https://a.test/{%scripts%}");
        let code = Dash.render(&fields);

        for placeholder in ["{%metas%}", "{%css%}", "{%app_entry%}", "{%scripts%}"] {
            assert_eq!(code.matches(placeholder).count(), 1, "{placeholder}");
        }
        assert!(code.contains("<title>&#123;%css%}</title>"));
    }
}
