use metasnip_core::{FrameworkKind, MetaFieldSet, escape};

use crate::{builder::CodeBuilder, codegen::FrameworkCodegen, open_graph::OpenGraph};

/// A `before_first_request` hook that extends the app's meta tags.
pub struct ShinyPython;

impl FrameworkCodegen for ShinyPython {
    fn framework(&self) -> FrameworkKind {
        FrameworkKind::ShinyPython
    }

    fn render(&self, fields: &MetaFieldSet) -> String {
        let entries: Vec<String> = OpenGraph::new(fields)
            .iter()
            .map(|(property, content)| {
                format!(
                    "{{'property': '{}', 'content': '{}'}}",
                    property,
                    escape::single_quoted(content)
                )
            })
            .collect();

        CodeBuilder::python()
            .line(&format!(
                "app.title = \"{}\"",
                escape::double_quoted(&fields.title)
            ))
            .blank()
            .line("@app.server.hook('before_first_request')")
            .block("def add_meta_tags():", |b| {
                b.block_with_close("meta_tags = [", "]", |b| b.separated(&entries, ","))
                    .line("app.server.meta_tags.extend(meta_tags)")
            })
            .build()
    }
}
