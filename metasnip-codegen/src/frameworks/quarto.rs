use metasnip_core::{FrameworkKind, MetaFieldSet, escape};

use crate::{builder::CodeBuilder, codegen::FrameworkCodegen, open_graph::OpenGraph};

/// YAML front-matter with Open Graph keys under `format.html.metadata`.
pub struct Quarto;

impl FrameworkCodegen for Quarto {
    fn framework(&self) -> FrameworkKind {
        FrameworkKind::Quarto
    }

    fn render(&self, fields: &MetaFieldSet) -> String {
        let og = OpenGraph::optional(fields);

        CodeBuilder::yaml()
            .line("---")
            .when_some(fields.title(), |b, title| {
                b.line(&format!("title: \"{}\"", escape::double_quoted(title)))
            })
            .when_some(fields.description(), |b, description| {
                b.line(&format!(
                    "description: \"{}\"",
                    escape::double_quoted(description)
                ))
            })
            .block("format:", |b| {
                b.block("html:", |b| {
                    b.block("metadata:", |b| {
                        b.each(og.iter(), |b, (property, content)| {
                            b.line(&format!(
                                "{}: \"{}\"",
                                property,
                                escape::double_quoted(content)
                            ))
                        })
                    })
                })
            })
            .line("---")
            .build()
    }
}
