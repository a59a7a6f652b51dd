use metasnip_core::{FrameworkKind, MetaFieldSet, escape};

use crate::{builder::CodeBuilder, codegen::FrameworkCodegen, open_graph::OpenGraph};

/// An `add_meta()` helper returning `tags$head(...)`, plus a `fluidPage` that calls it.
pub struct ShinyR;

impl FrameworkCodegen for ShinyR {
    fn framework(&self) -> FrameworkKind {
        FrameworkKind::ShinyR
    }

    fn render(&self, fields: &MetaFieldSet) -> String {
        let mut tags = vec![format!(
            "tags$title(\"{}\")",
            escape::double_quoted(&fields.title)
        )];
        tags.extend(OpenGraph::new(fields).iter().map(|(property, content)| {
            format!(
                "tags$meta(property = \"{}\", content = \"{}\")",
                property,
                escape::double_quoted(content)
            )
        }));

        CodeBuilder::r()
            .block_with_close("add_meta <- function() {", "}", |b| {
                b.block_with_close("tags$head(", ")", |b| b.separated(&tags, ","))
            })
            .blank()
            .block_with_close("ui <- fluidPage(", ")", |b| {
                b.line("add_meta(),").line("# Your UI components here")
            })
            .build()
    }
}
