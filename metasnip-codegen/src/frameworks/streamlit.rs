use metasnip_core::{FrameworkKind, MetaFieldSet, escape};

use crate::{builder::CodeBuilder, codegen::FrameworkCodegen};

/// Emoji placeholder for `page_icon`.
pub const PAGE_ICON: &str = "🔖";

/// Appended when an image URL is given, since `st.set_page_config` has no preview image option.
pub const IMAGE_UNSUPPORTED_NOTE: &str =
    "# Note: Streamlit currently does not support custom social media preview images directly";

/// `st.set_page_config(...)` with the description as the "About" menu entry.
pub struct Streamlit;

impl FrameworkCodegen for Streamlit {
    fn framework(&self) -> FrameworkKind {
        FrameworkKind::Streamlit
    }

    fn render(&self, fields: &MetaFieldSet) -> String {
        let title = escape::double_quoted(&fields.title);
        let description = escape::double_quoted(&fields.description);

        CodeBuilder::python()
            .line("st.set_page_config(")
            .indent()
            .line(&format!("page_title=\"{}\",", title))
            .line(&format!("page_icon=\"{}\",", PAGE_ICON))
            .block_with_close("menu_items={", "}", |b| {
                b.line(&format!("'About': \"{}\"", description))
            })
            .dedent()
            .line(")")
            .when(fields.image_url().is_some(), |b| {
                b.blank().line(IMAGE_UNSUPPORTED_NOTE)
            })
            .build()
    }
}
