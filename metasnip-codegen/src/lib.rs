//! Framework snippet generators for metasnip.
//!
//! This crate maps a [`FrameworkKind`] and a [`MetaFieldSet`] to a
//! [`GeneratedSnippet`]:
//!
//! - [`builder`] - Indentation-aware text builder
//! - [`frameworks`] - One generator per framework
//! - [`lint`] - Checks run on the fields before generation
//!
//! ```
//! use metasnip_codegen::generate;
//! use metasnip_core::{FrameworkKind, MetaFieldSet};
//!
//! let fields = MetaFieldSet::new("My Page", "A test page").with_url("https://example.com");
//! let snippet = generate(FrameworkKind::Dash, &fields);
//! assert!(snippet.code.contains(r#"<meta property="og:url" content="https://example.com" />"#));
//! ```

pub mod builder;
mod codegen;
pub mod frameworks;
pub mod lint;
mod open_graph;

pub use codegen::{FrameworkCodegen, codegen_for, generate, generate_named};
pub use metasnip_core::{FrameworkKind, GeneratedSnippet, MetaFieldSet};
pub use open_graph::{OG_DESCRIPTION, OG_IMAGE, OG_TITLE, OG_URL, OpenGraph};
