//! `meta.toml` parsing and validation for metasnip.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{FrameworkSelector, Manifest, MetaToml, OutputConfig, PageConfig, template};
