//! Core types for the metasnip Open Graph snippet generator.
//!
//! This crate holds the domain model shared by the generators, the manifest
//! loader and the CLI.

mod error;
pub mod escape;
mod fields;
mod file;
mod framework;
mod snippet;

pub use error::{Error, Result};
pub use fields::MetaFieldSet;
// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
pub use framework::{DisplayLanguage, FrameworkKind};
pub use snippet::GeneratedSnippet;
