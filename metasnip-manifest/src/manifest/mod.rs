//! Manifest types and parsing for meta.toml files.

mod file;
mod parse;
mod validate;

pub use file::{MetaToml, template};
use metasnip_core::{FrameworkKind, MetaFieldSet};
use serde::Deserialize;

/// Root manifest for meta.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Page metadata
    #[serde(default)]
    pub page: PageConfig,

    /// Generation defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// The `[page]` table.
///
/// Every key is optional here so that CLI flags can fill in the gaps;
/// required fields are checked after merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default framework, parsed during validation
    #[serde(default, deserialize_with = "deserialize_framework")]
    pub framework: Option<FrameworkSelector>,
}

/// A framework selector as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkSelector {
    Known(FrameworkKind),
    Unknown(String),
}

fn deserialize_framework<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<FrameworkSelector>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|name| match name.parse() {
        Ok(kind) => FrameworkSelector::Known(kind),
        Err(_) => FrameworkSelector::Unknown(name),
    }))
}

impl Manifest {
    /// The default framework, if one is configured.
    pub fn framework(&self) -> Option<FrameworkKind> {
        match &self.output.framework {
            Some(FrameworkSelector::Known(kind)) => Some(*kind),
            _ => None,
        }
    }

    /// The page fields, with absent required fields left empty.
    pub fn fields(&self) -> MetaFieldSet {
        MetaFieldSet {
            title: self.page.title.clone().unwrap_or_default(),
            description: self.page.description.clone().unwrap_or_default(),
            url: self.page.url.clone(),
            image_url: self.page.image_url.clone(),
        }
    }
}
