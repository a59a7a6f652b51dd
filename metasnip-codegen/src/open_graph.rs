//! Ordered Open Graph properties derived from a field set.

use indexmap::IndexMap;
use metasnip_core::MetaFieldSet;

pub const OG_TITLE: &str = "og:title";
pub const OG_DESCRIPTION: &str = "og:description";
pub const OG_URL: &str = "og:url";
pub const OG_IMAGE: &str = "og:image";

/// Open Graph properties in emission order.
///
/// Optional properties are only present when the field is non-empty, and
/// `og:url` always precedes `og:image`.
#[derive(Debug, Clone, Default)]
pub struct OpenGraph<'a> {
    properties: IndexMap<&'static str, &'a str>,
}

impl<'a> OpenGraph<'a> {
    /// Title and description followed by whichever optional properties are present.
    pub fn new(fields: &'a MetaFieldSet) -> Self {
        let mut og = Self::default();
        og.properties.insert(OG_TITLE, fields.title.as_str());
        og.properties
            .insert(OG_DESCRIPTION, fields.description.as_str());
        og.extend_optional(fields);
        og
    }

    /// Only the optional properties that are present.
    pub fn optional(fields: &'a MetaFieldSet) -> Self {
        let mut og = Self::default();
        og.extend_optional(fields);
        og
    }

    fn extend_optional(&mut self, fields: &'a MetaFieldSet) {
        if let Some(url) = fields.url() {
            self.properties.insert(OG_URL, url);
        }
        if let Some(image_url) = fields.image_url() {
            self.properties.insert(OG_IMAGE, image_url);
        }
    }

    pub fn get(&self, property: &str) -> Option<&'a str> {
        self.properties.get(property).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'a str)> + '_ {
        self.properties.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
