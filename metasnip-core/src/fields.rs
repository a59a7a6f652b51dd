//! Page metadata supplied by the user.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The metadata fields a snippet is generated from.
///
/// `url` and `image_url` are optional. An empty string is treated the same
/// as an absent value everywhere, so use [`MetaFieldSet::url`] and
/// [`MetaFieldSet::image_url`] rather than reading the fields directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetaFieldSet {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MetaFieldSet {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: None,
            image_url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// The title, if non-empty.
    pub fn title(&self) -> Option<&str> {
        present(Some(&self.title))
    }

    /// The description, if non-empty.
    pub fn description(&self) -> Option<&str> {
        present(Some(&self.description))
    }

    /// The canonical page URL, if present and non-empty.
    pub fn url(&self) -> Option<&str> {
        present(self.url.as_ref())
    }

    /// The preview image URL, if present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        present(self.image_url.as_ref())
    }

    /// Check that the required fields are non-empty after trimming.
    ///
    /// Callers must do this before generating a snippet.
    pub fn validate(&self) -> Result<()> {
        match self.missing_required().first() {
            Some(&field) => Err(Error::missing(field)),
            None => Ok(()),
        }
    }

    /// Names of the required fields that are empty after trimming, in
    /// declaration order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("title", &self.title), ("description", &self.description)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optional_fields_are_absent() {
        let fields = MetaFieldSet::new("T", "D").with_url("").with_image_url("");
        assert_eq!(fields.url(), None);
        assert_eq!(fields.image_url(), None);
    }

    #[test]
    fn test_present_optional_fields() {
        let fields = MetaFieldSet::new("T", "D")
            .with_url("https://a.test")
            .with_image_url("https://a.test/i.png");
        assert_eq!(fields.url(), Some("https://a.test"));
        assert_eq!(fields.image_url(), Some("https://a.test/i.png"));
    }

    #[test]
    fn test_validate_requires_title() {
        let err = MetaFieldSet::new("   ", "D").validate().unwrap_err();
        assert_eq!(err, Error::missing("title"));
    }

    #[test]
    fn test_validate_requires_description() {
        let err = MetaFieldSet::new("T", "\n\t").validate().unwrap_err();
        assert_eq!(err, Error::missing("description"));
    }

    #[test]
    fn test_missing_required_lists_every_blank_field() {
        assert_eq!(
            MetaFieldSet::default().missing_required(),
            vec!["title", "description"]
        );
        assert!(MetaFieldSet::new("T", "D").missing_required().is_empty());
    }

    #[test]
    fn test_validate_ignores_optional_fields() {
        assert!(MetaFieldSet::new("T", "D").validate().is_ok());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let fields: MetaFieldSet =
            serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();
        assert_eq!(fields, MetaFieldSet::new("T", "D"));
    }
}
