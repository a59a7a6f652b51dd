//! Built-in lints.

mod required_fields;
mod streamlit_preview;
mod surrounding_whitespace;

pub use required_fields::RequiredFieldsLint;
pub use streamlit_preview::StreamlitPreviewLint;
pub use surrounding_whitespace::SurroundingWhitespaceLint;
