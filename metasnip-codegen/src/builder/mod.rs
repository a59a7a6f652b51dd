//! Builders for assembling indented snippet text.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
