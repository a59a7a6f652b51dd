//! One generator per supported framework.

mod dash;
mod quarto;
mod shiny_python;
mod shiny_r;
mod streamlit;

pub use dash::Dash;
pub use quarto::Quarto;
pub use shiny_python::ShinyPython;
pub use shiny_r::ShinyR;
pub use streamlit::{IMAGE_UNSUPPORTED_NOTE, PAGE_ICON, Streamlit};
