//! Target framework and display language types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Web frameworks a snippet can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkKind {
    Streamlit,
    Dash,
    /// Shiny for Python
    ShinyPython,
    /// Shiny for R
    ShinyR,
    Quarto,
}

impl FrameworkKind {
    /// Every supported framework, in presentation order.
    pub const ALL: [FrameworkKind; 5] = [
        FrameworkKind::Streamlit,
        FrameworkKind::Dash,
        FrameworkKind::ShinyPython,
        FrameworkKind::ShinyR,
        FrameworkKind::Quarto,
    ];

    /// Stable kebab-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkKind::Streamlit => "streamlit",
            FrameworkKind::Dash => "dash",
            FrameworkKind::ShinyPython => "shiny-python",
            FrameworkKind::ShinyR => "shiny-r",
            FrameworkKind::Quarto => "quarto",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            FrameworkKind::Streamlit => "Streamlit",
            FrameworkKind::Dash => "Dash",
            FrameworkKind::ShinyPython => "Shiny for Python",
            FrameworkKind::ShinyR => "Shiny for R",
            FrameworkKind::Quarto => "Quarto",
        }
    }

    /// Syntax highlighting hint for snippets of this framework.
    pub fn display_language(&self) -> DisplayLanguage {
        match self {
            FrameworkKind::ShinyR => DisplayLanguage::R,
            _ => DisplayLanguage::Python,
        }
    }

    /// File extension (without dot) of the file a snippet is pasted into.
    pub fn file_extension(&self) -> &'static str {
        match self {
            FrameworkKind::ShinyR => "R",
            FrameworkKind::Quarto => "qmd",
            _ => "py",
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FrameworkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();

        match normalized.as_str() {
            "streamlit" | "st" => Ok(FrameworkKind::Streamlit),
            "dash" | "plotly-dash" => Ok(FrameworkKind::Dash),
            "shiny-python" | "shiny-py" | "py-shiny" | "shiny-for-python" => {
                Ok(FrameworkKind::ShinyPython)
            }
            "shiny-r" | "rshiny" | "shiny-for-r" => Ok(FrameworkKind::ShinyR),
            "quarto" | "qmd" => Ok(FrameworkKind::Quarto),
            _ => Err(Error::unknown_framework(s)),
        }
    }
}

/// Language used to highlight a generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    Python,
    R,
}

impl DisplayLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayLanguage::Python => "python",
            DisplayLanguage::R => "r",
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
