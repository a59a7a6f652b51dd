//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2 or 4).
    Spaces(u8),
}

impl Indent {
    /// 4-space indentation (Python, HTML inside Python strings).
    pub const PYTHON: Self = Self::Spaces(4);

    /// 2-space indentation (tidyverse R style).
    pub const R: Self = Self::Spaces(2);

    /// 2-space indentation (YAML front-matter).
    pub const YAML: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            // Anything else falls back to 4 spaces
            Self::Spaces(_) => "    ",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PYTHON
    }
}
