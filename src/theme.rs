//! Presentation theme for badge documents
//!
//! The geometry in [`crate::renderer::BadgeMetrics`] is part of the output
//! compatibility contract and is not themeable. The theme covers only values
//! that do not move layout: the label font stack, the font `@import` URL
//! embedded in each document, and the error-document background.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fonts and colors applied to every rendered document
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// `font-family` attribute value for badge labels
    pub font_family: String,
    /// URL imported from the embedded style block
    pub font_import_url: String,
    /// Background color of the error document
    pub error_background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "JetBrains Mono, monospace".to_string(),
            font_import_url:
                "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@800&display=swap"
                    .to_string(),
            error_background: "#ff4444".to_string(),
        }
    }
}

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a theme from a TOML string; unspecified fields keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }
}
