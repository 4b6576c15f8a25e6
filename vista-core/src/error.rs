//! Error types

use std::fmt;

/// Errors raised while resolving theme tokens and colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VistaError {
    /// The theme color has no built-in scale (e.g. "mauve").
    UnknownColor(String),
    /// The scale exists but has no such shade level.
    UnknownLevel { color: String, level: u16 },
    /// The string is not a `#rgb` or `#rrggbb` color.
    InvalidHex(String),
}

impl fmt::Display for VistaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VistaError::UnknownColor(name) => write!(f, "Unknown theme color: {}", name),
            VistaError::UnknownLevel { color, level } => {
                write!(f, "Unknown shade level {} for color {}", level, color)
            }
            VistaError::InvalidHex(value) => write!(f, "Invalid hex color: {:?}", value),
        }
    }
}

impl std::error::Error for VistaError {}
