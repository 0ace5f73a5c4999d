//! Error types for document loading and validation.
//!
//! Every failure is fatal at load time: a document either parses and
//! validates completely or the loader returns an error. There is no partial
//! document, no retry, and no fallback.

use std::path::PathBuf;

/// Error type for theme document loading and validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not well-formed YAML/JSON, or a node has the wrong shape.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// `darkMode` names a strategy other than `media`, `class`, or `selector`.
    UnknownStrategy {
        /// The unrecognized strategy value.
        value: String,
    },

    /// A color token is not a valid hex color.
    InvalidColor {
        /// Token name where the error occurred.
        name: String,
        /// The invalid color value.
        value: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// A border-radius token is not a valid CSS length.
    InvalidLength {
        /// Token name where the error occurred.
        name: String,
        /// The invalid length value.
        value: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// A font role declares no families at all.
    EmptyFontStack {
        /// The font role with the empty stack.
        role: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// A mapping contains a key the document format does not recognize.
    UnknownKey {
        /// The section containing the key (e.g. `theme.extend`).
        section: String,
        /// The unrecognized key.
        key: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "Failed to parse theme document {}: {}", p.display(), message)
                } else {
                    write!(f, "Failed to parse theme document: {}", message)
                }
            }
            ConfigError::UnknownStrategy { value } => {
                write!(
                    f,
                    "Unknown dark mode strategy '{}' (expected media, class, or selector)",
                    value
                )
            }
            ConfigError::InvalidColor { name, value, path } => {
                let location = path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                write!(f, "Invalid color '{}' for token '{}'{}", value, name, location)
            }
            ConfigError::InvalidLength { name, value, path } => {
                let location = path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                write!(f, "Invalid length '{}' for token '{}'{}", value, name, location)
            }
            ConfigError::EmptyFontStack { role, path } => {
                let location = path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                write!(f, "Font role '{}' declares no families{}", role, location)
            }
            ConfigError::UnknownKey { section, key, path } => {
                let location = path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                write!(f, "Unknown key '{}' in {}{}", key, section, location)
            }
            ConfigError::Load { message } => {
                write!(f, "Failed to load theme document: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
