//! Dark mode activation strategies.
//!
//! The consuming generator emits dark-variant rules differently depending on
//! how the application toggles dark appearance:
//!
//! - [`Media`](DarkModeStrategy::Media): wrap dark rules in a
//!   `prefers-color-scheme: dark` media query. The OS setting decides.
//! - [`Class`](DarkModeStrategy::Class): scope dark rules under a `.dark`
//!   class on an ancestor element. The application decides.
//! - [`Selector`](DarkModeStrategy::Selector): scope dark rules under a
//!   custom selector configured in the generator.
//!
//! Documents that omit `darkMode` get [`Media`](DarkModeStrategy::Media),
//! matching the generator's own default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the consuming generator activates dark-mode variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Dark rules are gated on the `prefers-color-scheme: dark` media query.
    #[default]
    Media,
    /// Dark rules are scoped under a `dark` class on an ancestor element.
    Class,
    /// Dark rules are scoped under a custom selector.
    Selector,
}

impl DarkModeStrategy {
    /// The wire string for this strategy (`media`, `class`, or `selector`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkModeStrategy::Media => "media",
            DarkModeStrategy::Class => "class",
            DarkModeStrategy::Selector => "selector",
        }
    }
}

impl FromStr for DarkModeStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(DarkModeStrategy::Media),
            "class" => Ok(DarkModeStrategy::Class),
            "selector" => Ok(DarkModeStrategy::Selector),
            other => Err(ConfigError::UnknownStrategy {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
