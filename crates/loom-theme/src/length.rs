//! CSS length validation for border-radius tokens.
//!
//! Radius tokens are carried as strings and substituted into emitted rules
//! verbatim. A token is a non-negative number with a `px`, `rem`, `em`, or
//! `%` unit, the bare `0`, or the keyword `none`. The conventional
//! "fully rounded" value `9999px` is an ordinary px length.

use serde::Serialize;

/// Recognized length units, longest first so `rem` wins over `em`.
const UNITS: &[&str] = &["rem", "em", "px", "%"];

/// A validated CSS length token for a border-radius scale, e.g. `0.25rem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadiusValue(String);

impl RadiusValue {
    /// Parses a radius token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loom_theme::RadiusValue;
    ///
    /// assert!(RadiusValue::parse("0.25rem").is_ok());
    /// assert!(RadiusValue::parse("9999px").is_ok());
    /// assert!(RadiusValue::parse("round").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        let token = s.trim();

        if token == "0" || token == "none" {
            return Ok(Self(token.to_string()));
        }

        let unit = UNITS
            .iter()
            .find(|u| token.ends_with(**u))
            .ok_or_else(|| format!("'{}' has no recognized unit (px, rem, em, %)", s))?;

        let magnitude = &token[..token.len() - unit.len()];
        let value: f64 = magnitude
            .parse()
            .map_err(|_| format!("'{}' is not a number", magnitude))?;

        if !value.is_finite() || value < 0.0 {
            return Err(format!("radius must be non-negative, got '{}'", token));
        }

        Ok(Self(token.to_string()))
    }

    /// Wraps a token known to be valid, for the crate's built-in defaults.
    ///
    /// Callers must guarantee the token would pass [`parse`](Self::parse);
    /// the built-in set is covered by tests.
    pub(crate) fn from_static(s: &'static str) -> Self {
        Self(s.to_string())
    }

    /// The raw token, exactly as authored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RadiusValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
