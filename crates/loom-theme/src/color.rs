//! Hex color token validation.
//!
//! Color tokens are carried as strings: the generator substitutes them into
//! emitted rules verbatim, so this crate validates the hex shape without
//! modelling a color space. Accepted forms are `#` followed by 3, 4, 6, or
//! 8 hex digits (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).

use serde::Serialize;

/// A validated hex color token, e.g. `#5211d4`.
///
/// The original casing is preserved; comparison is on the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexColor(String);

impl HexColor {
    /// Parses a hex color token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loom_theme::HexColor;
    ///
    /// let primary = HexColor::parse("#5211d4").unwrap();
    /// assert_eq!(primary.as_str(), "#5211d4");
    /// assert!(HexColor::parse("rebeccapurple").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        let token = s.trim();
        let digits = token
            .strip_prefix('#')
            .ok_or_else(|| format!("'{}' does not start with '#'", s))?;

        match digits.len() {
            3 | 4 | 6 | 8 => {}
            n => {
                return Err(format!(
                    "hex color must have 3, 4, 6 or 8 digits, got {}",
                    n
                ))
            }
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(format!("'{}' is not a hex digit", bad));
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

    /// Decodes the red, green, and blue channels.
    ///
    /// Short forms expand per CSS rules (`#f80` is `#ff8800`); an alpha
    /// digit pair, if present, is ignored.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = &self.0[1..];

        fn nibble(digits: &str, i: usize) -> u8 {
            digits
                .as_bytes()
                .get(i)
                .map(|b| (*b as char).to_digit(16).unwrap_or(0) as u8)
                .unwrap_or(0)
        }

        match digits.len() {
            // #rgb / #rgba: each digit doubles
            3 | 4 => (
                nibble(digits, 0) * 17,
                nibble(digits, 1) * 17,
                nibble(digits, 2) * 17,
            ),
            // #rrggbb / #rrggbbaa
            _ => (
                nibble(digits, 0) * 16 + nibble(digits, 1),
                nibble(digits, 2) * 16 + nibble(digits, 3),
                nibble(digits, 4) * 16 + nibble(digits, 5),
            ),
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
