//! The `theme.extend` section: token maps merged over the generator's defaults.

use std::collections::HashMap;

use serde::Serialize;

use crate::color::HexColor;
use crate::font::FontStack;
use crate::length::RadiusValue;

/// Theme token extensions: colors, font stacks, and a border-radius scale.
///
/// Extension semantics are additive: when applied to a base token set (see
/// [`ThemeConfig::resolved_theme`](crate::ThemeConfig::resolved_theme)),
/// entries here add to or override the base, and absent keys keep the base
/// entry. Within each map keys are unique; key order carries no meaning.
///
/// # Example: Programmatic Construction
///
/// ```rust
/// use loom_theme::{FontStack, HexColor, RadiusValue, ThemeExtensions};
///
/// let extend = ThemeExtensions::new()
///     .color("primary", HexColor::parse("#5211d4").unwrap())
///     .font("mono", FontStack::new(["Space Mono", "monospace"]).unwrap())
///     .radius("full", RadiusValue::parse("9999px").unwrap());
///
/// assert_eq!(extend.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeExtensions {
    /// Semantic color name to hex value.
    colors: HashMap<String, HexColor>,

    /// Font role to ordered fallback stack.
    #[serde(rename = "fontFamily")]
    font_families: HashMap<String, FontStack>,

    /// Radius token name to CSS length.
    #[serde(rename = "borderRadius")]
    border_radii: HashMap<String, RadiusValue>,
}

impl ThemeExtensions {
    /// Creates an empty extension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color token, returning `self` for chaining.
    pub fn color(mut self, name: impl Into<String>, value: HexColor) -> Self {
        self.colors.insert(name.into(), value);
        self
    }

    /// Adds a font stack for a role, returning `self` for chaining.
    pub fn font(mut self, role: impl Into<String>, stack: FontStack) -> Self {
        self.font_families.insert(role.into(), stack);
        self
    }

    /// Adds a border-radius token, returning `self` for chaining.
    pub fn radius(mut self, name: impl Into<String>, value: RadiusValue) -> Self {
        self.border_radii.insert(name.into(), value);
        self
    }

    /// Returns the color token map.
    pub fn colors(&self) -> &HashMap<String, HexColor> {
        &self.colors
    }

    /// Returns the font stack map.
    pub fn font_families(&self) -> &HashMap<String, FontStack> {
        &self.font_families
    }

    /// Returns the border-radius map.
    pub fn border_radii(&self) -> &HashMap<String, RadiusValue> {
        &self.border_radii
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.font_families.is_empty() && self.border_radii.is_empty()
    }

    /// Returns the total number of tokens across all three maps.
    pub fn len(&self) -> usize {
        self.colors.len() + self.font_families.len() + self.border_radii.len()
    }

    /// Merges another extension set into this one.
    ///
    /// Tokens from `other` take precedence. This is the extension semantics
    /// the generator applies when layering a document over its defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loom_theme::{HexColor, ThemeExtensions};
    ///
    /// let base = ThemeExtensions::new()
    ///     .color("primary", HexColor::parse("#000000").unwrap());
    /// let user = ThemeExtensions::new()
    ///     .color("primary", HexColor::parse("#5211d4").unwrap());
    ///
    /// let merged = base.merge(user);
    /// assert_eq!(merged.colors()["primary"].as_str(), "#5211d4");
    /// ```
    pub fn merge(mut self, other: ThemeExtensions) -> Self {
        self.colors.extend(other.colors);
        self.font_families.extend(other.font_families);
        self.border_radii.extend(other.border_radii);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    fn radius(s: &str) -> RadiusValue {
        RadiusValue::parse(s).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let extend = ThemeExtensions::new();
        assert!(extend.is_empty());
        assert_eq!(extend.len(), 0);
    }

    #[test]
    fn test_builder_populates_all_maps() {
        let extend = ThemeExtensions::new()
            .color("primary", hex("#5211d4"))
            .font("mono", FontStack::new(["Space Mono", "monospace"]).unwrap())
            .radius("lg", radius("0.5rem"));

        assert_eq!(extend.len(), 3);
        assert_eq!(extend.colors()["primary"].as_str(), "#5211d4");
        assert_eq!(extend.font_families()["mono"].primary(), "Space Mono");
        assert_eq!(extend.border_radii()["lg"].as_str(), "0.5rem");
    }

    #[test]
    fn test_builder_last_insert_wins_per_key() {
        let extend = ThemeExtensions::new()
            .color("primary", hex("#000000"))
            .color("primary", hex("#5211d4"));

        assert_eq!(extend.len(), 1);
        assert_eq!(extend.colors()["primary"].as_str(), "#5211d4");
    }

    #[test]
    fn test_merge_overrides_and_keeps() {
        let base = ThemeExtensions::new()
            .color("primary", hex("#000000"))
            .color("background", hex("#ffffff"))
            .radius("DEFAULT", radius("0.25rem"));

        let user = ThemeExtensions::new()
            .color("primary", hex("#5211d4"))
            .radius("full", radius("9999px"));

        let merged = base.merge(user);

        // Overridden by user
        assert_eq!(merged.colors()["primary"].as_str(), "#5211d4");
        // Kept from base
        assert_eq!(merged.colors()["background"].as_str(), "#ffffff");
        assert_eq!(merged.border_radii()["DEFAULT"].as_str(), "0.25rem");
        // Added by user
        assert_eq!(merged.border_radii()["full"].as_str(), "9999px");
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let base = ThemeExtensions::new().color("primary", hex("#5211d4"));
        let merged = base.clone().merge(ThemeExtensions::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_serializes_with_wire_key_names() {
        let extend = ThemeExtensions::new()
            .font("mono", FontStack::new(["monospace"]).unwrap())
            .radius("full", radius("9999px"));

        let json = serde_json::to_string(&extend).unwrap();
        assert!(json.contains("\"fontFamily\""));
        assert!(json.contains("\"borderRadius\""));
    }
}
