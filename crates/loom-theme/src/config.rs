//! The theme configuration document and its loaders.
//!
//! A document has two parts: a dark-mode strategy and a set of theme token
//! extensions. The crate ships its authored document embedded in the binary
//! ([`ThemeConfig::load`]); consumer-authored documents load from YAML or
//! JSON strings or from files.
//!
//! # Architecture
//!
//! Loading has two phases:
//!
//! 1. **Parse**: text → `serde_yaml::Value` (JSON input is bridged into the
//!    same value tree, so both formats share one walker)
//! 2. **Walk**: the value tree is checked node by node — recognized keys
//!    only, string shapes where strings are required, and every token
//!    validated as it is read
//!
//! A document that survives both phases is fully valid; there is no partial
//! or lazily-validated state. The returned value is immutable: consumers
//! receive it explicitly from a loader, never from process-wide state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use crate::color::HexColor;
use crate::dark_mode::DarkModeStrategy;
use crate::error::ConfigError;
use crate::extensions::ThemeExtensions;
use crate::font::FontStack;
use crate::length::RadiusValue;

/// The authored theme document, baked in at compile time.
const EMBEDDED_DOCUMENT: &str = include_str!("../themes/loom.yaml");

/// Recognized document file extensions in priority order.
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// The generator's built-in token set, which document extensions merge over.
static DEFAULT_THEME: Lazy<ThemeExtensions> = Lazy::new(|| {
    ThemeExtensions::new()
        .color("black", HexColor::from_static("#000000"))
        .color("white", HexColor::from_static("#ffffff"))
        .font("sans", FontStack::from_static(&["ui-sans-serif", "system-ui", "sans-serif"]))
        .font("serif", FontStack::from_static(&["ui-serif", "Georgia", "serif"]))
        .font("mono", FontStack::from_static(&["ui-monospace", "monospace"]))
        .radius("none", RadiusValue::from_static("0"))
        .radius("sm", RadiusValue::from_static("0.125rem"))
        .radius("DEFAULT", RadiusValue::from_static("0.25rem"))
        .radius("lg", RadiusValue::from_static("0.5rem"))
        .radius("full", RadiusValue::from_static("9999px"))
});

/// Returns the generator's built-in token set.
///
/// Documents extend this set rather than replace it; see
/// [`ThemeConfig::resolved_theme`].
pub fn default_theme() -> &'static ThemeExtensions {
    &DEFAULT_THEME
}

/// A loaded theme configuration document.
///
/// The document is immutable after loading. Loading the same source twice
/// yields structurally equal values.
///
/// # Example
///
/// ```rust
/// use loom_theme::{DarkModeStrategy, ThemeConfig};
///
/// let config = ThemeConfig::load().unwrap();
/// assert_eq!(config.dark_mode(), DarkModeStrategy::Class);
/// assert_eq!(config.extend().colors()["primary"].as_str(), "#5211d4");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// How the generator activates dark-mode variants.
    dark_mode: DarkModeStrategy,
    /// Token extensions merged over the generator's defaults.
    extend: ThemeExtensions,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
}

impl ThemeConfig {
    /// Creates a document from already-validated parts.
    pub fn new(dark_mode: DarkModeStrategy, extend: ThemeExtensions) -> Self {
        Self {
            dark_mode,
            extend,
            source_path: None,
        }
    }

    /// Loads the authored document embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] only if the embedded document is malformed,
    /// which the crate's own tests rule out.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_yaml(EMBEDDED_DOCUMENT)
    }

    /// Parses a document from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the content is not valid YAML, contains
    /// unrecognized keys, or carries invalid token values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loom_theme::ThemeConfig;
    ///
    /// let config = ThemeConfig::from_yaml(r##"
    /// darkMode: media
    /// theme:
    ///   extend:
    ///     colors:
    ///       accent: "#ff6b35"
    /// "##).unwrap();
    ///
    /// assert_eq!(config.extend().colors()["accent"].as_str(), "#ff6b35");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        parse_document(&root, None)
    }

    /// Parses a document from JSON content.
    ///
    /// The JSON value tree is bridged into the YAML walker, so both formats
    /// enforce identical shape and token rules.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let root: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        let root = serde_yaml::to_value(&root).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        parse_document(&root, None)
    }

    /// Loads a document from a file, choosing the format by extension.
    ///
    /// Recognized extensions are listed in [`DOCUMENT_EXTENSIONS`]. The
    /// source path is stored for [`refresh`](Self::refresh) support.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the extension is unrecognized, the file
    /// cannot be read, or its content fails to parse or validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = read_document(path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Reloads the document from its source file.
    ///
    /// Useful while iterating on a theme during development. Returns an
    /// error if the document was not loaded with [`from_file`](Self::from_file).
    pub fn refresh(&mut self) -> Result<(), ConfigError> {
        let path = self.source_path.clone().ok_or_else(|| ConfigError::Load {
            message: "cannot refresh: document has no source file".to_string(),
        })?;
        let reloaded = read_document(&path)?;
        self.dark_mode = reloaded.dark_mode;
        self.extend = reloaded.extend;
        Ok(())
    }

    /// Returns the dark-mode activation strategy.
    pub fn dark_mode(&self) -> DarkModeStrategy {
        self.dark_mode
    }

    /// Returns the declared token extensions.
    pub fn extend(&self) -> &ThemeExtensions {
        &self.extend
    }

    /// Returns the source file path, if this document was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Applies the consumer contract: merges this document's extensions over
    /// the generator's built-in token set and returns the effective theme.
    ///
    /// Keys declared here add to or override defaults; absent keys keep the
    /// default entry.
    pub fn resolved_theme(&self) -> ThemeExtensions {
        default_theme().clone().merge(self.extend.clone())
    }
}

/// Reads and parses a document file by extension.
fn read_document(path: &Path) -> Result<ThemeConfig, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let is_yaml = match extension.as_deref() {
        Some("yaml") | Some("yml") => true,
        Some("json") => false,
        _ => {
            return Err(ConfigError::Load {
                message: format!(
                    "unrecognized extension for {} (expected one of: {})",
                    path.display(),
                    DOCUMENT_EXTENSIONS.join(", ")
                ),
            })
        }
    };

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    let result = if is_yaml {
        ThemeConfig::from_yaml(&content)
    } else {
        ThemeConfig::from_json(&content)
    };

    // Attach the file path to any validation error for better messages.
    result.map_err(|e| with_path(e, path))
}

/// Fills in the source path on errors produced without one.
fn with_path(error: ConfigError, path: &Path) -> ConfigError {
    let p = Some(path.to_path_buf());
    match error {
        ConfigError::Parse { path: None, message } => ConfigError::Parse { path: p, message },
        ConfigError::InvalidColor {
            name,
            value,
            path: None,
        } => ConfigError::InvalidColor { name, value, path: p },
        ConfigError::InvalidLength {
            name,
            value,
            path: None,
        } => ConfigError::InvalidLength { name, value, path: p },
        ConfigError::EmptyFontStack { role, path: None } => {
            ConfigError::EmptyFontStack { role, path: p }
        }
        ConfigError::UnknownKey {
            section,
            key,
            path: None,
        } => ConfigError::UnknownKey { section, key, path: p },
        other => other,
    }
}

/// Walks a parsed value tree and builds a validated document.
fn parse_document(
    root: &serde_yaml::Value,
    path: Option<&Path>,
) -> Result<ThemeConfig, ConfigError> {
    // An empty document is valid: every key falls back to its default.
    if root.is_null() {
        return Ok(ThemeConfig::new(
            DarkModeStrategy::default(),
            ThemeExtensions::new(),
        ));
    }

    let mapping = required_mapping(root, "document", path)?;

    let mut dark_mode = DarkModeStrategy::default();
    let mut extend = ThemeExtensions::new();

    for (key, value) in mapping {
        let key = key_name(key, "document", path)?;
        match key {
            "darkMode" => {
                let s = value.as_str().ok_or_else(|| ConfigError::Parse {
                    path: path.map(Path::to_path_buf),
                    message: "darkMode must be a string".to_string(),
                })?;
                dark_mode = s.parse()?;
            }
            "theme" => {
                extend = parse_theme_section(value, path)?;
            }
            other => {
                return Err(unknown_key("document", other, path));
            }
        }
    }

    Ok(ThemeConfig::new(dark_mode, extend))
}

/// Parses the `theme:` section, which holds only the `extend:` sub-mapping.
fn parse_theme_section(
    value: &serde_yaml::Value,
    path: Option<&Path>,
) -> Result<ThemeExtensions, ConfigError> {
    let mapping = required_mapping(value, "theme", path)?;
    let mut extend = ThemeExtensions::new();

    for (key, value) in mapping {
        let key = key_name(key, "theme", path)?;
        match key {
            "extend" => {
                extend = parse_extend_section(value, path)?;
            }
            other => {
                return Err(unknown_key("theme", other, path));
            }
        }
    }

    Ok(extend)
}

/// Parses the three recognized token maps under `theme.extend:`.
fn parse_extend_section(
    value: &serde_yaml::Value,
    path: Option<&Path>,
) -> Result<ThemeExtensions, ConfigError> {
    let mapping = required_mapping(value, "theme.extend", path)?;
    let mut extend = ThemeExtensions::new();

    for (key, value) in mapping {
        let key = key_name(key, "theme.extend", path)?;
        match key {
            "colors" => {
                for (name, color) in parse_colors(value, path)? {
                    extend = extend.color(name, color);
                }
            }
            "fontFamily" => {
                for (role, stack) in parse_font_families(value, path)? {
                    extend = extend.font(role, stack);
                }
            }
            "borderRadius" => {
                for (name, radius) in parse_border_radii(value, path)? {
                    extend = extend.radius(name, radius);
                }
            }
            other => {
                return Err(unknown_key("theme.extend", other, path));
            }
        }
    }

    Ok(extend)
}

fn parse_colors(
    value: &serde_yaml::Value,
    path: Option<&Path>,
) -> Result<HashMap<String, HexColor>, ConfigError> {
    let mapping = required_mapping(value, "theme.extend.colors", path)?;
    let mut colors = HashMap::new();

    for (key, value) in mapping {
        let name = key_name(key, "theme.extend.colors", path)?;
        let raw = value.as_str().ok_or_else(|| ConfigError::InvalidColor {
            name: name.to_string(),
            value: describe(value),
            path: path.map(Path::to_path_buf),
        })?;
        let color = HexColor::parse(raw).map_err(|_| ConfigError::InvalidColor {
            name: name.to_string(),
            value: raw.to_string(),
            path: path.map(Path::to_path_buf),
        })?;
        colors.insert(name.to_string(), color);
    }

    Ok(colors)
}

fn parse_font_families(
    value: &serde_yaml::Value,
    path: Option<&Path>,
) -> Result<HashMap<String, FontStack>, ConfigError> {
    let mapping = required_mapping(value, "theme.extend.fontFamily", path)?;
    let mut fonts = HashMap::new();

    for (key, value) in mapping {
        let role = key_name(key, "theme.extend.fontFamily", path)?;
        let stack = parse_font_stack(role, value, path)?;
        fonts.insert(role.to_string(), stack);
    }

    Ok(fonts)
}

/// Parses one font stack: a sequence of family names, or a bare string as
/// shorthand for a single-family stack.
fn parse_font_stack(
    role: &str,
    value: &serde_yaml::Value,
    path: Option<&Path>,
) -> Result<FontStack, ConfigError> {
    let families: Vec<String> = match value {
        serde_yaml::Value::String(s) => vec![s.clone()],
        serde_yaml::Value::Sequence(seq) => {
            let mut families = Vec::with_capacity(seq.len());
            for entry in seq {
                let family = entry.as_str().ok_or_else(|| ConfigError::Parse {
                    path: path.map(Path::to_path_buf),
                    message: format!(
                        "font family for role '{}' must be a string, got {}",
                        role,
                        describe(entry)
                    ),
                })?;
                families.push(family.to_string());
            }
            families
        }
        other => {
            return Err(ConfigError::Parse {
                path: path.map(Path::to_path_buf),
                message: format!(
                    "font role '{}' must be a string or a sequence, got {}",
                    role,
                    describe(other)
                ),
            })
        }
    };

    FontStack::new(families).map_err(|_| ConfigError::EmptyFontStack {
        role: role.to_string(),
        path: path.map(Path::to_path_buf),
    })
}

fn parse_border_radii(
    value: &serde_yaml::Value,
    path: Option<&Path>,
) -> Result<HashMap<String, RadiusValue>, ConfigError> {
    let mapping = required_mapping(value, "theme.extend.borderRadius", path)?;
    let mut radii = HashMap::new();

    for (key, value) in mapping {
        let name = key_name(key, "theme.extend.borderRadius", path)?;
        let raw = value.as_str().ok_or_else(|| ConfigError::InvalidLength {
            name: name.to_string(),
            value: describe(value),
            path: path.map(Path::to_path_buf),
        })?;
        let radius = RadiusValue::parse(raw).map_err(|_| ConfigError::InvalidLength {
            name: name.to_string(),
            value: raw.to_string(),
            path: path.map(Path::to_path_buf),
        })?;
        radii.insert(name.to_string(), radius);
    }

    Ok(radii)
}

fn required_mapping<'a>(
    value: &'a serde_yaml::Value,
    section: &str,
    path: Option<&Path>,
) -> Result<&'a serde_yaml::Mapping, ConfigError> {
    value.as_mapping().ok_or_else(|| ConfigError::Parse {
        path: path.map(Path::to_path_buf),
        message: format!("{} must be a mapping, got {}", section, describe(value)),
    })
}

fn key_name<'a>(
    key: &'a serde_yaml::Value,
    section: &str,
    path: Option<&Path>,
) -> Result<&'a str, ConfigError> {
    key.as_str().ok_or_else(|| ConfigError::Parse {
        path: path.map(Path::to_path_buf),
        message: format!("keys in {} must be strings, got {}", section, describe(key)),
    })
}

fn unknown_key(section: &str, key: &str, path: Option<&Path>) -> ConfigError {
    ConfigError::UnknownKey {
        section: section.to_string(),
        key: key.to_string(),
        path: path.map(Path::to_path_buf),
    }
}

/// A short human description of a value's type, for error messages.
fn describe(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => format!("boolean '{}'", b),
        serde_yaml::Value::Number(n) => format!("number '{}'", n),
        serde_yaml::Value::String(s) => format!("string '{}'", s),
        serde_yaml::Value::Sequence(_) => "a sequence".to_string(),
        serde_yaml::Value::Mapping(_) => "a mapping".to_string(),
        serde_yaml::Value::Tagged(_) => "a tagged value".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Embedded document
    // =========================================================================

    #[test]
    fn test_load_embedded_document() {
        let config = ThemeConfig::load().unwrap();
        assert_eq!(config.dark_mode(), DarkModeStrategy::Class);
        assert_eq!(config.extend().len(), 9);
        assert_eq!(config.source_path(), None);
    }

    #[test]
    fn test_load_is_deterministic() {
        assert_eq!(ThemeConfig::load().unwrap(), ThemeConfig::load().unwrap());
    }

    #[test]
    fn test_embedded_colors() {
        let config = ThemeConfig::load().unwrap();
        let colors = config.extend().colors();
        assert_eq!(colors["primary"].as_str(), "#5211d4");
        assert_eq!(colors["background-light"].as_str(), "#f6f6f8");
        assert_eq!(colors["background-dark"].as_str(), "#0a0a0c");
    }

    #[test]
    fn test_embedded_fonts_preserve_order() {
        let config = ThemeConfig::load().unwrap();
        let fonts = config.extend().font_families();
        assert_eq!(
            fonts["display"].families(),
            &["Space Grotesk", "sans-serif"]
        );
        assert_eq!(fonts["mono"].families(), &["Space Mono", "monospace"]);
    }

    #[test]
    fn test_embedded_radii() {
        let config = ThemeConfig::load().unwrap();
        let radii = config.extend().border_radii();
        assert_eq!(radii["DEFAULT"].as_str(), "0.25rem");
        assert_eq!(radii["lg"].as_str(), "0.5rem");
        assert_eq!(radii["xl"].as_str(), "0.75rem");
        assert_eq!(radii["full"].as_str(), "9999px");
    }

    // =========================================================================
    // Built-in default theme
    // =========================================================================

    #[test]
    fn test_default_theme_tokens_validate() {
        // The default set is built through the unchecked constructors, so
        // every token must reparse cleanly.
        let defaults = default_theme();
        for (name, color) in defaults.colors() {
            assert!(HexColor::parse(color.as_str()).is_ok(), "color {}", name);
        }
        for (name, radius) in defaults.border_radii() {
            assert!(
                RadiusValue::parse(radius.as_str()).is_ok(),
                "radius {}",
                name
            );
        }
        for (role, stack) in defaults.font_families() {
            assert!(!stack.is_empty(), "font role {}", role);
        }
    }

    #[test]
    fn test_resolved_theme_applies_extension_semantics() {
        let config = ThemeConfig::load().unwrap();
        let theme = config.resolved_theme();

        // Declared here: overrides nothing, adds new color
        assert_eq!(theme.colors()["primary"].as_str(), "#5211d4");
        // Default retained: not mentioned in the document
        assert_eq!(theme.colors()["white"].as_str(), "#ffffff");
        assert_eq!(theme.border_radii()["sm"].as_str(), "0.125rem");
        // Declared here: overrides the default mono stack
        assert_eq!(theme.font_families()["mono"].primary(), "Space Mono");
        // Same value in both; document wins, result unchanged
        assert_eq!(theme.border_radii()["full"].as_str(), "9999px");
    }

    // =========================================================================
    // YAML parsing
    // =========================================================================

    #[test]
    fn test_from_yaml_defaults_when_keys_absent() {
        let config = ThemeConfig::from_yaml("{}").unwrap();
        assert_eq!(config.dark_mode(), DarkModeStrategy::Media);
        assert!(config.extend().is_empty());
    }

    #[test]
    fn test_from_yaml_empty_document() {
        let config = ThemeConfig::from_yaml("").unwrap();
        assert_eq!(config.dark_mode(), DarkModeStrategy::Media);
        assert!(config.extend().is_empty());
    }

    #[test]
    fn test_from_yaml_font_string_shorthand() {
        let config = ThemeConfig::from_yaml(
            r#"
            theme:
              extend:
                fontFamily:
                  mono: monospace
            "#,
        )
        .unwrap();
        assert_eq!(
            config.extend().font_families()["mono"].families(),
            &["monospace"]
        );
    }

    #[test]
    fn test_from_yaml_invalid_syntax() {
        let result = ThemeConfig::from_yaml("darkMode: [class");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_from_yaml_non_mapping_root() {
        let result = ThemeConfig::from_yaml("- class");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_from_yaml_unknown_strategy() {
        let result = ThemeConfig::from_yaml("darkMode: auto");
        assert!(matches!(
            result,
            Err(ConfigError::UnknownStrategy { value }) if value == "auto"
        ));
    }

    #[test]
    fn test_from_yaml_non_string_dark_mode() {
        let result = ThemeConfig::from_yaml("darkMode: true");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_from_yaml_unknown_top_level_key() {
        let result = ThemeConfig::from_yaml("content: ['src/**/*.html']");
        assert!(matches!(
            result,
            Err(ConfigError::UnknownKey { section, key, .. })
                if section == "document" && key == "content"
        ));
    }

    #[test]
    fn test_from_yaml_unknown_extend_key() {
        let result = ThemeConfig::from_yaml(
            r#"
            theme:
              extend:
                spacing:
                  sm: 1rem
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::UnknownKey { section, key, .. })
                if section == "theme.extend" && key == "spacing"
        ));
    }

    #[test]
    fn test_from_yaml_invalid_color() {
        let result = ThemeConfig::from_yaml(
            r#"
            theme:
              extend:
                colors:
                  primary: blurple
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidColor { name, value, .. })
                if name == "primary" && value == "blurple"
        ));
    }

    #[test]
    fn test_from_yaml_invalid_radius() {
        let result = ThemeConfig::from_yaml(
            r#"
            theme:
              extend:
                borderRadius:
                  lg: round
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLength { name, value, .. })
                if name == "lg" && value == "round"
        ));
    }

    #[test]
    fn test_from_yaml_empty_font_stack() {
        let result = ThemeConfig::from_yaml(
            r#"
            theme:
              extend:
                fontFamily:
                  display: []
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::EmptyFontStack { role, .. }) if role == "display"
        ));
    }

    #[test]
    fn test_from_yaml_non_string_font_entry() {
        let result = ThemeConfig::from_yaml(
            r#"
            theme:
              extend:
                fontFamily:
                  display: [1, 2]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    // =========================================================================
    // JSON parsing
    // =========================================================================

    #[test]
    fn test_from_json_matches_yaml_semantics() {
        let json = r##"{
            "darkMode": "class",
            "theme": {
                "extend": {
                    "colors": { "primary": "#5211d4" },
                    "fontFamily": { "mono": ["Space Mono", "monospace"] },
                    "borderRadius": { "full": "9999px" }
                }
            }
        }"##;
        let config = ThemeConfig::from_json(json).unwrap();
        assert_eq!(config.dark_mode(), DarkModeStrategy::Class);
        assert_eq!(config.extend().colors()["primary"].as_str(), "#5211d4");
        assert_eq!(
            config.extend().font_families()["mono"].primary(),
            "Space Mono"
        );
    }

    #[test]
    fn test_from_json_invalid_syntax() {
        let result = ThemeConfig::from_json("{ darkMode: class }");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_from_json_validates_tokens() {
        let json = r#"{ "theme": { "extend": { "colors": { "primary": "nope" } } } }"#;
        let result = ThemeConfig::from_json(json);
        assert!(matches!(result, Err(ConfigError::InvalidColor { .. })));
    }
}
