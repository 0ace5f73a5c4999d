//! # Loom Theme - Typed Theme Configuration
//!
//! `loom-theme` models the theme customization document consumed by the
//! Loom utility-class CSS generator: a dark-mode activation strategy plus
//! token extensions for colors, font stacks, and a border-radius scale.
//!
//! The crate owns loading, validation, and merge semantics of the document.
//! It emits no CSS and scans no source files; those belong to the generator.
//!
//! ## Core Concepts
//!
//! - [`ThemeConfig`]: the loaded document — a dark-mode strategy and a set
//!   of token extensions
//! - [`DarkModeStrategy`]: how dark variants activate (`media`, `class`,
//!   or `selector`)
//! - [`ThemeExtensions`]: the three token maps, merged over the generator's
//!   defaults with add-or-override semantics
//! - [`HexColor`], [`RadiusValue`], [`FontStack`]: validated token types
//!
//! Documents are explicit values: loaders return a [`ThemeConfig`] to pass
//! around, and nothing is stashed in process-wide state.
//!
//! ## Quick Start
//!
//! ```rust
//! use loom_theme::{DarkModeStrategy, ThemeConfig};
//!
//! // The document authored in this crate
//! let config = ThemeConfig::load().unwrap();
//! assert_eq!(config.dark_mode(), DarkModeStrategy::Class);
//! assert_eq!(config.extend().colors()["primary"].as_str(), "#5211d4");
//! assert_eq!(config.extend().font_families()["mono"].primary(), "Space Mono");
//! ```
//!
//! ## Consumer-Authored Documents
//!
//! Documents load from YAML or JSON strings, or from files by extension:
//!
//! ```rust
//! use loom_theme::ThemeConfig;
//!
//! let config = ThemeConfig::from_yaml(r##"
//! darkMode: media
//! theme:
//!   extend:
//!     colors:
//!       accent: "#ff6b35"
//!     borderRadius:
//!       pill: 9999px
//! "##).unwrap();
//!
//! assert_eq!(config.extend().border_radii()["pill"].as_str(), "9999px");
//! ```
//!
//! Every token is validated at load time: hex colors must be `#` plus 3, 4,
//! 6, or 8 hex digits, radii must be CSS lengths, font stacks must be
//! non-empty, and unrecognized keys are rejected rather than dropped.
//!
//! ## The Effective Theme
//!
//! A document extends the generator's built-in token set rather than
//! replacing it. [`ThemeConfig::resolved_theme`] applies that contract:
//!
//! ```rust
//! use loom_theme::ThemeConfig;
//!
//! let theme = ThemeConfig::load().unwrap().resolved_theme();
//! // Declared in the document
//! assert_eq!(theme.colors()["primary"].as_str(), "#5211d4");
//! // Retained from the built-in defaults
//! assert_eq!(theme.colors()["white"].as_str(), "#ffffff");
//! ```
//!
//! ## Programmatic Construction
//!
//! For tests and embedding consumers, extensions build with a chainable API:
//!
//! ```rust
//! use loom_theme::{DarkModeStrategy, HexColor, ThemeConfig, ThemeExtensions};
//!
//! let extend = ThemeExtensions::new()
//!     .color("accent", HexColor::parse("#ff6b35").unwrap());
//! let config = ThemeConfig::new(DarkModeStrategy::Media, extend);
//! assert_eq!(config.extend().colors()["accent"].as_str(), "#ff6b35");
//! ```

mod color;
mod config;
mod dark_mode;
mod error;
mod extensions;
mod font;
mod length;

pub use color::HexColor;
pub use config::{default_theme, ThemeConfig, DOCUMENT_EXTENSIONS};
pub use dark_mode::DarkModeStrategy;
pub use error::ConfigError;
pub use extensions::ThemeExtensions;
pub use font::FontStack;
pub use length::RadiusValue;
