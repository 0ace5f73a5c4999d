//! Ordered font fallback stacks.
//!
//! Unlike colors and radii, order matters here: the first family is the
//! preferred one and later entries are fallbacks, in the order the browser
//! should try them. The stack is stored exactly as authored.

use serde::Serialize;

/// An ordered, non-empty list of font family names for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontStack(Vec<String>);

impl FontStack {
    /// Builds a stack from an ordered list of family names.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty: a role with no families
    /// cannot be rendered by any consumer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loom_theme::FontStack;
    ///
    /// let display = FontStack::new(["Space Grotesk", "sans-serif"]).unwrap();
    /// assert_eq!(display.primary(), "Space Grotesk");
    /// ```
    pub fn new<I, S>(families: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let families: Vec<String> = families.into_iter().map(Into::into).collect();
        if families.is_empty() {
            return Err("font stack must name at least one family".to_string());
        }
        Ok(Self(families))
    }

    /// Wraps a stack known to be non-empty, for the crate's built-in defaults.
    pub(crate) fn from_static(families: &'static [&'static str]) -> Self {
        Self(families.iter().map(|f| f.to_string()).collect())
    }

    /// The preferred family (the first entry).
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    /// All families in fallback order.
    pub fn families(&self) -> &[String] {
        &self.0
    }

    /// The number of families in the stack (always at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the constructor rejects empty stacks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Index<usize> for FontStack {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::fmt::Display for FontStack {
    /// Renders the stack as a CSS `font-family` value, quoting names that
    /// contain whitespace.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, family) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if family.contains(char::is_whitespace) {
                write!(f, "\"{}\"", family)?;
            } else {
                f.write_str(family)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_order() {
        let stack = FontStack::new(["Space Mono", "monospace"]).unwrap();
        assert_eq!(stack.families(), &["Space Mono", "monospace"]);
        assert_eq!(stack.primary(), "Space Mono");
        assert_eq!(&stack[1], "monospace");
    }

    #[test]
    fn test_new_rejects_empty() {
        let families: [&str; 0] = [];
        assert!(FontStack::new(families).is_err());
    }

    #[test]
    fn test_single_family_stack() {
        let stack = FontStack::new(["monospace"]).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.primary(), "monospace");
    }

    #[test]
    fn test_display_quotes_spaced_names() {
        let stack = FontStack::new(["Space Grotesk", "sans-serif"]).unwrap();
        assert_eq!(stack.to_string(), "\"Space Grotesk\", sans-serif");
    }

    #[test]
    fn test_serializes_as_sequence() {
        let stack = FontStack::new(["Space Mono", "monospace"]).unwrap();
        assert_eq!(
            serde_json::to_string(&stack).unwrap(),
            "[\"Space Mono\",\"monospace\"]"
        );
    }
}
