//! Selector input for style resolution.

use serde::{Deserialize, Serialize};

/// A font category with an optional family name, e.g. `serif` / `"Lora"`.
///
/// Categories follow the Google Fonts vocabulary (`serif`, `sans-serif`,
/// `display`, `handwriting`, `monospace`), plus the CSS generic `cursive`
/// and `script`. A missing category deserializes as empty, which only the
/// family rule can match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl CategoryDescriptor {
    /// Creates a descriptor with no family hint.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            family: None,
        }
    }

    /// Adds a family hint, returning the updated descriptor for chaining.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

/// What the caller knows about the wanted style.
///
/// Either a bare token, which may be a canonical style id or a category
/// name, or a full category/family descriptor.
///
/// Deserializes from either a JSON string or an object:
///
/// ```rust
/// use letterform::{CategoryDescriptor, Selector};
///
/// let raw: Selector = serde_json::from_str(r#""fraktur""#).unwrap();
/// assert_eq!(raw, Selector::from("fraktur"));
///
/// let described: Selector =
///     serde_json::from_str(r#"{"category": "sans-serif", "family": "Roboto Mono"}"#).unwrap();
/// assert_eq!(
///     described,
///     Selector::from(CategoryDescriptor::new("sans-serif").with_family("Roboto Mono")),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    /// A bare style id or category name.
    Raw(String),
    /// A category with an optional family hint.
    Category(CategoryDescriptor),
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::Raw(raw.to_string())
    }
}

impl From<String> for Selector {
    fn from(raw: String) -> Self {
        Selector::Raw(raw)
    }
}

impl From<CategoryDescriptor> for Selector {
    fn from(descriptor: CategoryDescriptor) -> Self {
        Selector::Category(descriptor)
    }
}
