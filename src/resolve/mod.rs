//! Selector to style resolution.
//!
//! This module provides:
//!
//! - [`Selector`]: a bare style/category token or a category descriptor
//! - [`CategoryDescriptor`]: a font category with an optional family hint
//! - [`resolve`]: turns any selector into exactly one [`Style`]
//!
//! # Resolution Rules
//!
//! Rules are tried in order and the first match wins:
//!
//! | Priority | Condition | Style |
//! |----------|-----------|-------|
//! | 1 | bare token is a style id (any case) | that style |
//! | 2 | category is `monospace`, or family contains `mono` or `code` | `monospace` |
//! | 3 | category is `cursive`, `script` or `handwriting` | `bold_script` |
//! | 4 | category is `serif` | `fraktur` |
//! | 5 | category is `sans-serif` | `double_struck` |
//! | 6 | anything else | `bold_sans_serif` |
//!
//! A bare token that is not a style id is treated as a category with no
//! family. Category and family are compared lower-cased.
//!
//! The family check in rule 2 runs before any category rule, so a family
//! such as `"Fira Code"` forces `monospace` even under a `serif` category.

mod selector;

pub use selector::{CategoryDescriptor, Selector};

use log::{debug, trace};

use crate::style::Style;

/// Resolves a selector to a style. Never fails.
///
/// # Example
///
/// ```rust
/// use letterform::{resolve, CategoryDescriptor, Selector, Style};
///
/// assert_eq!(resolve(&Selector::from("bold_serif")), Style::BoldSerif);
/// assert_eq!(resolve(&Selector::from("serif")), Style::Fraktur);
///
/// let roboto_mono = CategoryDescriptor::new("sans-serif").with_family("Roboto Mono");
/// assert_eq!(resolve(&roboto_mono.into()), Style::Monospace);
/// ```
pub fn resolve(selector: &Selector) -> Style {
    let style = match selector {
        Selector::Raw(token) => {
            Style::from_id(token).unwrap_or_else(|| resolve_category(token, None))
        }
        Selector::Category(descriptor) => {
            resolve_category(&descriptor.category, descriptor.family.as_deref())
        }
    };
    trace!("resolved {:?} to {}", selector, style);
    style
}

/// Applies the category/family rules, skipping the explicit style id check.
pub fn resolve_category(category: &str, family: Option<&str>) -> Style {
    let category = category.to_lowercase();
    let family = family.map(str::to_lowercase).unwrap_or_default();

    if category == "monospace" || family.contains("mono") || family.contains("code") {
        return Style::Monospace;
    }

    match category.as_str() {
        "cursive" | "script" | "handwriting" => Style::BoldScript,
        "serif" => Style::Fraktur,
        "sans-serif" => Style::DoubleStruck,
        _ => {
            debug!(
                "no decorative style for category '{}', using {}",
                category,
                Style::default()
            );
            Style::default()
        }
    }
}
