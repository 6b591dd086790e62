//! Recovering plain letters from styled text.
//!
//! The reverse index is built from [`map_char`] itself, so it recognizes
//! exactly the glyphs this crate emits: the reserved holes of the
//! Mathematical Alphanumeric Symbols block are never matched, while their
//! Letterlike Symbols replacements (`ℂ`, `ℭ`, ...) are.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::glyph::map_char;
use crate::style::Style;

static STYLED_LETTERS: Lazy<HashMap<char, (Style, char)>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(Style::ALL.len() * 52);
    for style in Style::ALL {
        for letter in ('A'..='Z').chain('a'..='z') {
            index.insert(map_char(letter, style), (style, letter));
        }
    }
    index
});

/// Returns the style and ASCII letter behind a styled glyph.
///
/// ```rust
/// use letterform::{styled_letter, Style};
///
/// assert_eq!(styled_letter('ℂ'), Some((Style::DoubleStruck, 'C')));
/// assert_eq!(styled_letter('C'), None);
/// ```
pub fn styled_letter(c: char) -> Option<(Style, char)> {
    STYLED_LETTERS.get(&c).copied()
}

/// Replaces every styled glyph in `text` with its ASCII letter.
///
/// Styles may be mixed within one string; anything unrecognized is kept.
///
/// ```rust
/// use letterform::to_plain;
///
/// assert_eq!(to_plain("𝔄𝔅ℭ and 𝙼𝚘𝚗𝚘 123"), "ABC and Mono 123");
/// ```
pub fn to_plain(text: &str) -> String {
    text.chars()
        .map(|c| styled_letter(c).map_or(c, |(_, letter)| letter))
        .collect()
}

/// Returns the style of the first styled glyph in `text`.
pub fn detect_style(text: &str) -> Option<Style> {
    text.chars()
        .find_map(styled_letter)
        .map(|(style, _)| style)
}
