//! Letter to styled glyph mapping.
//!
//! Only ASCII Latin letters are remapped. Everything else, including digits
//! and text that is already styled, passes through unchanged, so the output
//! always has exactly as many scalar values as the input.

use log::debug;

use crate::resolve::{resolve, Selector};
use crate::style::Style;

/// Maps a single character into `style`.
///
/// ```rust
/// use letterform::{map_char, Style};
///
/// assert_eq!(map_char('A', Style::BoldSerif), '\u{1D400}');
/// assert_eq!(map_char('C', Style::DoubleStruck), 'ℂ');
/// assert_eq!(map_char('7', Style::Monospace), '7');
/// ```
pub fn map_char(c: char, style: Style) -> char {
    let block = style.block();

    if let Some(target) = block.exception(c) {
        return target;
    }

    let code_point = match c {
        'A'..='Z' => block.upper_base + (c as u32 - 'A' as u32),
        'a'..='z' => block.lower_base + (c as u32 - 'a' as u32),
        _ => return c,
    };
    char::from_u32(code_point).unwrap_or(c)
}

/// Rewrites every ASCII letter of `text` in `style`.
///
/// ```rust
/// use letterform::{transform, Style};
///
/// assert_eq!(transform("Hello, World!", Style::Monospace), "𝙷𝚎𝚕𝚕𝚘, 𝚆𝚘𝚛𝚕𝚍!");
/// ```
pub fn transform(text: &str, style: Style) -> String {
    text.chars().map(|c| map_char(c, style)).collect()
}

/// Transforms `text` using a style named by its canonical id.
///
/// An id that names no style leaves the text unchanged. Use
/// [`transform_by_category`] to fall back to the default style instead.
///
/// ```rust
/// use letterform::transform_explicit;
///
/// assert_eq!(transform_explicit("abc", "fraktur"), "𝔞𝔟𝔠");
/// assert_eq!(transform_explicit("abc", "unknown"), "abc");
/// ```
pub fn transform_explicit(text: &str, style_id: &str) -> String {
    match style_id.parse::<Style>() {
        Ok(style) => transform(text, style),
        Err(err) => {
            debug!("{}, leaving text unchanged", err);
            text.to_string()
        }
    }
}

/// Resolves `selector` and transforms `text` with the result.
///
/// Selectors that match no rule use [`Style::BoldSansSerif`].
///
/// ```rust
/// use letterform::{transform_by_category, Selector};
///
/// assert_eq!(transform_by_category("abc", &Selector::from("serif")), "𝔞𝔟𝔠");
/// assert_eq!(transform_by_category("abc", &Selector::from("unknown")), "𝗮𝗯𝗰");
/// ```
pub fn transform_by_category(text: &str, selector: &Selector) -> String {
    transform(text, resolve(selector))
}
