//! # Letterform - fancy text from Unicode letter styles
//!
//! Letterform rewrites ASCII Latin letters into the styled alphabets of the
//! Unicode Mathematical Alphanumeric Symbols block, giving "fonts" that
//! survive anywhere plain text does: profile bios, chat messages, titles.
//!
//! ```rust
//! use letterform::{transform, Style};
//!
//! assert_eq!(transform("ABCabc", Style::Fraktur), "𝔄𝔅ℭ𝔞𝔟𝔠");
//! assert_eq!(transform("ABCabc123", Style::Monospace), "𝙰𝙱𝙲𝚊𝚋𝚌123");
//! ```
//!
//! ## Styles
//!
//! | Style | Sample |
//! |-------|--------|
//! | [`Style::Fraktur`] | 𝔉𝔯𝔞𝔨𝔱𝔲𝔯 |
//! | [`Style::BoldScript`] | 𝓢𝓬𝓻𝓲𝓹𝓽 |
//! | [`Style::DoubleStruck`] | 𝔻𝕠𝕦𝕓𝕝𝕖 |
//! | [`Style::Monospace`] | 𝙼𝚘𝚗𝚘 |
//! | [`Style::BoldSansSerif`] | 𝗕𝗼𝗹𝗱 |
//! | [`Style::BoldSerif`] | 𝐁𝐨𝐥𝐝 |
//!
//! Only `A–Z` and `a–z` are rewritten. Digits, punctuation, whitespace and
//! non-Latin text pass through untouched, and every input scalar value
//! yields exactly one output scalar value.
//!
//! ## Choosing a style
//!
//! Callers that know the style name use [`transform_explicit`]; an unknown
//! name leaves the text as it was. Callers that only know the font they are
//! imitating pass a [`Selector`] to [`transform_by_category`], which maps the
//! font category (and family name) to a style and falls back to
//! [`Style::BoldSansSerif`]:
//!
//! ```rust
//! use letterform::{transform_by_category, transform_explicit, CategoryDescriptor, Selector};
//!
//! let lora = Selector::from(CategoryDescriptor::new("serif").with_family("Lora"));
//! assert_eq!(transform_by_category("Lora", &lora), "𝔏𝔬𝔯𝔞");
//!
//! assert_eq!(transform_explicit("abc", "no_such_style"), "abc");
//! assert_eq!(transform_by_category("abc", &Selector::from("no_such_style")), "𝗮𝗯𝗰");
//! ```
//!
//! ## Going back
//!
//! [`to_plain`] maps styled glyphs back to ASCII, and [`detect_style`]
//! reports which style a string uses.
//!
//! ## Templates
//!
//! [`register_filters`] adds `fancy`, `fancy_style` and `plain` filters to a
//! MiniJinja environment.

mod filters;
mod glyph;
mod plain;
mod resolve;
mod style;

pub use filters::register_filters;
pub use glyph::{map_char, transform, transform_by_category, transform_explicit};
pub use plain::{detect_style, styled_letter, to_plain};
pub use resolve::{resolve, resolve_category, CategoryDescriptor, Selector};
pub use style::{ParseStyleError, Style, StyleBlock};
