//! Per-style code point tables.
//!
//! Each style maps `A–Z` and `a–z` onto a contiguous run of 26 code points in
//! the Mathematical Alphanumeric Symbols block (U+1D400–U+1D7FF). Some runs
//! have holes where the letter was already encoded in the Letterlike Symbols
//! block (U+2100–U+214F); those letters are listed as exceptions.
//!
//! Data from <https://www.unicode.org/charts/PDF/U1D400.pdf>.

use super::Style;

/// Code point layout of one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBlock {
    /// Scalar value of the styled capital `A`.
    pub upper_base: u32,
    /// Scalar value of the styled small `a`.
    pub lower_base: u32,
    /// Letters whose styled glyph lives outside the contiguous run.
    pub exceptions: &'static [(char, char)],
}

impl StyleBlock {
    /// Returns the exception target for `c`, if this style has one.
    pub fn exception(&self, c: char) -> Option<char> {
        self.exceptions
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|(_, target)| *target)
    }
}

const FRAKTUR_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{212D}'), // BLACK-LETTER CAPITAL C
    ('H', '\u{210C}'), // BLACK-LETTER CAPITAL H
    ('I', '\u{2111}'), // BLACK-LETTER CAPITAL I
    ('R', '\u{211C}'), // BLACK-LETTER CAPITAL R
    ('Z', '\u{2128}'), // BLACK-LETTER CAPITAL Z
];

const DOUBLE_STRUCK_EXCEPTIONS: &[(char, char)] = &[
    ('C', '\u{2102}'), // DOUBLE-STRUCK CAPITAL C
    ('H', '\u{210D}'), // DOUBLE-STRUCK CAPITAL H
    ('N', '\u{2115}'), // DOUBLE-STRUCK CAPITAL N
    ('P', '\u{2119}'), // DOUBLE-STRUCK CAPITAL P
    ('Q', '\u{211A}'), // DOUBLE-STRUCK CAPITAL Q
    ('R', '\u{211D}'), // DOUBLE-STRUCK CAPITAL R
    ('Z', '\u{2124}'), // DOUBLE-STRUCK CAPITAL Z
];

/// Blocks indexed in [`Style::ALL`] order.
const STYLE_BLOCKS: [StyleBlock; 6] = [
    // fraktur
    StyleBlock {
        upper_base: 0x1D504,
        lower_base: 0x1D51E,
        exceptions: FRAKTUR_EXCEPTIONS,
    },
    // bold_script
    StyleBlock {
        upper_base: 0x1D4D0,
        lower_base: 0x1D4EA,
        exceptions: &[],
    },
    // double_struck
    StyleBlock {
        upper_base: 0x1D538,
        lower_base: 0x1D552,
        exceptions: DOUBLE_STRUCK_EXCEPTIONS,
    },
    // monospace
    StyleBlock {
        upper_base: 0x1D670,
        lower_base: 0x1D68A,
        exceptions: &[],
    },
    // bold_sans_serif
    StyleBlock {
        upper_base: 0x1D5D4,
        lower_base: 0x1D5EE,
        exceptions: &[],
    },
    // bold_serif
    StyleBlock {
        upper_base: 0x1D400,
        lower_base: 0x1D41A,
        exceptions: &[],
    },
];

impl Style {
    /// Returns the code point layout for this style.
    pub fn block(self) -> &'static StyleBlock {
        &STYLE_BLOCKS[self as usize]
    }
}
