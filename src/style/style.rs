//! The closed set of decorative styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseStyleError;

/// A decorative letter style.
///
/// Each variant selects one run of styled Latin letters in the Unicode
/// Mathematical Alphanumeric Symbols block. The canonical id of a style
/// (`"fraktur"`, `"bold_script"`, ...) is what [`Style::as_str`] returns and
/// what [`FromStr`] accepts, ignoring ASCII case.
///
/// # Example
///
/// ```rust
/// use letterform::Style;
///
/// let style: Style = "Double_Struck".parse().unwrap();
/// assert_eq!(style, Style::DoubleStruck);
/// assert_eq!(style.to_string(), "double_struck");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Style {
    /// Blackletter, e.g. `𝔉𝔯𝔞𝔨𝔱𝔲𝔯`.
    Fraktur,
    /// Bold script, e.g. `𝓢𝓬𝓻𝓲𝓹𝓽`.
    BoldScript,
    /// Hollow letters, e.g. `𝔻𝕠𝕦𝕓𝕝𝕖`.
    DoubleStruck,
    /// Typewriter letters, e.g. `𝙼𝚘𝚗𝚘`.
    Monospace,
    /// Bold sans-serif, e.g. `𝗕𝗼𝗹𝗱`. Used whenever nothing more specific matches.
    #[default]
    BoldSansSerif,
    /// Bold serif, e.g. `𝐁𝐨𝐥𝐝`.
    BoldSerif,
}

impl Style {
    /// Every style, in table order.
    pub const ALL: [Style; 6] = [
        Style::Fraktur,
        Style::BoldScript,
        Style::DoubleStruck,
        Style::Monospace,
        Style::BoldSansSerif,
        Style::BoldSerif,
    ];

    /// Returns the canonical id of this style.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Fraktur => "fraktur",
            Style::BoldScript => "bold_script",
            Style::DoubleStruck => "double_struck",
            Style::Monospace => "monospace",
            Style::BoldSansSerif => "bold_sans_serif",
            Style::BoldSerif => "bold_serif",
        }
    }

    /// Looks up a style by canonical id, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not exactly one of the six ids.
    pub fn from_id(id: &str) -> Option<Style> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseStyleError::Empty);
        }
        Style::from_id(s).ok_or_else(|| ParseStyleError::Unknown {
            name: s.to_string(),
        })
    }
}

impl TryFrom<String> for Style {
    type Error = ParseStyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
