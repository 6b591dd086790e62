//! Style identifiers and their code point tables.
//!
//! - [`Style`]: the closed set of decorative styles
//! - [`StyleBlock`]: where a style's letters live in Unicode
//! - [`ParseStyleError`]: returned when a string names no style

mod block;
mod error;
#[allow(clippy::module_inception)]
mod style;

pub use block::StyleBlock;
pub use error::ParseStyleError;
pub use style::Style;
