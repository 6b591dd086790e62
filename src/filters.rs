//! MiniJinja filter registration.
//!
//! ```text
//! {{ title | fancy("serif") }}
//! {{ title | fancy({"category": "sans-serif", "family": "Roboto Mono"}) }}
//! {{ title | fancy_style("bold_script") }}
//! {{ bio | plain }}
//! ```

use minijinja::value::ViaDeserialize;
use minijinja::{Environment, Value};

use crate::glyph::{transform_by_category, transform_explicit};
use crate::plain::to_plain;
use crate::resolve::Selector;

/// Registers the `fancy`, `fancy_style` and `plain` filters on `env`.
///
/// `fancy` takes a selector (a string or a `{category, family}` map) and
/// falls back to bold sans-serif. `fancy_style` takes a style id and leaves
/// the value unchanged when the id is unknown.
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter(
        "fancy",
        |value: Value, selector: ViaDeserialize<Selector>| -> String {
            transform_by_category(&value_text(&value), &selector)
        },
    );

    env.add_filter("fancy_style", |value: Value, style: String| -> String {
        transform_explicit(&value_text(&value), &style)
    });

    env.add_filter("plain", |value: Value| -> String {
        to_plain(&value_text(&value))
    });
}

/// Text of a filtered value. `none` and undefined render as nothing.
fn value_text(value: &Value) -> String {
    if value.is_none() || value.is_undefined() {
        String::new()
    } else {
        value.to_string()
    }
}
