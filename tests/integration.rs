use letterform::{
    resolve, to_plain, transform, transform_by_category, transform_explicit, CategoryDescriptor,
    Selector, Style, StyleBlock,
};
use proptest::prelude::*;

fn any_style() -> impl Strategy<Value = Style> {
    prop::sample::select(Style::ALL.to_vec())
}

#[test]
fn test_serif_round_trip() {
    let selector = Selector::from(CategoryDescriptor::new("serif"));
    let style = resolve(&selector);
    assert_eq!(style, Style::Fraktur);

    let output = transform("ABCabc", style);
    let mut chars = output.chars();
    assert_eq!(chars.next(), Some('\u{1D504}'));
    assert_eq!(chars.next(), Some('\u{1D505}'));
    assert_eq!(chars.next(), Some('\u{212D}'));
}

#[test]
fn test_entry_points_share_one_table() {
    for style in Style::ALL {
        let text = "Sphinx of black quartz, judge my vow";
        assert_eq!(
            transform_explicit(text, style.as_str()),
            transform_by_category(text, &Selector::from(style.as_str())),
        );
        assert_eq!(transform_explicit(text, style.as_str()), transform(text, style));
    }
}

#[test]
fn test_unknown_style_policies_differ() {
    assert_eq!(transform_explicit("abc", "unknown"), "abc");
    assert_eq!(
        transform_by_category("abc", &Selector::from("unknown")),
        transform("abc", Style::BoldSansSerif)
    );
}

#[test]
fn test_selectors_from_config() {
    let selectors: Vec<Selector> = serde_json::from_str(
        r#"[
            "bold_serif",
            "handwriting",
            {"category": "sans-serif", "family": "Roboto Mono"},
            {"category": "display"}
        ]"#,
    )
    .unwrap();

    let styles: Vec<Style> = selectors.iter().map(resolve).collect();
    assert_eq!(
        styles,
        vec![
            Style::BoldSerif,
            Style::BoldScript,
            Style::Monospace,
            Style::BoldSansSerif
        ]
    );
}

#[test]
fn test_already_styled_text_is_stable() {
    let once = transform("Hello", Style::DoubleStruck);
    for style in Style::ALL {
        assert_eq!(transform(&once, style), once);
    }
}

#[test]
fn test_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Style>();
    assert_send_sync::<StyleBlock>();
    assert_send_sync::<Selector>();
    assert_send_sync::<CategoryDescriptor>();
}

#[test]
fn test_concurrent_calls_agree() {
    let text = "Pack my box with five dozen liquor jugs!";
    let selector = Selector::from(CategoryDescriptor::new("serif"));

    let results: Vec<(String, String)> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let styled = transform_by_category(text, &selector);
                    let plain = to_plain(&styled);
                    (styled, plain)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let expected = transform(text, Style::Fraktur);
    for (styled, plain) in results {
        assert_eq!(styled, expected);
        assert_eq!(plain, text);
    }
}

proptest! {
    #[test]
    fn prop_length_preserved(text in any::<String>(), style in any_style()) {
        let output = transform(&text, style);
        prop_assert_eq!(output.chars().count(), text.chars().count());
    }

    #[test]
    fn prop_non_letters_unchanged(text in any::<String>(), style in any_style()) {
        let output = transform(&text, style);
        for (before, after) in text.chars().zip(output.chars()) {
            if !before.is_ascii_alphabetic() {
                prop_assert_eq!(before, after);
            } else {
                prop_assert_ne!(before, after);
            }
        }
    }

    #[test]
    fn prop_plain_reverses_ascii(text in "[ -~]*", style in any_style()) {
        prop_assert_eq!(to_plain(&transform(&text, style)), text);
    }

    #[test]
    fn prop_resolve_is_total(category in any::<String>(), family in proptest::option::of(any::<String>())) {
        let descriptor = CategoryDescriptor { category: category.clone(), family };
        let style = resolve(&Selector::Category(descriptor));
        prop_assert!(Style::ALL.contains(&style));
        let raw = resolve(&Selector::Raw(category));
        prop_assert!(Style::ALL.contains(&raw));
    }
}
