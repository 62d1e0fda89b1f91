//! Property tests for placeholder substitution in the view-controller template.

use proptest::prelude::*;

use extgen::application::replace_identifier;

const FROM: &str = "ShareExtensionViewController";

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,24}ViewController"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: substitution never panics on arbitrary text.
    #[test]
    fn property_replace_never_panics(text in "(?s).{0,256}", to in identifier()) {
        let _ = replace_identifier(&text, FROM, &to);
    }

    /// PROPERTY: text without the placeholder comes back unchanged.
    #[test]
    fn property_text_without_placeholder_is_unchanged(
        text in "[a-z0-9 {}():;\n]{0,128}",
        to in identifier(),
    ) {
        prop_assert_eq!(replace_identifier(&text, FROM, &to), text);
    }

    /// PROPERTY: every standalone placeholder is replaced; joined ones are not.
    #[test]
    fn property_standalone_occurrences_are_replaced(
        parts in prop::collection::vec("[ (){}:;.\n]{1,4}", 1..8),
        to in identifier(),
    ) {
        let text = parts.join(FROM);
        let out = replace_identifier(&text, FROM, &to);
        prop_assert_eq!(out, parts.join(&to));

        let glued = format!("{FROM}Delegate {FROM}_x");
        prop_assert_eq!(replace_identifier(&glued, FROM, &to), glued);
    }
}
