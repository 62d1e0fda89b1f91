//! Property tests for project file parsing.

use proptest::prelude::*;

use extgen::infrastructure::repositories::{parse_project, render_project};

const PROJECT: &str = include_str!("../fixtures/project.pbxproj.json");

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,512}") {
        let _ = parse_project(&text);
    }

    /// PROPERTY: unknown records survive a load/save cycle untouched.
    #[test]
    fn property_opaque_records_are_preserved(
        key in "[A-F0-9]{24}",
        isa in "PBX[A-Z][a-z]{2,12}Thing",
        field in "x[a-z]{1,7}",
        value in "[ -~]{0,16}",
    ) {
        let mut json: serde_json::Value = serde_json::from_str(PROJECT).unwrap();
        json["objects"][&key] = serde_json::json!({ "isa": isa, field.clone(): value });
        let graph = parse_project(&json.to_string()).unwrap();

        let rendered: serde_json::Value =
            serde_json::from_str(&render_project(&graph).unwrap()).unwrap();
        prop_assert_eq!(&rendered["objects"][&key], &json["objects"][&key]);
    }
}
