//! Property tests for derived names.

use proptest::prelude::*;

use extgen::domain::value_objects::{bundle_identifier, sanitized_name, target_name};
use extgen::ExtensionFlavor;

fn flavor() -> impl Strategy<Value = ExtensionFlavor> {
    prop_oneof![Just(ExtensionFlavor::Share), Just(ExtensionFlavor::Action)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sanitizing never panics and keeps only ASCII letters and digits.
    #[test]
    fn property_sanitized_name_is_ascii_alphanumeric(name in "(?s).{0,64}") {
        if let Ok(sanitized) = sanitized_name(&name) {
            prop_assert!(!sanitized.is_empty());
            prop_assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric()));
        } else {
            prop_assert!(!name.chars().any(|c| c.is_ascii_alphanumeric()));
        }
    }

    /// PROPERTY: target names are the sanitized name plus the flavor suffix.
    #[test]
    fn property_target_name_has_flavor_suffix(
        name in "[A-Za-z0-9 !?._-]{0,32}",
        flavor in flavor(),
    ) {
        match target_name(&name, flavor) {
            Ok(target) => {
                prop_assert!(target.ends_with(flavor.suffix()));
                let stem = &target[..target.len() - flavor.suffix().len()];
                prop_assert_eq!(stem, sanitized_name(&name).unwrap());
            }
            Err(_) => prop_assert!(sanitized_name(&name).is_err()),
        }
    }

    /// PROPERTY: the two flavors never share a target name or bundle identifier.
    #[test]
    fn property_flavors_never_collide(
        name in "[A-Za-z0-9]{1,16}",
        bundle in "[a-z]{1,8}(\\.[a-z]{1,8}){1,3}",
    ) {
        prop_assert_ne!(
            target_name(&name, ExtensionFlavor::Share).unwrap(),
            target_name(&name, ExtensionFlavor::Action).unwrap()
        );
        let share = bundle_identifier(&bundle, ExtensionFlavor::Share);
        let action = bundle_identifier(&bundle, ExtensionFlavor::Action);
        prop_assert_ne!(&share, &action);
        let prefix = format!("{}.", bundle);
        prop_assert!(share.starts_with(&prefix));
    }
}
