//! Naming contracts (NAME-001, NAME-002)

use extgen::domain::value_objects::{bundle_identifier, target_name};
use extgen::{ExtensionFlavor, GenerateUseCase, LocalFs};

use crate::common::*;

/// CONTRACT NAME-001: derived names
mod derived_names {
    use super::*;

    #[test]
    fn contract_bundle_identifiers() {
        assert_eq!(
            bundle_identifier("com.acme.app", ExtensionFlavor::Share),
            "com.acme.app.ShareExtension"
        );
        assert_eq!(
            bundle_identifier("com.acme.app", ExtensionFlavor::Action),
            "com.acme.app.ActionExtension"
        );
    }

    #[test]
    fn contract_target_names() {
        assert_eq!(
            target_name("My App!!", ExtensionFlavor::Share).unwrap(),
            "MyAppShareExtension"
        );
        assert_eq!(
            target_name("My App!!", ExtensionFlavor::Action).unwrap(),
            "MyAppActionExtension"
        );
    }
}

/// CONTRACT NAME-002: generated targets carry the derived names
mod generated_targets {
    use super::*;
    use extgen::domain::entities::{Configuration, ConfigurationList, NativeTarget};

    #[test]
    fn contract_targets_use_derived_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = fixture_graph();
        let result = GenerateUseCase::new(LocalFs::new())
            .execute(&config_in(dir.path()), &mut graph)
            .unwrap();

        for (pass, expected) in result.passes.iter().zip([
            ("MyAppShareExtension", "com.acme.app.ShareExtension"),
            ("MyAppActionExtension", "com.acme.app.ActionExtension"),
        ]) {
            assert_eq!(pass.target_name, expected.0);
            let target = graph.get::<NativeTarget>(&pass.target).unwrap();
            assert_eq!(target.name, expected.0);

            let list = graph
                .get::<ConfigurationList>(&target.build_configuration_list)
                .unwrap();
            for id in &list.build_configurations {
                let configuration = graph.get::<Configuration>(id).unwrap();
                assert_eq!(
                    configuration.setting("PRODUCT_BUNDLE_IDENTIFIER"),
                    Some(expected.1)
                );
            }
        }
    }
}
