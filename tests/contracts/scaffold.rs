//! Scaffold contracts (SCAFFOLD-001, SCAFFOLD-002)

use extgen::application::scaffold::{scaffold_target, ScaffoldRequest, TEMPLATE_PLACEHOLDER};
use extgen::{ExtensionFlavor, GenerateUseCase, LocalFs};

use crate::common::*;

fn contains_identifier(text: &str, ident: &str) -> bool {
    text.match_indices(ident).any(|(pos, _)| {
        let before = text[..pos].chars().next_back();
        let after = text[pos + ident.len()..].chars().next();
        let is_ident = |c: char| c.is_alphanumeric() || c == '_';
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

/// CONTRACT SCAFFOLD-001: template isolation
///
/// Each flavor gets its own type name; the placeholder never survives in a
/// generated copy and the template itself is never rewritten.
mod template_isolation {
    use super::*;

    #[test]
    fn contract_each_copy_has_its_own_type_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = fixture_graph();
        GenerateUseCase::new(LocalFs::new())
            .execute(&config_in(dir.path()), &mut graph)
            .unwrap();

        let share = std::fs::read_to_string(
            dir.path()
                .join("ios/MyAppShareExtension/ShareExtensionViewController.swift"),
        )
        .unwrap();
        let action = std::fs::read_to_string(
            dir.path()
                .join("ios/MyAppActionExtension/ActionExtensionViewController.swift"),
        )
        .unwrap();

        assert!(!contains_identifier(&share, TEMPLATE_PLACEHOLDER));
        assert!(!contains_identifier(&action, TEMPLATE_PLACEHOLDER));
        assert!(contains_identifier(&share, "MyAppShareExtensionViewController"));
        assert!(contains_identifier(&action, "MyAppActionExtensionViewController"));
        assert!(!contains_identifier(&share, "MyAppActionExtensionViewController"));
    }

    #[test]
    fn contract_custom_template_is_not_modified() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("templates/Custom.swift");
        std::fs::create_dir_all(template.parent().unwrap()).unwrap();
        let source = "final class ShareExtensionViewController: UIViewController {}\n";
        std::fs::write(&template, source).unwrap();

        let mut config = config_in(dir.path());
        config.extension.template = Some("templates/Custom.swift".into());
        let mut graph = fixture_graph();
        GenerateUseCase::new(LocalFs::new())
            .execute(&config, &mut graph)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&template).unwrap(), source);
    }
}

/// CONTRACT SCAFFOLD-002: idempotent directory creation
///
/// Scaffolding an existing target directory again succeeds and leaves
/// unrelated files alone.
mod idempotent_directories {
    use super::*;

    #[test]
    fn contract_rescaffold_keeps_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("ios");
        let request = ScaffoldRequest {
            target_name: "MyAppShareExtension",
            flavor: ExtensionFlavor::Share,
            platform_root: &root,
            template: None,
            resources: Vec::new(),
        };

        scaffold_target(&LocalFs::new(), &request).unwrap();
        let notes = root.join("MyAppShareExtension/Notes.md");
        std::fs::write(&notes, "keep me").unwrap();
        let before = list_all_files(dir.path());

        scaffold_target(&LocalFs::new(), &request).unwrap();
        assert_eq!(std::fs::read_to_string(&notes).unwrap(), "keep me");
        assert_eq!(list_all_files(dir.path()), before);
    }

    #[test]
    fn contract_second_generation_is_a_no_op_for_the_graph() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut graph = fixture_graph();
        let use_case = GenerateUseCase::new(LocalFs::new());

        use_case.execute(&config, &mut graph).unwrap();
        let once = graph.clone();
        let files = list_all_files(dir.path());

        let second = use_case.execute(&config, &mut graph).unwrap();
        assert!(!second.has_changes());
        assert_eq!(graph, once);
        assert_eq!(list_all_files(dir.path()), files);
        assert!(dir.path().join("ios/SharedResources").is_dir());
    }
}
