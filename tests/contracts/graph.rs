//! Project graph contracts (GRAPH-001 through GRAPH-004)
//!
//! These contracts hold for the graph after a full share + action run.

use std::collections::BTreeSet;

use extgen::domain::entities::{BuildPhase, NativeTarget, PhaseKind, TargetDependency};
use extgen::domain::services::{wire_host_dependency, IdMinter};
use extgen::{ExtgenError, GenerateUseCase, LocalFs, ObjectId};

use crate::common::*;

/// CONTRACT GRAPH-001: every reference resolves
///
/// Every id held by a modelled reference field names a record in the
/// section that field points into.
mod no_dangling_references {
    use super::*;

    #[test]
    fn contract_full_run_leaves_no_dangling_references() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = fixture_graph();
        GenerateUseCase::new(LocalFs::new())
            .execute(&config_in(dir.path()), &mut graph)
            .unwrap();
        assert_no_dangling(&graph);
    }

    #[test]
    fn contract_no_dangling_references_with_resources() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("GoogleService-Info.plist"), "<plist/>").unwrap();
        std::fs::write(dir.path().join("preprocessing.js"), "var x;").unwrap();
        let mut config = config_in(dir.path());
        config.extension.google_services_file = Some("GoogleService-Info.plist".into());
        config.extension.preprocessing_file = Some("preprocessing.js".into());

        let mut graph = fixture_graph();
        GenerateUseCase::new(LocalFs::new())
            .execute(&config, &mut graph)
            .unwrap();
        assert_no_dangling(&graph);
    }
}

/// CONTRACT GRAPH-002: minted ids are unique
///
/// New records never reuse an id from the base project or from each other.
mod identifier_uniqueness {
    use super::*;

    #[test]
    fn contract_new_ids_are_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let base = fixture_graph();
        let before: BTreeSet<ObjectId> = base.ids().into_iter().collect();

        let mut graph = base.clone();
        GenerateUseCase::new(LocalFs::new())
            .execute(&config_in(dir.path()), &mut graph)
            .unwrap();

        let after = graph.ids();
        let unique: BTreeSet<&ObjectId> = after.iter().collect();
        assert_eq!(unique.len(), after.len(), "duplicate ids in graph");

        let added: Vec<_> = after.iter().filter(|id| !before.contains(id)).collect();
        assert_eq!(added.len(), graph.len() - base.len());
        assert!(added.iter().all(|id| id.is_canonical()));
    }

    #[test]
    fn contract_minter_avoids_existing_ids() {
        let graph = fixture_graph();
        let mut ids = IdMinter::new();
        let minted: BTreeSet<ObjectId> =
            (0..64).map(|_| ids.mint(&graph, "same-seed")).collect();
        assert_eq!(minted.len(), 64);
        assert!(minted.iter().all(|id| !graph.contains(id)));
    }
}

/// CONTRACT GRAPH-003: one embed phase per label
///
/// The host ends with exactly one plugins copy-files phase per label, each
/// holding one build file per pass that used the label.
mod shared_phase_convergence {
    use super::*;

    #[test]
    fn contract_one_embed_phase_per_label() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = fixture_graph();
        GenerateUseCase::new(LocalFs::new())
            .execute(&config_in(dir.path()), &mut graph)
            .unwrap();

        let host = graph
            .get::<NativeTarget>(&ObjectId::new(APP_TARGET))
            .unwrap();
        for label in ["Embed Share Extensions", "Embed Action Extensions"] {
            let phases: Vec<&BuildPhase> = host
                .build_phases
                .iter()
                .filter_map(|id| graph.get::<BuildPhase>(id))
                .filter(|phase| phase.is_embed_phase(label))
                .collect();
            assert_eq!(phases.len(), 1, "{label}");
            assert_eq!(phases[0].kind, PhaseKind::CopyFiles);
            assert_eq!(phases[0].files.len(), 1, "{label}");
        }
    }

    #[test]
    fn contract_existing_embed_phase_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = fixture_graph();
        let existing = ObjectId::new("AAAAAAAAAAAAAAAAAAAAAAAA");
        graph.insert(
            existing.clone(),
            BuildPhase::embed_plugins("Embed Share Extensions"),
        );
        graph
            .get_mut::<NativeTarget>(&ObjectId::new(APP_TARGET))
            .unwrap()
            .build_phases
            .push(existing.clone());

        GenerateUseCase::new(LocalFs::new())
            .execute(&config_in(dir.path()), &mut graph)
            .unwrap();

        let phase = graph.get::<BuildPhase>(&existing).unwrap();
        assert_eq!(phase.files.len(), 1);
        let host = graph
            .get::<NativeTarget>(&ObjectId::new(APP_TARGET))
            .unwrap();
        let share_phases = host
            .build_phases
            .iter()
            .filter_map(|id| graph.get::<BuildPhase>(id))
            .filter(|p| p.is_embed_phase("Embed Share Extensions"))
            .count();
        assert_eq!(share_phases, 1);
    }
}

/// CONTRACT GRAPH-004: no host, no dependency
///
/// Wiring without an application target is a configuration error and adds
/// no target dependency.
mod dependency_wiring_failure {
    use super::*;

    fn without_host() -> extgen::ProjectGraph {
        let mut graph = fixture_graph();
        graph
            .get_mut::<NativeTarget>(&ObjectId::new(APP_TARGET))
            .unwrap()
            .product_type = "com.apple.product-type.bundle".to_string().into();
        graph
    }

    #[test]
    fn contract_wirer_fails_without_host() {
        let mut graph = without_host();
        let before = graph.count::<TargetDependency>();
        let err = wire_host_dependency(
            &mut graph,
            &mut IdMinter::new(),
            &ObjectId::new(APP_TARGET),
        )
        .unwrap_err();
        assert!(matches!(err, ExtgenError::MissingHostTarget));
        assert!(err.is_configuration());
        assert_eq!(graph.count::<TargetDependency>(), before);
    }

    #[test]
    fn contract_generation_fails_without_host() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = without_host();
        let before = graph.clone();
        let err = GenerateUseCase::new(LocalFs::new())
            .execute(&config_in(dir.path()), &mut graph)
            .unwrap_err();
        assert!(matches!(err, ExtgenError::MissingHostTarget));
        assert_eq!(graph, before);
        assert!(list_all_files(dir.path()).is_empty());
    }
}
