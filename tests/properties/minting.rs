//! Property tests for identifier minting.

use std::collections::BTreeSet;

use proptest::prelude::*;

use extgen::domain::services::IdMinter;
use extgen::infrastructure::repositories::parse_project;
use extgen::ObjectId;

const PROJECT: &str = include_str!("../fixtures/project.pbxproj.json");

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a minter never issues the same id twice, whatever the seeds.
    #[test]
    fn property_minted_ids_are_unique(seeds in prop::collection::vec("[a-zA-Z/#-]{0,12}", 1..64)) {
        let graph = parse_project(PROJECT).unwrap();
        let mut ids = IdMinter::new();
        let minted: Vec<ObjectId> = seeds.iter().map(|s| ids.mint(&graph, s)).collect();

        let unique: BTreeSet<_> = minted.iter().collect();
        prop_assert_eq!(unique.len(), minted.len());
        prop_assert!(minted.iter().all(|id| !graph.contains(id)));
        prop_assert!(minted.iter().all(|id| id.is_canonical()));
    }

    /// PROPERTY: fresh minters given the same seeds issue the same ids.
    #[test]
    fn property_minting_is_deterministic(seeds in prop::collection::vec("[a-z]{1,8}", 1..16)) {
        let graph = parse_project(PROJECT).unwrap();
        let mut first = IdMinter::new();
        let mut second = IdMinter::new();
        for seed in &seeds {
            prop_assert_eq!(first.mint(&graph, seed), second.mint(&graph, seed));
        }
    }
}
