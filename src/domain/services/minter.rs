//! Identifier Minter
//!
//! Issues identifiers for new graph records. Ids are derived from a seed
//! naming the record's owner and role, so generating against the same base
//! project always yields the same ids. A derived id that is already taken
//! is re-hashed with a counter until it is free.

use std::collections::BTreeSet;

use sha2::{Digest, Sha256};

use crate::domain::entities::ProjectGraph;
use crate::domain::value_objects::ObjectId;

const SEED_NAMESPACE: &str = "extgen";

/// Collision-free identifier source for one generation run
#[derive(Debug, Default)]
pub struct IdMinter {
    issued: BTreeSet<ObjectId>,
}

impl IdMinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint an id that is absent from `graph` and was never issued by this minter
    pub fn mint(&mut self, graph: &ProjectGraph, seed: &str) -> ObjectId {
        let mut attempt: u32 = 0;
        loop {
            let material = if attempt == 0 {
                format!("{}:{}", SEED_NAMESPACE, seed)
            } else {
                format!("{}:{}#{}", SEED_NAMESPACE, seed, attempt)
            };
            let id = ObjectId::from_digest(&Sha256::digest(material.as_bytes()));
            if !graph.contains(&id) && !self.issued.contains(&id) {
                self.issued.insert(id.clone());
                return id;
            }
            attempt += 1;
        }
    }

    /// Ids issued so far, in id order
    pub fn issued(&self) -> impl Iterator<Item = &ObjectId> {
        self.issued.iter()
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

/// Seed for a record owned by `owner` playing `role`
pub fn seed(owner: &str, role: &str) -> String {
    format!("{}/{}", owner, role)
}
