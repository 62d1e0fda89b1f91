//! Object Identifier Value Object
//!
//! Every record in the project graph is keyed by an opaque identifier.
//! Identifiers produced by extgen are 24 upper-case hex characters, the
//! format the native build tool itself writes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a record in the project graph
///
/// Identifiers read from an existing project are accepted as-is; only
/// freshly minted ones are guaranteed to be in the canonical format.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Length of a canonical identifier
    pub const LEN: usize = 24;

    /// Wrap an existing identifier string
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a canonical identifier from the leading bytes of a digest
    pub fn from_digest(digest: &[u8]) -> Self {
        let hex: String = digest
            .iter()
            .take(Self::LEN / 2)
            .map(|b| format!("{:02X}", b))
            .collect();
        Self(hex)
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this identifier has the canonical 24-hex-digit shape
    pub fn is_canonical(&self) -> bool {
        self.0.len() == Self::LEN
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
