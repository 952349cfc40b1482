//! Error taxonomy for catalog loading and name resolution.
//!
//! Only two of these reach callers of [`crate::ActionResolver::resolve`] in
//! practice: `AmbiguousEntry` (a catalog lists the same name twice) and the
//! load-time failures surfaced by [`crate::CatalogStore::load`]. An unknown
//! name is never an error; it resolves to the not-found descriptor.

use crate::catalog::Tier;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// More than one record in a tier carries the requested name.
    #[error("{count} {tier} entries share the name '{name}'; fix the catalog before resolving it")]
    AmbiguousEntry {
        tier: Tier,
        name: String,
        count: usize,
    },

    /// The tier's backing document does not exist. `CatalogStore::load`
    /// absorbs this into an empty tier.
    #[error("{tier} catalog not found at {}", path.display())]
    ResourceUnavailable { tier: Tier, path: PathBuf },

    #[error("failed to read {tier} catalog {}: {source}", path.display())]
    Io {
        tier: Tier,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {tier} catalog {}: {message}", path.display())]
    Parse {
        tier: Tier,
        path: PathBuf,
        message: String,
    },
}

impl CatalogError {
    /// True for the duplicate-name failure operators need to fix in the data.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, CatalogError::AmbiguousEntry { .. })
    }
}

/// Result alias used throughout the library.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
