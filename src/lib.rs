//! Shared library for the action-catalog helpers.
//!
//! The crate turns a human-readable action name ("Dia", "Provoke") into a
//! descriptor carrying its cost, timing and targeting, plus the literal
//! command string that invokes it. Public items here form the contract the
//! binaries depend on: catalog loading (`CatalogStore`), resolution
//! (`ActionResolver`), descriptor projection (`ActionDescriptor`) and the
//! runtime helpers that locate the bundled catalogs.

pub mod action;
pub mod catalog;
pub mod error;
pub mod resolver;
pub mod runtime;
pub mod status;

pub use action::{
    ActionDescriptor, CURRENT_TARGET, RANGED_PREFIX, SELF_TARGET, build_command,
    derive_target_suffix,
};
pub use catalog::{
    ActionRecord, CatalogStore, LoadOptions, Tier, TierIndex, load_catalog_from_path,
    parse_catalog_document, resource_root,
};
pub use error::{CatalogError, Result};
pub use resolver::ActionResolver;
pub use runtime::{find_resource_dir, init_tracing, shared_catalog};
pub use status::{EntityStatus, Status, to_status};

/// Split a comma-delimited name list into tokens.
///
/// Action names contain spaces ("Sleepga II"), so only commas separate
/// entries here; surrounding whitespace is trimmed.
pub fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_names_keeps_inner_spaces() {
        assert_eq!(
            split_names("Dia, Sleepga II ,,Provoke"),
            vec!["Dia", "Sleepga II", "Provoke"]
        );
        assert!(split_names(" , ").is_empty());
    }
}
