//! Name-keyed view of one catalog tier.
//!
//! Source catalogs occasionally list the same name twice. The index keeps
//! every record under its name instead of letting the last one win, so a
//! lookup can refuse to pick between duplicates while every other name in the
//! tier stays usable.

use crate::catalog::{ActionRecord, Tier};
use crate::error::{CatalogError, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct TierIndex {
    tier: Tier,
    by_name: BTreeMap<String, Vec<ActionRecord>>,
}

impl TierIndex {
    /// An index with no records; every lookup misses.
    pub fn empty(tier: Tier) -> Self {
        Self {
            tier,
            by_name: BTreeMap::new(),
        }
    }

    /// Index records by their exact `name`.
    ///
    /// Records with a blank name cannot be resolved and are skipped. Duplicate
    /// names are kept and logged; they only fail when looked up.
    pub fn build(tier: Tier, records: Vec<ActionRecord>) -> Self {
        let mut by_name: BTreeMap<String, Vec<ActionRecord>> = BTreeMap::new();
        for record in records {
            if !record.is_valid_name() {
                debug!(%tier, id = record.id, "skipping record with blank name");
                continue;
            }
            by_name.entry(record.name.clone()).or_default().push(record);
        }

        let index = Self { tier, by_name };
        for name in index.ambiguous_names() {
            warn!(%tier, name, "catalog lists this name more than once; lookups of it will fail");
        }
        index
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Find the single record named `name` (exact, case-sensitive).
    ///
    /// `Ok(None)` when the name is absent; `AmbiguousEntry` when it appears
    /// more than once.
    pub fn lookup(&self, name: &str) -> Result<Option<&ActionRecord>> {
        match self.by_name.get(name).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([record]) => Ok(Some(record)),
            Some(records) => Err(CatalogError::AmbiguousEntry {
                tier: self.tier,
                name: name.to_string(),
                count: records.len(),
            }),
        }
    }

    /// Names that map to more than one record, in sorted order.
    pub fn ambiguous_names(&self) -> impl Iterator<Item = &str> {
        self.by_name
            .iter()
            .filter(|(_, records)| records.len() > 1)
            .map(|(name, _)| name.as_str())
    }

    /// Distinct names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Number of indexed records, duplicates included.
    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
