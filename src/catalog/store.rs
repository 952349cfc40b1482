//! The two-tier catalog store.
//!
//! A `CatalogStore` is built once from the ability and spell documents and is
//! read-only afterwards, so a shared reference can serve lookups from any
//! number of threads. A tier whose document is missing is loaded as empty and
//! never matches; a document that exists but cannot be read or parsed fails
//! the load.

use crate::catalog::load_catalog_from_path;
use crate::catalog::{ActionRecord, Tier, TierIndex, parse_catalog_document};
use crate::error::{CatalogError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Subdirectory preferred over the given directory when it exists.
pub const RESOURCE_SUBDIR: &str = "resources";

#[derive(Clone, Debug)]
/// File names of the tier documents inside the resource directory.
pub struct LoadOptions {
    pub abilities_file: String,
    pub spells_file: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            abilities_file: Tier::Ability.default_file_name().to_string(),
            spells_file: Tier::Spell.default_file_name().to_string(),
        }
    }
}

impl LoadOptions {
    pub fn file_name(&self, tier: Tier) -> &str {
        match tier {
            Tier::Ability => &self.abilities_file,
            Tier::Spell => &self.spells_file,
        }
    }
}

/// Apply the resource-directory convention: `dir/resources` when that is a
/// directory, otherwise `dir` itself.
pub fn resource_root(dir: &Path) -> PathBuf {
    let nested = dir.join(RESOURCE_SUBDIR);
    if nested.is_dir() {
        nested
    } else {
        dir.to_path_buf()
    }
}

#[derive(Clone, Debug)]
pub struct CatalogStore {
    abilities: TierIndex,
    spells: TierIndex,
}

impl CatalogStore {
    /// A store where every lookup misses.
    pub fn empty() -> Self {
        Self {
            abilities: TierIndex::empty(Tier::Ability),
            spells: TierIndex::empty(Tier::Spell),
        }
    }

    /// Build a store from already-parsed records.
    pub fn from_records(abilities: Vec<ActionRecord>, spells: Vec<ActionRecord>) -> Self {
        Self {
            abilities: TierIndex::build(Tier::Ability, abilities),
            spells: TierIndex::build(Tier::Spell, spells),
        }
    }

    /// Build a store from in-memory documents. `None` behaves like a missing
    /// document: that tier is empty.
    pub fn from_documents(abilities: Option<&str>, spells: Option<&str>) -> Result<Self> {
        Ok(Self {
            abilities: index_document(Tier::Ability, abilities)?,
            spells: index_document(Tier::Spell, spells)?,
        })
    }

    /// Load both tiers from `dir` (see [`resource_root`]).
    pub fn load(dir: &Path, options: &LoadOptions) -> Result<Self> {
        let root = resource_root(dir);
        Ok(Self {
            abilities: load_tier(Tier::Ability, &root.join(options.file_name(Tier::Ability)))?,
            spells: load_tier(Tier::Spell, &root.join(options.file_name(Tier::Spell)))?,
        })
    }

    pub fn tier(&self, tier: Tier) -> &TierIndex {
        match tier {
            Tier::Ability => &self.abilities,
            Tier::Spell => &self.spells,
        }
    }

    /// Exact, case-sensitive lookup of `name` in one tier.
    pub fn lookup(&self, tier: Tier, name: &str) -> Result<Option<&ActionRecord>> {
        self.tier(tier).lookup(name)
    }

    /// Names listed more than once in `tier`.
    pub fn ambiguous_names(&self, tier: Tier) -> Vec<&str> {
        self.tier(tier).ambiguous_names().collect()
    }

    pub fn len(&self, tier: Tier) -> usize {
        self.tier(tier).len()
    }
}

fn index_document(tier: Tier, document: Option<&str>) -> Result<TierIndex> {
    let Some(text) = document else {
        return Ok(TierIndex::empty(tier));
    };
    let records = parse_catalog_document(tier, text).map_err(|message| CatalogError::Parse {
        tier,
        path: PathBuf::from("<memory>"),
        message,
    })?;
    Ok(TierIndex::build(tier, records))
}

fn load_tier(tier: Tier, path: &Path) -> Result<TierIndex> {
    match load_catalog_from_path(tier, path) {
        Ok(records) => {
            let index = TierIndex::build(tier, records);
            info!(%tier, path = %path.display(), records = index.len(), "loaded catalog");
            Ok(index)
        }
        Err(err @ CatalogError::ResourceUnavailable { .. }) => {
            warn!(%tier, error = %err, "catalog unavailable; tier will never match");
            Ok(TierIndex::empty(tier))
        }
        Err(err) => Err(err),
    }
}
