//! Action catalog wiring.
//!
//! This module wraps the two XML catalogs (`abils.xml`, `spells.xml`) so the
//! resolver can look names up in each tier. Records mirror the document
//! attributes; `TierIndex` provides the per-tier name lookup and
//! `CatalogStore` owns both tiers.

pub mod identity;
pub mod index;
pub mod model;
pub mod store;

pub use identity::Tier;
pub use index::TierIndex;
pub use model::{ActionRecord, load_catalog_from_path, parse_catalog_document};
pub use store::{CatalogStore, LoadOptions, RESOURCE_SUBDIR, resource_root};
