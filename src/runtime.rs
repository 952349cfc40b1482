//! Runtime helpers shared across binaries.
//!
//! Centralizes resource-directory discovery, the process-wide catalog and
//! logging setup so CLIs subscribe to the same behavior instead of
//! re-implementing it.

use crate::catalog::{CatalogStore, LoadOptions, RESOURCE_SUBDIR, Tier};
use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::EnvFilter;

/// Environment override naming the directory that holds the catalogs.
pub const RESOURCE_DIR_ENV: &str = "ACTION_CATALOG_DIR";

/// Returns true when `dir/resources/` holds at least one tier document.
fn has_catalogs(dir: &Path) -> bool {
    let root = dir.join(RESOURCE_SUBDIR);
    Tier::ALL
        .iter()
        .any(|tier| root.join(tier.default_file_name()).is_file())
}

fn dir_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.trim().is_empty() {
        return None;
    }
    let path = PathBuf::from(hint);
    if !path.is_dir() {
        return None;
    }
    fs::canonicalize(path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if has_catalogs(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory the catalogs are loaded from.
///
/// Search order: `ACTION_CATALOG_DIR` if it names a directory, then the
/// nearest ancestor of the current executable that holds catalogs, then the
/// build-time hint. The returned directory still goes through the
/// `resources/` convention when loaded.
pub fn find_resource_dir() -> Result<PathBuf> {
    if let Ok(value) = env::var(RESOURCE_DIR_ENV) {
        if let Some(dir) = dir_from_hint(&value) {
            return Ok(dir);
        }
        tracing::warn!(value = %value, "{RESOURCE_DIR_ENV} is not a directory; ignoring");
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(dir) = search_upwards(exe_dir) {
                return Ok(dir);
            }
        }
    }

    if let Some(hint) = option_env!("ACTION_CATALOG_DIR_HINT") {
        if let Some(dir) = dir_from_hint(hint) {
            return Ok(dir);
        }
    }

    bail!("Unable to locate the action catalogs. Set {RESOURCE_DIR_ENV} to the directory holding abils.xml and spells.xml.");
}

static SHARED: OnceLock<CatalogStore> = OnceLock::new();
static INIT: Mutex<()> = Mutex::new(());

/// The process-wide catalog, loaded on first use from [`find_resource_dir`].
///
/// Initialization runs at most once even under concurrent callers; a failed
/// load is not cached, so a later call may retry. Prefer constructing a
/// [`CatalogStore`] explicitly where the caller controls the path.
pub fn shared_catalog() -> Result<&'static CatalogStore> {
    if let Some(store) = SHARED.get() {
        return Ok(store);
    }

    let _guard = INIT.lock().unwrap_or_else(|err| err.into_inner());
    if let Some(store) = SHARED.get() {
        return Ok(store);
    }

    let dir = find_resource_dir()?;
    let store = CatalogStore::load(&dir, &LoadOptions::default())
        .with_context(|| format!("loading catalogs from {}", dir.display()))?;
    Ok(SHARED.get_or_init(|| store))
}

/// Install the stderr log subscriber used by the binaries.
///
/// Honors `RUST_LOG`; defaults to warnings only so stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
