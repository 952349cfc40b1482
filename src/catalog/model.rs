//! Action records and the XML documents they are read from.
//!
//! Each tier ships as one document whose records are empty elements carrying
//! every field as an attribute, for example
//! `<a id="35" index="547" prefix="/ja" english="Provoke" targets="Enemy" .../>`.
//! Attributes the record does not use (localized names, etc.) are ignored.
//! Missing attributes default to `0`/`0.0`/`""`; numbers that fail to parse
//! are logged and also default, so one bad cell never hides the whole tier.

use crate::catalog::identity::Tier;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// One catalog entry, immutable once loaded.
pub struct ActionRecord {
    pub id: u32,
    pub index: u32,
    pub mp_cost: u32,
    pub tp_cost: u32,
    /// Seconds.
    pub cast_time: f64,
    /// Seconds.
    pub recast: f64,
    pub prefix: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub element: String,
    pub targets: String,
    pub skill: String,
    pub alias: String,
}

impl ActionRecord {
    pub fn is_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(rename = "a", default)]
    abilities: Vec<RawRecord>,
    #[serde(rename = "s", default)]
    spells: Vec<RawRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@index")]
    index: Option<String>,
    #[serde(rename = "@english")]
    english: Option<String>,
    #[serde(rename = "@prefix")]
    prefix: Option<String>,
    #[serde(rename = "@type")]
    kind: Option<String>,
    #[serde(rename = "@element")]
    element: Option<String>,
    #[serde(rename = "@targets")]
    targets: Option<String>,
    #[serde(rename = "@skill")]
    skill: Option<String>,
    #[serde(rename = "@alias")]
    alias: Option<String>,
    #[serde(rename = "@casttime")]
    cast_time: Option<String>,
    #[serde(rename = "@mpcost")]
    mp_cost: Option<String>,
    #[serde(rename = "@tpcost")]
    tp_cost: Option<String>,
    #[serde(rename = "@recast")]
    recast: Option<String>,
}

impl RawRecord {
    fn into_record(self, tier: Tier) -> ActionRecord {
        let name = self.english.unwrap_or_default();
        let number = |attribute: &str, raw: Option<String>| -> u32 {
            parse_attribute(tier, &name, attribute, raw.as_deref())
        };
        let seconds = |attribute: &str, raw: Option<String>| -> f64 {
            let value: f64 = parse_attribute(tier, &name, attribute, raw.as_deref());
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                warn!(%tier, name = %name, attribute, value, "duration out of range; using 0");
                0.0
            }
        };

        let tp_cost = match tier {
            Tier::Ability => number("tpcost", self.tp_cost),
            // Spells never carry a TP cost even if the document lists one.
            Tier::Spell => 0,
        };

        ActionRecord {
            id: number("id", self.id),
            index: number("index", self.index),
            mp_cost: number("mpcost", self.mp_cost),
            tp_cost,
            cast_time: seconds("casttime", self.cast_time),
            recast: seconds("recast", self.recast),
            prefix: self.prefix.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            element: self.element.unwrap_or_default(),
            targets: self.targets.unwrap_or_default(),
            skill: self.skill.unwrap_or_default(),
            alias: self.alias.unwrap_or_default(),
            name,
        }
    }
}

fn parse_attribute<T>(tier: Tier, name: &str, attribute: &str, raw: Option<&str>) -> T
where
    T: FromStr + Default,
{
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return T::default();
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(%tier, name, attribute, raw, "unparseable numeric attribute; using 0");
            T::default()
        }
    }
}

/// Parse a tier document from text, keeping only the tier's record elements.
///
/// Returns the parser's message on failure so callers can attach a path.
pub fn parse_catalog_document(tier: Tier, text: &str) -> Result<Vec<ActionRecord>, String> {
    let document: RawDocument = quick_xml::de::from_str(text).map_err(|err| err.to_string())?;
    let raw = match tier {
        Tier::Ability => document.abilities,
        Tier::Spell => document.spells,
    };
    Ok(raw.into_iter().map(|record| record.into_record(tier)).collect())
}

/// Read and parse a tier document from disk.
///
/// A missing file is reported as `ResourceUnavailable` so the store can
/// degrade that tier instead of failing.
pub fn load_catalog_from_path(tier: Tier, path: &Path) -> Result<Vec<ActionRecord>> {
    if !path.is_file() {
        return Err(CatalogError::ResourceUnavailable {
            tier,
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        tier,
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_document(tier, &text).map_err(|message| CatalogError::Parse {
        tier,
        path: path.to_path_buf(),
        message,
    })
}
