//! Resolved action descriptors and their command-string projection.
//!
//! A descriptor is the resolver's output: the catalog record's fields plus
//! which tier it came from. The command string is derived on demand from the
//! current field values and never written back, so a descriptor is immutable
//! once resolved:
//!
//! ```text
//! /ma "Dia" <t>
//! /ja "Provoke" <t>
//! /range <t>
//! ```

use crate::catalog::{ActionRecord, Tier};
use serde::Serialize;
use std::fmt;

/// Targeting token for actions used on the caster.
pub const SELF_TARGET: &str = "<me>";
/// Targeting token for the currently selected target.
pub const CURRENT_TARGET: &str = "<t>";
/// Ranged attacks are invoked positionally, without an action name.
pub const RANGED_PREFIX: &str = "/range";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ActionDescriptor {
    pub id: u32,
    pub index: u32,
    pub mp_cost: u32,
    pub tp_cost: u32,
    pub cast_time: f64,
    pub recast: f64,
    pub prefix: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub element: String,
    pub targets: String,
    pub skill: String,
    pub alias: String,
    /// Fallback suffix used when `targets` names neither self nor an enemy.
    /// Empty unless set with [`ActionDescriptor::with_postfix`].
    pub postfix: String,
    pub is_ability: bool,
    pub is_spell: bool,
}

impl ActionDescriptor {
    /// The sentinel returned for names found in neither tier.
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn from_record(record: &ActionRecord, tier: Tier) -> Self {
        Self {
            id: record.id,
            index: record.index,
            mp_cost: record.mp_cost,
            tp_cost: record.tp_cost,
            cast_time: record.cast_time,
            recast: record.recast,
            prefix: record.prefix.clone(),
            name: record.name.clone(),
            kind: record.kind.clone(),
            element: record.element.clone(),
            targets: record.targets.clone(),
            skill: record.skill.clone(),
            alias: record.alias.clone(),
            postfix: String::new(),
            is_ability: tier == Tier::Ability,
            is_spell: tier == Tier::Spell,
        }
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// False for the not-found sentinel; check before sending a command.
    pub fn is_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn tier(&self) -> Option<Tier> {
        match (self.is_ability, self.is_spell) {
            (true, _) => Some(Tier::Ability),
            (false, true) => Some(Tier::Spell),
            (false, false) => None,
        }
    }

    /// Suffix the command string will end with.
    pub fn target_suffix(&self) -> &str {
        derive_target_suffix(&self.targets).unwrap_or(self.postfix.as_str())
    }

    /// Literal command that invokes this action, e.g. `/ma "Dia" <t>`.
    ///
    /// Well-defined for the sentinel but meaningless; callers check
    /// [`ActionDescriptor::is_valid_name`] first.
    pub fn command_string(&self) -> String {
        build_command(&self.prefix, &self.name, self.target_suffix())
    }
}

impl fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_string())
    }
}

/// Targeting token implied by a `targets` descriptor, if any.
///
/// Matching is a case-insensitive substring test and "self" wins over
/// "enemy". `None` means the caller keeps whatever suffix it already had.
pub fn derive_target_suffix(targets: &str) -> Option<&'static str> {
    let targets = targets.to_lowercase();
    if targets.contains("self") {
        Some(SELF_TARGET)
    } else if targets.contains("enemy") {
        Some(CURRENT_TARGET)
    } else {
        None
    }
}

/// Assemble the invocation string from its parts.
pub fn build_command(prefix: &str, name: &str, suffix: &str) -> String {
    if prefix == RANGED_PREFIX {
        format!("{prefix} {suffix}")
    } else {
        format!("{prefix} \"{name}\" {suffix}")
    }
}
