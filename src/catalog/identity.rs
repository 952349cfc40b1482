use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which of the two catalogs an action record came from.
///
/// Abilities and spells live in separate documents with separate element
/// tags; the tier also decides precedence during resolution (abilities win).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tier {
    Ability,
    Spell,
}

impl Tier {
    /// Both tiers in resolution order.
    pub const ALL: [Tier; 2] = [Tier::Ability, Tier::Spell];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Ability => "ability",
            Tier::Spell => "spell",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "ability" => Some(Tier::Ability),
            "spell" => Some(Tier::Spell),
            _ => None,
        }
    }

    /// Per-record element name inside the tier's document.
    pub fn element_tag(&self) -> &'static str {
        match self {
            Tier::Ability => "a",
            Tier::Spell => "s",
        }
    }

    /// Conventional document name under the resource directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Tier::Ability => "abils.xml",
            Tier::Spell => "spells.xml",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Tier::from_str(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown tier '{value}'")))
    }
}
