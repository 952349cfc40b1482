//! Name to descriptor resolution over a [`CatalogStore`].
//!
//! Both tiers are consulted on every call. An ability match wins over a spell
//! of the same name; a name found in neither tier yields the not-found
//! sentinel. A duplicate name in either tier is an error even when the other
//! tier would have matched cleanly.

use crate::action::ActionDescriptor;
use crate::catalog::{CatalogStore, Tier};
use crate::error::Result;

#[derive(Clone, Copy, Debug)]
pub struct ActionResolver<'a> {
    store: &'a CatalogStore,
}

impl<'a> ActionResolver<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a CatalogStore {
        self.store
    }

    /// Resolve `name` to a descriptor.
    ///
    /// Returns `AmbiguousEntry` when either tier lists `name` more than once.
    pub fn resolve(&self, name: &str) -> Result<ActionDescriptor> {
        let ability = self.store.lookup(Tier::Ability, name)?;
        let spell = self.store.lookup(Tier::Spell, name)?;

        let resolved = ability
            .filter(|record| record.is_valid_name())
            .map(|record| (record, Tier::Ability))
            .or_else(|| {
                spell
                    .filter(|record| record.is_valid_name())
                    .map(|record| (record, Tier::Spell))
            });

        Ok(match resolved {
            Some((record, tier)) => ActionDescriptor::from_record(record, tier),
            None => ActionDescriptor::not_found(),
        })
    }

    /// Resolve several names, keeping each outcome next to its input.
    pub fn resolve_many<I, S>(&self, names: I) -> Vec<(String, Result<ActionDescriptor>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), self.resolve(name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActionRecord;
    use crate::error::CatalogError;

    fn record(name: &str, id: u32, prefix: &str, targets: &str) -> ActionRecord {
        ActionRecord {
            id,
            name: name.to_string(),
            prefix: prefix.to_string(),
            targets: targets.to_string(),
            ..Default::default()
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::from_records(
            vec![
                record("Provoke", 35, "/ja", "Enemy"),
                record("Shared", 1, "/ja", "Self"),
            ],
            vec![
                record("Dia", 23, "/ma", "Enemy"),
                record("Shared", 2, "/ma", "Enemy"),
                record("Sleepga II", 274, "/ma", "Enemy"),
                record("Sleepga II", 275, "/ma", "Enemy"),
            ],
        )
    }

    #[test]
    fn ability_only_names_resolve_as_abilities() {
        let store = store();
        let provoke = ActionResolver::new(&store).resolve("Provoke").unwrap();
        assert!(provoke.is_ability);
        assert!(!provoke.is_spell);
        assert_eq!(provoke.command_string(), "/ja \"Provoke\" <t>");
    }

    #[test]
    fn spell_only_names_resolve_as_spells() {
        let store = store();
        let dia = ActionResolver::new(&store).resolve("Dia").unwrap();
        assert!(dia.is_spell);
        assert!(!dia.is_ability);
        assert_eq!(dia.id, 23);
    }

    #[test]
    fn abilities_take_precedence_over_spells() {
        let store = store();
        let shared = ActionResolver::new(&store).resolve("Shared").unwrap();
        assert!(shared.is_ability);
        assert_eq!(shared.id, 1);
        assert_eq!(shared.prefix, "/ja");
    }

    #[test]
    fn unknown_names_yield_the_sentinel() {
        let store = store();
        let missing = ActionResolver::new(&store).resolve("Meteor").unwrap();
        assert!(!missing.is_valid_name());
        assert_eq!(missing, ActionDescriptor::not_found());
    }

    #[test]
    fn duplicate_names_are_errors_not_picks() {
        let store = store();
        let err = ActionResolver::new(&store).resolve("Sleepga II").unwrap_err();
        assert!(err.is_ambiguous());
    }

    #[test]
    fn spell_ambiguity_fires_even_when_the_ability_matches() {
        let store = CatalogStore::from_records(
            vec![record("Shared", 1, "/ja", "Self")],
            vec![record("Shared", 2, "/ma", "Enemy"), record("Shared", 3, "/ma", "Enemy")],
        );
        let err = ActionResolver::new(&store).resolve("Shared").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::AmbiguousEntry {
                tier: Tier::Spell,
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn ability_ambiguity_does_not_fall_back_to_the_spell() {
        let store = CatalogStore::from_records(
            vec![record("Ward", 1, "/ja", "Self"), record("Ward", 2, "/ja", "Self")],
            vec![record("Ward", 3, "/ma", "Enemy")],
        );
        let err = ActionResolver::new(&store).resolve("Ward").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::AmbiguousEntry {
                tier: Tier::Ability,
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn resolution_is_repeatable() {
        let store = store();
        let resolver = ActionResolver::new(&store);
        assert_eq!(resolver.resolve("Dia").unwrap(), resolver.resolve("Dia").unwrap());
    }

    #[test]
    fn resolve_many_keeps_each_outcome() {
        let store = store();
        let results = ActionResolver::new(&store).resolve_many(["Dia", "Sleepga II", "Meteor"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "Dia");
        assert!(results[0].1.as_ref().unwrap().is_valid_name());
        assert!(results[1].1.is_err());
        assert!(!results[2].1.as_ref().unwrap().is_valid_name());
    }
}
