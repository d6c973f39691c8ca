//! Composable ship filtering predicates.
//!
//! Rules are small values combined with AND semantics by
//! [`filter_ships`], independently testable from the engines. The
//! hostility rule consults diplomacy through [`DiplomacyView`]; the
//! class rule only looks at the ship itself.

use serde::{Deserialize, Serialize};

use crate::ships::{PlayerId, Ship, ShipClass, ShipId};
use crate::world::ShipStore;

/// Diplomacy lookup consumed by the hostility rule.
///
/// Implementations decide what "hostile" means; the core only requires
/// that a player is never hostile to themselves.
pub trait DiplomacyView {
    /// Whether players `a` and `b` are at war.
    fn is_hostile(&self, a: PlayerId, b: PlayerId) -> bool;
}

/// A single filtering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterRule {
    /// Keep ships whose owner is hostile to the filtering player.
    Hostile,
    /// Keep ships of one combat class.
    OfClass(ShipClass),
}

impl FilterRule {
    /// Whether `ship` passes this rule from `owner`'s point of view.
    pub fn matches<D>(self, owner: PlayerId, ship: &Ship, diplomacy: &D) -> bool
    where
        D: DiplomacyView + ?Sized,
    {
        match self {
            FilterRule::Hostile => diplomacy.is_hostile(owner, ship.owner),
            FilterRule::OfClass(class) => ship.class == class,
        }
    }
}

/// Filter a ship group through a conjunction of rules.
///
/// Keeps the input order. Ships that no longer exist are dropped
/// silently; a freshly destroyed vessel is an ordinary occurrence
/// between query and filter, not a fault.
pub fn filter_ships<W, D>(
    owner: PlayerId,
    world: &W,
    diplomacy: &D,
    ships: &[ShipId],
    rules: &[FilterRule],
) -> Vec<ShipId>
where
    W: ShipStore + ?Sized,
    D: DiplomacyView + ?Sized,
{
    ships
        .iter()
        .copied()
        .filter(|&id| {
            world.ship(id).is_some_and(|ship| {
                rules
                    .iter()
                    .all(|rule| rule.matches(owner, ship, diplomacy))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::ships::ShipRegistry;

    /// Symmetric war table for tests.
    struct WarTable(HashSet<(PlayerId, PlayerId)>);

    impl WarTable {
        fn new(pairs: &[(PlayerId, PlayerId)]) -> Self {
            let mut set = HashSet::new();
            for &(a, b) in pairs {
                set.insert((a, b));
                set.insert((b, a));
            }
            Self(set)
        }
    }

    impl DiplomacyView for WarTable {
        fn is_hostile(&self, a: PlayerId, b: PlayerId) -> bool {
            a != b && self.0.contains(&(a, b))
        }
    }

    #[test]
    fn test_hostile_rule_excludes_own_and_neutral_ships() {
        let mut registry = ShipRegistry::new();
        let own = registry.spawn(PlayerId(1), ShipClass::Fighting);
        let neutral = registry.spawn(PlayerId(2), ShipClass::Fighting);
        let enemy = registry.spawn(PlayerId(3), ShipClass::Fighting);
        let wars = WarTable::new(&[(PlayerId(1), PlayerId(3))]);

        let result = filter_ships(
            PlayerId(1),
            &registry,
            &wars,
            &[own, neutral, enemy],
            &[FilterRule::Hostile],
        );
        assert_eq!(result, vec![enemy]);
    }

    #[test]
    fn test_rules_combine_with_and_semantics() {
        let mut registry = ShipRegistry::new();
        let hostile_trader = registry.spawn(PlayerId(2), ShipClass::Trade);
        let hostile_fighter = registry.spawn(PlayerId(2), ShipClass::Fighting);
        let neutral_fighter = registry.spawn(PlayerId(3), ShipClass::Fighting);
        let wars = WarTable::new(&[(PlayerId(1), PlayerId(2))]);

        let result = filter_ships(
            PlayerId(1),
            &registry,
            &wars,
            &[hostile_trader, hostile_fighter, neutral_fighter],
            &[FilterRule::OfClass(ShipClass::Fighting), FilterRule::Hostile],
        );
        assert_eq!(result, vec![hostile_fighter]);
    }

    #[test]
    fn test_destroyed_ships_are_dropped_silently() {
        let mut registry = ShipRegistry::new();
        let gone = registry.spawn(PlayerId(2), ShipClass::Pirate);
        let alive = registry.spawn(PlayerId(2), ShipClass::Pirate);
        registry.despawn(gone);
        let wars = WarTable::new(&[(PlayerId(1), PlayerId(2))]);

        let result = filter_ships(
            PlayerId(1),
            &registry,
            &wars,
            &[gone, alive],
            &[FilterRule::OfClass(ShipClass::Pirate)],
        );
        assert_eq!(result, vec![alive]);
    }

    #[test]
    fn test_empty_rule_set_keeps_every_live_ship() {
        let mut registry = ShipRegistry::new();
        let a = registry.spawn(PlayerId(1), ShipClass::Other);
        let b = registry.spawn(PlayerId(2), ShipClass::Trade);
        let wars = WarTable::new(&[]);

        let result = filter_ships(PlayerId(1), &registry, &wars, &[a, b], &[]);
        assert_eq!(result, vec![a, b]);
    }

    proptest! {
        /// Conjoined rules always yield the intersection of the rules
        /// applied separately, in input order.
        #[test]
        fn prop_conjunction_is_intersection(
            classes in proptest::collection::vec(0u8..4, 1..20),
            owners in proptest::collection::vec(1u16..5, 1..20),
        ) {
            let mut registry = ShipRegistry::new();
            let wars = WarTable::new(&[(PlayerId(1), PlayerId(2)), (PlayerId(1), PlayerId(3))]);
            let ids: Vec<ShipId> = classes
                .iter()
                .zip(owners.iter().cycle())
                .map(|(&class, &owner)| {
                    let class = match class {
                        0 => ShipClass::Fighting,
                        1 => ShipClass::Pirate,
                        2 => ShipClass::Trade,
                        _ => ShipClass::Other,
                    };
                    registry.spawn(PlayerId(owner), class)
                })
                .collect();

            let rules = [FilterRule::Hostile, FilterRule::OfClass(ShipClass::Pirate)];
            let both = filter_ships(PlayerId(1), &registry, &wars, &ids, &rules);
            let hostile = filter_ships(PlayerId(1), &registry, &wars, &ids, &rules[..1]);
            let pirates = filter_ships(PlayerId(1), &registry, &wars, &ids, &rules[1..]);

            let pirate_set: HashSet<ShipId> = pirates.into_iter().collect();
            let expected: Vec<ShipId> = hostile
                .into_iter()
                .filter(|id| pirate_set.contains(id))
                .collect();
            prop_assert_eq!(both, expected);
        }
    }
}
