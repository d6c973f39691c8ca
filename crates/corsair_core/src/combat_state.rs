//! Per-ship combat stance, tracked in a weak side table.
//!
//! The tracker never keeps a destroyed ship alive and never needs a
//! cleanup call when one dies: entries are keyed by generational
//! [`ShipId`], so a destroyed ship's entry can never be observed again.
//! Reads are liveness-checked against the registry; writes drop stale
//! entries as a side effect, keeping the table bounded by the live
//! ship count.
//!
//! The decision engines only read this table. Writing stances is the
//! behavior-execution layer's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ships::{ShipId, ShipRegistry};

/// Combat stance of a single ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShipCombatState {
    /// Not engaged.
    #[default]
    Idle,
    /// Committed to an attack.
    Attacking,
    /// Withdrawing from an engagement.
    Fleeing,
}

/// Weak association from ships to their combat stance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatStateTracker {
    states: HashMap<ShipId, ShipCombatState>,
}

impl CombatStateTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stance of a ship, or `None` if the ship is destroyed or untracked.
    #[must_use]
    pub fn state(&self, registry: &ShipRegistry, id: ShipId) -> Option<ShipCombatState> {
        if !registry.contains(id) {
            return None;
        }
        self.states.get(&id).copied()
    }

    /// Record a stance for a live ship. Ignored for destroyed ships.
    pub fn set(&mut self, registry: &ShipRegistry, id: ShipId, state: ShipCombatState) {
        // Writes also sweep out entries whose ships are gone.
        self.states.retain(|tracked, _| registry.contains(*tracked));
        if registry.contains(id) {
            self.states.insert(id, state);
        }
    }

    /// Iterate tracked stances of live ships, in id order.
    pub fn iter_live<'a>(
        &'a self,
        registry: &'a ShipRegistry,
    ) -> impl Iterator<Item = (ShipId, ShipCombatState)> + 'a {
        let mut entries: Vec<(ShipId, ShipCombatState)> = self
            .states
            .iter()
            .filter(|(id, _)| registry.contains(**id))
            .map(|(id, state)| (*id, *state))
            .collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries.into_iter()
    }
}
