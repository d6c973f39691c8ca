//! Ship identity, classification and storage.
//!
//! Ships are owned by the [`ShipRegistry`]; every other part of the
//! core only holds [`ShipId`] handles. Ids are generational: once a
//! ship is destroyed its id can never be observed again, even if the
//! underlying slot is reused. That property is what lets per-ship side
//! tables (combat state, movement state) forget destroyed ships without
//! any manual cleanup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an AI player (ship owner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u16);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Combat-relevant ship classification.
///
/// The decision engines branch on this tag when splitting nearby
/// hostiles into threat classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShipClass {
    /// Regular warship - the higher threat class.
    Fighting,
    /// Pirate raider - hostile but handled after regular warships.
    Pirate,
    /// Merchant vessel - never a threat, sometimes prey.
    Trade,
    /// Anything else (fishing boats, ferries).
    #[default]
    Other,
}

/// External per-ship movement state, consumed read-only.
///
/// Distinct from the core's own [`ShipCombatState`](crate::combat_state::ShipCombatState):
/// movement state describes what the ship is currently doing, combat
/// state describes the stance the behavior layer has put it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MovementState {
    /// Holding position with no orders.
    #[default]
    Idle,
    /// Wandering the map at random.
    MovingRandom,
    /// Pursuing another vessel.
    ChasingShip,
    /// Executing a fleet mission leg.
    OnMission,
    /// Actively engaged by the behavior layer.
    InCombat,
}

/// Generational handle to a ship.
///
/// Compares equal only when both slot index and generation match, so a
/// handle to a destroyed ship is distinct from a handle to any ship
/// later spawned into the same slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ShipId {
    /// Slot index in the registry.
    pub index: u32,
    /// Generation the slot had when this ship was spawned.
    pub generation: u32,
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship {}v{}", self.index, self.generation)
    }
}

/// A vessel in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Handle of this ship.
    pub id: ShipId,
    /// Owning player.
    pub owner: PlayerId,
    /// Combat classification.
    pub class: ShipClass,
}

/// One arena slot: the generation counter survives the ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Slot {
    generation: u32,
    ship: Option<Ship>,
}

/// Generational arena of all ships in the world.
///
/// Lookup by a stale id (destroyed ship, or reused slot) returns
/// `None`. Iteration is in slot order, which is deterministic for a
/// given spawn/despawn history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl ShipRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a ship and return its handle.
    pub fn spawn(&mut self, owner: PlayerId, class: ShipClass) -> ShipId {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    ship: None,
                });
                u32::try_from(self.slots.len() - 1).expect("ship slot count exceeds u32")
            }
        };
        let slot = &mut self.slots[index as usize];
        let id = ShipId {
            index,
            generation: slot.generation,
        };
        slot.ship = Some(Ship { id, owner, class });
        self.live += 1;
        id
    }

    /// Destroy a ship, returning its last known data.
    ///
    /// The slot's generation is bumped so the old id reads as absent
    /// from then on. Destroying an already-destroyed ship is a no-op.
    pub fn despawn(&mut self, id: ShipId) -> Option<Ship> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation || slot.ship.is_none() {
            return None;
        }
        let ship = slot.ship.take();
        slot.generation += 1;
        self.free.push(id.index);
        self.live -= 1;
        ship
    }

    /// Look up a ship by handle. `None` for destroyed or unknown ships.
    #[must_use]
    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.ship.as_ref()
    }

    /// Whether the handle refers to a live ship.
    #[must_use]
    pub fn contains(&self, id: ShipId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate live ships in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Ship> {
        self.slots.iter().filter_map(|slot| slot.ship.as_ref())
    }

    /// Handles of all live ships owned by a player, in slot order.
    #[must_use]
    pub fn owned_by(&self, owner: PlayerId) -> Vec<ShipId> {
        self.iter()
            .filter(|ship| ship.owner == owner)
            .map(|ship| ship.id)
            .collect()
    }

    /// Number of live ships.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no ships are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}
