//! World query interfaces consumed by the decision engines.
//!
//! The engines never own the world. They observe it through these
//! narrow read-only traits, implemented by the host session (or by
//! scripted fakes in tests). Splitting the traits keeps each concern
//! independently replaceable: spatial indexing, unit bookkeeping and
//! movement tracking all live outside this crate.

use crate::ships::{MovementState, PlayerId, Ship, ShipId, ShipRegistry};

/// Read access to the unit registry.
pub trait ShipStore {
    /// Look up a ship. `None` for destroyed or unknown handles.
    fn ship(&self, id: ShipId) -> Option<&Ship>;

    /// Handles of all live ships owned by a player, in deterministic order.
    fn ships_of(&self, owner: PlayerId) -> Vec<ShipId>;
}

impl ShipStore for ShipRegistry {
    fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.get(id)
    }

    fn ships_of(&self, owner: PlayerId) -> Vec<ShipId> {
        self.owned_by(owner)
    }
}

/// Spatial lookup of vessels around a ship group.
pub trait SpatialQuery {
    /// Ships near any member of `group`, excluding the group itself.
    fn find_ships_near_group(&self, group: &[ShipId]) -> Vec<ShipId>;
}

/// Read-only access to per-ship movement state.
///
/// A destroyed or untracked ship reads as `None`, never as an error.
pub trait MovementStates {
    /// Current movement state of a ship.
    fn movement_state(&self, ship: ShipId) -> Option<MovementState>;
}
