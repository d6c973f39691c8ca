//! Fleet missions and their combat lifecycle.
//!
//! A fleet mission is an ordered group of ships with a
//! continue-or-abort lifecycle. The decision engines only ever read the
//! in-combat listing and invoke the two lifecycle operations; mission
//! storage and progression belong to the host. [`MissionBoard`] is the
//! reference implementation used by the session and by tests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::ships::ShipId;

/// Identifier of a fleet mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MissionId(pub u32);

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mission {}", self.0)
    }
}

/// Lifecycle phase of a fleet mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// Proceeding toward its objective.
    Sailing,
    /// Interrupted by nearby hostiles; the decision engine watches it.
    InCombat,
    /// Ended; the fleet is destroyed or disbanded.
    Aborted,
}

/// A tracked multi-ship operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetMission {
    id: MissionId,
    ships: Vec<ShipId>,
    phase: MissionPhase,
}

impl FleetMission {
    /// The mission's identifier.
    #[must_use]
    pub fn id(&self) -> MissionId {
        self.id
    }

    /// Current fleet ships, in assignment order.
    #[must_use]
    pub fn ships(&self) -> &[ShipId] {
        &self.ships
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MissionPhase {
        self.phase
    }
}

/// Mission lifecycle interface consumed by the fleet decision engine.
pub trait MissionRegistry {
    /// Missions currently flagged in-combat, in deterministic order.
    fn missions_in_combat(&self) -> Vec<MissionId>;

    /// Current fleet ships of a mission. Empty for unknown missions.
    fn fleet_ships(&self, mission: MissionId) -> Vec<ShipId>;

    /// Combat locally resolved; the mission proceeds.
    fn continue_mission(&mut self, mission: MissionId) -> Result<()>;

    /// The fleet is destroyed; the mission ends.
    fn abort_mission(&mut self, mission: MissionId) -> Result<()>;
}

/// Reference mission storage.
///
/// Keyed by a `BTreeMap` so every listing is in mission-id order
/// regardless of launch history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionBoard {
    missions: BTreeMap<MissionId, FleetMission>,
    next_id: u32,
}

impl MissionBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch a new mission over a non-empty ship group.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyFleet`] if `ships` is empty.
    pub fn launch(&mut self, ships: Vec<ShipId>) -> Result<MissionId> {
        if ships.is_empty() {
            return Err(CoreError::EmptyFleet);
        }
        let id = MissionId(self.next_id);
        self.next_id += 1;
        self.missions.insert(
            id,
            FleetMission {
                id,
                ships,
                phase: MissionPhase::Sailing,
            },
        );
        Ok(id)
    }

    /// Flag a mission as interrupted by combat.
    ///
    /// # Errors
    /// Returns [`CoreError::MissionNotFound`] for unknown missions.
    pub fn mark_in_combat(&mut self, mission: MissionId) -> Result<()> {
        let entry = self
            .missions
            .get_mut(&mission)
            .ok_or(CoreError::MissionNotFound(mission))?;
        entry.phase = MissionPhase::InCombat;
        Ok(())
    }

    /// Look up a mission.
    #[must_use]
    pub fn mission(&self, mission: MissionId) -> Option<&FleetMission> {
        self.missions.get(&mission)
    }

    /// Drop a destroyed ship from every fleet it belongs to.
    pub fn remove_ship(&mut self, ship: ShipId) {
        for entry in self.missions.values_mut() {
            entry.ships.retain(|&member| member != ship);
        }
    }
}

impl MissionRegistry for MissionBoard {
    fn missions_in_combat(&self) -> Vec<MissionId> {
        self.missions
            .values()
            .filter(|mission| mission.phase == MissionPhase::InCombat)
            .map(|mission| mission.id)
            .collect()
    }

    fn fleet_ships(&self, mission: MissionId) -> Vec<ShipId> {
        self.missions
            .get(&mission)
            .map(|entry| entry.ships.clone())
            .unwrap_or_default()
    }

    fn continue_mission(&mut self, mission: MissionId) -> Result<()> {
        let entry = self
            .missions
            .get_mut(&mission)
            .ok_or(CoreError::MissionNotFound(mission))?;
        entry.phase = MissionPhase::Sailing;
        Ok(())
    }

    fn abort_mission(&mut self, mission: MissionId) -> Result<()> {
        let entry = self
            .missions
            .get_mut(&mission)
            .ok_or(CoreError::MissionNotFound(mission))?;
        entry.phase = MissionPhase::Aborted;
        Ok(())
    }
}
