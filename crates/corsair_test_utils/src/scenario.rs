//! Scripted world fixture for decision-engine tests.
//!
//! [`ScenarioWorld`] implements every trait the engines consume, with
//! fully scripted inputs (sighting lists, war pairs, movement states,
//! optional fixed power balance) and full recording of outputs (action
//! requests, lifecycle calls, balance evaluations). Tests set up a
//! snapshot, run one tick, then assert on the recordings.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use corsair_core::behavior::{ActionRequest, ActionSink};
use corsair_core::error::Result;
use corsair_core::filters::DiplomacyView;
use corsair_core::missions::{MissionBoard, MissionId, MissionRegistry};
use corsair_core::power::{ClassWeightEvaluator, PowerBalance, PowerBalanceEvaluator};
use corsair_core::ships::{MovementState, PlayerId, Ship, ShipClass, ShipId, ShipRegistry};
use corsair_core::world::{MovementStates, ShipStore, SpatialQuery};

/// A scripted world snapshot plus output recordings.
#[derive(Debug, Clone, Default)]
pub struct ScenarioWorld {
    /// Live ships.
    pub ships: ShipRegistry,
    /// Fleet missions.
    pub missions: MissionBoard,
    nearby: HashMap<ShipId, Vec<ShipId>>,
    wars: HashSet<(PlayerId, PlayerId)>,
    movement: HashMap<ShipId, MovementState>,
    scripted_balance: Option<PowerBalance>,
    /// Every action request the engines emitted, in order.
    pub requests: Vec<ActionRequest>,
    /// Missions continued this run, in call order.
    pub continued: Vec<MissionId>,
    /// Missions aborted this run, in call order.
    pub aborted: Vec<MissionId>,
    /// Every power balance evaluation (group A, group B), in call order.
    pub balance_calls: RefCell<Vec<(Vec<ShipId>, Vec<ShipId>)>>,
}

impl ScenarioWorld {
    /// Create an empty scripted world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a ship. Movement state defaults to `Idle`.
    pub fn spawn(&mut self, owner: PlayerId, class: ShipClass) -> ShipId {
        let id = self.ships.spawn(owner, class);
        self.movement.insert(id, MovementState::Idle);
        id
    }

    /// Destroy a ship everywhere: registry, movement table, fleets.
    pub fn destroy_ship(&mut self, id: ShipId) {
        self.ships.despawn(id);
        self.movement.remove(&id);
        self.missions.remove_ship(id);
    }

    /// Script the sighting list returned around `ship`.
    pub fn set_nearby(&mut self, ship: ShipId, sighted: Vec<ShipId>) {
        self.nearby.insert(ship, sighted);
    }

    /// Declare two players at war (symmetric).
    pub fn make_hostile(&mut self, a: PlayerId, b: PlayerId) {
        self.wars.insert((a, b));
        self.wars.insert((b, a));
    }

    /// Override a ship's movement state.
    pub fn set_movement_state(&mut self, ship: ShipId, state: MovementState) {
        self.movement.insert(ship, state);
    }

    /// Launch a mission over `ships` and flag it in-combat.
    ///
    /// # Panics
    /// Panics on an empty ship group; fixture misuse, not a scenario.
    pub fn launch_mission_in_combat(&mut self, ships: Vec<ShipId>) -> MissionId {
        let id = self.missions.launch(ships).expect("fixture fleet is empty");
        self.missions
            .mark_in_combat(id)
            .expect("freshly launched mission must exist");
        id
    }

    /// Make every balance evaluation return a fixed value.
    pub fn script_balance(&mut self, balance: PowerBalance) {
        self.scripted_balance = Some(balance);
    }
}

impl ShipStore for ScenarioWorld {
    fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    fn ships_of(&self, owner: PlayerId) -> Vec<ShipId> {
        self.ships.owned_by(owner)
    }
}

impl SpatialQuery for ScenarioWorld {
    fn find_ships_near_group(&self, group: &[ShipId]) -> Vec<ShipId> {
        let members: HashSet<ShipId> = group.iter().copied().collect();
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for member in group {
            for &sighted in self.nearby.get(member).into_iter().flatten() {
                if members.contains(&sighted) || !self.ships.contains(sighted) {
                    continue;
                }
                if seen.insert(sighted) {
                    result.push(sighted);
                }
            }
        }
        result
    }
}

impl MovementStates for ScenarioWorld {
    fn movement_state(&self, ship: ShipId) -> Option<MovementState> {
        if !self.ships.contains(ship) {
            return None;
        }
        self.movement.get(&ship).copied()
    }
}

impl DiplomacyView for ScenarioWorld {
    fn is_hostile(&self, a: PlayerId, b: PlayerId) -> bool {
        a != b && self.wars.contains(&(a, b))
    }
}

impl PowerBalanceEvaluator for ScenarioWorld {
    fn calculate_power_balance(&self, group_a: &[ShipId], group_b: &[ShipId]) -> PowerBalance {
        self.balance_calls
            .borrow_mut()
            .push((group_a.to_vec(), group_b.to_vec()));
        self.scripted_balance
            .unwrap_or_else(|| ClassWeightEvaluator::balance(&self.ships, group_a, group_b))
    }
}

impl MissionRegistry for ScenarioWorld {
    fn missions_in_combat(&self) -> Vec<MissionId> {
        self.missions.missions_in_combat()
    }

    fn fleet_ships(&self, mission: MissionId) -> Vec<ShipId> {
        let mut ships = self.missions.fleet_ships(mission);
        ships.retain(|&ship| self.ships.contains(ship));
        ships
    }

    fn continue_mission(&mut self, mission: MissionId) -> Result<()> {
        self.missions.continue_mission(mission)?;
        self.continued.push(mission);
        Ok(())
    }

    fn abort_mission(&mut self, mission: MissionId) -> Result<()> {
        self.missions.abort_mission(mission)?;
        self.aborted.push(mission);
        Ok(())
    }
}

impl ActionSink for ScenarioWorld {
    fn request_action(&mut self, request: ActionRequest) {
        self.requests.push(request);
    }
}
