//! The per-tick tactical decision engines.
//!
//! Two strategies share one [`Lookout`] interface and are selected at
//! construction: [`CombatDecisionEngine`] drives mission-tracked
//! fleets, [`SoloCombatDecisionEngine`] drives individually-owned
//! ships for opponents without a fleet abstraction (pirates).
//!
//! The engines are stateless per tick: every decision is re-derived
//! from a fresh world snapshot, so a wrong or omitted decision in one
//! tick is corrected by the next. At most one action request is
//! emitted per ship group per tick, and the request channel is
//! fire-and-forget.

use crate::behavior::{ActionRequest, ActionSink, ActionType, Environment, Trigger};
use crate::combat_state::CombatStateTracker;
use crate::filters::{filter_ships, DiplomacyView, FilterRule};
use crate::missions::MissionRegistry;
use crate::power::PowerBalanceEvaluator;
use crate::ships::{MovementState, PlayerId, ShipClass, ShipId};
use crate::world::{MovementStates, ShipStore, SpatialQuery};

/// Everything a decision engine needs from its host session.
///
/// Blanket-implemented for any type providing the individual query and
/// sink traits; hosts implement those, tests use a scripted fake.
pub trait TacticalContext:
    ShipStore
    + SpatialQuery
    + MovementStates
    + DiplomacyView
    + PowerBalanceEvaluator
    + MissionRegistry
    + ActionSink
{
}

impl<T> TacticalContext for T where
    T: ShipStore
        + SpatialQuery
        + MovementStates
        + DiplomacyView
        + PowerBalanceEvaluator
        + MissionRegistry
        + ActionSink
{
}

/// Scan-and-decide interface shared by both strategies.
pub trait Lookout {
    /// One scan-and-decide pass over the current world snapshot.
    fn lookout(&mut self);

    /// Advance one simulation step. Runs synchronously to completion.
    fn tick(&mut self) {
        self.lookout();
    }
}

/// Compute, log and dispatch an offensive engagement request.
///
/// Shared plumbing of both strategies. The balance is observational
/// here: it rides along in the request for the behavior layer to judge.
fn engage<C: TacticalContext>(
    ctx: &mut C,
    owner: PlayerId,
    trigger: Trigger,
    ship_group: Vec<ShipId>,
    enemies: Vec<ShipId>,
) {
    let balance = ctx.calculate_power_balance(&ship_group, &enemies);
    let enemy_owner = enemies.first().and_then(|&id| ctx.ship(id)).map(|s| s.owner);
    tracing::debug!(
        player = %owner,
        enemy = ?enemy_owner,
        power_balance = %balance,
        %trigger,
        "hostiles in sight"
    );
    ctx.request_action(ActionRequest {
        action_type: ActionType::Offensive,
        trigger,
        environment: Environment::engagement(ship_group, enemies, balance),
    });
}

/// Fleet-oriented decision engine.
///
/// Watches every mission currently flagged in-combat, resolves or
/// aborts it, and requests the appropriate action for its fleet.
/// Bound at construction to one owning player and one host context.
#[derive(Debug)]
pub struct CombatDecisionEngine<C> {
    owner: PlayerId,
    ctx: C,
    combat_states: CombatStateTracker,
}

impl<C: TacticalContext> CombatDecisionEngine<C> {
    /// Create an engine for one owning player.
    pub fn new(owner: PlayerId, ctx: C) -> Self {
        Self {
            owner,
            ctx,
            combat_states: CombatStateTracker::new(),
        }
    }

    /// The owning player this engine decides for.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Read access to the host context.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Reclaim the host context, consuming the engine.
    pub fn into_context(self) -> C {
        self.ctx
    }

    /// Per-ship combat stances, read-only for this engine.
    pub fn combat_states(&self) -> &CombatStateTracker {
        &self.combat_states
    }

    /// Write access to the stance table for the behavior layer.
    pub fn combat_states_mut(&mut self) -> &mut CombatStateTracker {
        &mut self.combat_states
    }

    /// Whether every ship of the group is individually idle.
    ///
    /// Vacuously true for an empty group; callers handle that case
    /// before asking.
    fn all_idle(&self, ship_group: &[ShipId]) -> bool {
        ship_group
            .iter()
            .all(|&ship| self.ctx.movement_state(ship) == Some(MovementState::Idle))
    }
}

impl<C: TacticalContext> Lookout for CombatDecisionEngine<C> {
    fn lookout(&mut self) {
        for mission in self.ctx.missions_in_combat() {
            let ship_group = self.ctx.fleet_ships(mission);

            let nearby = self.ctx.find_ships_near_group(&ship_group);
            let hostiles = filter_ships(
                self.owner,
                &self.ctx,
                &self.ctx,
                &nearby,
                &[FilterRule::Hostile],
            );
            let pirates = filter_ships(
                self.owner,
                &self.ctx,
                &self.ctx,
                &hostiles,
                &[FilterRule::OfClass(ShipClass::Pirate)],
            );
            let fighting_ships = filter_ships(
                self.owner,
                &self.ctx,
                &self.ctx,
                &hostiles,
                &[FilterRule::OfClass(ShipClass::Fighting)],
            );

            // Resolution check comes before the decision step.
            if ship_group.is_empty() {
                // Fleet destroyed. No action request for this mission.
                if let Err(err) = self.ctx.abort_mission(mission) {
                    tracing::warn!(%mission, %err, "abort of emptied fleet failed");
                }
                continue;
            }
            if fighting_ships.is_empty() && pirates.is_empty() {
                // Combat locally resolved; the mission proceeds.
                if let Err(err) = self.ctx.continue_mission(mission) {
                    tracing::warn!(%mission, %err, "continue of resolved mission failed");
                }
            }

            // Decision, strict priority: warships pre-empt pirates even
            // when both are in sight.
            if !fighting_ships.is_empty() {
                engage(
                    &mut self.ctx,
                    self.owner,
                    Trigger::FightingShipsInSight,
                    ship_group,
                    fighting_ships,
                );
            } else if !pirates.is_empty() {
                engage(
                    &mut self.ctx,
                    self.owner,
                    Trigger::PiratesInSight,
                    ship_group,
                    pirates,
                );
            } else if self.all_idle(&ship_group) {
                // Idle only on unanimous idleness; a partially busy
                // fleet keeps executing its prior orders untouched.
                self.ctx.request_action(ActionRequest {
                    action_type: ActionType::Idle,
                    trigger: Trigger::NoOneInSight,
                    environment: Environment::group(ship_group),
                });
            }
        }
    }
}

/// Per-ship decision engine for opponents without fleet missions.
///
/// Scans around each individually-owned ship. Non-hostile vessels are
/// opportunistic prey for a wandering, chasing or idle ship, which is
/// what makes this the raider strategy.
#[derive(Debug)]
pub struct SoloCombatDecisionEngine<C> {
    owner: PlayerId,
    ctx: C,
    combat_states: CombatStateTracker,
}

impl<C: TacticalContext> SoloCombatDecisionEngine<C> {
    /// Create an engine for one owning player.
    pub fn new(owner: PlayerId, ctx: C) -> Self {
        Self {
            owner,
            ctx,
            combat_states: CombatStateTracker::new(),
        }
    }

    /// The owning player this engine decides for.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Read access to the host context.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Reclaim the host context, consuming the engine.
    pub fn into_context(self) -> C {
        self.ctx
    }

    /// Per-ship combat stances, read-only for this engine.
    pub fn combat_states(&self) -> &CombatStateTracker {
        &self.combat_states
    }

    /// Write access to the stance table for the behavior layer.
    pub fn combat_states_mut(&mut self) -> &mut CombatStateTracker {
        &mut self.combat_states
    }
}

impl<C: TacticalContext> Lookout for SoloCombatDecisionEngine<C> {
    fn lookout(&mut self) {
        for ship in self.ctx.ships_of(self.owner) {
            // A ship without a tracked movement state was destroyed
            // between query and decision; skip it silently.
            let Some(state) = self.ctx.movement_state(ship) else {
                continue;
            };

            let nearby = self.ctx.find_ships_near_group(&[ship]);
            if nearby.is_empty() {
                // Nothing around: prompt wandering unless already at it.
                if state != MovementState::MovingRandom {
                    self.ctx.request_action(ActionRequest {
                        action_type: ActionType::Idle,
                        trigger: Trigger::NoOneInSight,
                        environment: Environment::group(vec![ship]),
                    });
                }
                continue;
            }

            let fighting_ships = filter_ships(
                self.owner,
                &self.ctx,
                &self.ctx,
                &nearby,
                &[FilterRule::OfClass(ShipClass::Fighting), FilterRule::Hostile],
            );

            if !fighting_ships.is_empty() {
                engage(
                    &mut self.ctx,
                    self.owner,
                    Trigger::FightingShipsInSight,
                    vec![ship],
                    fighting_ships,
                );
            } else if matches!(
                state,
                MovementState::MovingRandom | MovementState::ChasingShip | MovementState::Idle
            ) {
                // No threats: everything nearby is of opportunistic
                // interest, hostile or not, so the set goes unfiltered.
                self.ctx.request_action(ActionRequest {
                    action_type: ActionType::Idle,
                    trigger: Trigger::TradingShipsInSight,
                    environment: Environment::sighting(vec![ship], nearby),
                });
            }
            // Any other active state: leave the ship alone this tick.
        }
    }
}
