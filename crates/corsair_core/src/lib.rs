//! # Corsair Core
//!
//! Per-tick tactical combat decision core for an RTS AI player.
//!
//! Each simulation step, a decision engine scans the world for nearby
//! vessels, classifies them by threat, computes a relative power
//! balance, and emits declarative action requests ("attack", "idle",
//! "continue/abort mission") to an external behavior-execution layer.
//! The engine never fights, moves or damages anything itself.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No system randomness
//! - No floating-point math in decision paths (uses fixed-point)
//!
//! The control model is self-healing: every decision is re-derived
//! from the live world snapshot each tick, so no cross-tick state can
//! go stale and no partial-tick cleanup exists.
//!
//! ## Crate Structure
//!
//! - [`ships`] - Ship identity, classification, generational registry
//! - [`combat_state`] - Weak per-ship combat stance table
//! - [`filters`] - Composable hostility/class predicates
//! - [`power`] - Power balance evaluation
//! - [`missions`] - Fleet missions and their combat lifecycle
//! - [`behavior`] - Action requests and the behavior-layer sink
//! - [`engine`] - The fleet and solo decision engines
//! - [`world`] - Query traits the host session implements

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod behavior;
pub mod combat_state;
pub mod engine;
pub mod error;
pub mod filters;
pub mod math;
pub mod missions;
pub mod power;
pub mod ships;
pub mod world;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::behavior::{ActionRequest, ActionSink, ActionType, Environment, Trigger};
    pub use crate::combat_state::{CombatStateTracker, ShipCombatState};
    pub use crate::engine::{
        CombatDecisionEngine, Lookout, SoloCombatDecisionEngine, TacticalContext,
    };
    pub use crate::error::{CoreError, Result};
    pub use crate::filters::{filter_ships, DiplomacyView, FilterRule};
    pub use crate::math::Fixed;
    pub use crate::missions::{
        FleetMission, MissionBoard, MissionId, MissionPhase, MissionRegistry,
    };
    pub use crate::power::{ClassWeightEvaluator, PowerBalance, PowerBalanceEvaluator};
    pub use crate::ships::{MovementState, PlayerId, Ship, ShipClass, ShipId, ShipRegistry};
    pub use crate::world::{MovementStates, ShipStore, SpatialQuery};
}
