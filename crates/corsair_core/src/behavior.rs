//! Action requests dispatched to the behavior-execution layer.
//!
//! The decision engines never act on the world themselves. Each
//! decision becomes one [`ActionRequest`] pushed into an [`ActionSink`]
//! and forgotten: the core does not await, retry or observe the
//! outcome. The sink is the seam between deciding and doing.

use serde::{Deserialize, Serialize};

use crate::power::PowerBalance;
use crate::ships::ShipId;

/// Broad category of a requested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Engage the reported enemies.
    Offensive,
    /// Nothing to fight; pick an idle behavior.
    Idle,
}

/// Named trigger identifying why an action was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// Hostile regular warships spotted near the group.
    FightingShipsInSight,
    /// Hostile pirates spotted, no warships present.
    PiratesInSight,
    /// Non-threatening vessels nearby, worth opportunistic interest.
    TradingShipsInSight,
    /// Nothing of note nearby.
    NoOneInSight,
}

impl Trigger {
    /// Stable wire name of this trigger.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Trigger::FightingShipsInSight => "fighting_ships_in_sight",
            Trigger::PiratesInSight => "pirates_in_sight",
            Trigger::TradingShipsInSight => "trading_ships_in_sight",
            Trigger::NoOneInSight => "no_one_in_sight",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient context payload of one action request.
///
/// Built fresh for every decision from the current world snapshot and
/// handed off inside the request; the core never stores one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// The acting ship group.
    pub ship_group: Vec<ShipId>,
    /// Opposing (or merely interesting) vessels, when any were seen.
    pub enemies: Option<Vec<ShipId>>,
    /// Relative strength against `enemies`, when it was computed.
    pub power_balance: Option<PowerBalance>,
}

impl Environment {
    /// Environment for a group with nothing to report.
    #[must_use]
    pub fn group(ship_group: Vec<ShipId>) -> Self {
        Self {
            ship_group,
            enemies: None,
            power_balance: None,
        }
    }

    /// Environment for sighted vessels without a strength judgment.
    #[must_use]
    pub fn sighting(ship_group: Vec<ShipId>, enemies: Vec<ShipId>) -> Self {
        Self {
            ship_group,
            enemies: Some(enemies),
            power_balance: None,
        }
    }

    /// Environment for an engagement with a computed balance.
    #[must_use]
    pub fn engagement(
        ship_group: Vec<ShipId>,
        enemies: Vec<ShipId>,
        power_balance: PowerBalance,
    ) -> Self {
        Self {
            ship_group,
            enemies: Some(enemies),
            power_balance: Some(power_balance),
        }
    }
}

/// One declarative action request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Category of the requested action.
    pub action_type: ActionType,
    /// Why the action was requested.
    pub trigger: Trigger,
    /// Context the behavior layer needs to enact it.
    pub environment: Environment,
}

/// Fire-and-forget channel into the behavior-execution layer.
pub trait ActionSink {
    /// Deliver one action request. No outcome is observed.
    fn request_action(&mut self, request: ActionRequest);
}
