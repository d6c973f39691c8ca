//! Relative strength aggregation between two ship groups.
//!
//! The decision engines treat the balance as opaque: it is computed,
//! logged and forwarded inside action requests, never branched on.
//! Judging whether a balance is good enough to attack is the behavior
//! layer's call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{fixed_serde, Fixed};
use crate::ships::{ShipClass, ShipId};
use crate::world::ShipStore;

/// Scalar summary of relative combat strength between two groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PowerBalance(#[serde(with = "fixed_serde")] Fixed);

impl PowerBalance {
    /// Wrap a raw balance value.
    #[must_use]
    pub const fn new(value: Fixed) -> Self {
        Self(value)
    }

    /// The raw balance value.
    #[must_use]
    pub const fn value(self) -> Fixed {
        self.0
    }
}

impl fmt::Display for PowerBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Strength aggregation over two opposing ship groups.
pub trait PowerBalanceEvaluator {
    /// Relative strength of `group_a` against `group_b`.
    fn calculate_power_balance(&self, group_a: &[ShipId], group_b: &[ShipId]) -> PowerBalance;
}

/// Default evaluator: per-class base weights, A:B ratio.
///
/// Destroyed ships contribute nothing. Fixed-point only, so the same
/// groups always produce the same balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassWeightEvaluator;

impl ClassWeightEvaluator {
    /// Base strength weight of a ship class.
    #[must_use]
    pub fn weight(class: ShipClass) -> Fixed {
        let value = match class {
            ShipClass::Fighting => 6,
            ShipClass::Pirate => 4,
            ShipClass::Trade => 1,
            ShipClass::Other => 1,
        };
        Fixed::from_num(value)
    }

    /// Summed weight of the live ships in a group.
    fn group_strength<W: ShipStore + ?Sized>(world: &W, group: &[ShipId]) -> Fixed {
        group
            .iter()
            .filter_map(|&id| world.ship(id))
            .map(|ship| Self::weight(ship.class))
            .fold(Fixed::ZERO, |total, weight| total + weight)
    }

    /// Compute the balance of `group_a` against `group_b`.
    #[must_use]
    pub fn balance<W: ShipStore + ?Sized>(
        world: &W,
        group_a: &[ShipId],
        group_b: &[ShipId],
    ) -> PowerBalance {
        let strength_a = Self::group_strength(world, group_a);
        let strength_b = Self::group_strength(world, group_b);
        if strength_b == Fixed::ZERO {
            // No live opposition: report own strength unscaled.
            return PowerBalance::new(strength_a);
        }
        PowerBalance::new(strength_a / strength_b)
    }
}
