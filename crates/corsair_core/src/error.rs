//! Error types for the decision core.

use thiserror::Error;

use crate::missions::MissionId;
use crate::ships::ShipId;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Top-level error type for the decision core.
///
/// Steady-state decision paths never construct these: empty groups and
/// destroyed ships are ordinary inputs, not faults. Errors arise only
/// from registry lifecycle operations handed an unknown identifier.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Mission identifier not present in the registry.
    #[error("Mission not found: {0}")]
    MissionNotFound(MissionId),

    /// Ship identifier not present (or no longer present) in the registry.
    #[error("Ship not found: {0}")]
    ShipNotFound(ShipId),

    /// Fleet missions must start with at least one ship.
    #[error("Cannot launch a fleet mission with no ships")]
    EmptyFleet,
}
