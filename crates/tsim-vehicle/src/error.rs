use thiserror::Error;
use tsim_core::{NodeId, VehicleId};

/// Invariant violations in the vehicle movement state machine. These
/// indicate a bug, not a condition the engine recovers from.
#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("HDV {vehicle} found in the End zone of blue-group lane {lane_number}")]
    HdvInBlueEndZone { vehicle: VehicleId, lane_number: u8 },

    #[error("vehicle {vehicle} position {block} exceeds its lane's max block {max}")]
    PositionExceedsMax { vehicle: VehicleId, block: u32, max: u32 },

    #[error("no path from {vehicle}'s current location to its destination {destination}")]
    NoPathToDestination { vehicle: VehicleId, destination: NodeId },
}

pub type VehicleResult<T> = Result<T, VehicleError>;
