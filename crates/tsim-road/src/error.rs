use thiserror::Error;
use tsim_core::LaneId;

/// Invariant violations within the lane/occupancy model. These indicate a
/// state-machine bug, not a runtime condition to recover from — callers
/// should treat them as fatal.
#[derive(Debug, Error)]
pub enum RoadError {
    #[error("lane {lane} block {block} occupancy would go negative")]
    NegativeOccupancy { lane: LaneId, block: u32 },

    #[error("lane {lane} block {block} out of bounds (lane has {blocks} blocks)")]
    BlockOutOfBounds { lane: LaneId, block: u32, blocks: u32 },
}

pub type RoadResult<T> = Result<T, RoadError>;
