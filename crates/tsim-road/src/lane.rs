//! `Lane` — a fixed-length sequence of integer-capacity blocks.
//!
//! Grounded directly on the original `Lane` class: a per-block occupancy
//! counter, `is_available`/`arrive`/`leave`. Block indices outside
//! `[0, blocks-1]`, and an occupancy count going negative, are state-machine
//! bugs rather than runtime conditions — `arrive`/`leave` enforce both and
//! abort the process via `RoadError` instead of silently wrapping or
//! indexing out of bounds.

use tsim_core::LaneId;

use crate::error::RoadError;

/// Per-block vehicle capacity.
pub const BLOCK_CAPACITY: u32 = 20;

pub struct Lane {
    pub id: LaneId,
    /// Lane id within its intersection approach, 0..=4.
    pub lane_number: u8,
    /// Number of blocks; block 0 is the entry (far from the intersection),
    /// `blocks - 1` is the stop line.
    pub blocks: u32,
    /// Length of the dedicated (AV-only) zone, in blocks.
    pub dedicated_lane_length: u32,
    /// Length of the lane-changing zone preceding the dedicated zone, in
    /// blocks.
    pub lane_changing_zone_length: u32,
    occupancy: Vec<u32>,
}

impl Lane {
    pub fn new(
        id: LaneId,
        lane_number: u8,
        blocks: u32,
        dedicated_lane_length: u32,
        lane_changing_zone_length: u32,
    ) -> Self {
        Self {
            id,
            lane_number,
            blocks,
            dedicated_lane_length,
            lane_changing_zone_length,
            occupancy: vec![0; blocks as usize],
        }
    }

    /// The stop-line block index, `blocks - 1`, used consistently everywhere
    /// rather than `blocks` to avoid an off-by-one at the final block.
    #[inline]
    pub fn stop_line(&self) -> u32 {
        self.blocks - 1
    }

    #[inline]
    pub fn occupancy_at(&self, block: u32) -> u32 {
        self.occupancy[block as usize]
    }

    #[inline]
    pub fn is_available(&self, block: u32) -> bool {
        self.occupancy[block as usize] < BLOCK_CAPACITY
    }

    #[inline]
    pub fn arrive(&mut self, block: u32) {
        self.check_bounds(block);
        self.occupancy[block as usize] += 1;
    }

    #[inline]
    pub fn leave(&mut self, block: u32) {
        self.check_bounds(block);
        if self.occupancy[block as usize] == 0 {
            panic!("{}", RoadError::NegativeOccupancy { lane: self.id, block });
        }
        self.occupancy[block as usize] -= 1;
    }

    #[inline]
    fn check_bounds(&self, block: u32) {
        if block >= self.blocks {
            panic!(
                "{}",
                RoadError::BlockOutOfBounds { lane: self.id, block, blocks: self.blocks }
            );
        }
    }

    /// Sum of all per-block occupancy (used by invariant tests).
    pub fn total_occupancy(&self) -> u32 {
        self.occupancy.iter().sum()
    }
}
