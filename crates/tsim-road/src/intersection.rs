//! `Intersection` and the adaptive signal controller.
//!
//! Grounded on the original `Intersection.update_lights` /
//! `find_in_queue_vehicles_from_lane`: every 5 ticks, compare the
//! contiguous stopped-queue length of the blue group (lanes 3-4) against the
//! green group (lanes 0-2) across all inbound approaches, and bias green
//! time toward whichever group is more backed up.

use std::collections::HashMap;

use tsim_core::{IntersectionId, LaneId, NodeId, SignalColor};
use tsim_ledger::StatsLedger;

use crate::lane::Lane;

const GREEN_GROUP: [u8; 3] = [0, 1, 2];
const BLUE_GROUP: [u8; 2] = [3, 4];

pub struct Intersection {
    pub id: IntersectionId,
    pub node_id: NodeId,
    /// Inbound approach from each neighbour: the five `LaneId`s, indexed by
    /// lane number 0..=4.
    pub lanes: HashMap<NodeId, [LaneId; 5]>,
    /// Signal colour for each lane of each inbound approach. All start red.
    pub signals: HashMap<NodeId, [SignalColor; 5]>,
}

impl Intersection {
    pub fn new(id: IntersectionId, node_id: NodeId) -> Self {
        Self { id, node_id, lanes: HashMap::new(), signals: HashMap::new() }
    }

    pub fn add_approach(&mut self, neighbour: NodeId, lane_ids: [LaneId; 5]) {
        self.lanes.insert(neighbour, lane_ids);
        self.signals.insert(neighbour, [SignalColor::Red; 5]);
    }

    pub fn lane_id(&self, neighbour: NodeId, lane_number: u8) -> Option<LaneId> {
        self.lanes.get(&neighbour).map(|ls| ls[lane_number as usize])
    }

    pub fn signal(&self, neighbour: NodeId, lane_number: u8) -> SignalColor {
        self.signals
            .get(&neighbour)
            .map(|s| s[lane_number as usize])
            .unwrap_or(SignalColor::Red)
    }

    pub fn neighbours(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.lanes.keys().copied()
    }

    /// Run the adaptive signal controller. `lane_arena` is the
    /// flat lane arena shared with every other intersection, indexed by
    /// `LaneId`.
    pub fn update_signals(&mut self, lane_arena: &[Lane], ledger: &StatsLedger) {
        // 1. Reset every signal to red first.
        for signals in self.signals.values_mut() {
            *signals = [SignalColor::Red; 5];
        }

        // Only consider neighbours this intersection actually has an
        // approach from; a neighbour with no active vehicles simply
        // contributes zero to both totals.
        let mut total_blue = 0u32;
        let mut total_green = 0u32;
        let mut green_by_neighbour: HashMap<NodeId, u32> = HashMap::new();

        for neighbour in self.lanes.keys().copied().collect::<Vec<_>>() {
            let lane_ids = self.lanes[&neighbour];
            // All 5 lanes of one approach share the same block count.
            let stop_line = lane_arena[lane_ids[0].index()].stop_line();

            let blue_blocks = ledger.occupied_blocks(neighbour, self.node_id, &BLUE_GROUP);
            let green_blocks = ledger.occupied_blocks(neighbour, self.node_id, &GREEN_GROUP);

            let blue_queue = contiguous_queue(&blue_blocks, stop_line);
            let green_queue = contiguous_queue(&green_blocks, stop_line);

            total_blue += blue_queue;
            total_green += green_queue;
            green_by_neighbour.insert(neighbour, green_queue);
        }

        if total_blue > total_green {
            for signals in self.signals.values_mut() {
                signals[3] = SignalColor::Green;
                signals[4] = SignalColor::Green;
            }
        } else {
            // Break ties deterministically: sort candidates by NodeId before
            // taking the max, since HashMap iteration order is not stable
            // across runs and this engine must be fully reproducible.
            let mut candidates: Vec<(NodeId, u32)> = green_by_neighbour.into_iter().collect();
            candidates.sort_unstable_by_key(|&(n, _)| n.0);
            if let Some(&(best, best_queue)) = candidates.iter().max_by_key(|&&(_, q)| q) {
                if best_queue > 0 {
                    if let Some(signals) = self.signals.get_mut(&best) {
                        signals[0] = SignalColor::Green;
                        signals[1] = SignalColor::Green;
                        signals[2] = SignalColor::Green;
                    }
                }
            }
        }
    }
}

/// Count of consecutive blocks, walking backward from `stop_line`, that
/// appear in `occupied`. Stops at the first gap.
fn contiguous_queue(occupied: &[u32], stop_line: u32) -> u32 {
    if occupied.is_empty() {
        return 0;
    }
    let present: std::collections::HashSet<u32> = occupied.iter().copied().collect();
    let mut count = 0u32;
    let mut cur = stop_line as i64;
    while cur >= 0 && present.contains(&(cur as u32)) {
        count += 1;
        cur -= 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_queue_stops_at_gap() {
        assert_eq!(contiguous_queue(&[4, 3, 1], 4), 2);
        assert_eq!(contiguous_queue(&[], 4), 0);
        assert_eq!(contiguous_queue(&[4, 3, 2, 1, 0], 4), 5);
    }
}
