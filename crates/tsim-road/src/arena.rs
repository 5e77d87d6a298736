//! Flat arena resolving the Lane/Intersection cyclic-ownership problem.
//!
//! Each `Lane` belongs to exactly one `Intersection`, and each `Intersection`
//! owns several `Lane`s — a cyclic reference in an object-graph model. This
//! is resolved with a flat arena: `Vec<Intersection>`
//! indexed by `IntersectionId`, `Vec<Lane>` indexed by `LaneId`. Vehicles (in
//! `tsim-vehicle`) hold `LaneId`/`IntersectionId`, never references.

use std::collections::HashMap;

use tsim_core::{IntersectionId, LaneId, NodeId};
use tsim_ledger::StatsLedger;

use crate::intersection::Intersection;
use crate::lane::Lane;

pub struct RoadArena {
    pub intersections: Vec<Intersection>,
    pub lanes: Vec<Lane>,
    node_to_intersection: HashMap<NodeId, IntersectionId>,
}

impl RoadArena {
    pub fn new() -> Self {
        Self { intersections: Vec::new(), lanes: Vec::new(), node_to_intersection: HashMap::new() }
    }

    /// Register a new intersection for `node_id`, returning its id.
    pub fn add_intersection(&mut self, node_id: NodeId) -> IntersectionId {
        let id = IntersectionId(self.intersections.len() as u32);
        self.intersections.push(Intersection::new(id, node_id));
        self.node_to_intersection.insert(node_id, id);
        id
    }

    pub fn intersection_of(&self, node_id: NodeId) -> Option<IntersectionId> {
        self.node_to_intersection.get(&node_id).copied()
    }

    /// Allocate the five lanes (ids 0..=4) for one inbound approach
    /// `neighbour -> at` and register them on intersection `at`.
    pub fn add_approach(
        &mut self,
        at: IntersectionId,
        neighbour: NodeId,
        blocks: u32,
        dedicated_lane_length: u32,
        lane_changing_zone_length: u32,
    ) {
        let mut lane_ids = [LaneId::INVALID; 5];
        for (lane_number, slot) in lane_ids.iter_mut().enumerate() {
            let id = LaneId(self.lanes.len() as u32);
            self.lanes.push(Lane::new(
                id,
                lane_number as u8,
                blocks,
                dedicated_lane_length,
                lane_changing_zone_length,
            ));
            *slot = id;
        }
        self.intersections[at.index()].add_approach(neighbour, lane_ids);
    }

    pub fn lane(&self, id: LaneId) -> &Lane {
        &self.lanes[id.index()]
    }

    pub fn lane_mut(&mut self, id: LaneId) -> &mut Lane {
        &mut self.lanes[id.index()]
    }

    pub fn intersection(&self, id: IntersectionId) -> &Intersection {
        &self.intersections[id.index()]
    }

    pub fn intersection_mut(&mut self, id: IntersectionId) -> &mut Intersection {
        &mut self.intersections[id.index()]
    }

    /// Run the adaptive signal controller on every intersection (the
    /// every-5-ticks pass).
    pub fn update_all_signals(&mut self, ledger: &StatsLedger) {
        for intersection in self.intersections.iter_mut() {
            intersection.update_signals(&self.lanes, ledger);
        }
    }

    /// Sum of per-block occupancy across every lane in the arena (used by
    /// the "occupancy sums match active-vehicle count" invariant test).
    pub fn total_occupancy(&self) -> u32 {
        self.lanes.iter().map(|l| l.total_occupancy()).sum()
    }
}

impl Default for RoadArena {
    fn default() -> Self {
        Self::new()
    }
}
