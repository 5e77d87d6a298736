//! Network topology CSV loader (columns `from`, `to`, `length`).
//!
//! Builds all three network-adjacent structures in one pass: the
//! [`NodeRegistry`] interning node-id strings, the [`RoadNetwork`] CSR graph
//! used for routing cost, and the [`RoadArena`] of per-approach lanes used
//! for occupancy and signals. One row per directed edge; an intersection and
//! its five lanes are allocated the first time a node is seen as an edge's
//! destination.

use std::collections::HashMap;
use std::path::Path;

use tsim_core::{IntersectionId, NodeId, NodeRegistry, SimConfig};
use tsim_network::{RoadNetwork, RoadNetworkBuilder};
use tsim_road::RoadArena;

use crate::error::{IoError, IoResult};

pub struct Topology {
    pub registry: NodeRegistry,
    pub network: RoadNetwork,
    pub arena: RoadArena,
}

/// Load `path` and build the registry, CSR network, and lane arena.
pub fn load_topology(path: &Path, config: &SimConfig) -> IoResult<Topology> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut registry = NodeRegistry::new();
    let mut raw_edges: Vec<(NodeId, NodeId, u32)> = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let from = record.get(0).ok_or_else(|| malformed("topology", i, "missing from"))?;
        let to = record.get(1).ok_or_else(|| malformed("topology", i, "missing to"))?;
        let length: u32 = record
            .get(2)
            .ok_or_else(|| malformed("topology", i, "missing length"))?
            .parse()
            .map_err(|_| malformed("topology", i, "length is not an integer"))?;

        let from_id = registry.intern(from);
        let to_id = registry.intern(to);
        raw_edges.push((from_id, to_id, length));
    }

    let mut builder = RoadNetworkBuilder::new(registry.len());
    for (i, &(from, to, length)) in raw_edges.iter().enumerate() {
        builder.add_directed_edge(from, to, length).map_err(|e| IoError::MalformedRow {
            file: "topology",
            row: i,
            reason: e.to_string(),
        })?;
    }
    let network = builder.build();

    let arena = build_arena(&raw_edges, config);

    Ok(Topology { registry, network, arena })
}

/// Allocate one `Intersection` per destination node and one five-lane
/// approach per inbound edge, sized in blocks via `config.to_blocks`.
fn build_arena(raw_edges: &[(NodeId, NodeId, u32)], config: &SimConfig) -> RoadArena {
    let mut arena = RoadArena::new();
    let mut intersections: HashMap<NodeId, IntersectionId> = HashMap::new();

    for &(from, to, length_m) in raw_edges {
        let at = *intersections.entry(to).or_insert_with(|| arena.add_intersection(to));
        let blocks = config.to_blocks(length_m).max(1);
        arena.add_approach(
            at,
            from,
            blocks,
            config.to_blocks(config.dedicated_lane_length_m),
            config.to_blocks(config.lane_changing_zone_length_m),
        );
    }

    arena
}

fn malformed(file: &'static str, row: usize, reason: &str) -> IoError {
    IoError::MalformedRow { file, row, reason: reason.to_string() }
}
