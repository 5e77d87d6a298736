//! Reactive shortest-path routing.
//!
//! The engine calls routing via the [`Router`] trait, so applications can
//! swap the default Dijkstra implementation for something else without
//! touching the rest of the workspace.
//!
//! Unlike a static-cost road graph, edge cost here is recomputed from live
//! traffic: the caller supplies an [`EdgeLoad`] giving the current active
//! vehicle count on any directed edge, and cost is the BPR function of that
//! count (see [`crate::cost`]).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tsim_core::NodeId;

use crate::cost::{bpr_cost, to_cost_units};
use crate::error::{NetworkError, NetworkResult};
use crate::network::{EdgeId, RoadNetwork};

/// Supplies the current active-vehicle count on a directed edge, used to
/// compute live BPR edge costs. Implemented by `tsim-ledger`'s `StatsLedger`.
pub trait EdgeLoad {
    fn active_count(&self, from: NodeId, to: NodeId) -> u32;
}

/// Pluggable routing engine returning only the immediate next hop — this
/// engine never needs the full path, only where to go next.
pub trait Router: Send + Sync {
    /// Compute the shortest path from `from` to `to` under current traffic
    /// and return the second node on it (the immediate next hop).
    ///
    /// Must not be called with `from == to`.
    fn next_hop(
        &self,
        network: &RoadNetwork,
        load: &dyn EdgeLoad,
        from: NodeId,
        to: NodeId,
    ) -> NetworkResult<NodeId>;
}

/// Standard Dijkstra over the CSR graph, with live BPR edge costs.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn next_hop(
        &self,
        network: &RoadNetwork,
        load: &dyn EdgeLoad,
        from: NodeId,
        to: NodeId,
    ) -> NetworkResult<NodeId> {
        let path = dijkstra(network, load, from, to)?;
        // path has at least 2 nodes whenever from != to and a route exists.
        Ok(path[1])
    }
}

fn edge_cost_units(network: &RoadNetwork, load: &dyn EdgeLoad, edge: EdgeId) -> u64 {
    let from = network.edge_from[edge.index()];
    let to = network.edge_to[edge.index()];
    let length_m = network.edge_length_m[edge.index()];
    let count = load.active_count(from, to);
    to_cost_units(bpr_cost(length_m, count))
}

fn dijkstra(
    network: &RoadNetwork,
    load: &dyn EdgeLoad,
    from: NodeId,
    to: NodeId,
) -> NetworkResult<Vec<NodeId>> {
    let n = network.node_count();
    let mut dist = vec![u64::MAX; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap via Reverse; NodeId as secondary key for deterministic
    // tie-breaking between equal-cost frontier nodes.
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, &prev_edge, from, to));
        }
        if cost > dist[node.index()] {
            continue; // stale heap entry
        }
        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost.saturating_add(edge_cost_units(network, load, edge));
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(NetworkError::NoPath { from, to })
}

fn reconstruct(network: &RoadNetwork, prev_edge: &[EdgeId], from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::RoadNetworkBuilder;
    use tsim_core::NodeRegistry;

    struct NoLoad;
    impl EdgeLoad for NoLoad {
        fn active_count(&self, _from: NodeId, _to: NodeId) -> u32 {
            0
        }
    }

    #[test]
    fn picks_shorter_free_flow_path() {
        let mut reg = NodeRegistry::new();
        let a = reg.intern("A");
        let b = reg.intern("B");
        let c = reg.intern("C");
        let mut builder = RoadNetworkBuilder::new(reg.len());
        builder.add_directed_edge(a, b, 1000).unwrap();
        builder.add_directed_edge(a, c, 100).unwrap();
        builder.add_directed_edge(c, b, 100).unwrap();
        let net = builder.build();

        let router = DijkstraRouter;
        let hop = router.next_hop(&net, &NoLoad, a, b).unwrap();
        assert_eq!(hop, c);
    }

    #[test]
    fn no_path_is_an_error() {
        let mut reg = NodeRegistry::new();
        let a = reg.intern("A");
        let b = reg.intern("B");
        let builder = RoadNetworkBuilder::new(reg.len());
        let net = builder.build();
        let router = DijkstraRouter;
        assert!(router.next_hop(&net, &NoLoad, a, b).is_err());
    }
}
