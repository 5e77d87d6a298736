//! Directed road network in CSR (compressed sparse row) form.
//!
//! Given a `NodeId n`, its outgoing edges occupy the slice
//! `edge_to[node_out_start[n] .. node_out_start[n+1]]`, sorted by source node
//! so Dijkstra's inner loop is a contiguous scan. There is no spatial index
//! here (unlike a lat/lon road graph) — node ids are opaque strings interned
//! by `tsim_core::NodeRegistry`, with no geometric structure to index.

use tsim_core::NodeId;

use crate::error::{NetworkError, NetworkResult};

/// Index of a directed edge, position in the CSR-sorted edge arrays.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct EdgeId(pub u32);

impl EdgeId {
    pub const INVALID: EdgeId = EdgeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Directed road graph: nodes plus length-bearing edges, CSR-indexed.
///
/// Edge cost is *not* cached here — it depends on the live active-vehicle
/// count on each directed edge, supplied by the caller at routing time (see
/// [`crate::router`]). `RoadNetwork` only holds the static topology.
pub struct RoadNetwork {
    /// CSR row pointer: outgoing edges of node `n` are at
    /// `node_out_start[n] .. node_out_start[n+1]`. Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge (redundant with CSR, needed for path
    /// reconstruction).
    pub edge_from: Vec<NodeId>,
    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,
    /// Length of each edge in metres.
    pub edge_length_m: Vec<u32>,
}

impl RoadNetwork {
    pub fn node_count(&self) -> usize {
        self.node_out_start.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Find the `EdgeId` of the directed edge `from -> to`, if any.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.out_edges(from).find(|&e| self.edge_to[e.index()] == to)
    }
}

/// Incrementally constructs a [`RoadNetwork`]; call [`build`](Self::build)
/// once all edges are added.
#[derive(Default)]
pub struct RoadNetworkBuilder {
    node_count: usize,
    raw_edges: Vec<(NodeId, NodeId, u32)>,
}

impl RoadNetworkBuilder {
    pub fn new(node_count: usize) -> Self {
        Self { node_count, raw_edges: Vec::new() }
    }

    /// Add a directed edge `from -> to` with the given length in metres.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length_m: u32) -> NetworkResult<()> {
        if self.raw_edges.iter().any(|&(f, t, _)| f == from && t == to) {
            return Err(NetworkError::DuplicateEdge { from, to });
        }
        self.raw_edges.push((from, to, length_m));
        Ok(())
    }

    pub fn build(self) -> RoadNetwork {
        let node_count = self.node_count;
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.0.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.0).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.1).collect();
        let edge_length_m: Vec<u32> = raw.iter().map(|e| e.2).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.0.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }

        RoadNetwork { node_out_start, edge_from, edge_to, edge_length_m }
    }
}
