//! Node-coordinate file loader (whitespace-separated `Node X Y`).
//!
//! Used only for visualisation; the engine itself never reads these
//! coordinates. Parsed here regardless so a consuming demo can plot the
//! network, and because a malformed coordinate file should still fail fast
//! at load time rather than silently producing a blank plot.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tsim_core::{NodeId, NodeRegistry};

use crate::error::{IoError, IoResult};

/// Parse `path`, returning the (x, y) position of every node named in it.
/// Nodes not present in `registry` are skipped — the coordinate file may
/// describe a superset of the nodes actually used by the demand/topology.
pub fn load_node_coordinates(path: &Path, registry: &NodeRegistry) -> IoResult<HashMap<NodeId, (f64, f64)>> {
    let text = fs::read_to_string(path)?;
    let mut coords = HashMap::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let name = fields
            .next()
            .ok_or_else(|| malformed(i, "missing Node column"))?;
        let x: f64 = fields
            .next()
            .ok_or_else(|| malformed(i, "missing X column"))?
            .parse()
            .map_err(|_| malformed(i, "X is not a number"))?;
        let y: f64 = fields
            .next()
            .ok_or_else(|| malformed(i, "missing Y column"))?
            .parse()
            .map_err(|_| malformed(i, "Y is not a number"))?;

        if let Some(id) = registry.get(name) {
            coords.insert(id, (x, y));
        }
    }

    Ok(coords)
}

fn malformed(row: usize, reason: &str) -> IoError {
    IoError::MalformedRow { file: "node-coordinates", row, reason: reason.to_string() }
}
