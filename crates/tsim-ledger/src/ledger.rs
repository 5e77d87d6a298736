//! `StatsLedger` — append-only vehicle state log with incremental secondary
//! indices.
//!
//! A plain `Vec<LedgerRow>` scan would make both signal updates and routing
//! O(ticks × vehicles) over a long run. This maintains two indices
//! incrementally on every append so both stay
//! O(active vehicles touching the edge in question):
//!
//! - `inbound[to][from]`: the set of active vehicles currently on the
//!   directed edge `from -> to`, grouped by destination first since the
//!   signal controller always queries "all neighbours of this intersection".
//! - `latest`: the row index of each vehicle's most recent entry, so a
//!   vehicle's authoritative current state is an O(1) lookup rather than a
//!   reverse scan.

use std::collections::{HashMap, HashSet};

use tsim_core::{NodeId, VehicleId};
use tsim_network::EdgeLoad;

use crate::row::LedgerRow;

#[derive(Default)]
pub struct StatsLedger {
    rows: Vec<LedgerRow>,
    latest: HashMap<VehicleId, usize>,
    inbound: HashMap<NodeId, HashMap<NodeId, HashSet<VehicleId>>>,
}

impl StatsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new row for `row.vehicle_id`, flipping the vehicle's prior
    /// row (if any and if still active) to `active = false`. Returns the
    /// index of the newly appended row.
    pub fn append(&mut self, row: LedgerRow) -> usize {
        if let Some(&old_idx) = self.latest.get(&row.vehicle_id) {
            if self.rows[old_idx].active {
                self.rows[old_idx].active = false;
                self.unindex_active(old_idx);
            }
        }

        let vehicle_id = row.vehicle_id;
        let active = row.active;
        let edge_to = row.edge_to;
        let edge_from = row.edge_from;

        self.rows.push(row);
        let idx = self.rows.len() - 1;
        self.latest.insert(vehicle_id, idx);

        if active {
            self.inbound
                .entry(edge_to)
                .or_default()
                .entry(edge_from)
                .or_default()
                .insert(vehicle_id);
        }

        idx
    }

    fn unindex_active(&mut self, row_idx: usize) {
        let row = &self.rows[row_idx];
        if let Some(by_from) = self.inbound.get_mut(&row.edge_to) {
            if let Some(set) = by_from.get_mut(&row.edge_from) {
                set.remove(&row.vehicle_id);
            }
        }
    }

    /// Flip `vehicle`'s latest row to `active = false` without appending a
    /// new row — used when a vehicle exits the system at its final
    /// destination, mirroring the source's direct in-place deactivation
    /// rather than an extra row.
    pub fn deactivate(&mut self, vehicle: VehicleId) {
        if let Some(&idx) = self.latest.get(&vehicle) {
            if self.rows[idx].active {
                self.rows[idx].active = false;
                self.unindex_active(idx);
            }
        }
    }

    /// The most recent row for `vehicle`, if it has ever appeared.
    pub fn latest_row(&self, vehicle: VehicleId) -> Option<&LedgerRow> {
        self.latest.get(&vehicle).map(|&i| &self.rows[i])
    }

    /// Count of active vehicles currently on the directed edge `from -> to`.
    pub fn active_count_on_edge(&self, from: NodeId, to: NodeId) -> u32 {
        self.inbound
            .get(&to)
            .and_then(|by_from| by_from.get(&from))
            .map(|s| s.len() as u32)
            .unwrap_or(0)
    }

    /// Blocks currently occupied by an active vehicle in one of `lane_ids`
    /// on the directed edge `from -> to`. Unordered; callers that need
    /// ascending/descending order should sort.
    pub fn occupied_blocks(&self, from: NodeId, to: NodeId, lane_ids: &[u8]) -> Vec<u32> {
        let Some(by_from) = self.inbound.get(&to) else { return Vec::new() };
        let Some(set) = by_from.get(&from) else { return Vec::new() };
        set.iter()
            .filter_map(|&vid| {
                let row = self.latest_row(vid)?;
                lane_ids.contains(&row.lane_id).then_some(row.block)
            })
            .collect()
    }

    /// All inbound neighbours of `to` that currently have at least one
    /// active vehicle on the edge into `to`.
    pub fn inbound_neighbours(&self, to: NodeId) -> Vec<NodeId> {
        self.inbound
            .get(&to)
            .map(|by_from| by_from.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    pub fn active_vehicle_count(&self) -> usize {
        self.latest
            .values()
            .filter(|&&idx| self.rows[idx].active)
            .count()
    }

    /// All currently-active vehicle ids.
    pub fn active_vehicles(&self) -> Vec<VehicleId> {
        self.latest
            .iter()
            .filter(|&(_, &idx)| self.rows[idx].active)
            .map(|(&vid, _)| vid)
            .collect()
    }
}

impl EdgeLoad for StatsLedger {
    fn active_count(&self, from: NodeId, to: NodeId) -> u32 {
        self.active_count_on_edge(from, to)
    }
}
