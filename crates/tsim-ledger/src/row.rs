//! `LedgerRow` — one per-vehicle, per-tick snapshot.

use tsim_core::{NodeId, Tick, VehicleId, VehicleKind};

/// One row of the stats ledger: a vehicle's state at some tick.
///
/// `light` is `None` unless the vehicle is at the stop-line block; rendering
/// that as the literal string `none` is an output-CSV concern, handled by
/// `tsim-io` — internally this stays an `Option`.
#[derive(Clone, Debug)]
pub struct LedgerRow {
    pub tick: Tick,
    pub vehicle_id: VehicleId,
    pub edge_from: NodeId,
    pub edge_to: NodeId,
    pub lane_id: u8,
    pub block: u32,
    pub arrival_time: Tick,
    pub stuck_time: u64,
    pub active: bool,
    pub light: Option<tsim_core::SignalColor>,
    pub kind: VehicleKind,
}
