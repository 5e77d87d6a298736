//! Pending demand: rows not yet turned into a `Vehicle`.

use tsim_core::{NodeId, VehicleId, VehicleKind};

/// One not-yet-injected demand row. `tsim-io` parses the demand CSV into
/// these; the `departure` column stays `f64` because the source data is
/// numeric and ticks are compared against it with a small tolerance rather
/// than requiring an exact integer.
#[derive(Clone, Debug)]
pub struct PendingDemand {
    pub vehicle_id: VehicleId,
    pub departure: f64,
    pub origin: NodeId,
    pub destination: NodeId,
    /// 0-indexed lane number (CSV `lane` column is 1-indexed, 1-5).
    pub lane_number: u8,
    pub kind: VehicleKind,
    /// Accumulated while injection is deferred because block 0 of the
    /// initial lane was full; carried into the spawned `Vehicle`'s initial
    /// `stuck_time`.
    pub deferred_stuck_time: u64,
}
