use tsim_core::{NodeRegistry, Tick, VehicleId, VehicleKind};

use crate::row::LedgerRow;
use crate::StatsLedger;

fn row(
    vehicle_id: u32,
    tick: u64,
    from: tsim_core::NodeId,
    to: tsim_core::NodeId,
    lane_id: u8,
    block: u32,
    active: bool,
) -> LedgerRow {
    LedgerRow {
        tick: Tick(tick),
        vehicle_id: VehicleId(vehicle_id),
        edge_from: from,
        edge_to: to,
        lane_id,
        block,
        arrival_time: Tick(0),
        stuck_time: 0,
        active,
        light: None,
        kind: VehicleKind::Hdv,
    }
}

#[test]
fn append_flips_prior_row_inactive() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let mut ledger = StatsLedger::new();

    ledger.append(row(1, 0, a, b, 0, 0, true));
    ledger.append(row(1, 1, a, b, 0, 1, true));

    let rows = ledger.rows();
    assert!(!rows[0].active);
    assert!(rows[1].active);
    assert_eq!(ledger.latest_row(VehicleId(1)).unwrap().block, 1);
}

#[test]
fn active_count_on_edge_tracks_appends_and_exits() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let mut ledger = StatsLedger::new();

    ledger.append(row(1, 0, a, b, 0, 0, true));
    ledger.append(row(2, 0, a, b, 3, 0, true));
    assert_eq!(ledger.active_count_on_edge(a, b), 2);

    ledger.append(row(1, 1, a, b, 0, 1, false)); // vehicle 1 exits
    assert_eq!(ledger.active_count_on_edge(a, b), 1);
}

#[test]
fn occupied_blocks_filters_by_lane_group() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let mut ledger = StatsLedger::new();

    ledger.append(row(1, 0, a, b, 0, 4, true)); // green group
    ledger.append(row(2, 0, a, b, 3, 2, true)); // blue group

    let green = ledger.occupied_blocks(a, b, &[0, 1, 2]);
    let blue = ledger.occupied_blocks(a, b, &[3, 4]);
    assert_eq!(green, vec![4]);
    assert_eq!(blue, vec![2]);
}

#[test]
fn active_vehicle_count_matches_active_rows() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let mut ledger = StatsLedger::new();

    ledger.append(row(1, 0, a, b, 0, 0, true));
    ledger.append(row(2, 0, a, b, 1, 0, true));
    assert_eq!(ledger.active_vehicle_count(), 2);

    ledger.append(row(1, 1, a, b, 0, 1, false));
    assert_eq!(ledger.active_vehicle_count(), 1);
}
