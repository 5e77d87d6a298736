use tsim_core::NodeRegistry;
use tsim_ledger::{LedgerRow, StatsLedger};
use tsim_core::{Tick, VehicleId, VehicleKind};

use crate::arena::RoadArena;

#[test]
fn lane_occupancy_round_trips() {
    let mut arena = RoadArena::new();
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let at = arena.add_intersection(b);
    arena.add_approach(at, a, 5, 1, 1);

    let lane_id = arena.intersection(at).lane_id(a, 0).unwrap();
    assert!(arena.lane(lane_id).is_available(0));
    arena.lane_mut(lane_id).arrive(0);
    assert_eq!(arena.lane(lane_id).occupancy_at(0), 1);
    arena.lane_mut(lane_id).leave(0);
    assert_eq!(arena.lane(lane_id).occupancy_at(0), 0);
}

#[test]
fn signal_update_with_no_vehicles_leaves_all_red() {
    let mut arena = RoadArena::new();
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let at = arena.add_intersection(b);
    arena.add_approach(at, a, 5, 1, 1);

    let ledger = StatsLedger::new();
    arena.update_all_signals(&ledger);

    for &color in arena.intersection(at).signals[&a].iter() {
        assert_eq!(color, tsim_core::SignalColor::Red);
    }
}

#[test]
fn blue_queue_wins_when_strictly_larger() {
    let mut arena = RoadArena::new();
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let at = arena.add_intersection(b);
    arena.add_approach(at, a, 5, 1, 1);

    let mut ledger = StatsLedger::new();
    // stop line is block 4; put 2 HDVs contiguous in green lanes, 3 AVs
    // contiguous in blue lanes.
    for (i, lane_id) in [0u8, 1].into_iter().enumerate() {
        ledger.append(mk_row(i as u32, a, b, lane_id, 4 - i as u32));
    }
    for (i, lane_id) in [3u8, 4, 3].into_iter().enumerate() {
        ledger.append(mk_row(10 + i as u32, a, b, lane_id, 4 - (i as u32 % 3)));
    }

    arena.update_all_signals(&ledger);
    let signals = &arena.intersection(at).signals[&a];
    assert_eq!(signals[3], tsim_core::SignalColor::Green);
    assert_eq!(signals[4], tsim_core::SignalColor::Green);
    assert_eq!(signals[0], tsim_core::SignalColor::Red);
}

fn mk_row(
    vehicle_id: u32,
    from: tsim_core::NodeId,
    to: tsim_core::NodeId,
    lane_id: u8,
    block: u32,
) -> LedgerRow {
    LedgerRow {
        tick: Tick(0),
        vehicle_id: VehicleId(vehicle_id),
        edge_from: from,
        edge_to: to,
        lane_id,
        block,
        arrival_time: Tick(0),
        stuck_time: 0,
        active: true,
        light: None,
        kind: VehicleKind::Hdv,
    }
}
