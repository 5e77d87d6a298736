use std::path::PathBuf;

use tsim_core::{NodeRegistry, SimConfig, VehicleId, VehicleKind};
use tsim_network::{DijkstraRouter, RoadNetworkBuilder};
use tsim_road::{RoadArena, BLOCK_CAPACITY};

use crate::{ClockBuilder, NoopObserver, PendingDemand, SimError};

fn config() -> SimConfig {
    SimConfig {
        dedicated_lane_length_m: 0,
        lane_changing_zone_length_m: 0,
        each_block_length_m: 100,
        until: 10,
        output_dir: PathBuf::new(),
    }
}

#[test]
fn vehicle_exits_immediately_on_single_block_edge() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");

    let mut arena = RoadArena::new();
    let at_b = arena.add_intersection(b);
    arena.add_approach(at_b, a, 1, 0, 0);

    let mut builder = RoadNetworkBuilder::new(reg.len());
    builder.add_directed_edge(a, b, 100).unwrap();
    let network = builder.build();

    let demand = vec![PendingDemand {
        vehicle_id: VehicleId(0),
        departure: 0.0,
        origin: a,
        destination: b,
        lane_number: 0,
        kind: VehicleKind::Hdv,
        deferred_stuck_time: 0,
    }];

    let mut clock = ClockBuilder::new(config(), network, arena, DijkstraRouter)
        .demand(demand)
        .build()
        .unwrap();

    clock.run_ticks(1, &mut NoopObserver).unwrap();

    assert!(clock.vehicles.is_empty());
    assert_eq!(clock.ledger.active_vehicle_count(), 0);
}

#[test]
fn injection_defers_while_block_zero_is_full() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");

    let mut arena = RoadArena::new();
    let at_b = arena.add_intersection(b);
    arena.add_approach(at_b, a, 1, 0, 0);
    let lane0 = arena.intersection(at_b).lane_id(a, 0).unwrap();
    for _ in 0..BLOCK_CAPACITY {
        arena.lane_mut(lane0).arrive(0);
    }

    let mut builder = RoadNetworkBuilder::new(reg.len());
    builder.add_directed_edge(a, b, 100).unwrap();
    let network = builder.build();

    let demand = vec![PendingDemand {
        vehicle_id: VehicleId(0),
        departure: 0.0,
        origin: a,
        destination: b,
        lane_number: 0,
        kind: VehicleKind::Hdv,
        deferred_stuck_time: 0,
    }];

    let mut clock = ClockBuilder::new(config(), network, arena, DijkstraRouter)
        .demand(demand)
        .build()
        .unwrap();

    clock.run_ticks(3, &mut NoopObserver).unwrap();

    // Block 0 never frees up, so the vehicle is never actually injected
    // rather than panicking or double-booking the block.
    assert!(clock.vehicles.is_empty());
    assert_eq!(clock.ledger.active_vehicle_count(), 0);
}

#[test]
fn build_rejects_origin_equal_to_destination() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let arena = RoadArena::new();
    let network = RoadNetworkBuilder::new(reg.len()).build();

    let demand = vec![PendingDemand {
        vehicle_id: VehicleId(0),
        departure: 0.0,
        origin: a,
        destination: a,
        lane_number: 0,
        kind: VehicleKind::Hdv,
        deferred_stuck_time: 0,
    }];

    let result = ClockBuilder::new(config(), network, arena, DijkstraRouter)
        .demand(demand)
        .build();

    assert!(matches!(result, Err(SimError::OriginEqualsDestination(_))));
}

#[test]
fn build_rejects_duplicate_vehicle_ids() {
    let mut reg = NodeRegistry::new();
    let a = reg.intern("A");
    let b = reg.intern("B");
    let arena = RoadArena::new();
    let network = RoadNetworkBuilder::new(reg.len()).build();

    let demand = vec![
        PendingDemand {
            vehicle_id: VehicleId(0),
            departure: 0.0,
            origin: a,
            destination: b,
            lane_number: 0,
            kind: VehicleKind::Hdv,
            deferred_stuck_time: 0,
        },
        PendingDemand {
            vehicle_id: VehicleId(0),
            departure: 1.0,
            origin: a,
            destination: b,
            lane_number: 0,
            kind: VehicleKind::Av,
            deferred_stuck_time: 0,
        },
    ];

    let result = ClockBuilder::new(config(), network, arena, DijkstraRouter)
        .demand(demand)
        .build();

    assert!(matches!(result, Err(SimError::DuplicateVehicleId(_))));
}
