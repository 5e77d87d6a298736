use std::fs;

use tempfile::tempdir;
use tsim_core::{SimConfig, Tick, VehicleId, VehicleKind};
use tsim_ledger::{LedgerRow, StatsLedger};

use crate::demand::load_demand;
use crate::error::IoError;
use crate::topology::load_topology;
use crate::writer::SimulationLogWriter;

fn config() -> SimConfig {
    SimConfig {
        dedicated_lane_length_m: 100,
        lane_changing_zone_length_m: 100,
        each_block_length_m: 100,
        until: 100,
        output_dir: std::path::PathBuf::new(),
    }
}

#[test]
fn topology_builds_network_and_arena_with_five_lanes_per_approach() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("network.csv");
    fs::write(&path, "from,to,length\nA,B,500\nB,C,300\n").unwrap();

    let topo = load_topology(&path, &config()).unwrap();
    assert_eq!(topo.network.node_count(), 3);
    assert_eq!(topo.network.edge_count(), 2);

    let b = topo.registry.get("B").unwrap();
    let at_b = topo.arena.intersection_of(b).unwrap();
    let a = topo.registry.get("A").unwrap();
    let lane0 = topo.arena.intersection(at_b).lane_id(a, 0).unwrap();
    assert_eq!(topo.arena.lane(lane0).blocks, 5);
}

#[test]
fn demand_is_sorted_ascending_by_departure() {
    let dir = tempdir().unwrap();
    let network_path = dir.path().join("network.csv");
    fs::write(&network_path, "from,to,length\nA,B,500\n").unwrap();
    let topo = load_topology(&network_path, &config()).unwrap();

    let demand_path = dir.path().join("demand.csv");
    fs::write(
        &demand_path,
        "ID,departure,Origin,Destination,lane,type\n2,5.0,A,B,1,2\n1,0.0,A,B,2,1\n",
    )
    .unwrap();

    let rows = load_demand(&demand_path, &topo.registry).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].vehicle_id, VehicleId(1));
    assert_eq!(rows[0].departure, 0.0);
    assert_eq!(rows[1].vehicle_id, VehicleId(2));
    assert_eq!(rows[0].lane_number, 1); // CSV lane 2 -> internal 1
}

#[test]
fn demand_rejects_lane_outside_one_to_five() {
    let dir = tempdir().unwrap();
    let network_path = dir.path().join("network.csv");
    fs::write(&network_path, "from,to,length\nA,B,500\n").unwrap();
    let topo = load_topology(&network_path, &config()).unwrap();

    let demand_path = dir.path().join("demand.csv");
    fs::write(&demand_path, "ID,departure,Origin,Destination,lane,type\n1,0.0,A,B,6,1\n").unwrap();

    let err = load_demand(&demand_path, &topo.registry).unwrap_err();
    assert!(matches!(err, IoError::LaneOutOfRange { lane: 6, .. }));
}

#[test]
fn demand_rejects_unknown_node() {
    let dir = tempdir().unwrap();
    let network_path = dir.path().join("network.csv");
    fs::write(&network_path, "from,to,length\nA,B,500\n").unwrap();
    let topo = load_topology(&network_path, &config()).unwrap();

    let demand_path = dir.path().join("demand.csv");
    fs::write(&demand_path, "ID,departure,Origin,Destination,lane,type\n1,0.0,A,Z,1,1\n").unwrap();

    let err = load_demand(&demand_path, &topo.registry).unwrap_err();
    assert!(matches!(err, IoError::UnknownNode { .. }));
}

#[test]
fn writer_emits_header_and_one_row_per_ledger_entry() {
    let dir = tempdir().unwrap();
    let network_path = dir.path().join("network.csv");
    fs::write(&network_path, "from,to,length\nA,B,500\n").unwrap();
    let topo = load_topology(&network_path, &config()).unwrap();
    let a = topo.registry.get("A").unwrap();
    let b = topo.registry.get("B").unwrap();

    let mut ledger = StatsLedger::new();
    ledger.append(LedgerRow {
        tick: Tick(0),
        vehicle_id: VehicleId(1),
        edge_from: a,
        edge_to: b,
        lane_id: 0,
        block: 0,
        arrival_time: Tick(0),
        stuck_time: 0,
        active: true,
        light: None,
        kind: VehicleKind::Hdv,
    });

    let mut writer = SimulationLogWriter::new(dir.path(), &topo.registry).unwrap();
    writer.write_all(&ledger).unwrap();
    writer.finish().unwrap();
    assert!(writer.take_error().is_none());

    let contents = fs::read_to_string(dir.path().join("simulation_log.csv")).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "time,vehicle_id,origin,destination,lane,block,arrival_time,stuck_time,active,light,type");
    assert_eq!(lines.next().unwrap(), "0,1,A,B,0,0,0,0,true,none,HDV");
}
