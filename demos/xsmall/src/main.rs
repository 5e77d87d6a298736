//! xsmall — smallest demo of the traffic micro-simulator.
//!
//! Five nodes and two alternate routes from A to E, loosely modelled after
//! the small benchmark networks used in transportation-engineering papers,
//! inlined here rather than read from disk.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use tsim_core::{SimConfig, Tick};
use tsim_io::{load_demand, load_topology, SimulationLogWriter};
use tsim_network::DijkstraRouter;
use tsim_sim::{ClockBuilder, Observer};

const NETWORK_CSV: &str = "\
from,to,length\n\
A,B,400\n\
A,C,600\n\
B,D,400\n\
C,D,300\n\
D,E,400\n\
";

const DEMAND_CSV: &str = "\
ID,departure,Origin,Destination,lane,type\n\
0,0,A,E,1,1\n\
1,0,A,E,4,2\n\
2,5,A,E,2,1\n\
3,10,A,E,5,2\n\
4,15,A,E,3,1\n\
5,20,A,E,1,2\n\
";

/// Prints a one-line progress update every `interval` ticks and forwards
/// everything to the wrapped log writer.
struct ProgressObserver<'a> {
    inner: SimulationLogWriter<'a>,
    interval: u64,
}

impl<'a> Observer for ProgressObserver<'a> {
    fn on_tick_end(&mut self, tick: Tick, active_vehicles: usize) {
        if tick.is_multiple_of(self.interval) {
            println!("[INFO] tick {tick}: {active_vehicles} vehicles active");
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, ledger: &tsim_ledger::StatsLedger) {
        self.inner.on_sim_end(final_tick, ledger);
    }
}

fn main() -> Result<()> {
    println!("=== xsmall — traffic micro-simulator demo ===");

    let output_dir = Path::new("demos/xsmall/output");
    fs::create_dir_all(output_dir)?;
    let input_dir = output_dir.join("input");
    fs::create_dir_all(&input_dir)?;

    let network_path = input_dir.join("network.csv");
    let demand_path = input_dir.join("demand.csv");
    fs::write(&network_path, NETWORK_CSV)?;
    fs::write(&demand_path, DEMAND_CSV)?;

    let config = SimConfig {
        dedicated_lane_length_m: 100,
        lane_changing_zone_length_m: 100,
        each_block_length_m: 100,
        until: 200,
        output_dir: output_dir.to_path_buf(),
    };

    let topo = load_topology(&network_path, &config)?;
    let demand = load_demand(&demand_path, &topo.registry)?;
    println!(
        "Road network: {} nodes, {} edges, {} demand rows",
        topo.network.node_count(),
        topo.network.edge_count(),
        demand.len()
    );

    let mut clock = ClockBuilder::new(config.clone(), topo.network, topo.arena, DijkstraRouter)
        .demand(demand)
        .build()?;

    let writer = SimulationLogWriter::new(&config.output_dir, &topo.registry)?;
    let mut observer = ProgressObserver { inner: writer, interval: 25 };

    let t0 = Instant::now();
    clock.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  simulation_log.csv : {} rows", clock.ledger.rows().len());

    Ok(())
}
