//! `Clock` — the top-level tick loop.
//!
//! Every tick, inject due demand; every fifth tick, update signals and
//! advance vehicles in waiting-time order.

use std::collections::{HashMap, VecDeque};

use tsim_core::{Tick, VehicleId};
use tsim_core::SimConfig;
use tsim_ledger::StatsLedger;
use tsim_network::{RoadNetwork, Router};
use tsim_road::RoadArena;
use tsim_vehicle::Vehicle;

use crate::demand::PendingDemand;
use crate::error::{SimError, SimResult};
use crate::observer::Observer;

/// Period, in ticks, of the signal-update and vehicle-ordering pass.
const PROCESS_PERIOD: u64 = 5;

pub struct Clock<R: Router> {
    pub config: SimConfig,
    pub network: RoadNetwork,
    pub arena: RoadArena,
    pub router: R,
    pub ledger: StatsLedger,
    pub vehicles: HashMap<VehicleId, Vehicle>,
    pub current_tick: Tick,
    demand: VecDeque<PendingDemand>,
}

impl<R: Router> Clock<R> {
    pub(crate) fn new(
        config: SimConfig,
        network: RoadNetwork,
        arena: RoadArena,
        router: R,
        demand: VecDeque<PendingDemand>,
    ) -> Self {
        Self {
            config,
            network,
            arena,
            router,
            ledger: StatsLedger::new(),
            vehicles: HashMap::new(),
            current_tick: Tick::ZERO,
            demand,
        }
    }

    /// Run until `config.end_tick()`, calling `observer`'s hooks at tick
    /// boundaries.
    pub fn run<O: Observer>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            observer.on_tick_start(now);
            self.process_tick(now)?;
            observer.on_tick_end(now, self.vehicles.len());
            self.current_tick = now + 1;
        }
        observer.on_sim_end(self.current_tick, &self.ledger);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position, ignoring
    /// `config.end_tick()`. Useful for tests and incremental stepping.
    pub fn run_ticks<O: Observer>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.process_tick(now)?;
            observer.on_tick_end(now, self.vehicles.len());
            self.current_tick = now + 1;
        }
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<()> {
        self.inject_due_demand(now)?;

        if now.is_multiple_of(PROCESS_PERIOD) {
            self.arena.update_all_signals(&self.ledger);
            self.advance_vehicles(now)?;
        }
        Ok(())
    }

    /// Pop and inject every demand row due at `now` (tolerance 0.01 — this
    /// should become an exact integer comparison once departure times are
    /// rounded at load).
    fn inject_due_demand(&mut self, now: Tick) -> SimResult<()> {
        loop {
            let due = match self.demand.front() {
                Some(row) => (now.0 as f64 - row.departure).abs() < 0.01,
                None => false,
            };
            if !due {
                break;
            }
            let mut row = self.demand.pop_front().expect("front checked above");

            let w = self
                .router
                .next_hop(&self.network, &self.ledger, row.origin, row.destination)?;
            let intersection_id = self
                .arena
                .intersection_of(w)
                .ok_or(SimError::UnknownNode(w))?;
            let lane_id = self
                .arena
                .intersection(intersection_id)
                .lane_id(row.origin, row.lane_number)
                .ok_or(SimError::UnknownNode(row.origin))?;

            if !self.arena.lane(lane_id).is_available(0) {
                // Defer by one tick, accumulating stuck time, rather than
                // injecting into a full block.
                row.departure = (now.0 + 1) as f64;
                row.deferred_stuck_time += 5;
                self.demand.push_front(row);
                break;
            }

            let vehicle = Vehicle::spawn(
                row.vehicle_id,
                row.kind,
                row.destination,
                row.origin,
                w,
                intersection_id,
                lane_id,
                now,
                row.deferred_stuck_time,
                &mut self.arena,
                &mut self.ledger,
            );
            println!("[INFO] vehicle {} entered the system at {now}.", row.vehicle_id);
            self.vehicles.insert(row.vehicle_id, vehicle);
        }
        Ok(())
    }

    /// Sort active vehicles by `arrival_time + stuck_time` ascending (ties
    /// broken by `VehicleId`, a stand-in for insertion order since ids are
    /// assigned in departure order) and advance each in turn.
    fn advance_vehicles(&mut self, now: Tick) -> SimResult<()> {
        let mut order: Vec<VehicleId> = self.vehicles.keys().copied().collect();
        order.sort_unstable_by_key(|&id| {
            let v = &self.vehicles[&id];
            (v.arrival_time.0 + v.stuck_time, id.0)
        });

        println!("[INFO] there are {} sorted vehicles in the system.", order.len());

        for id in order {
            let Some(mut vehicle) = self.vehicles.remove(&id) else { continue };
            let still_active =
                vehicle.tick(&mut self.arena, &self.network, &self.router, &mut self.ledger, now)?;
            if still_active {
                self.vehicles.insert(id, vehicle);
            }
        }
        Ok(())
    }
}
