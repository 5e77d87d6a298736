//! Fluent builder for constructing a [`Clock`].

use std::collections::{HashSet, VecDeque};

use tsim_core::SimConfig;
use tsim_network::{RoadNetwork, Router};
use tsim_road::RoadArena;

use crate::clock::Clock;
use crate::demand::PendingDemand;
use crate::error::{SimError, SimResult};

/// Builds a [`Clock`] from its required inputs (config, network, arena,
/// router) plus an optional demand schedule.
///
/// # Example
///
/// ```rust,ignore
/// let clock = ClockBuilder::new(config, network, arena, DijkstraRouter)
///     .demand(rows)
///     .build()?;
/// clock.run(&mut NoopObserver)?;
/// ```
pub struct ClockBuilder<R: Router> {
    config: SimConfig,
    network: RoadNetwork,
    arena: RoadArena,
    router: R,
    demand: Vec<PendingDemand>,
}

impl<R: Router> ClockBuilder<R> {
    pub fn new(config: SimConfig, network: RoadNetwork, arena: RoadArena, router: R) -> Self {
        Self { config, network, arena, router, demand: Vec::new() }
    }

    /// Supply the demand schedule. Rows must already be sorted ascending by
    /// `departure` (the CSV loader sorts while parsing).
    pub fn demand(mut self, demand: Vec<PendingDemand>) -> Self {
        self.demand = demand;
        self
    }

    /// Validate demand (duplicate vehicle ids, origin == destination — both
    /// input-validation errors) and construct the [`Clock`].
    pub fn build(self) -> SimResult<Clock<R>> {
        let mut seen = HashSet::new();
        for row in &self.demand {
            if row.origin == row.destination {
                return Err(SimError::OriginEqualsDestination(row.vehicle_id));
            }
            if !seen.insert(row.vehicle_id) {
                return Err(SimError::DuplicateVehicleId(row.vehicle_id));
            }
        }

        Ok(Clock::new(
            self.config,
            self.network,
            self.arena,
            self.router,
            VecDeque::from(self.demand),
        ))
    }
}
