//! Observer hooks decoupling the tick loop from output/progress reporting.

use tsim_core::Tick;
use tsim_ledger::StatsLedger;

/// Callbacks invoked by [`crate::Clock::run`] at tick boundaries.
///
/// All methods have default no-op bodies; implementors override only what
/// they need. `tsim-io`'s CSV writer and the demo binary's progress lines
/// are both plain `Observer` implementations — the scheduler itself knows
/// nothing about CSV or stdout.
pub trait Observer {
    /// Called before any processing for `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after `tick` finishes. `active_vehicles` is the number of
    /// vehicles still in the system at the end of this tick.
    fn on_tick_end(&mut self, _tick: Tick, _active_vehicles: usize) {}

    /// Called once, after the run loop exits, with read access to the full
    /// ledger for final output.
    fn on_sim_end(&mut self, _final_tick: Tick, _ledger: &StatsLedger) {}
}

/// An [`Observer`] that does nothing. Use when `run` is called only for its
/// side effects on the ledger.
pub struct NoopObserver;

impl Observer for NoopObserver {}
