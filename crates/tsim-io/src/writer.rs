//! `simulation_log.csv` writer.
//!
//! Writes one row per ledger entry — one row per vehicle per state change —
//! with `origin`/`destination` resolved back to their original CSV strings
//! via the `NodeRegistry`, and `light` rendered as the literal string
//! `"none"` when the vehicle isn't at its stop-line block.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tsim_core::NodeRegistry;
use tsim_ledger::StatsLedger;
use tsim_sim::Observer;

use crate::error::{IoError, IoResult};

pub struct SimulationLogWriter<'a> {
    writer: Writer<File>,
    registry: &'a NodeRegistry,
    finished: bool,
    last_error: Option<IoError>,
}

impl<'a> SimulationLogWriter<'a> {
    /// Open (or create) `simulation_log.csv` in `dir` and write its header.
    pub fn new(dir: &Path, registry: &'a NodeRegistry) -> IoResult<Self> {
        let mut writer = Writer::from_path(dir.join("simulation_log.csv"))?;
        writer.write_record([
            "time",
            "vehicle_id",
            "origin",
            "destination",
            "lane",
            "block",
            "arrival_time",
            "stuck_time",
            "active",
            "light",
            "type",
        ])?;
        Ok(Self { writer, registry, finished: false, last_error: None })
    }

    /// Take the stored write error (if any) after `Clock::run` returns.
    pub fn take_error(&mut self) -> Option<IoError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: IoResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    /// Write every row currently in `ledger`. Call once, at the end of the
    /// run — the ledger is append-only so there is nothing to deduplicate.
    pub fn write_all(&mut self, ledger: &StatsLedger) -> IoResult<()> {
        for row in ledger.rows() {
            let light = match row.light {
                Some(color) => color.to_string(),
                None => "none".to_string(),
            };
            self.writer.write_record(&[
                row.tick.0.to_string(),
                row.vehicle_id.0.to_string(),
                self.registry.name(row.edge_from).to_string(),
                self.registry.name(row.edge_to).to_string(),
                row.lane_id.to_string(),
                row.block.to_string(),
                row.arrival_time.0.to_string(),
                row.stuck_time.to_string(),
                row.active.to_string(),
                light,
                row.kind.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush the underlying file. Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> IoResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

impl<'a> Observer for SimulationLogWriter<'a> {
    fn on_sim_end(&mut self, _final_tick: tsim_core::Tick, ledger: &StatsLedger) {
        // `Observer`'s hooks are infallible by design (tsim-sim/src/observer.rs);
        // a write failure here is stored and surfaced via `take_error` instead.
        let result = self.write_all(ledger);
        self.store_err(result);
        let result = self.finish();
        self.store_err(result);
    }
}
