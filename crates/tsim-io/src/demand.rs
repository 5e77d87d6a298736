//! Demand CSV loader (columns `ID, departure, Origin, Destination, lane,
//! type`).
//!
//! Rows are sorted ascending by `departure` before being handed to
//! `tsim-sim` — `tsim_sim::Clock` relies on this ordering and only ever pops
//! from the front of its demand queue.

use std::path::Path;

use tsim_core::{NodeRegistry, VehicleId, VehicleKind};
use tsim_sim::PendingDemand;

use crate::error::{IoError, IoResult};

pub fn load_demand(path: &Path, registry: &NodeRegistry) -> IoResult<Vec<PendingDemand>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;

        let id: u32 = field(&record, 0, "demand", i, "ID")?
            .parse()
            .map_err(|_| malformed(i, "ID is not an integer"))?;
        let departure: f64 = field(&record, 1, "demand", i, "departure")?
            .parse()
            .map_err(|_| malformed(i, "departure is not numeric"))?;
        let origin_name = field(&record, 2, "demand", i, "Origin")?;
        let destination_name = field(&record, 3, "demand", i, "Destination")?;
        let lane: u8 = field(&record, 4, "demand", i, "lane")?
            .parse()
            .map_err(|_| malformed(i, "lane is not an integer"))?;
        let type_code: u8 = field(&record, 5, "demand", i, "type")?
            .parse()
            .map_err(|_| malformed(i, "type is not an integer"))?;

        if !(1..=5).contains(&lane) {
            return Err(IoError::LaneOutOfRange { row: i, lane });
        }
        let kind = VehicleKind::from_code(type_code)
            .ok_or(IoError::UnknownVehicleType { row: i, code: type_code })?;

        let origin = registry
            .get(origin_name)
            .ok_or_else(|| IoError::UnknownNode { row: i, node: origin_name.to_string() })?;
        let destination = registry
            .get(destination_name)
            .ok_or_else(|| IoError::UnknownNode { row: i, node: destination_name.to_string() })?;

        rows.push(PendingDemand {
            vehicle_id: VehicleId(id),
            departure,
            origin,
            destination,
            // CSV lane is 1-indexed; internal lane ids are 0-indexed.
            lane_number: lane - 1,
            kind,
            deferred_stuck_time: 0,
        });
    }

    rows.sort_by(|a, b| a.departure.partial_cmp(&b.departure).expect("departure is never NaN"));
    Ok(rows)
}

fn field<'a>(
    record: &'a csv::StringRecord,
    idx: usize,
    file: &'static str,
    row: usize,
    name: &str,
) -> IoResult<&'a str> {
    record.get(idx).ok_or_else(|| IoError::MalformedRow {
        file,
        row,
        reason: format!("missing {name} column"),
    })
}

fn malformed(row: usize, reason: &str) -> IoError {
    IoError::MalformedRow { file: "demand", row, reason: reason.to_string() }
}
