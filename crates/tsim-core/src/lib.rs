//! `tsim-core` — foundational types shared by every `tsim-*` crate.
//!
//! This crate is a dependency of every other `tsim-*` crate. It intentionally
//! has minimal external dependencies (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|----------------------------------------------------------|
//! | [`ids`]   | `NodeId`+`NodeRegistry`, `VehicleId`, `LaneId`, `IntersectionId` |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`types`] | `VehicleKind`, `SignalColor`, `LaneGroup`                 |
//! | [`error`] | `TsimError`, `TsimResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types.  |

pub mod error;
pub mod ids;
pub mod time;
pub mod types;


pub use error::{TsimError, TsimResult};
pub use ids::{IntersectionId, LaneId, NodeId, NodeRegistry, VehicleId};
pub use time::{SimClock, SimConfig, Tick};
pub use types::{LaneGroup, SignalColor, VehicleKind};
