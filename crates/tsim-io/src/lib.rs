//! `tsim-io` — CSV loaders and the simulation-log writer.
//!
//! | Module      | Contents                                                |
//! |-------------|----------------------------------------------------------|
//! | [`topology`]| `load_topology` — network CSV -> registry + CSR + arena |
//! | [`coords`]  | `load_node_coordinates` — visualisation-only positions  |
//! | [`demand`]  | `load_demand` — demand CSV -> `Vec<PendingDemand>`      |
//! | [`writer`]  | `SimulationLogWriter` — `simulation_log.csv`, as an `Observer` |
//! | [`error`]   | `IoError`, `IoResult<T>`                                |

pub mod coords;
pub mod demand;
pub mod error;
pub mod topology;
pub mod writer;

#[cfg(test)]
mod tests;

pub use coords::load_node_coordinates;
pub use demand::load_demand;
pub use error::{IoError, IoResult};
pub use topology::{load_topology, Topology};
pub use writer::SimulationLogWriter;
