//! `tsim-network` — directed road graph, BPR edge cost, and reactive
//! shortest-path routing.
//!
//! | Module    | Contents                                              |
//! |-----------|----------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR), `RoadNetworkBuilder`, `EdgeId`     |
//! | [`cost`]    | `bpr_cost`, the fixed-numeric volume-delay function     |
//! | [`router`]  | `Router` trait, `EdgeLoad` trait, `DijkstraRouter`      |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                      |

pub mod cost;
pub mod error;
pub mod network;
pub mod router;

pub use cost::bpr_cost;
pub use error::{NetworkError, NetworkResult};
pub use network::{EdgeId, RoadNetwork, RoadNetworkBuilder};
pub use router::{DijkstraRouter, EdgeLoad, Router};
