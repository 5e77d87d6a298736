//! `tsim-road` — lanes, intersections, the arena that owns them, and the
//! adaptive signal controller.
//!
//! | Module          | Contents                                         |
//! |-----------------|---------------------------------------------------|
//! | [`lane`]        | `Lane`, `BLOCK_CAPACITY`                          |
//! | [`intersection`]| `Intersection`, the signal-update procedure       |
//! | [`arena`]       | `RoadArena` — owns all `Lane`/`Intersection`s     |
//! | [`error`]       | `RoadError`, `RoadResult<T>`                      |

pub mod arena;
pub mod error;
pub mod intersection;
pub mod lane;

#[cfg(test)]
mod tests;

pub use arena::RoadArena;
pub use error::{RoadError, RoadResult};
pub use intersection::Intersection;
pub use lane::{Lane, BLOCK_CAPACITY};
