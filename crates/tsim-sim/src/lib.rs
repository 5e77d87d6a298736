//! `tsim-sim` — the top-level tick loop.
//!
//! # Tick procedure
//!
//! ```text
//! for tick in 0..config.until:
//!   ① Inject    — pop demand rows due at `tick` (tolerance 0.01); route the
//!                 initial hop; defer by one tick if block 0 is full.
//!   ② Signals   — every 5th tick, update_signals on every intersection.
//!   ③ Advance   — every 5th tick, sort active vehicles by
//!                 arrival_time + stuck_time and tick each in order.
//! ```
//!
//! | Module      | Contents                                             |
//! |-------------|---------------------------------------------------------|
//! | [`clock`]   | `Clock`, the tick loop                                |
//! | [`builder`] | `ClockBuilder`                                        |
//! | [`observer`]| `Observer`, `NoopObserver`                            |
//! | [`demand`]  | `PendingDemand`                                       |
//! | [`error`]   | `SimError`, `SimResult<T>`                             |

pub mod builder;
pub mod clock;
pub mod demand;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::ClockBuilder;
pub use clock::Clock;
pub use demand::PendingDemand;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, Observer};
