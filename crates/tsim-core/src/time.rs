//! Simulation time model.
//!
//! Time is a monotonically increasing integer `Tick` counter; there is no
//! wall-clock mapping anywhere in this engine (unlike frameworks that model
//! hourly activity schedules, every quantity here — departure times, signal
//! periods, stuck-time penalties — is already expressed in ticks).

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// True if this tick is a multiple of `period` (used for the every-5-tick
    /// signal update and vehicle-ordering pass).
    #[inline]
    pub fn is_multiple_of(self, period: u64) -> bool {
        self.0 % period == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Bare tick counter driving the whole simulation. Unlike a wall-clock
/// framework's `SimClock`, there is nothing to convert — `advance` is the
/// entire API surface.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }
}

/// Top-level simulation configuration, constructible by a demo binary or
/// loaded from a config file via `serde_json`/`toml`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Length of the dedicated (AV-only near the stop line) zone, in metres.
    pub dedicated_lane_length_m: u32,
    /// Length of the lane-changing zone preceding the dedicated zone, metres.
    pub lane_changing_zone_length_m: u32,
    /// Length of one block, metres. Default 100.
    pub each_block_length_m: u32,
    /// Final tick (exclusive) to run the simulation to.
    pub until: u64,
    /// Directory the output CSV is written into.
    pub output_dir: std::path::PathBuf,
}

impl SimConfig {
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.until)
    }

    /// Convert a metre length to whole blocks
    /// (`blocks = floor(length / each_block_length)`).
    #[inline]
    pub fn to_blocks(&self, length_m: u32) -> u32 {
        length_m / self.each_block_length_m
    }
}
