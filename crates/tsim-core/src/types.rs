//! Small shared enums used across every crate in the workspace.

use std::fmt;

/// Vehicle drive kind. HDV is restricted from the blue group near the stop
/// line; AV is permitted everywhere and biased toward it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Hdv,
    Av,
}

impl VehicleKind {
    /// Parse the demand CSV's `type` column: 1 = HDV, 2 = AV.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Hdv),
            2 => Some(Self::Av),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Hdv => 1,
            Self::Av => 2,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hdv => write!(f, "HDV"),
            Self::Av => write!(f, "AV"),
        }
    }
}

/// Signal state for one lane group at one inbound approach.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalColor {
    Red,
    Green,
}

impl Default for SignalColor {
    fn default() -> Self {
        Self::Red
    }
}

impl fmt::Display for SignalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
        }
    }
}

/// Lane group, derived from a lane id. Lanes 0-2 are green (HDV-preferred),
/// 3-4 are blue (AV-preferred).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum LaneGroup {
    Green,
    Blue,
}

impl LaneGroup {
    pub fn of(lane_id: u8) -> Self {
        if lane_id <= 2 {
            Self::Green
        } else {
            Self::Blue
        }
    }
}
