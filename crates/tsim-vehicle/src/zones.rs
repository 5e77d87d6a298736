//! Zone classification of a vehicle's position within its current lane.

use tsim_core::VehicleId;

use crate::error::{VehicleError, VehicleResult};

/// Which phase of movement applies at the vehicle's current block.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Zone {
    /// Far from the intersection: the simple process.
    Far,
    /// Approaching: the lane-changing process.
    Changing,
    /// Close to the intersection: the end process (HDVs forbidden from
    /// blue-group lanes here).
    End,
    /// At the stop line, not yet at the final destination: the intersection
    /// process.
    AtStop,
    /// At the stop line and `edge_to == final_destination`: exit.
    Arrived,
}

/// Classify `p` (current block) against `m` (stop line), `d` (dedicated zone
/// length in blocks) and `c` (lane-changing zone length in blocks). Uses
/// signed arithmetic so a dedicated+changing zone longer than the lane
/// never underflows.
///
/// `p > m` means the vehicle has moved past its lane's last block without
/// taking the exit or intersection transition — a state-machine bug, not a
/// zone to route around, so it is surfaced as `VehicleError::PositionExceedsMax`
/// rather than folded into `Zone::End`.
pub fn classify(
    vehicle: VehicleId,
    p: u32,
    m: u32,
    d: u32,
    c: u32,
    at_destination: bool,
) -> VehicleResult<Zone> {
    if p > m {
        return Err(VehicleError::PositionExceedsMax { vehicle, block: p, max: m });
    }
    let (p, m, d, c) = (p as i64, m as i64, d as i64, c as i64);
    if p == m {
        return Ok(if at_destination { Zone::Arrived } else { Zone::AtStop });
    }
    Ok(if p < m - c - d {
        Zone::Far
    } else if p < m - d {
        Zone::Changing
    } else {
        Zone::End
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v() -> VehicleId {
        VehicleId(0)
    }

    #[test]
    fn classifies_all_zones() {
        // M=9, D=2, C=2: Far p<5, Changing 5<=p<7, End 7<=p<9, AtStop p=9.
        assert_eq!(classify(v(), 0, 9, 2, 2, false).unwrap(), Zone::Far);
        assert_eq!(classify(v(), 5, 9, 2, 2, false).unwrap(), Zone::Changing);
        assert_eq!(classify(v(), 7, 9, 2, 2, false).unwrap(), Zone::End);
        assert_eq!(classify(v(), 9, 9, 2, 2, false).unwrap(), Zone::AtStop);
        assert_eq!(classify(v(), 9, 9, 2, 2, true).unwrap(), Zone::Arrived);
    }

    #[test]
    fn position_past_stop_line_is_an_error() {
        let err = classify(v(), 10, 9, 2, 2, false).unwrap_err();
        assert!(matches!(
            err,
            VehicleError::PositionExceedsMax { block: 10, max: 9, .. }
        ));
    }
}
