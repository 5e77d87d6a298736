//! `Vehicle` — the per-tick movement state machine.
//!
//! Grounded directly on the original `Vehicle` class (`process`,
//! `_simple_process`, `_lane_changing_process`, `_end_process`,
//! `_intersection_process`, `_action_flr`, `_change_lane_to_left/_right`,
//! `_move_forward`, `_cant_move`, `_exit_the_system`). The object-graph
//! Python (a vehicle holds live references to `Lane`/`Intersection`
//! objects) is translated into the arena-index model: a `Vehicle` holds
//! `LaneId`/`IntersectionId` and looks both up through `tsim-road`'s arena
//! on every tick.

use tsim_core::{IntersectionId, LaneId, NodeId, SignalColor, Tick, VehicleId, VehicleKind};
use tsim_ledger::{LedgerRow, StatsLedger};
use tsim_network::{EdgeLoad, RoadNetwork, Router};
use tsim_road::RoadArena;

use crate::error::{VehicleError, VehicleResult};
use crate::zones::{classify, Zone};

#[derive(Copy, Clone)]
enum Move {
    Forward,
    Left,
    Right,
}

pub struct Vehicle {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub final_destination: NodeId,
    /// The directed edge currently being traversed: inbound to
    /// `intersection_id`, from `edge_from`.
    pub edge_from: NodeId,
    pub edge_to: NodeId,
    pub intersection_id: IntersectionId,
    pub lane_id: LaneId,
    pub block: u32,
    pub arrival_time: Tick,
    pub stuck_time: u64,
}

impl Vehicle {
    /// Construct a vehicle already placed at block 0 of `lane_id` on the
    /// edge `edge_from -> edge_to`. Appends its initial ledger row.
    ///
    /// `initial_stuck_time` carries over stuck-time accumulated while
    /// injection was deferred because block 0 was full.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        id: VehicleId,
        kind: VehicleKind,
        final_destination: NodeId,
        edge_from: NodeId,
        edge_to: NodeId,
        intersection_id: IntersectionId,
        lane_id: LaneId,
        now: Tick,
        initial_stuck_time: u64,
        arena: &mut RoadArena,
        ledger: &mut StatsLedger,
    ) -> Self {
        arena.lane_mut(lane_id).arrive(0);
        let vehicle = Self {
            id,
            kind,
            final_destination,
            edge_from,
            edge_to,
            intersection_id,
            lane_id,
            block: 0,
            arrival_time: now,
            stuck_time: initial_stuck_time,
        };
        vehicle.record(arena, ledger, now);
        vehicle
    }

    fn lane_number(&self, arena: &RoadArena) -> u8 {
        arena.lane(self.lane_id).lane_number
    }

    /// Append a ledger row reflecting the vehicle's current (possibly
    /// unchanged) state. `light` is the observed signal colour only when the
    /// vehicle sits at the stop line, `None` otherwise.
    fn record(&self, arena: &RoadArena, ledger: &mut StatsLedger, now: Tick) {
        let lane_number = self.lane_number(arena);
        let stop_line = arena.lane(self.lane_id).stop_line();
        let light = if self.block == stop_line {
            Some(arena.intersection(self.intersection_id).signal(self.edge_from, lane_number))
        } else {
            None
        };
        ledger.append(LedgerRow {
            tick: now,
            vehicle_id: self.id,
            edge_from: self.edge_from,
            edge_to: self.edge_to,
            lane_id: lane_number,
            block: self.block,
            arrival_time: self.arrival_time,
            stuck_time: self.stuck_time,
            active: true,
            light,
            kind: self.kind,
        });
    }

    // ── Elementary moves ──────────────────────────────────────────────

    fn try_forward(&mut self, arena: &mut RoadArena) -> bool {
        let next = self.block + 1;
        if arena.lane(self.lane_id).is_available(next) {
            arena.lane_mut(self.lane_id).leave(self.block);
            arena.lane_mut(self.lane_id).arrive(next);
            self.block = next;
            true
        } else {
            false
        }
    }

    fn try_side(&mut self, arena: &mut RoadArena, delta: i8) -> bool {
        let lane_number = self.lane_number(arena) as i16 + delta as i16;
        if !(0..=4).contains(&lane_number) {
            return false;
        }
        let Some(target_lane) = arena
            .intersection(self.intersection_id)
            .lane_id(self.edge_from, lane_number as u8)
        else {
            return false;
        };
        let next = self.block + 1;
        if arena.lane(target_lane).is_available(next) {
            arena.lane_mut(self.lane_id).leave(self.block);
            arena.lane_mut(target_lane).arrive(next);
            self.lane_id = target_lane;
            self.block = next;
            true
        } else {
            false
        }
    }

    fn try_left(&mut self, arena: &mut RoadArena) -> bool {
        self.try_side(arena, 1)
    }

    fn try_right(&mut self, arena: &mut RoadArena) -> bool {
        self.try_side(arena, -1)
    }

    /// Try each move in `priorities`, in order, stopping at the first
    /// success. If none succeed, increments `stuck_time` by 5.
    fn action_flr(&mut self, arena: &mut RoadArena, priorities: &[Move]) -> bool {
        for mv in priorities {
            let ok = match mv {
                Move::Forward => self.try_forward(arena),
                Move::Left => self.try_left(arena),
                Move::Right => self.try_right(arena),
            };
            if ok {
                return true;
            }
        }
        self.stuck_time += 5;
        false
    }

    // ── Zone processes ───────────────────────────────────────────────

    fn simple_process(&mut self, arena: &mut RoadArena) -> bool {
        use Move::*;
        let lane_number = self.lane_number(arena);
        match lane_number {
            0 => self.action_flr(arena, &[Forward, Right]),
            4 => self.action_flr(arena, &[Forward, Left]),
            1..=3 => match self.kind {
                VehicleKind::Hdv => self.action_flr(arena, &[Forward, Left]),
                VehicleKind::Av => self.action_flr(arena, &[Forward, Right]),
            },
            _ => unreachable!("lane number out of 0..=4"),
        }
    }

    fn changing_process(&mut self, arena: &mut RoadArena) -> bool {
        use Move::*;
        let lane_number = self.lane_number(arena);
        let lane = arena.lane(self.lane_id);
        let m = lane.stop_line();
        let d = lane.dedicated_lane_length;
        let p = self.block;

        match lane_number {
            0 => match self.kind {
                VehicleKind::Hdv => self.action_flr(arena, &[Forward, Right]),
                VehicleKind::Av => self.action_flr(arena, &[Right, Forward]),
            },
            4 => match self.kind {
                VehicleKind::Hdv => {
                    let warning = m as i64 - d as i64 - 1;
                    if p as i64 != warning {
                        self.action_flr(arena, &[Left, Forward])
                    } else {
                        self.action_flr(arena, &[Left])
                    }
                }
                VehicleKind::Av => self.action_flr(arena, &[Forward, Left]),
            },
            3 => match self.kind {
                VehicleKind::Hdv => {
                    let warning = m as i64 - d as i64;
                    if p as i64 != warning {
                        self.action_flr(arena, &[Left, Forward])
                    } else {
                        self.action_flr(arena, &[Left])
                    }
                }
                VehicleKind::Av => self.action_flr(arena, &[Forward, Right]),
            },
            2 => match self.kind {
                VehicleKind::Hdv => self.action_flr(arena, &[Left, Forward]),
                VehicleKind::Av => self.action_flr(arena, &[Right, Forward, Left]),
            },
            1 => match self.kind {
                VehicleKind::Hdv => self.action_flr(arena, &[Left, Forward, Right]),
                VehicleKind::Av => self.action_flr(arena, &[Right, Forward, Left]),
            },
            _ => unreachable!("lane number out of 0..=4"),
        }
    }

    fn end_process(&mut self, arena: &mut RoadArena) -> VehicleResult<bool> {
        use Move::*;
        let lane_number = self.lane_number(arena);
        let done = match lane_number {
            0 => match self.kind {
                VehicleKind::Hdv => self.action_flr(arena, &[Forward, Right]),
                VehicleKind::Av => self.action_flr(arena, &[Right, Forward]),
            },
            4 => {
                if self.kind == VehicleKind::Hdv {
                    return Err(VehicleError::HdvInBlueEndZone { vehicle: self.id, lane_number });
                }
                self.action_flr(arena, &[Forward, Left])
            }
            3 => {
                if self.kind == VehicleKind::Hdv {
                    return Err(VehicleError::HdvInBlueEndZone { vehicle: self.id, lane_number });
                }
                self.action_flr(arena, &[Right, Forward])
            }
            2 => match self.kind {
                VehicleKind::Hdv => self.action_flr(arena, &[Left, Forward]),
                VehicleKind::Av => self.action_flr(arena, &[Right, Forward]),
            },
            1 => match self.kind {
                VehicleKind::Hdv => self.action_flr(arena, &[Left, Forward, Right]),
                VehicleKind::Av => self.action_flr(arena, &[Right, Forward, Left]),
            },
            _ => unreachable!("lane number out of 0..=4"),
        };
        Ok(done)
    }

    fn intersection_process(
        &mut self,
        arena: &mut RoadArena,
        network: &RoadNetwork,
        router: &dyn Router,
        ledger: &StatsLedger,
    ) -> VehicleResult<()> {
        let lane_number = self.lane_number(arena);
        let signal = arena.intersection(self.intersection_id).signal(self.edge_from, lane_number);
        if signal != SignalColor::Green {
            self.stuck_time += 5;
            return Ok(());
        }

        arena.lane_mut(self.lane_id).leave(self.block);

        let w = router
            .next_hop(network, ledger, self.edge_to, self.final_destination)
            .map_err(|_| VehicleError::NoPathToDestination {
                vehicle: self.id,
                destination: self.final_destination,
            })?;

        let new_intersection = arena
            .intersection_of(w)
            .expect("router returned a node with no intersection");
        let new_lane = arena
            .intersection(new_intersection)
            .lane_id(self.edge_to, lane_number)
            .expect("missing lane for routed approach");

        self.edge_from = self.edge_to;
        self.edge_to = w;
        self.intersection_id = new_intersection;
        self.lane_id = new_lane;
        self.block = 0;
        self.stuck_time = 0;
        arena.lane_mut(self.lane_id).arrive(0);
        Ok(())
    }

    fn exit(&mut self, arena: &mut RoadArena, ledger: &mut StatsLedger) {
        arena.lane_mut(self.lane_id).leave(self.block);
        ledger.deactivate(self.id);
    }

    /// Execute one tick's movement attempt, dispatching on the vehicle's
    /// current zone. Returns `Ok(true)` if the vehicle remains active,
    /// `Ok(false)` if it exited this tick.
    pub fn tick(
        &mut self,
        arena: &mut RoadArena,
        network: &RoadNetwork,
        router: &dyn Router,
        ledger: &mut StatsLedger,
        now: Tick,
    ) -> VehicleResult<bool> {
        let lane = arena.lane(self.lane_id);
        let m = lane.stop_line();
        let d = lane.dedicated_lane_length;
        let c = lane.lane_changing_zone_length;
        let at_destination = self.edge_to == self.final_destination;

        match classify(self.id, self.block, m, d, c, at_destination)? {
            Zone::Far => {
                self.simple_process(arena);
                self.record(arena, ledger, now);
                Ok(true)
            }
            Zone::Changing => {
                self.changing_process(arena);
                self.record(arena, ledger, now);
                Ok(true)
            }
            Zone::End => {
                self.end_process(arena)?;
                self.record(arena, ledger, now);
                Ok(true)
            }
            Zone::AtStop => {
                self.intersection_process(arena, network, router, ledger)?;
                self.record(arena, ledger, now);
                Ok(true)
            }
            Zone::Arrived => {
                self.exit(arena, ledger);
                Ok(false)
            }
        }
    }
}
