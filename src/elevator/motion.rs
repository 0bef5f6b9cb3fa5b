//! Per-tick elevator motion
//!
//! Each tick an elevator does exactly one of: count down an open door, stop at
//! the current floor, park, or advance towards its next LOOK target. Floors
//! change one at a time and only while the doors are closed. A full elevator
//! never stops where nobody gets off; it releases its callers there and moves on.

use serde::{Deserialize, Serialize};

use super::{process_stop, release_waiting, Elevator};
use crate::events::{LogEntry, LogKind};
use crate::passenger::PassengerRoster;
use crate::simulation::{SimulationError, SimulationResult, SimulationState};
use crate::types::{Floor, Heading, SimulationConfig};

/// Timing constants of elevator motion, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionTiming {
    /// Ticks needed to pass one floor
    pub travel_time_per_floor: u32,
    /// Ticks the doors stay open at a stop
    pub door_hold_time: u32,
}

impl Default for MotionTiming {
    fn default() -> Self {
        Self { travel_time_per_floor: 1, door_hold_time: 1 }
    }
}

impl MotionTiming {
    /// Timing from the simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            travel_time_per_floor: config.travel_time_per_floor.max(1),
            door_hold_time: config.door_hold_time.max(1),
        }
    }
}

/// Next floor to head for under the LOOK scan
///
/// Heading up (or idle): the nearest pending floor at or above, else the farthest
/// below. Heading down: the nearest at or below, else the farthest above.
pub fn next_target(elevator: &Elevator) -> Option<Floor> {
    let pending = elevator.pending_floors();
    let here = elevator.current_floor;

    match elevator.heading {
        Heading::Up | Heading::Idle => pending
            .range(here..)
            .next()
            .copied()
            .or_else(|| pending.iter().next().copied()),
        Heading::Down => pending
            .range(..=here)
            .next_back()
            .copied()
            .or_else(|| pending.iter().next_back().copied()),
    }
}

/// Check if the elevator must stop at its current floor
///
/// True when a rider gets off here. Otherwise only an elevator with room aboard
/// stops, for a committed target or for a passenger assigned to it who waits
/// here with a compatible direction.
pub fn should_stop(elevator: &Elevator, passengers: &PassengerRoster) -> bool {
    let here = elevator.current_floor;

    if elevator.has_rider_for(here) {
        return true;
    }

    if elevator.is_full() {
        return false;
    }

    if elevator.targets.contains(&here) {
        return true;
    }

    passengers.iter().any(|passenger| {
        passenger.is_waiting_for(elevator.id, here)
            && match elevator.heading.direction() {
                None => true,
                Some(direction) => {
                    direction == passenger.direction || !elevator.has_pending_beyond(direction)
                }
            }
    })
}

/// Advance one elevator by one tick
pub fn step_elevator(
    state: &mut SimulationState,
    index: usize,
    timing: &MotionTiming,
) -> SimulationResult<()> {
    let tick = state.tick;
    let elevator = state
        .elevators
        .get_mut(index)
        .ok_or_else(|| SimulationError::state_error(format!("no elevator at index {}", index)))?;

    if elevator.door_open_time > 0 {
        elevator.door_open_time -= 1;
        if elevator.door_open_time == 0 {
            let target = next_target(elevator);
            elevator.orient(target);
            state.log.push(
                LogEntry::new(
                    tick,
                    LogKind::DoorsClosed,
                    format!("{} closed its doors at floor {}", elevator.id, elevator.current_floor),
                )
                .with_elevator(elevator.id)
                .with_floor(elevator.current_floor)
                .with_detail("status", elevator.status.to_string()),
            );
        }
        return Ok(());
    }

    // A full car passing a committed floor hands its callers back to the dispatcher
    let here = elevator.current_floor;
    if elevator.is_full() && elevator.targets.contains(&here) && !elevator.has_rider_for(here) {
        release_waiting(state, index)?;
    }

    let elevator = state
        .elevators
        .get_mut(index)
        .ok_or_else(|| SimulationError::state_error(format!("no elevator at index {}", index)))?;

    if should_stop(elevator, &state.passengers) {
        process_stop(state, index, timing)?;
        return Ok(());
    }

    if !elevator.has_work() {
        elevator.park();
        return Ok(());
    }

    let Some(target) = next_target(elevator) else {
        elevator.park();
        return Ok(());
    };

    let previous_heading = elevator.heading;
    elevator.orient(Some(target));
    if elevator.heading != previous_heading {
        elevator.travel_progress = 0;
    }

    let Some(direction) = elevator.current_floor.direction_to(target) else {
        return Ok(());
    };

    elevator.travel_progress += 1;
    if elevator.travel_progress < timing.travel_time_per_floor {
        return Ok(());
    }

    let next_floor = elevator.current_floor.step(direction);
    if !state.floors.contains(next_floor) {
        return Err(SimulationError::state_error(format!(
            "{} would leave the served floors moving {} from {}",
            elevator.id, direction, elevator.current_floor
        )));
    }

    elevator.travel_progress = 0;
    elevator.current_floor = next_floor;
    elevator.floors_traveled += 1;

    state.log.push(
        LogEntry::new(
            tick,
            LogKind::ElevatorMoved,
            format!("{} moved to floor {} ({})", elevator.id, next_floor, direction),
        )
        .with_elevator(elevator.id)
        .with_floor(next_floor)
        .with_detail("direction", direction.to_string())
        .with_detail("target", target.number())
        .with_detail("load", elevator.load()),
    );

    Ok(())
}
