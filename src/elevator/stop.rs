//! Stop processing
//!
//! At a stop the doors open, riders for this floor alight, and the passengers
//! assigned to this elevator on this floor board in arrival order while room
//! remains. Anyone left behind loses the assignment and keeps a live call so the
//! dispatcher reconsiders them on the next tick. A full elevator that reaches a
//! committed floor where nobody alights does not stop at all; its callers there
//! are released the same way.

use serde::{Deserialize, Serialize};

use super::{Elevator, MotionTiming, Rider};
use crate::dispatch::{CallRegistry, FloorCall};
use crate::events::{EventLog, LogEntry, LogKind};
use crate::passenger::Passenger;
use crate::simulation::{SimulationError, SimulationResult, SimulationState};
use crate::types::PassengerId;

/// Passengers moved by one stop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopOutcome {
    /// Passengers delivered at this floor
    pub alighted: Vec<PassengerId>,
    /// Passengers taken aboard
    pub boarded: Vec<PassengerId>,
    /// Passengers left waiting because the elevator filled up
    pub overflowed: Vec<PassengerId>,
}

impl StopOutcome {
    /// Check if the stop moved nobody
    pub fn is_empty(&self) -> bool {
        self.alighted.is_empty() && self.boarded.is_empty() && self.overflowed.is_empty()
    }
}

/// Stop the elevator at its current floor and exchange passengers
///
/// Re-entering while the doors are already open and counting down does nothing.
pub fn process_stop(
    state: &mut SimulationState,
    index: usize,
    timing: &MotionTiming,
) -> SimulationResult<StopOutcome> {
    let tick = state.tick;
    let SimulationState { elevators, passengers, calls, log, completed, .. } = state;
    let elevator = elevators
        .get_mut(index)
        .ok_or_else(|| SimulationError::state_error(format!("no elevator at index {}", index)))?;

    let mut outcome = StopOutcome::default();
    if elevator.doors_open() {
        return Ok(outcome);
    }

    let floor = elevator.current_floor;
    elevator.open_doors(timing.door_hold_time);
    log.push(
        LogEntry::new(
            tick,
            LogKind::DoorsOpened,
            format!("{} stopped at floor {} and opened its doors", elevator.id, floor),
        )
        .with_elevator(elevator.id)
        .with_floor(floor)
        .with_detail("load", elevator.load()),
    );

    for rider in elevator.take_riders_for(floor) {
        passengers.get_mut(rider.passenger_id)?.alight(tick);
        *completed += 1;
        elevator.passengers_served += 1;
        log.push(
            LogEntry::new(
                tick,
                LogKind::PassengerAlighted,
                format!("{} left {} at floor {}", rider.passenger_id, elevator.id, floor),
            )
            .with_elevator(elevator.id)
            .with_passenger(rider.passenger_id)
            .with_floor(floor),
        );
        outcome.alighted.push(rider.passenger_id);
    }

    let waiting: Vec<PassengerId> = passengers
        .iter()
        .filter(|passenger| passenger.is_waiting_for(elevator.id, floor))
        .map(|passenger| passenger.id)
        .collect();

    for passenger_id in waiting {
        let passenger = passengers.get_mut(passenger_id)?;

        if elevator.is_full() {
            leave_behind(elevator, passenger, calls, log, tick);
            outcome.overflowed.push(passenger_id);
            continue;
        }

        passenger.board(tick);
        let destination = passenger.destination;
        elevator.add_rider(Rider { passenger_id, destination });
        elevator.add_target(destination);
        calls.remove_for(passenger_id);
        log.push(
            LogEntry::new(
                tick,
                LogKind::PassengerBoarded,
                format!(
                    "{} boarded {} at floor {} heading to floor {}",
                    passenger_id, elevator.id, floor, destination
                ),
            )
            .with_elevator(elevator.id)
            .with_passenger(passenger_id)
            .with_floor(floor)
            .with_detail("destination", destination.number())
            .with_detail("load", elevator.load()),
        );
        outcome.boarded.push(passenger_id);
    }

    elevator.remove_target(floor);
    Ok(outcome)
}

/// Drop the elevator's commitment to its current floor without opening the doors
///
/// Every passenger assigned to this elevator and waiting here loses the
/// assignment and keeps a live call. Returns the passengers released.
pub fn release_waiting(
    state: &mut SimulationState,
    index: usize,
) -> SimulationResult<Vec<PassengerId>> {
    let tick = state.tick;
    let SimulationState { elevators, passengers, calls, log, .. } = state;
    let elevator = elevators
        .get_mut(index)
        .ok_or_else(|| SimulationError::state_error(format!("no elevator at index {}", index)))?;
    let floor = elevator.current_floor;

    let waiting: Vec<PassengerId> = passengers
        .iter()
        .filter(|passenger| passenger.is_waiting_for(elevator.id, floor))
        .map(|passenger| passenger.id)
        .collect();

    for passenger_id in &waiting {
        leave_behind(elevator, passengers.get_mut(*passenger_id)?, calls, log, tick);
    }

    elevator.remove_target(floor);
    Ok(waiting)
}

fn leave_behind(
    elevator: &Elevator,
    passenger: &mut Passenger,
    calls: &mut CallRegistry,
    log: &mut EventLog,
    tick: u64,
) {
    let floor = elevator.current_floor;
    passenger.clear_assignment();
    calls.ensure_call(FloorCall::new(floor, passenger.direction, tick, passenger.id));
    log.push(
        LogEntry::new(
            tick,
            LogKind::BoardingOverflow,
            format!(
                "{} is full, {} stays on floor {} awaiting reassignment",
                elevator.id, passenger.id, floor
            ),
        )
        .with_elevator(elevator.id)
        .with_passenger(passenger.id)
        .with_floor(floor)
        .with_detail("capacity", elevator.capacity),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::Passenger;
    use crate::types::{ElevatorId, ElevatorStatus, Floor, PassengerStatus, SimulationConfig};

    fn state_with_capacity(capacity: usize) -> SimulationState {
        let config = SimulationConfig {
            elevator_count: 1,
            elevator_capacity: capacity,
            ..SimulationConfig::default()
        };
        SimulationState::new(&config)
    }

    fn waiting_passenger(state: &mut SimulationState, source: i32, destination: i32) -> PassengerId {
        let id = state.passengers.next_id();
        let mut passenger = Passenger::new(id, state.tick, Floor::new(source), Floor::new(destination));
        passenger.assign(ElevatorId::new(1));
        state.calls.register(FloorCall::new(passenger.source, passenger.direction, state.tick, id));
        state.passengers.push(passenger).unwrap();
        id
    }

    #[test]
    fn test_boarding_and_alighting() {
        let mut state = state_with_capacity(5);
        let rider = waiting_passenger(&mut state, 1, 4);
        state.elevators[0].add_target(Floor::new(1));

        state.tick = 2;
        let outcome = process_stop(&mut state, 0, &MotionTiming::default()).unwrap();
        assert_eq!(outcome.boarded, vec![rider]);
        assert!(outcome.alighted.is_empty());
        assert!(state.calls.is_empty());
        assert_eq!(state.elevators[0].status, ElevatorStatus::DoorsOpen);
        assert!(state.elevators[0].targets.contains(&Floor::new(4)));
        assert!(!state.elevators[0].targets.contains(&Floor::new(1)));

        let passenger = state.passengers.get(rider).unwrap();
        assert_eq!(passenger.status, PassengerStatus::InElevator);
        assert_eq!(passenger.pickup_tick, Some(2));

        // Arrive at the destination
        state.elevators[0].door_open_time = 0;
        state.elevators[0].current_floor = Floor::new(4);
        state.tick = 6;
        let outcome = process_stop(&mut state, 0, &MotionTiming::default()).unwrap();
        assert_eq!(outcome.alighted, vec![rider]);
        assert_eq!(state.completed, 1);
        assert_eq!(state.elevators[0].passengers_served, 1);
        assert_eq!(state.elevators[0].stops_made, 2);

        let passenger = state.passengers.get(rider).unwrap();
        assert_eq!(passenger.status, PassengerStatus::Completed);
        assert_eq!(passenger.drop_off_tick, Some(6));
    }

    #[test]
    fn test_reentry_while_doors_open_is_a_no_op() {
        let mut state = state_with_capacity(5);
        waiting_passenger(&mut state, 1, 4);

        process_stop(&mut state, 0, &MotionTiming { travel_time_per_floor: 1, door_hold_time: 3 })
            .unwrap();
        let log_len = state.log.len();

        let outcome = process_stop(&mut state, 0, &MotionTiming::default()).unwrap();
        assert!(outcome.is_empty());
        assert_eq!(state.log.len(), log_len);
        assert_eq!(state.elevators[0].door_open_time, 3);
        assert_eq!(state.elevators[0].stops_made, 1);
    }

    #[test]
    fn test_overflow_clears_assignment_and_keeps_one_call() {
        let mut state = state_with_capacity(1);
        let first = waiting_passenger(&mut state, 1, 5);
        let second = waiting_passenger(&mut state, 1, 6);

        let outcome = process_stop(&mut state, 0, &MotionTiming::default()).unwrap();
        assert_eq!(outcome.boarded, vec![first]);
        assert_eq!(outcome.overflowed, vec![second]);

        let left_behind = state.passengers.get(second).unwrap();
        assert!(left_behind.is_waiting());
        assert!(left_behind.assigned_elevator.is_none());
        assert_eq!(state.calls.len(), 1);
        assert!(state.calls.contains(second));
        assert_eq!(state.log.count_kind(LogKind::BoardingOverflow), 1);
        assert_eq!(state.elevators[0].load(), 1);
    }

    #[test]
    fn test_release_waiting_keeps_doors_closed() {
        let mut state = state_with_capacity(1);
        state.elevators[0].add_rider(Rider { passenger_id: PassengerId::new(99), destination: Floor::new(8) });
        state.elevators[0].add_target(Floor::new(1));
        let caller = waiting_passenger(&mut state, 1, 4);

        let released = release_waiting(&mut state, 0).unwrap();
        assert_eq!(released, vec![caller]);
        assert!(!state.elevators[0].doors_open());
        assert_eq!(state.elevators[0].stops_made, 0);
        assert!(!state.elevators[0].targets.contains(&Floor::new(1)));

        assert!(state.passengers.get(caller).unwrap().needs_assignment());
        assert_eq!(state.calls.len(), 1);
        assert_eq!(state.log.count_kind(LogKind::BoardingOverflow), 1);
        assert_eq!(state.log.count_kind(LogKind::DoorsOpened), 0);
    }
}
