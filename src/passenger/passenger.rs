//! Core passenger struct and lifecycle transitions
//!
//! A passenger is created at spawn and kept for final reporting after delivery.
//! Its lifecycle only ever moves forward: waiting, then in elevator, then
//! completed.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, ElevatorId, Floor, PassengerId, PassengerStatus};

/// Represents a passenger in the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique identifier for the passenger
    pub id: PassengerId,
    /// Tick at which the passenger appeared
    pub spawn_tick: u64,
    /// Floor the passenger is waiting on
    pub source: Floor,
    /// Floor the passenger wants to reach (never equal to `source`)
    pub destination: Floor,
    /// Travel direction implied by source and destination
    pub direction: Direction,
    /// Current lifecycle status
    pub status: PassengerStatus,
    /// Tick at which the passenger boarded
    pub pickup_tick: Option<u64>,
    /// Tick at which the passenger reached the destination
    pub drop_off_tick: Option<u64>,
    /// Elevator currently committed to picking this passenger up
    pub assigned_elevator: Option<ElevatorId>,
}

impl Passenger {
    /// Create a new waiting passenger
    pub fn new(id: PassengerId, spawn_tick: u64, source: Floor, destination: Floor) -> Self {
        Self {
            id,
            spawn_tick,
            source,
            destination,
            direction: Direction::between(source, destination),
            status: PassengerStatus::Waiting,
            pickup_tick: None,
            drop_off_tick: None,
            assigned_elevator: None,
        }
    }

    /// Check if the passenger is waiting at the source floor
    pub fn is_waiting(&self) -> bool {
        self.status == PassengerStatus::Waiting
    }

    /// Check if the passenger has been delivered
    pub fn is_completed(&self) -> bool {
        self.status == PassengerStatus::Completed
    }

    /// Check if the passenger is waiting for a dispatcher decision
    pub fn needs_assignment(&self) -> bool {
        self.is_waiting() && self.assigned_elevator.is_none()
    }

    /// Check if the passenger is waiting on `floor` for elevator `elevator_id`
    pub fn is_waiting_for(&self, elevator_id: ElevatorId, floor: Floor) -> bool {
        self.is_waiting() && self.source == floor && self.assigned_elevator == Some(elevator_id)
    }

    /// Commit an elevator to this passenger
    pub fn assign(&mut self, elevator_id: ElevatorId) {
        self.assigned_elevator = Some(elevator_id);
    }

    /// Release the elevator commitment so the dispatcher reconsiders this passenger
    pub fn clear_assignment(&mut self) {
        self.assigned_elevator = None;
    }

    /// Transition to riding
    pub fn board(&mut self, tick: u64) {
        self.status = PassengerStatus::InElevator;
        self.pickup_tick = Some(tick);
    }

    /// Transition to completed
    pub fn alight(&mut self, tick: u64) {
        self.status = PassengerStatus::Completed;
        self.drop_off_tick = Some(tick);
    }

    /// Ticks spent waiting before pickup
    pub fn wait_time(&self) -> Option<u64> {
        self.pickup_tick.map(|pickup| pickup.saturating_sub(self.spawn_tick))
    }

    /// Ticks spent riding
    pub fn ride_time(&self) -> Option<u64> {
        match (self.pickup_tick, self.drop_off_tick) {
            (Some(pickup), Some(drop_off)) => Some(drop_off.saturating_sub(pickup)),
            _ => None,
        }
    }

    /// Ticks from spawn to drop-off
    pub fn journey_time(&self) -> Option<u64> {
        self.drop_off_tick.map(|drop_off| drop_off.saturating_sub(self.spawn_tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Passenger {
        Passenger::new(PassengerId::new(1), 3, Floor::new(2), Floor::new(8))
    }

    #[test]
    fn test_new_passenger_is_waiting_and_unassigned() {
        let passenger = sample();
        assert!(passenger.is_waiting());
        assert!(passenger.needs_assignment());
        assert_eq!(passenger.direction, Direction::Up);
        assert!(passenger.wait_time().is_none());
        assert!(passenger.journey_time().is_none());
    }

    #[test]
    fn test_lifecycle_and_timings() {
        let mut passenger = sample();
        let elevator = ElevatorId::new(1);

        passenger.assign(elevator);
        assert!(!passenger.needs_assignment());
        assert!(passenger.is_waiting_for(elevator, Floor::new(2)));
        assert!(!passenger.is_waiting_for(elevator, Floor::new(3)));
        assert!(!passenger.is_waiting_for(ElevatorId::new(2), Floor::new(2)));

        passenger.board(7);
        assert_eq!(passenger.status, PassengerStatus::InElevator);
        assert!(!passenger.is_waiting_for(elevator, Floor::new(2)));
        assert_eq!(passenger.wait_time(), Some(4));
        assert!(passenger.ride_time().is_none());

        passenger.alight(13);
        assert!(passenger.is_completed());
        assert_eq!(passenger.ride_time(), Some(6));
        assert_eq!(passenger.journey_time(), Some(10));
    }

    #[test]
    fn test_downward_trip_direction() {
        let passenger = Passenger::new(PassengerId::new(2), 0, Floor::new(9), Floor::new(1));
        assert_eq!(passenger.direction, Direction::Down);
    }
}
