//! Core elevator struct and state transitions
//!
//! This module contains the elevator record and the small, local state changes
//! the dispatcher, motion controller, and stop processor apply to it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::{Direction, ElevatorId, ElevatorStatus, Floor, Heading, PassengerId};

/// A passenger aboard an elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rider {
    /// Passenger riding
    pub passenger_id: PassengerId,
    /// Floor the passenger gets off at
    pub destination: Floor,
}

/// Represents one elevator of the bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elevator {
    /// Unique identifier, numbered in registration order
    pub id: ElevatorId,
    /// Floor the elevator is at
    pub current_floor: Floor,
    /// Passengers aboard, in boarding order (never more than `capacity`)
    pub riders: Vec<Rider>,
    /// Maximum number of riders
    pub capacity: usize,
    /// Operational status
    pub status: ElevatorStatus,
    /// Direction of the current sweep
    pub heading: Heading,
    /// Floors the elevator is committed to visit
    pub targets: BTreeSet<Floor>,
    /// Ticks remaining with doors open; 0 means the doors are closed
    pub door_open_time: u32,
    /// Ticks spent travelling towards the next floor
    pub travel_progress: u32,
    /// Floors moved over the run
    pub floors_traveled: u64,
    /// Stops made over the run
    pub stops_made: u64,
    /// Passengers delivered over the run
    pub passengers_served: u64,
}

impl Elevator {
    /// Create an idle, empty elevator
    pub fn new(id: ElevatorId, floor: Floor, capacity: usize) -> Self {
        Self {
            id,
            current_floor: floor,
            riders: Vec::with_capacity(capacity),
            capacity,
            status: ElevatorStatus::Idle,
            heading: Heading::Idle,
            targets: BTreeSet::new(),
            door_open_time: 0,
            travel_progress: 0,
            floors_traveled: 0,
            stops_made: 0,
            passengers_served: 0,
        }
    }

    /// Number of riders aboard
    pub fn load(&self) -> usize {
        self.riders.len()
    }

    /// Check if no more riders fit
    pub fn is_full(&self) -> bool {
        self.riders.len() >= self.capacity
    }

    /// Check if the doors are open and counting down
    pub fn doors_open(&self) -> bool {
        self.door_open_time > 0
    }

    /// Check if the elevator has committed targets or riders
    pub fn has_work(&self) -> bool {
        !self.targets.is_empty() || !self.riders.is_empty()
    }

    /// Check if a rider gets off at `floor`
    pub fn has_rider_for(&self, floor: Floor) -> bool {
        self.riders.iter().any(|rider| rider.destination == floor)
    }

    /// Union of committed targets and rider destinations
    pub fn pending_floors(&self) -> BTreeSet<Floor> {
        let mut floors = self.targets.clone();
        floors.extend(self.riders.iter().map(|rider| rider.destination));
        floors
    }

    /// Check if any pending floor lies strictly beyond the current floor in `direction`
    pub fn has_pending_beyond(&self, direction: Direction) -> bool {
        let here = self.current_floor;
        self.pending_floors().iter().any(|floor| match direction {
            Direction::Up => floor.is_above(here),
            Direction::Down => floor.is_below(here),
        })
    }

    /// Furthest pending floor at or beyond the current floor in `direction`
    pub fn furthest_pending(&self, direction: Direction) -> Option<Floor> {
        let here = self.current_floor;
        let pending = self.pending_floors();
        match direction {
            Direction::Up => pending.range(here..).next_back().copied(),
            Direction::Down => pending.range(..=here).next().copied(),
        }
    }

    /// Commit to visiting a floor
    pub fn add_target(&mut self, floor: Floor) {
        self.targets.insert(floor);
    }

    /// Drop a committed floor
    pub fn remove_target(&mut self, floor: Floor) -> bool {
        self.targets.remove(&floor)
    }

    /// Take a passenger aboard, refusing when full
    pub fn add_rider(&mut self, rider: Rider) -> bool {
        if self.is_full() {
            return false;
        }
        self.riders.push(rider);
        true
    }

    /// Remove and return every rider whose destination is `floor`, in boarding order
    pub fn take_riders_for(&mut self, floor: Floor) -> Vec<Rider> {
        let (leaving, staying): (Vec<Rider>, Vec<Rider>) =
            self.riders.drain(..).partition(|rider| rider.destination == floor);
        self.riders = staying;
        leaving
    }

    /// Point the elevator at its next target
    ///
    /// A target above or below sets the heading and a moving status; a target on
    /// the current floor leaves the heading and marks the elevator `Stopped`; no
    /// target parks it.
    pub fn orient(&mut self, target: Option<Floor>) {
        match target {
            None => self.park(),
            Some(floor) => match self.current_floor.direction_to(floor) {
                Some(direction) => {
                    self.heading = Heading::from(direction);
                    self.status = ElevatorStatus::moving(direction);
                }
                None => self.status = ElevatorStatus::Stopped,
            },
        }
    }

    /// Go idle with no heading
    pub fn park(&mut self) {
        self.heading = Heading::Idle;
        self.status = ElevatorStatus::Idle;
        self.travel_progress = 0;
    }

    /// Accept a dispatched call on `floor`
    ///
    /// An idle elevator with closed doors turns towards the call straight away.
    pub fn commit_to_call(&mut self, floor: Floor) {
        self.add_target(floor);
        if self.heading == Heading::Idle && !self.doors_open() {
            self.orient(Some(floor));
        }
    }

    /// Open the doors for `hold` ticks
    pub fn open_doors(&mut self, hold: u32) {
        self.status = ElevatorStatus::DoorsOpen;
        self.door_open_time = hold;
        self.travel_progress = 0;
        self.stops_made += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider(passenger: u64, destination: i32) -> Rider {
        Rider { passenger_id: PassengerId::new(passenger), destination: Floor::new(destination) }
    }

    fn elevator_at(floor: i32) -> Elevator {
        Elevator::new(ElevatorId::new(1), Floor::new(floor), 2)
    }

    #[test]
    fn test_new_elevator_is_idle_and_empty() {
        let elevator = elevator_at(1);
        assert_eq!(elevator.status, ElevatorStatus::Idle);
        assert_eq!(elevator.heading, Heading::Idle);
        assert!(!elevator.has_work());
        assert!(!elevator.doors_open());
        assert_eq!(elevator.load(), 0);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut elevator = elevator_at(1);
        assert!(elevator.add_rider(rider(1, 5)));
        assert!(elevator.add_rider(rider(2, 6)));
        assert!(elevator.is_full());
        assert!(!elevator.add_rider(rider(3, 7)));
        assert_eq!(elevator.load(), 2);
    }

    #[test]
    fn test_take_riders_keeps_boarding_order() {
        let mut elevator = Elevator::new(ElevatorId::new(1), Floor::new(1), 4);
        elevator.add_rider(rider(1, 5));
        elevator.add_rider(rider(2, 8));
        elevator.add_rider(rider(3, 5));

        let leaving = elevator.take_riders_for(Floor::new(5));
        let ids: Vec<u64> = leaving.iter().map(|r| r.passenger_id.sequence()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(elevator.riders, vec![rider(2, 8)]);
    }

    #[test]
    fn test_pending_floors_and_furthest() {
        let mut elevator = elevator_at(5);
        elevator.add_target(Floor::new(2));
        elevator.add_target(Floor::new(7));
        elevator.add_rider(rider(1, 9));

        let pending: Vec<i32> = elevator.pending_floors().iter().map(|f| f.number()).collect();
        assert_eq!(pending, vec![2, 7, 9]);
        assert_eq!(elevator.furthest_pending(Direction::Up), Some(Floor::new(9)));
        assert_eq!(elevator.furthest_pending(Direction::Down), Some(Floor::new(2)));
        assert!(elevator.has_pending_beyond(Direction::Up));

        elevator.remove_target(Floor::new(2));
        assert!(!elevator.has_pending_beyond(Direction::Down));
        assert_eq!(elevator.furthest_pending(Direction::Down), None);
    }

    #[test]
    fn test_orient_and_commit() {
        let mut elevator = elevator_at(4);
        elevator.orient(Some(Floor::new(8)));
        assert_eq!(elevator.heading, Heading::Up);
        assert_eq!(elevator.status, ElevatorStatus::MovingUp);

        elevator.orient(None);
        assert_eq!(elevator.heading, Heading::Idle);
        assert_eq!(elevator.status, ElevatorStatus::Idle);

        // Call on the current floor marks a pending stop
        elevator.commit_to_call(Floor::new(4));
        assert_eq!(elevator.status, ElevatorStatus::Stopped);
        assert_eq!(elevator.heading, Heading::Idle);
        assert!(elevator.targets.contains(&Floor::new(4)));
    }

    #[test]
    fn test_commit_while_doors_open_only_adds_target() {
        let mut elevator = elevator_at(4);
        elevator.open_doors(2);
        elevator.commit_to_call(Floor::new(1));
        assert_eq!(elevator.status, ElevatorStatus::DoorsOpen);
        assert_eq!(elevator.heading, Heading::Idle);
        assert!(elevator.targets.contains(&Floor::new(1)));
        assert_eq!(elevator.stops_made, 1);
    }
}
