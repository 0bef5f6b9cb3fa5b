//! Passenger roster
//!
//! Every passenger ever spawned, kept in spawn order. Passenger ids are minted
//! sequentially from 1, so a passenger's position in the roster is its sequence
//! number minus one.

use serde::{Deserialize, Serialize};

use super::Passenger;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{PassengerId, PassengerStatus};

/// Passenger counts by lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Passengers waiting at their source floor
    pub waiting: usize,
    /// Passengers riding an elevator
    pub in_elevator: usize,
    /// Passengers delivered
    pub completed: usize,
}

impl StatusCounts {
    /// Total passengers counted
    pub fn total(&self) -> usize {
        self.waiting + self.in_elevator + self.completed
    }
}

/// All passengers spawned during a run, in spawn order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerRoster {
    passengers: Vec<Passenger>,
}

impl PassengerRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next spawned passenger will receive
    pub fn next_id(&self) -> PassengerId {
        PassengerId::new(self.passengers.len() as u64 + 1)
    }

    /// Add a newly spawned passenger
    pub fn push(&mut self, passenger: Passenger) -> SimulationResult<()> {
        if passenger.id != self.next_id() {
            return Err(SimulationError::state_error(format!(
                "passenger {} spawned out of sequence (expected {})",
                passenger.id,
                self.next_id()
            )));
        }
        self.passengers.push(passenger);
        Ok(())
    }

    fn position(id: PassengerId) -> Option<usize> {
        usize::try_from(id.sequence()).ok()?.checked_sub(1)
    }

    /// Look up a passenger
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        Self::position(id).and_then(|index| self.passengers.get(index))
    }

    /// Look up a passenger for mutation, failing on an unknown id
    pub fn get_mut(&mut self, id: PassengerId) -> SimulationResult<&mut Passenger> {
        Self::position(id)
            .and_then(|index| self.passengers.get_mut(index))
            .ok_or_else(|| SimulationError::state_error(format!("unknown passenger {}", id)))
    }

    /// Iterate over passengers in spawn order
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    /// Number of passengers spawned
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Check if no passenger has spawned yet
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Ids of waiting passengers with no elevator committed, in spawn order
    pub fn awaiting_assignment(&self) -> Vec<PassengerId> {
        self.passengers.iter().filter(|p| p.needs_assignment()).map(|p| p.id).collect()
    }

    /// Passengers that have not been delivered
    pub fn incomplete(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter().filter(|p| !p.is_completed())
    }

    /// Count passengers by status
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for passenger in &self.passengers {
            match passenger.status {
                PassengerStatus::Waiting => counts.waiting += 1,
                PassengerStatus::InElevator => counts.in_elevator += 1,
                PassengerStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    /// Consume the roster, returning the passengers
    pub fn into_vec(self) -> Vec<Passenger> {
        self.passengers
    }
}
