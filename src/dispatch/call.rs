//! Floor calls and the call registry
//!
//! Each waiting passenger owns exactly one outstanding call until it boards.
//! Calls on the same floor are never merged, since boarding is matched per
//! passenger.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Floor, PassengerId};

/// A pending request for elevator service from one passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorCall {
    /// Floor the call was made from
    pub floor: Floor,
    /// Requested travel direction
    pub direction: Direction,
    /// Tick at which the call was made
    pub request_tick: u64,
    /// Passenger that owns the call
    pub passenger_id: PassengerId,
}

impl FloorCall {
    /// Create a new floor call
    pub fn new(
        floor: Floor,
        direction: Direction,
        request_tick: u64,
        passenger_id: PassengerId,
    ) -> Self {
        Self { floor, direction, request_tick, passenger_id }
    }
}

/// Outstanding floor calls in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallRegistry {
    calls: Vec<FloorCall>,
}

impl CallRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a call for a newly spawned passenger
    pub fn register(&mut self, call: FloorCall) {
        self.calls.push(call);
    }

    /// Register a call unless its passenger already has one
    ///
    /// Returns `true` if the call was inserted.
    pub fn ensure_call(&mut self, call: FloorCall) -> bool {
        if self.contains(call.passenger_id) {
            return false;
        }
        self.calls.push(call);
        true
    }

    /// Remove the call owned by a passenger
    pub fn remove_for(&mut self, passenger_id: PassengerId) -> Option<FloorCall> {
        let index = self.calls.iter().position(|call| call.passenger_id == passenger_id)?;
        Some(self.calls.remove(index))
    }

    /// The call owned by a passenger
    pub fn get(&self, passenger_id: PassengerId) -> Option<&FloorCall> {
        self.calls.iter().find(|call| call.passenger_id == passenger_id)
    }

    /// Check if a passenger has an outstanding call
    pub fn contains(&self, passenger_id: PassengerId) -> bool {
        self.get(passenger_id).is_some()
    }

    /// Iterate over all outstanding calls
    pub fn iter(&self) -> impl Iterator<Item = &FloorCall> {
        self.calls.iter()
    }

    /// Number of outstanding calls
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Check if no call is outstanding
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
