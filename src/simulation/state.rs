//! Shared simulation state
//!
//! One run owns exactly one `SimulationState`. The orchestrator lends it mutably
//! to the generator, the dispatcher, and each elevator's motion step in turn;
//! no phase keeps a reference past its own call.

use serde::{Deserialize, Serialize};

use crate::dispatch::CallRegistry;
use crate::elevator::Elevator;
use crate::events::EventLog;
use crate::passenger::{PassengerRoster, StatusCounts};
use crate::types::{ElevatorId, FloorRange, SimulationConfig};

/// Mutable state of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Current logical tick
    pub tick: u64,
    /// Floors served by the bank
    pub floors: FloorRange,
    /// Elevators in registration order
    pub elevators: Vec<Elevator>,
    /// Every passenger spawned so far
    pub passengers: PassengerRoster,
    /// Outstanding floor calls
    pub calls: CallRegistry,
    /// Append-only event log
    pub log: EventLog,
    /// Passengers delivered so far
    pub completed: usize,
    /// Passengers to spawn over the run
    pub total_passengers: usize,
}

impl SimulationState {
    /// Create the initial state: every elevator idle and empty on the lowest floor
    pub fn new(config: &SimulationConfig) -> Self {
        let floors = config.floor_range();
        let elevators = (1..=config.elevator_count)
            .map(|number| Elevator::new(ElevatorId::new(number), floors.min, config.elevator_capacity))
            .collect();

        Self::with_elevators(floors, elevators, config.total_passengers)
    }

    /// Create a state around an explicit set of elevators
    pub fn with_elevators(
        floors: FloorRange,
        elevators: Vec<Elevator>,
        total_passengers: usize,
    ) -> Self {
        Self {
            tick: 0,
            floors,
            elevators,
            passengers: PassengerRoster::new(),
            calls: CallRegistry::new(),
            log: EventLog::new(),
            completed: 0,
            total_passengers,
        }
    }

    /// Passengers spawned so far
    pub fn generated(&self) -> usize {
        self.passengers.len()
    }

    /// Check if every passenger to be spawned has been delivered
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total_passengers
    }

    /// Count passengers by status
    pub fn status_counts(&self) -> StatusCounts {
        self.passengers.status_counts()
    }
}
