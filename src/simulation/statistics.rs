//! Statistics collection and reporting
//!
//! This module derives completion and timing statistics from a finished (or
//! aborted) simulation state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SimulationState;
use crate::elevator::Elevator;
use crate::events::LogKind;
use crate::types::ElevatorId;

/// Per-elevator activity over a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorStatistics {
    /// Elevator described
    pub id: ElevatorId,
    /// Floors moved
    pub floors_traveled: u64,
    /// Stops made
    pub stops_made: u64,
    /// Passengers delivered
    pub passengers_served: u64,
}

impl From<&Elevator> for ElevatorStatistics {
    fn from(elevator: &Elevator) -> Self {
        Self {
            id: elevator.id,
            floors_traveled: elevator.floors_traveled,
            stops_made: elevator.stops_made,
            passengers_served: elevator.passengers_served,
        }
    }
}

/// Completion and timing statistics for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatistics {
    /// Passengers the run was configured to spawn
    pub total_passengers: usize,
    /// Passengers actually spawned
    pub passengers_generated: usize,
    /// Passengers delivered
    pub passengers_completed: usize,
    /// Ticks elapsed
    pub total_ticks: u64,
    /// Mean ticks from spawn to pickup over boarded passengers
    pub average_wait_time: f64,
    /// Longest ticks from spawn to pickup
    pub max_wait_time: u64,
    /// Mean ticks from pickup to drop-off over delivered passengers
    pub average_ride_time: f64,
    /// Mean ticks from spawn to drop-off over delivered passengers
    pub average_journey_time: f64,
    /// Longest ticks from spawn to drop-off
    pub max_journey_time: u64,
    /// Dispatcher passes that found no elevator for a passenger
    pub deferred_assignments: usize,
    /// Boarding attempts refused because the elevator was full
    pub boarding_overflows: usize,
    /// Activity per elevator in registration order
    pub elevators: Vec<ElevatorStatistics>,
}

fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<u64>() as f64 / values.len() as f64
    }
}

impl SimulationStatistics {
    /// Collect statistics from a simulation state
    pub fn from_state(state: &SimulationState) -> Self {
        let waits: Vec<u64> = state.passengers.iter().filter_map(|p| p.wait_time()).collect();
        let rides: Vec<u64> = state.passengers.iter().filter_map(|p| p.ride_time()).collect();
        let journeys: Vec<u64> =
            state.passengers.iter().filter_map(|p| p.journey_time()).collect();

        Self {
            total_passengers: state.total_passengers,
            passengers_generated: state.generated(),
            passengers_completed: state.completed,
            total_ticks: state.tick,
            average_wait_time: mean(&waits),
            max_wait_time: waits.iter().copied().max().unwrap_or(0),
            average_ride_time: mean(&rides),
            average_journey_time: mean(&journeys),
            max_journey_time: journeys.iter().copied().max().unwrap_or(0),
            deferred_assignments: state.log.count_kind(LogKind::AssignmentDeferred),
            boarding_overflows: state.log.count_kind(LogKind::BoardingOverflow),
            elevators: state.elevators.iter().map(ElevatorStatistics::from).collect(),
        }
    }

    /// Passengers spawned but not delivered
    pub fn incomplete_passengers(&self) -> usize {
        self.total_passengers.saturating_sub(self.passengers_completed)
    }

    /// Get the percentage of configured passengers delivered
    pub fn completion_percentage(&self) -> f64 {
        if self.total_passengers == 0 {
            0.0
        } else {
            (self.passengers_completed as f64 / self.total_passengers as f64) * 100.0
        }
    }

    /// Floors moved by the whole bank
    pub fn total_floors_traveled(&self) -> u64 {
        self.elevators.iter().map(|e| e.floors_traveled).sum()
    }

    /// Generate a multi-line summary report
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Simulation Summary Report ===\n\n");
        report.push_str(&format!("Total Ticks: {}\n", self.total_ticks));
        report.push_str(&format!(
            "Passengers: {} generated, {} of {} completed ({:.1}%)\n\n",
            self.passengers_generated,
            self.passengers_completed,
            self.total_passengers,
            self.completion_percentage()
        ));

        report.push_str("Service Times (ticks):\n");
        report.push_str(&format!(
            "  • Wait: avg {:.2}, max {}\n",
            self.average_wait_time, self.max_wait_time
        ));
        report.push_str(&format!("  • Ride: avg {:.2}\n", self.average_ride_time));
        report.push_str(&format!(
            "  • Journey: avg {:.2}, max {}\n\n",
            self.average_journey_time, self.max_journey_time
        ));

        report.push_str("Dispatch:\n");
        report.push_str(&format!("  • Deferred Assignments: {}\n", self.deferred_assignments));
        report.push_str(&format!("  • Boarding Overflows: {}\n\n", self.boarding_overflows));

        report.push_str("Elevators:\n");
        for elevator in &self.elevators {
            report.push_str(&format!(
                "  • {}: {} floors, {} stops, {} passengers served\n",
                elevator.id, elevator.floors_traveled, elevator.stops_made, elevator.passengers_served
            ));
        }

        report
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} passengers in {} ticks | wait avg {:.1} | journey avg {:.1} | {} floors traveled",
            self.passengers_completed,
            self.total_passengers,
            self.total_ticks,
            self.average_wait_time,
            self.average_journey_time,
            self.total_floors_traveled()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::LogEntry;
    use crate::passenger::Passenger;
    use crate::types::{Floor, PassengerId, SimulationConfig};

    fn finished_state() -> SimulationState {
        let config = SimulationConfig { total_passengers: 3, ..SimulationConfig::default() };
        let mut state = SimulationState::new(&config);

        let mut first = Passenger::new(PassengerId::new(1), 1, Floor::new(1), Floor::new(5));
        first.board(3);
        first.alight(9);
        let mut second = Passenger::new(PassengerId::new(2), 2, Floor::new(6), Floor::new(2));
        second.board(8);
        second.alight(12);
        let mut third = Passenger::new(PassengerId::new(3), 3, Floor::new(4), Floor::new(7));
        third.board(4);

        state.passengers.push(first).unwrap();
        state.passengers.push(second).unwrap();
        state.passengers.push(third).unwrap();
        state.completed = 2;
        state.tick = 12;
        state.elevators[0].floors_traveled = 8;
        state.elevators[1].floors_traveled = 5;
        state.log.push(LogEntry::new(5, LogKind::AssignmentDeferred, "deferred"));
        state
    }

    #[test]
    fn test_statistics_from_state() {
        let stats = SimulationStatistics::from_state(&finished_state());

        assert_eq!(stats.passengers_generated, 3);
        assert_eq!(stats.passengers_completed, 2);
        assert_eq!(stats.incomplete_passengers(), 1);
        assert_eq!(stats.total_ticks, 12);
        // Waits: 2, 6, 1
        assert!((stats.average_wait_time - 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.max_wait_time, 6);
        // Rides: 6, 4
        assert!((stats.average_ride_time - 5.0).abs() < f64::EPSILON);
        // Journeys: 8, 10
        assert!((stats.average_journey_time - 9.0).abs() < f64::EPSILON);
        assert_eq!(stats.max_journey_time, 10);
        assert_eq!(stats.deferred_assignments, 1);
        assert_eq!(stats.boarding_overflows, 0);
        assert_eq!(stats.total_floors_traveled(), 13);
        assert_eq!(stats.elevators.len(), 2);
    }

    #[test]
    fn test_completion_percentage() {
        let stats = SimulationStatistics::from_state(&finished_state());
        assert!((stats.completion_percentage() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_empty_state_statistics() {
        let state = SimulationState::new(&SimulationConfig::default());
        let stats = SimulationStatistics::from_state(&state);
        assert_eq!(stats.average_wait_time, 0.0);
        assert_eq!(stats.max_journey_time, 0);
        assert_eq!(stats.completion_percentage(), 0.0);
    }

    #[test]
    fn test_summary_report_contents() {
        let stats = SimulationStatistics::from_state(&finished_state());
        let report = stats.generate_summary_report();
        assert!(report.contains("=== Simulation Summary Report ==="));
        assert!(report.contains("2 of 3 completed"));
        assert!(report.contains("elevator-1: 8 floors"));
        assert!(report.contains("Deferred Assignments: 1"));

        let compact = stats.to_string();
        assert!(compact.starts_with("2/3 passengers in 12 ticks"));
    }
}
