//! Event log entries
//!
//! This module contains the structured entry appended by every phase of a tick,
//! the kinds that classify entries, and the auxiliary detail values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::{ElevatorId, Floor, PassengerId};

/// Classification of an event log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogKind {
    /// The run has begun
    SimulationStarted,
    /// A passenger appeared with a new call
    PassengerSpawned,
    /// The dispatcher assigned a call to an elevator
    PassengerAssigned,
    /// No elevator could take a call this tick
    AssignmentDeferred,
    /// An elevator moved one floor
    ElevatorMoved,
    /// An elevator stopped and opened its doors
    DoorsOpened,
    /// An elevator's door timer expired
    DoorsClosed,
    /// A passenger left an elevator at their destination
    PassengerAlighted,
    /// A passenger entered an elevator
    PassengerBoarded,
    /// A passenger could not board because the elevator filled up
    BoardingOverflow,
    /// The cycle ceiling stopped the run early
    CycleCeilingReached,
    /// A passenger left unfinished by an aborted run
    IncompletePassenger,
    /// The run has ended
    SimulationFinished,
}

impl LogKind {
    /// Check if this kind reports a failure condition
    pub fn is_failure(self) -> bool {
        matches!(self, LogKind::CycleCeilingReached | LogKind::IncompletePassenger)
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogKind::SimulationStarted => "simulation_started",
            LogKind::PassengerSpawned => "passenger_spawned",
            LogKind::PassengerAssigned => "passenger_assigned",
            LogKind::AssignmentDeferred => "assignment_deferred",
            LogKind::ElevatorMoved => "elevator_moved",
            LogKind::DoorsOpened => "doors_opened",
            LogKind::DoorsClosed => "doors_closed",
            LogKind::PassengerAlighted => "passenger_alighted",
            LogKind::PassengerBoarded => "passenger_boarded",
            LogKind::BoardingOverflow => "boarding_overflow",
            LogKind::CycleCeilingReached => "cycle_ceiling_reached",
            LogKind::IncompletePassenger => "incomplete_passenger",
            LogKind::SimulationFinished => "simulation_finished",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for LogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "simulation_started" => Ok(LogKind::SimulationStarted),
            "passenger_spawned" => Ok(LogKind::PassengerSpawned),
            "passenger_assigned" => Ok(LogKind::PassengerAssigned),
            "assignment_deferred" => Ok(LogKind::AssignmentDeferred),
            "elevator_moved" => Ok(LogKind::ElevatorMoved),
            "doors_opened" => Ok(LogKind::DoorsOpened),
            "doors_closed" => Ok(LogKind::DoorsClosed),
            "passenger_alighted" => Ok(LogKind::PassengerAlighted),
            "passenger_boarded" => Ok(LogKind::PassengerBoarded),
            "boarding_overflow" => Ok(LogKind::BoardingOverflow),
            "cycle_ceiling_reached" => Ok(LogKind::CycleCeilingReached),
            "incomplete_passenger" => Ok(LogKind::IncompletePassenger),
            "simulation_finished" => Ok(LogKind::SimulationFinished),
            _ => Err(format!("Unknown log kind: {}", s)),
        }
    }
}

/// Auxiliary diagnostic value attached to a log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    /// Integer value such as a score term or a count
    Number(i64),
    /// Boolean flag
    Flag(bool),
    /// Free text
    Text(String),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Number(value) => write!(f, "{}", value),
            DetailValue::Flag(value) => write!(f, "{}", value),
            DetailValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for DetailValue {
    fn from(value: i64) -> Self {
        DetailValue::Number(value)
    }
}

impl From<i32> for DetailValue {
    fn from(value: i32) -> Self {
        DetailValue::Number(i64::from(value))
    }
}

impl From<u32> for DetailValue {
    fn from(value: u32) -> Self {
        DetailValue::Number(i64::from(value))
    }
}

impl From<u64> for DetailValue {
    fn from(value: u64) -> Self {
        DetailValue::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<usize> for DetailValue {
    fn from(value: usize) -> Self {
        DetailValue::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        DetailValue::Flag(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::Text(value.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        DetailValue::Text(value)
    }
}

/// One time-stamped entry of the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Tick at which the entry was written
    pub tick: u64,
    /// Entry classification
    pub kind: LogKind,
    /// Human-readable message
    pub message: String,
    /// Elevator the entry concerns
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub elevator_id: Option<ElevatorId>,
    /// Passenger the entry concerns
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub passenger_id: Option<PassengerId>,
    /// Floor the entry concerns
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub floor: Option<Floor>,
    /// Auxiliary diagnostics, such as a score breakdown
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub details: BTreeMap<String, DetailValue>,
}

impl LogEntry {
    /// Create a new entry with no references attached
    pub fn new(tick: u64, kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            tick,
            kind,
            message: message.into(),
            elevator_id: None,
            passenger_id: None,
            floor: None,
            details: BTreeMap::new(),
        }
    }

    /// Attach the elevator this entry concerns
    pub fn with_elevator(mut self, elevator_id: ElevatorId) -> Self {
        self.elevator_id = Some(elevator_id);
        self
    }

    /// Attach the passenger this entry concerns
    pub fn with_passenger(mut self, passenger_id: PassengerId) -> Self {
        self.passenger_id = Some(passenger_id);
        self
    }

    /// Attach the floor this entry concerns
    pub fn with_floor(mut self, floor: Floor) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Attach one detail value
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Look up a detail value
    pub fn detail(&self, key: &str) -> Option<&DetailValue> {
        self.details.get(key)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tick, self.message)
    }
}
