//! Enumeration types for the elevator simulation
//!
//! This module contains the enumeration types shared across the engine: travel
//! direction of calls and passengers, the operational heading and status of an
//! elevator, the passenger lifecycle, and the trace output format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Floor;

/// Direction of travel requested by a passenger or call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Travelling towards higher floors
    Up,
    /// Travelling towards lower floors
    Down,
}

impl Direction {
    /// The reverse direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Direction implied by a trip from `source` to `destination`
    ///
    /// A trip to the same floor never happens in practice; it is reported as `Down`
    /// so the function stays total.
    pub fn between(source: Floor, destination: Floor) -> Self {
        if destination.is_above(source) {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

/// Operational direction of an elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Heading {
    /// Sweeping upwards
    Up,
    /// Sweeping downwards
    Down,
    /// No committed direction
    Idle,
}

impl Heading {
    /// The travel direction, if the elevator has one
    pub fn direction(self) -> Option<Direction> {
        match self {
            Heading::Up => Some(Direction::Up),
            Heading::Down => Some(Direction::Down),
            Heading::Idle => None,
        }
    }

    /// Check if the elevator is heading in the given direction
    pub fn matches(self, direction: Direction) -> bool {
        self.direction() == Some(direction)
    }
}

impl From<Direction> for Heading {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Heading::Up,
            Direction::Down => Heading::Down,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Up => write!(f, "up"),
            Heading::Down => write!(f, "down"),
            Heading::Idle => write!(f, "idle"),
        }
    }
}

impl FromStr for Heading {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Heading::Up),
            "down" => Ok(Heading::Down),
            "idle" | "none" => Ok(Heading::Idle),
            _ => Err(format!("Unknown heading: {}", s)),
        }
    }
}

/// Operational status of an elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElevatorStatus {
    /// Parked with no work
    Idle,
    /// Travelling upwards
    MovingUp,
    /// Travelling downwards
    MovingDown,
    /// Halted at a floor with a stop pending and doors still closed
    Stopped,
    /// Doors open while passengers alight and board
    DoorsOpen,
}

impl ElevatorStatus {
    /// Moving status for a direction of travel
    pub fn moving(direction: Direction) -> Self {
        match direction {
            Direction::Up => ElevatorStatus::MovingUp,
            Direction::Down => ElevatorStatus::MovingDown,
        }
    }

    /// Check if the elevator is in transit
    pub fn is_moving(self) -> bool {
        matches!(self, ElevatorStatus::MovingUp | ElevatorStatus::MovingDown)
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevatorStatus::Idle => write!(f, "Idle"),
            ElevatorStatus::MovingUp => write!(f, "Moving Up"),
            ElevatorStatus::MovingDown => write!(f, "Moving Down"),
            ElevatorStatus::Stopped => write!(f, "Stopped"),
            ElevatorStatus::DoorsOpen => write!(f, "Doors Open"),
        }
    }
}

impl FromStr for ElevatorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(ElevatorStatus::Idle),
            "moving up" | "movingup" => Ok(ElevatorStatus::MovingUp),
            "moving down" | "movingdown" => Ok(ElevatorStatus::MovingDown),
            "stopped" => Ok(ElevatorStatus::Stopped),
            "doors open" | "doorsopen" => Ok(ElevatorStatus::DoorsOpen),
            _ => Err(format!("Unknown elevator status: {}", s)),
        }
    }
}

/// Lifecycle status of a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassengerStatus {
    /// Waiting at the source floor
    Waiting,
    /// Riding an elevator
    InElevator,
    /// Delivered to the destination floor
    Completed,
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerStatus::Waiting => write!(f, "Waiting"),
            PassengerStatus::InElevator => write!(f, "In Elevator"),
            PassengerStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for PassengerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting" => Ok(PassengerStatus::Waiting),
            "in elevator" | "inelevator" | "riding" => Ok(PassengerStatus::InElevator),
            "completed" | "done" => Ok(PassengerStatus::Completed),
            _ => Err(format!("Unknown passenger status: {}", s)),
        }
    }
}

/// Output format for the event trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `[tick] message` lines
    Text,
    /// One JSON log entry per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between_floors() {
        assert_eq!(Direction::between(Floor::new(2), Floor::new(8)), Direction::Up);
        assert_eq!(Direction::between(Floor::new(8), Floor::new(2)), Direction::Down);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_heading_conversions() {
        assert_eq!(Heading::from(Direction::Up), Heading::Up);
        assert_eq!(Heading::Down.direction(), Some(Direction::Down));
        assert_eq!(Heading::Idle.direction(), None);
        assert!(Heading::Up.matches(Direction::Up));
        assert!(!Heading::Idle.matches(Direction::Up));
        assert_eq!("idle".parse::<Heading>().unwrap(), Heading::Idle);
    }

    #[test]
    fn test_elevator_status_display_and_parse() {
        assert_eq!(format!("{}", ElevatorStatus::DoorsOpen), "Doors Open");
        assert_eq!(ElevatorStatus::moving(Direction::Down), ElevatorStatus::MovingDown);
        assert!(ElevatorStatus::MovingUp.is_moving());
        assert!(!ElevatorStatus::Stopped.is_moving());
        assert_eq!("moving up".parse::<ElevatorStatus>().unwrap(), ElevatorStatus::MovingUp);
        assert_eq!("doorsopen".parse::<ElevatorStatus>().unwrap(), ElevatorStatus::DoorsOpen);
        assert!("flying".parse::<ElevatorStatus>().is_err());
    }

    #[test]
    fn test_status_serialization_uses_camel_case() {
        let json = serde_json::to_string(&ElevatorStatus::DoorsOpen).unwrap();
        assert_eq!(json, "\"doorsOpen\"");
        let json = serde_json::to_string(&PassengerStatus::InElevator).unwrap();
        assert_eq!(json, "\"inElevator\"");
        let status: PassengerStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, PassengerStatus::Completed);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
