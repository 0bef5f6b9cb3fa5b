//! Elevator Dispatch Simulator
//!
//! A discrete, tick-driven simulation of a bank of elevators serving randomly
//! generated passengers in a single building.
//!
//! # Overview
//!
//! Every run spawns passengers on a fixed cadence, assigns each waiting passenger
//! to the cheapest elevator under a direction-aware cost function, and advances
//! every elevator one step per tick using a LOOK sweep. The run ends when all
//! passengers are delivered or when a cycle ceiling derived from the configuration
//! is reached, and always yields an ordered, tick-stamped event log.
//!
//! ## Key Features
//!
//! - **Seeded Passenger Demand**: reproducible spawn floors and destinations
//! - **Cost-Based Dispatch**: distance, direction, and load aware elevator selection
//! - **LOOK Motion Control**: sweep in one direction until no work remains beyond
//! - **Capacity Enforcement**: full elevators defer boarding to a later tick
//! - **Bounded Runs**: a cycle ceiling turns a stalled run into a diagnostic report
//! - **Structured Event Log**: every state change recorded with tick and details
//!
//! ## Quick Start
//!
//! ```rust
//! use elevator_dispatch_sim::*;
//!
//! let config = SimulationConfig {
//!     total_passengers: 10,
//!     elevator_count: 2,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let report = SimulationOrchestrator::new(config)?.run()?;
//! assert!(report.outcome.is_completed());
//! assert_eq!(report.total_ticks, report.log.last().map_or(0, |entry| entry.tick));
//! println!("{}", report.statistics);
//! # Ok::<(), SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Floors, identifiers, enums, and configuration
//! - [`passenger`]: Passenger lifecycle, roster, and seeded generation
//! - [`dispatch`]: Floor calls, cost model, and elevator assignment
//! - [`elevator`]: Elevator record, motion control, and stop processing
//! - [`events`]: Event log entries and the append-only log
//! - [`simulation`]: State, orchestrator, statistics, errors, and tracing setup
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Passenger  │    │  Dispatch   │
//! │             │    │             │    │             │
//! │ Floors      │◄───┤ Generator   │◄───┤ Calls       │
//! │ Identifiers │    │ Roster      │    │ Cost Model  │
//! │ Config      │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Elevator   │    │   Events    │    │ Simulation  │
//! │             │    │             │    │             │
//! │ Motion      │◄───┤ Log Entries │◄───┤ Orchestrator│
//! │ Stops       │    │ Event Log   │    │ Statistics  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod dispatch;
pub mod elevator;
pub mod events;
pub mod passenger;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    ConfigValidationError,
    // Enums
    Direction,
    DispatchWeights,
    ElevatorId,
    ElevatorStatus,
    // Primitives
    Floor,
    FloorRange,
    Heading,
    OutputFormat,
    // Identifiers
    PassengerId,
    PassengerStatus,
    RunId,
    // Configuration
    SimulationConfig,
};

// Passenger types and functionality
pub use passenger::{Passenger, PassengerGenerator, PassengerRoster, StatusCounts};

// Dispatch types and functionality
pub use dispatch::{CallRegistry, CostModel, DispatchScore, Dispatcher, FloorCall};

// Elevator types and functionality
pub use elevator::{Elevator, MotionTiming, Rider, StopOutcome};

// Event types and functionality
pub use events::{DetailValue, EventLog, LogEntry, LogKind};

// Simulation types and functionality
pub use simulation::{
    ElevatorStatistics, LoggingConfig, RunOutcome, SimulationError, SimulationOrchestrator,
    SimulationReport, SimulationResult, SimulationState, SimulationStatistics,
};
