//! Elevator modeling, motion control, and stop processing
//!
//! This module contains the elevator record and the two per-tick behaviours that
//! drive it.
//!
//! # Overview
//!
//! - **Elevator**: position, riders, heading, status, target set, and door timer
//! - **Motion**: door countdown, stop detection, LOOK target selection, single-floor moves
//! - **Stop**: alighting, capacity-checked boarding, and overflow handling at a floor
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::elevator::*;
//! use elevator_dispatch_sim::types::*;
//!
//! let mut elevator = Elevator::new(ElevatorId::new(1), Floor::new(5), 5);
//! elevator.heading = Heading::Up;
//! elevator.add_target(Floor::new(2));
//! elevator.add_target(Floor::new(8));
//!
//! // LOOK keeps sweeping upwards before serving floor 2
//! assert_eq!(next_target(&elevator), Some(Floor::new(8)));
//! ```

#[allow(clippy::module_inception)]
pub mod elevator;
pub mod motion;
pub mod stop;

// Re-export all public types for convenience
pub use elevator::{Elevator, Rider};
pub use motion::{next_target, should_stop, step_elevator, MotionTiming};
pub use stop::{process_stop, release_waiting, StopOutcome};
