//! Passenger modeling and generation
//!
//! This module contains the passenger record, the roster of every passenger
//! spawned during a run, and the generator that creates passengers and their
//! floor calls.
//!
//! # Overview
//!
//! - **Passenger**: source, destination, lifecycle status, and timing fields
//! - **PassengerRoster**: all spawned passengers, addressable by id
//! - **PassengerGenerator**: seeded, cadence-gated passenger spawning
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::passenger::*;
//! use elevator_dispatch_sim::types::*;
//! use rand::SeedableRng;
//!
//! let mut generator = PassengerGenerator::new(
//!     FloorRange::new(1, 10),
//!     1,
//!     40,
//!     rand::rngs::StdRng::seed_from_u64(42),
//! );
//!
//! let source = generator.random_floor();
//! let destination = generator.random_destination(source);
//! let passenger = Passenger::new(PassengerId::new(1), 1, source, destination);
//! assert!(passenger.is_waiting());
//! assert_ne!(passenger.source, passenger.destination);
//! ```

pub mod generator;
#[allow(clippy::module_inception)]
pub mod passenger;
pub mod roster;

// Re-export all public types for convenience
pub use generator::PassengerGenerator;
pub use passenger::Passenger;
pub use roster::{PassengerRoster, StatusCounts};
