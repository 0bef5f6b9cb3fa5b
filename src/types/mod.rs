//! Core types and identifiers for the elevator simulation
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Floors**: the `Floor` value type and the bounded `FloorRange`
//! - **Identifiers**: sequential passenger and elevator ids, UUID-based run ids
//! - **Enums**: travel direction, elevator heading and status, passenger lifecycle
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::types::*;
//!
//! let lobby = Floor::new(1);
//! let target = Floor::new(6);
//! assert_eq!(lobby.distance_to(target), 5);
//! assert_eq!(Direction::between(lobby, target), Direction::Up);
//!
//! let config = SimulationConfig {
//!     max_floor: 20,
//!     elevator_count: 4,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.floor_range().floor_count(), 20);
//! ```

pub mod config;
pub mod enums;
pub mod floor;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use floor::*;
pub use identifiers::*;
