//! Simulation orchestration and control
//!
//! This module contains the shared simulation state, the orchestrator that
//! drives the tick loop, statistics collection, error handling, and tracing
//! setup.
//!
//! # Overview
//!
//! - **SimulationState**: the single mutable structure every phase works on
//! - **SimulationOrchestrator**: clock loop with the cycle-ceiling guard
//! - **SimulationReport**: result record returned by every run, complete or not
//! - **SimulationStatistics**: completion, wait, ride, and per-elevator metrics
//! - **SimulationError**: configuration, state, and report output failures
//! - **LoggingConfig**: diagnostic tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::simulation::*;
//! use elevator_dispatch_sim::types::*;
//!
//! let config = SimulationConfig {
//!     total_passengers: 5,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let report = SimulationOrchestrator::new(config)?.run()?;
//! assert!(report.outcome.is_completed());
//! assert_eq!(report.statistics.passengers_completed, 5);
//! # Ok::<(), SimulationError>(())
//! ```

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod state;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use state::*;
pub use statistics::*;
