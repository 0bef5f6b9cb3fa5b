//! Event log and log entries
//!
//! This module holds the structured, time-stamped record that every phase of
//! the simulation appends to.
//!
//! # Overview
//!
//! - **LogEntry**: tick, kind, message, and optional elevator/passenger/floor references
//! - **LogKind**: classification used to filter and count entries
//! - **DetailValue**: auxiliary diagnostics such as a dispatch score breakdown
//! - **EventLog**: append-only, ordered collection of entries
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::events::*;
//! use elevator_dispatch_sim::types::*;
//!
//! let mut log = EventLog::new();
//! log.push(
//!     LogEntry::new(4, LogKind::ElevatorMoved, "elevator-1 moved to floor 5 (up)")
//!         .with_elevator(ElevatorId::new(1))
//!         .with_floor(Floor::new(5)),
//! );
//!
//! assert_eq!(log.count_kind(LogKind::ElevatorMoved), 1);
//! assert_eq!(log.entries()[0].to_string(), "[4] elevator-1 moved to floor 5 (up)");
//! ```

pub mod event_log;
pub mod log_entry;

// Re-export all public types for convenience
pub use event_log::*;
pub use log_entry::*;
