//! Floor calls and dispatch
//!
//! This module holds the outstanding floor calls and the dispatcher that
//! assigns each call to an elevator.
//!
//! # Overview
//!
//! - **FloorCall**: one passenger's request for service from a floor
//! - **CallRegistry**: outstanding calls, one per waiting passenger, never merged
//! - **CostModel**: resolved weights of the dispatch cost function
//! - **Dispatcher**: scores elevators and assigns calls, deferring when none fits
//!
//! # Usage Example
//!
//! ```rust
//! use elevator_dispatch_sim::dispatch::*;
//! use elevator_dispatch_sim::elevator::Elevator;
//! use elevator_dispatch_sim::types::*;
//!
//! let dispatcher = Dispatcher::new(CostModel::new(&DispatchWeights::default(), 10));
//! let elevators = vec![
//!     Elevator::new(ElevatorId::new(1), Floor::new(1), 5),
//!     Elevator::new(ElevatorId::new(2), Floor::new(6), 5),
//! ];
//! let call = FloorCall::new(Floor::new(5), Direction::Up, 1, PassengerId::new(1));
//!
//! let best = dispatcher.select(&elevators, &call).unwrap();
//! assert_eq!(best.elevator_id, ElevatorId::new(2));
//! ```

pub mod call;
pub mod dispatcher;

// Re-export all public types for convenience
pub use call::{CallRegistry, FloorCall};
pub use dispatcher::{CostModel, DispatchScore, Dispatcher};
