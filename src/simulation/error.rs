//! Error types and handling
//!
//! This module contains the error types raised by the simulation engine. Normal
//! operating conditions such as a deferred assignment or a boarding overflow are
//! recorded in the event log instead, and a run that hits its cycle ceiling still
//! produces a report. Only writing that report can fail recoverably.

use thiserror::Error;

use crate::types::ConfigValidationError;

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    InvalidConfiguration(#[from] ConfigValidationError),

    /// Internal state inconsistency, such as a reference to an unknown passenger
    #[error("Simulation state error: {0}")]
    StateError(String),

    /// I/O error while writing run output
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error while writing run output
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create a state error
    pub fn state_error(msg: impl Into<String>) -> Self {
        Self::StateError(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// Configuration and state errors invalidate the run; output errors leave the
    /// computed results intact.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::InvalidConfiguration(_) => false,
            SimulationError::StateError(_) => false,
            SimulationError::IoError(_) => true,
            SimulationError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidConfiguration(_) => "Configuration",
            SimulationError::StateError(_) => "State",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
