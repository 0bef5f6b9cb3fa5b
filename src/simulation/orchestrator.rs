//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator, which owns the simulation
//! state and advances it one tick at a time: spawn, dispatch, then move each
//! elevator in registration order. A run ends when every passenger has been
//! delivered or when the cycle ceiling is reached; either way a well-formed
//! report is returned.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, error, info, instrument};

use crate::dispatch::{CostModel, Dispatcher};
use crate::elevator::{step_elevator, Elevator, MotionTiming};
use crate::events::{EventLog, LogEntry, LogKind};
use crate::passenger::{Passenger, PassengerGenerator};
use crate::simulation::{SimulationResult, SimulationState, SimulationStatistics};
use crate::types::{RunId, SimulationConfig};

/// Ticks between progress lines on the diagnostic channel
const PROGRESS_INTERVAL: u64 = 10;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RunOutcome {
    /// Every passenger was delivered
    Completed,
    /// The cycle ceiling stopped the run with passengers still undelivered
    CycleCeilingReached {
        /// Passengers not delivered
        incomplete: usize,
    },
}

impl RunOutcome {
    /// Check if the run delivered every passenger
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

/// Result record of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Unique identifier of the run
    pub run_id: RunId,
    /// Wall-clock time the report was produced
    pub generated_at: DateTime<Utc>,
    /// How the run ended
    pub outcome: RunOutcome,
    /// Ticks elapsed; equals the tick of the last log entry
    pub total_ticks: u64,
    /// Ticks executed by the loop
    pub cycles_run: u64,
    /// Ceiling the loop was bounded by
    pub max_cycles: u64,
    /// Full ordered event log
    pub log: EventLog,
    /// Final passenger roster with timings
    pub passengers: Vec<Passenger>,
    /// Final elevator roster
    pub elevators: Vec<Elevator>,
    /// Derived statistics
    pub statistics: SimulationStatistics,
}

impl SimulationReport {
    /// Write the report as pretty JSON
    pub fn write_json<W: Write>(&self, writer: W) -> SimulationResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Write the report as pretty JSON to a file, replacing any existing one
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SimulationResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Main simulation orchestrator that coordinates all components
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration for the simulation
    config: SimulationConfig,
    /// State lent to every phase of a tick
    state: SimulationState,
    /// Seeded passenger source
    generator: PassengerGenerator,
    /// Call assignment
    dispatcher: Dispatcher,
    /// Elevator timing constants
    timing: MotionTiming,
    /// Ticks executed so far
    cycles: u64,
    /// Ticks allowed before the run is declared non-converging
    max_cycles: u64,
    /// Identifier stamped on the report
    run_id: RunId,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator
    #[instrument(skip(config), fields(
        elevators = config.elevator_count,
        floors = config.floor_count(),
        passengers = config.total_passengers
    ))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let rng = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            StdRng::seed_from_u64(seed)
        } else {
            debug!("Using entropy-based random seed");
            StdRng::from_entropy()
        };

        let state = SimulationState::new(&config);
        let generator = PassengerGenerator::from_config(&config, rng);
        let dispatcher = Dispatcher::new(CostModel::from_config(&config));
        let timing = MotionTiming::from_config(&config);
        let max_cycles = config.max_cycles();
        let run_id = RunId::new();

        info!(
            run_id = %run_id,
            max_cycles,
            "Initialized {} elevators over floors {}-{}",
            config.elevator_count,
            config.min_floor,
            config.max_floor
        );

        Ok(Self { config, state, generator, dispatcher, timing, cycles: 0, max_cycles, run_id })
    }

    /// Configuration of this run
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current simulation state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Ticks executed so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Ticks allowed before the run is declared non-converging
    pub fn max_cycles(&self) -> u64 {
        self.max_cycles
    }

    /// Identifier stamped on the report
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Check if every passenger has been delivered
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Check if the cycle ceiling has been reached
    pub fn ceiling_reached(&self) -> bool {
        self.cycles >= self.max_cycles
    }

    /// Record the start of the run; only the first call has an effect
    pub fn start(&mut self) {
        if self.state.tick != 0 || !self.state.log.is_empty() {
            return;
        }

        self.state.log.push(
            LogEntry::new(
                0,
                LogKind::SimulationStarted,
                format!(
                    "Simulation started: {} elevators, floors {}-{}, {} passengers",
                    self.config.elevator_count,
                    self.config.min_floor,
                    self.config.max_floor,
                    self.config.total_passengers
                ),
            )
            .with_detail("elevators", self.config.elevator_count)
            .with_detail("capacity", self.config.elevator_capacity)
            .with_detail("max_cycles", self.max_cycles),
        );
    }

    /// Run one tick: spawn, dispatch, then move each elevator in registration order
    pub fn advance_tick(&mut self) -> SimulationResult<()> {
        self.state.tick += 1;
        self.cycles += 1;

        if self.state.tick % PROGRESS_INTERVAL == 0 {
            self.log_progress();
        }

        self.generator.maybe_spawn(&mut self.state)?;
        self.dispatcher.dispatch_pending(&mut self.state)?;
        for index in 0..self.state.elevators.len() {
            step_elevator(&mut self.state, index, &self.timing)?;
        }

        Ok(())
    }

    fn log_progress(&self) {
        info!(
            tick = self.state.tick,
            completed = self.state.completed,
            generated = self.state.generated(),
            total = self.state.total_passengers,
            "Simulation progress"
        );
        for elevator in &self.state.elevators {
            let targets: Vec<i32> = elevator.targets.iter().map(|floor| floor.number()).collect();
            info!(
                elevator = %elevator.id,
                floor = elevator.current_floor.number(),
                status = %elevator.status,
                heading = %elevator.heading,
                load = elevator.load(),
                targets = ?targets,
                "Elevator state"
            );
        }
    }

    /// Run the simulation to completion or to the cycle ceiling
    #[instrument(skip(self))]
    pub fn run(mut self) -> SimulationResult<SimulationReport> {
        self.start();

        while !self.is_complete() && !self.ceiling_reached() {
            self.advance_tick()?;
        }

        Ok(self.finish())
    }

    /// Close the run and build its report
    ///
    /// A run that has not delivered every passenger is reported as having hit the
    /// cycle ceiling, with one log entry per undelivered passenger.
    pub fn finish(mut self) -> SimulationReport {
        let tick = self.state.tick;

        let outcome = if self.is_complete() {
            RunOutcome::Completed
        } else {
            let incomplete = self.state.passengers.incomplete().count()
                + self.state.total_passengers.saturating_sub(self.state.generated());
            self.log_incomplete(incomplete);
            RunOutcome::CycleCeilingReached { incomplete }
        };

        self.state.log.push(
            LogEntry::new(
                tick,
                LogKind::SimulationFinished,
                format!(
                    "Simulation finished at tick {}: {}/{} passengers completed",
                    tick, self.state.completed, self.state.total_passengers
                ),
            )
            .with_detail("completed", self.state.completed)
            .with_detail("cycles", self.cycles),
        );

        info!(tick, cycles = self.cycles, outcome = ?outcome, "Simulation finished");

        let statistics = SimulationStatistics::from_state(&self.state);
        let SimulationState { log, passengers, elevators, .. } = self.state;

        SimulationReport {
            run_id: self.run_id,
            generated_at: Utc::now(),
            outcome,
            total_ticks: tick,
            cycles_run: self.cycles,
            max_cycles: self.max_cycles,
            log,
            passengers: passengers.into_vec(),
            elevators,
            statistics,
        }
    }

    fn log_incomplete(&mut self, incomplete: usize) {
        let tick = self.state.tick;

        error!(
            cycles = self.cycles,
            max_cycles = self.max_cycles,
            incomplete,
            "Cycle ceiling reached before every passenger was delivered"
        );

        self.state.log.push(
            LogEntry::new(
                tick,
                LogKind::CycleCeilingReached,
                format!(
                    "Simulation stopped after {} cycles with {} of {} passengers incomplete",
                    self.cycles, incomplete, self.state.total_passengers
                ),
            )
            .with_detail("cycles", self.cycles)
            .with_detail("max_cycles", self.max_cycles)
            .with_detail("incomplete", incomplete),
        );

        let entries: Vec<LogEntry> = self
            .state
            .passengers
            .incomplete()
            .map(|passenger| {
                let optional = |value: Option<u64>| {
                    value.map_or_else(|| "-".to_string(), |tick| tick.to_string())
                };
                let assigned = passenger
                    .assigned_elevator
                    .map_or_else(|| "none".to_string(), |id| id.to_string());

                let mut entry = LogEntry::new(
                    tick,
                    LogKind::IncompletePassenger,
                    format!(
                        "{} incomplete: {} (floor {} to {}, spawned {}, pickup {}, drop-off {}, assigned {})",
                        passenger.id,
                        passenger.status,
                        passenger.source,
                        passenger.destination,
                        passenger.spawn_tick,
                        optional(passenger.pickup_tick),
                        optional(passenger.drop_off_tick),
                        assigned
                    ),
                )
                .with_passenger(passenger.id)
                .with_floor(passenger.source)
                .with_detail("status", passenger.status.to_string())
                .with_detail("spawn_tick", passenger.spawn_tick)
                .with_detail("destination", passenger.destination.number());

                if let Some(pickup) = passenger.pickup_tick {
                    entry = entry.with_detail("pickup_tick", pickup);
                }
                if let Some(elevator_id) = passenger.assigned_elevator {
                    entry = entry.with_elevator(elevator_id);
                }
                entry
            })
            .collect();

        for entry in entries {
            self.state.log.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_rejects_invalid_config() {
        let config = SimulationConfig { elevator_count: 0, ..SimulationConfig::default() };
        assert!(SimulationOrchestrator::new(config).is_err());

        let config = SimulationConfig { min_floor: 4, max_floor: 4, ..SimulationConfig::default() };
        assert!(SimulationOrchestrator::new(config).is_err());
    }

    #[test]
    fn test_orchestrator_creation() {
        let config = SimulationConfig { seed: Some(1), ..SimulationConfig::default() };
        let orchestrator = SimulationOrchestrator::new(config).unwrap();

        assert_eq!(orchestrator.cycles(), 0);
        assert_eq!(orchestrator.max_cycles(), 2_000);
        assert_eq!(orchestrator.state().elevators.len(), 2);
        assert!(!orchestrator.is_complete());
    }

    #[test]
    fn test_start_logs_once_at_tick_zero() {
        let config = SimulationConfig { seed: Some(1), ..SimulationConfig::default() };
        let mut orchestrator = SimulationOrchestrator::new(config).unwrap();

        orchestrator.start();
        orchestrator.start();
        assert_eq!(orchestrator.state().log.len(), 1);
        let entry = orchestrator.state().log.last().unwrap();
        assert_eq!(entry.kind, LogKind::SimulationStarted);
        assert_eq!(entry.tick, 0);
    }

    #[test]
    fn test_advance_tick_spawns_and_assigns() {
        let config =
            SimulationConfig { seed: Some(3), total_passengers: 1, ..SimulationConfig::default() };
        let mut orchestrator = SimulationOrchestrator::new(config).unwrap();

        orchestrator.advance_tick().unwrap();
        let state = orchestrator.state();
        assert_eq!(state.tick, 1);
        assert_eq!(state.generated(), 1);
        assert_eq!(state.log.count_kind(LogKind::PassengerSpawned), 1);
        assert_eq!(state.log.count_kind(LogKind::PassengerAssigned), 1);
        assert_eq!(orchestrator.cycles(), 1);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&RunOutcome::CycleCeilingReached { incomplete: 3 }).unwrap();
        assert_eq!(json, r#"{"status":"cycleCeilingReached","incomplete":3}"#);
        let json = serde_json::to_string(&RunOutcome::Completed).unwrap();
        assert_eq!(json, r#"{"status":"completed"}"#);
    }
}
