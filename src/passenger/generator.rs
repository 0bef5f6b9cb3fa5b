//! Passenger generation
//!
//! Spawns one passenger per generation interval until the configured total is
//! reached. Source and destination floors are drawn uniformly from the served
//! range; the destination is resampled until it differs from the source.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::trace;

use super::Passenger;
use crate::dispatch::FloorCall;
use crate::events::{LogEntry, LogKind};
use crate::simulation::{SimulationResult, SimulationState};
use crate::types::{Direction, Floor, FloorRange, PassengerId, SimulationConfig};

/// Upper bound on destination resampling before falling back to an adjacent floor
const MAX_DESTINATION_DRAWS: usize = 64;

/// Generator for passengers and their floor calls
#[derive(Debug)]
pub struct PassengerGenerator {
    rng: StdRng,
    floors: FloorRange,
    interval: u64,
    total: usize,
}

impl PassengerGenerator {
    /// Create a generator for `total` passengers, one every `interval` ticks
    pub fn new(floors: FloorRange, interval: u64, total: usize, rng: StdRng) -> Self {
        Self { rng, floors, interval: interval.max(1), total }
    }

    /// Create a generator from the simulation configuration
    pub fn from_config(config: &SimulationConfig, rng: StdRng) -> Self {
        Self::new(config.floor_range(), config.generation_interval, config.total_passengers, rng)
    }

    /// Check if a passenger spawns on `tick` given how many have spawned so far
    pub fn should_spawn(&self, tick: u64, generated: usize) -> bool {
        generated < self.total && tick % self.interval == 0
    }

    /// Draw a floor uniformly from the served range
    pub fn random_floor(&mut self) -> Floor {
        Floor::new(self.rng.gen_range(self.floors.min.number()..=self.floors.max.number()))
    }

    /// Draw a destination different from `source`
    pub fn random_destination(&mut self, source: Floor) -> Floor {
        for _ in 0..MAX_DESTINATION_DRAWS {
            let candidate = self.random_floor();
            if candidate != source {
                return candidate;
            }
        }

        trace!(source = source.number(), "destination draws exhausted, using adjacent floor");
        if source < self.floors.max {
            source.step(Direction::Up)
        } else {
            source.step(Direction::Down)
        }
    }

    /// Spawn a passenger and its call if the cadence and count allow it
    pub fn maybe_spawn(
        &mut self,
        state: &mut SimulationState,
    ) -> SimulationResult<Option<PassengerId>> {
        if !self.should_spawn(state.tick, state.generated()) {
            return Ok(None);
        }

        let source = self.random_floor();
        let destination = self.random_destination(source);
        let id = state.passengers.next_id();
        let passenger = Passenger::new(id, state.tick, source, destination);
        let direction = passenger.direction;

        state.passengers.push(passenger)?;
        state.calls.register(FloorCall::new(source, direction, state.tick, id));
        state.log.push(
            LogEntry::new(
                state.tick,
                LogKind::PassengerSpawned,
                format!(
                    "{} appeared on floor {} heading to floor {} ({})",
                    id, source, destination, direction
                ),
            )
            .with_passenger(id)
            .with_floor(source)
            .with_detail("destination", destination.number())
            .with_detail("direction", direction.to_string()),
        );

        Ok(Some(id))
    }
}
