//! Call assignment
//!
//! The dispatcher scores every eligible elevator against a call and commits the
//! call to the lowest score. Lower is better. The score is a base travel cost
//! that depends on how the elevator's sweep relates to the call, plus small load
//! and commitment terms that favour idle, lightly loaded cars among otherwise
//! equal candidates.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use super::FloorCall;
use crate::elevator::Elevator;
use crate::events::{LogEntry, LogKind};
use crate::simulation::{SimulationError, SimulationResult, SimulationState};
use crate::types::{Direction, DispatchWeights, ElevatorId, SimulationConfig};

/// Resolved dispatch cost weights for one building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    /// Added when the call is behind an elevator already sweeping in its direction
    pub behind_penalty: u32,
    /// Added when the elevator must turn around to serve the call
    pub reversal_penalty: u32,
    /// Added per rider aboard
    pub passenger_weight: u32,
    /// Added per committed target floor
    pub target_weight: u32,
    /// Penalty for a full elevator; `None` excludes full elevators
    pub full_elevator_penalty: Option<u32>,
}

impl CostModel {
    /// Resolve weights for a building with `floor_count` floors
    pub fn new(weights: &DispatchWeights, floor_count: u32) -> Self {
        Self {
            behind_penalty: weights.behind_penalty_for(floor_count),
            reversal_penalty: weights.reversal_penalty_for(floor_count),
            passenger_weight: weights.passenger_weight,
            target_weight: weights.target_weight,
            full_elevator_penalty: weights.full_elevator_penalty,
        }
    }

    /// Resolve weights from the simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(&config.dispatch, config.floor_count())
    }
}

/// Breakdown of one elevator's cost for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchScore {
    /// Elevator scored
    pub elevator_id: ElevatorId,
    /// Travel cost implied by the elevator's sweep
    pub base: u32,
    /// Term for riders aboard
    pub load_penalty: u32,
    /// Term for committed target floors
    pub commitment_penalty: u32,
    /// Term for a full elevator under the deferred-servicing policy
    pub capacity_penalty: u32,
    /// Whether the elevator must turn around to serve the call
    pub reversal: bool,
    /// Sum of all terms
    pub total: u32,
}

impl fmt::Display for DispatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = base {} + load {} + targets {} + capacity {}",
            self.total, self.base, self.load_penalty, self.commitment_penalty, self.capacity_penalty
        )
    }
}

/// Assigns floor calls to elevators
#[derive(Debug, Clone)]
pub struct Dispatcher {
    cost_model: CostModel,
}

impl Dispatcher {
    /// Create a dispatcher with the given cost model
    pub fn new(cost_model: CostModel) -> Self {
        Self { cost_model }
    }

    /// The cost model in use
    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Score one elevator for a call, `None` if the elevator is ineligible
    ///
    /// A full elevator is never eligible for a call on the floor it stands on,
    /// even under the deferred-servicing policy: nobody could board there.
    pub fn score(&self, elevator: &Elevator, call: &FloorCall) -> Option<DispatchScore> {
        let capacity_penalty = if elevator.is_full() {
            if call.floor == elevator.current_floor {
                return None;
            }
            self.cost_model.full_elevator_penalty?
        } else {
            0
        };

        let here = elevator.current_floor;
        let distance = here.distance_to(call.floor);

        let (base, reversal) = match elevator.heading.direction() {
            None => (distance, false),
            Some(direction) if direction == call.direction => {
                let ahead = match direction {
                    Direction::Up => call.floor >= here,
                    Direction::Down => call.floor <= here,
                };
                if ahead {
                    (distance, false)
                } else {
                    (distance.saturating_add(self.cost_model.behind_penalty), false)
                }
            }
            Some(direction) => {
                let turnaround = elevator.furthest_pending(direction).unwrap_or(here);
                let detour = here
                    .distance_to(turnaround)
                    .saturating_add(turnaround.distance_to(call.floor));
                (detour.saturating_add(self.cost_model.reversal_penalty), true)
            }
        };

        let load_penalty = (elevator.load() as u32).saturating_mul(self.cost_model.passenger_weight);
        let commitment_penalty =
            (elevator.targets.len() as u32).saturating_mul(self.cost_model.target_weight);
        let total = base
            .saturating_add(load_penalty)
            .saturating_add(commitment_penalty)
            .saturating_add(capacity_penalty);

        Some(DispatchScore {
            elevator_id: elevator.id,
            base,
            load_penalty,
            commitment_penalty,
            capacity_penalty,
            reversal,
            total,
        })
    }

    /// Pick the lowest-scoring elevator; ties go to the first registered
    pub fn select(&self, elevators: &[Elevator], call: &FloorCall) -> Option<DispatchScore> {
        let mut best: Option<DispatchScore> = None;
        for elevator in elevators {
            let Some(candidate) = self.score(elevator, call) else {
                continue;
            };
            trace!(elevator = %elevator.id, passenger = %call.passenger_id, score = candidate.total, "scored");
            if best.map_or(true, |current| candidate.total < current.total) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Assign a call, committing the chosen elevator and the passenger to each other
    pub fn assign(
        &self,
        state: &mut SimulationState,
        call: &FloorCall,
    ) -> SimulationResult<Option<DispatchScore>> {
        let Some(best) = self.select(&state.elevators, call) else {
            return Ok(None);
        };

        let elevator = state.elevators.get_mut(best.elevator_id.index()).ok_or_else(|| {
            SimulationError::state_error(format!("unknown elevator {}", best.elevator_id))
        })?;
        elevator.commit_to_call(call.floor);
        state.passengers.get_mut(call.passenger_id)?.assign(best.elevator_id);

        Ok(Some(best))
    }

    /// Assign every waiting passenger that has no elevator, in spawn order
    ///
    /// Returns the number of assignments made. Passengers no elevator can take are
    /// logged and retried on the next call.
    pub fn dispatch_pending(&self, state: &mut SimulationState) -> SimulationResult<usize> {
        let mut assigned = 0;

        for passenger_id in state.passengers.awaiting_assignment() {
            let call = match state.calls.get(passenger_id) {
                Some(call) => *call,
                None => {
                    let passenger = state.passengers.get(passenger_id).ok_or_else(|| {
                        SimulationError::state_error(format!("unknown passenger {}", passenger_id))
                    })?;
                    let call = FloorCall::new(
                        passenger.source,
                        passenger.direction,
                        state.tick,
                        passenger_id,
                    );
                    state.calls.ensure_call(call);
                    call
                }
            };

            match self.assign(state, &call)? {
                Some(score) => {
                    assigned += 1;
                    state.log.push(
                        LogEntry::new(
                            state.tick,
                            LogKind::PassengerAssigned,
                            format!(
                                "{} on floor {} assigned to {} (score {})",
                                passenger_id, call.floor, score.elevator_id, score.total
                            ),
                        )
                        .with_elevator(score.elevator_id)
                        .with_passenger(passenger_id)
                        .with_floor(call.floor)
                        .with_detail("score", score.total)
                        .with_detail("base", score.base)
                        .with_detail("load_penalty", score.load_penalty)
                        .with_detail("commitment_penalty", score.commitment_penalty)
                        .with_detail("capacity_penalty", score.capacity_penalty)
                        .with_detail("reversal", score.reversal),
                    );
                }
                None => {
                    state.log.push(
                        LogEntry::new(
                            state.tick,
                            LogKind::AssignmentDeferred,
                            format!(
                                "No elevator can take {} on floor {}, retrying next tick",
                                passenger_id, call.floor
                            ),
                        )
                        .with_passenger(passenger_id)
                        .with_floor(call.floor),
                    );
                }
            }
        }

        Ok(assigned)
    }
}
