//! Integration tests for call assignment across an elevator bank

use elevator_dispatch_sim::dispatch::{CostModel, Dispatcher, FloorCall};
use elevator_dispatch_sim::elevator::{Elevator, Rider};
use elevator_dispatch_sim::events::{DetailValue, LogKind};
use elevator_dispatch_sim::passenger::Passenger;
use elevator_dispatch_sim::simulation::SimulationState;
use elevator_dispatch_sim::types::*;

fn bank(positions: &[i32], capacity: usize) -> SimulationState {
    let elevators = positions
        .iter()
        .enumerate()
        .map(|(index, floor)| Elevator::new(ElevatorId::new(index + 1), Floor::new(*floor), capacity))
        .collect();
    SimulationState::with_elevators(FloorRange::new(1, 10), elevators, 10)
}

fn waiting(state: &mut SimulationState, source: i32, destination: i32, with_call: bool) -> PassengerId {
    let id = state.passengers.next_id();
    let passenger = Passenger::new(id, state.tick, Floor::new(source), Floor::new(destination));
    if with_call {
        state.calls.register(FloorCall::new(passenger.source, passenger.direction, state.tick, id));
    }
    state.passengers.push(passenger).unwrap();
    id
}

fn dispatcher(weights: DispatchWeights) -> Dispatcher {
    Dispatcher::new(CostModel::new(&weights, 10))
}

/// Test that each call goes to the cheapest car in spawn order
#[test]
fn test_dispatch_pending_assigns_nearest() {
    let mut state = bank(&[1, 8], 5);
    let first = waiting(&mut state, 7, 2, true);
    let second = waiting(&mut state, 4, 6, true);

    let assigned = dispatcher(DispatchWeights::default()).dispatch_pending(&mut state).unwrap();

    assert_eq!(assigned, 2);
    assert_eq!(state.passengers.get(first).unwrap().assigned_elevator, Some(ElevatorId::new(2)));
    // Elevator 2 now heads down towards floor 7, so the upward call goes to the idle car
    assert_eq!(state.passengers.get(second).unwrap().assigned_elevator, Some(ElevatorId::new(1)));

    assert!(state.elevators[1].targets.contains(&Floor::new(7)));
    assert_eq!(state.elevators[1].heading, Heading::Down);
    assert!(state.elevators[0].targets.contains(&Floor::new(4)));
    assert_eq!(state.elevators[0].heading, Heading::Up);
    assert_eq!(state.log.count_kind(LogKind::PassengerAssigned), 2);
}

/// Test that equal scores go to the first registered elevator
#[test]
fn test_tie_goes_to_first_registered() {
    let mut state = bank(&[3, 3, 3], 5);
    let id = waiting(&mut state, 6, 9, true);

    dispatcher(DispatchWeights::default()).dispatch_pending(&mut state).unwrap();

    assert_eq!(state.passengers.get(id).unwrap().assigned_elevator, Some(ElevatorId::new(1)));
    let entry = state.log.last().unwrap();
    assert_eq!(entry.kind, LogKind::PassengerAssigned);
    assert_eq!(entry.elevator_id, Some(ElevatorId::new(1)));
    assert_eq!(entry.detail("score"), Some(&DetailValue::Number(3)));
    assert_eq!(entry.detail("reversal"), Some(&DetailValue::Flag(false)));
}

/// Test that already-assigned passengers are not reassigned
#[test]
fn test_assignment_is_sticky() {
    let mut state = bank(&[1, 10], 5);
    let id = waiting(&mut state, 2, 5, true);
    let dispatch = dispatcher(DispatchWeights::default());

    assert_eq!(dispatch.dispatch_pending(&mut state).unwrap(), 1);
    assert_eq!(dispatch.dispatch_pending(&mut state).unwrap(), 0);
    assert_eq!(state.passengers.get(id).unwrap().assigned_elevator, Some(ElevatorId::new(1)));
    assert_eq!(state.log.count_kind(LogKind::PassengerAssigned), 1);
}

/// Test that a waiting passenger without a registered call gets one
#[test]
fn test_missing_call_is_synthesized() {
    let mut state = bank(&[5], 5);
    let id = waiting(&mut state, 2, 1, false);
    assert!(!state.calls.contains(id));

    dispatcher(DispatchWeights::default()).dispatch_pending(&mut state).unwrap();

    let call = state.calls.get(id).unwrap();
    assert_eq!(call.floor, Floor::new(2));
    assert_eq!(call.direction, Direction::Down);
    assert_eq!(state.passengers.get(id).unwrap().assigned_elevator, Some(ElevatorId::new(1)));
}

/// Test that full cars are skipped unless a capacity penalty is configured
#[test]
fn test_full_elevator_policy() {
    let build = || {
        let mut state = bank(&[4], 1);
        state.elevators[0].add_rider(Rider {
            passenger_id: PassengerId::new(99),
            destination: Floor::new(9),
        });
        let id = waiting(&mut state, 6, 8, true);
        (state, id)
    };

    let (mut state, id) = build();
    let assigned = dispatcher(DispatchWeights::default()).dispatch_pending(&mut state).unwrap();
    assert_eq!(assigned, 0);
    assert_eq!(state.passengers.get(id).unwrap().assigned_elevator, None);
    assert_eq!(state.log.last().unwrap().kind, LogKind::AssignmentDeferred);

    let weights = DispatchWeights { full_elevator_penalty: Some(10), ..DispatchWeights::default() };
    let (mut state, id) = build();
    let assigned = dispatcher(weights).dispatch_pending(&mut state).unwrap();
    assert_eq!(assigned, 1);
    assert_eq!(state.passengers.get(id).unwrap().assigned_elevator, Some(ElevatorId::new(1)));
    assert_eq!(state.log.last().unwrap().detail("capacity_penalty"), Some(&DetailValue::Number(10)));
}

/// Test that configured weights change the winner
#[test]
fn test_custom_weights_from_config() {
    let config = SimulationConfig {
        dispatch: DispatchWeights { passenger_weight: 10, ..DispatchWeights::default() },
        ..SimulationConfig::default()
    };
    let model = CostModel::from_config(&config);
    assert_eq!(model.passenger_weight, 10);
    assert_eq!(model.behind_penalty, 10);
    assert_eq!(model.reversal_penalty, 20);

    // A loaded car next door loses to an empty car four floors away
    let mut state = bank(&[5, 1], 5);
    state.elevators[0].add_rider(Rider {
        passenger_id: PassengerId::new(42),
        destination: Floor::new(9),
    });
    let id = waiting(&mut state, 5, 6, true);

    Dispatcher::new(model).dispatch_pending(&mut state).unwrap();
    assert_eq!(state.passengers.get(id).unwrap().assigned_elevator, Some(ElevatorId::new(2)));
}
