//! Floor primitives
//!
//! This module contains the floor number value type and the bounded floor range
//! that every elevator position, call, and destination must fall inside.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Direction;

/// A floor number in the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor(pub i32);

impl Floor {
    /// Create a new floor number
    pub fn new(number: i32) -> Self {
        Self(number)
    }

    /// Raw floor number
    pub fn number(self) -> i32 {
        self.0
    }

    /// Number of floors between this floor and another
    pub fn distance_to(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Check if this floor is strictly above another
    pub fn is_above(self, other: Floor) -> bool {
        self.0 > other.0
    }

    /// Check if this floor is strictly below another
    pub fn is_below(self, other: Floor) -> bool {
        self.0 < other.0
    }

    /// The adjacent floor one step in the given direction
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up => Floor(self.0 + 1),
            Direction::Down => Floor(self.0 - 1),
        }
    }

    /// Direction of travel from this floor to `other`, `None` when they are the same floor
    pub fn direction_to(self, other: Floor) -> Option<Direction> {
        if other.0 > self.0 {
            Some(Direction::Up)
        } else if other.0 < self.0 {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Floor {
    fn from(number: i32) -> Self {
        Self(number)
    }
}

/// Inclusive range of floors served by the elevator bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRange {
    /// Lowest served floor
    pub min: Floor,
    /// Highest served floor
    pub max: Floor,
}

impl FloorRange {
    /// Create a new floor range
    pub fn new(min: i32, max: i32) -> Self {
        Self { min: Floor(min), max: Floor(max) }
    }

    /// Check if a floor lies inside the range
    pub fn contains(&self, floor: Floor) -> bool {
        floor >= self.min && floor <= self.max
    }

    /// Number of distinct floors in the range, saturating at `u32::MAX`
    pub fn floor_count(&self) -> u32 {
        if self.max < self.min {
            0
        } else {
            self.min.distance_to(self.max).saturating_add(1)
        }
    }

    /// Check that at least two floors exist, so that every passenger can travel somewhere
    pub fn is_valid(&self) -> bool {
        self.max > self.min
    }

    /// Iterate over all floors from bottom to top
    pub fn floors(&self) -> impl Iterator<Item = Floor> {
        (self.min.0..=self.max.0).map(Floor)
    }
}
