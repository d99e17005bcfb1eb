//! Integer grid coordinates
//!
//! One unit = one grid cell = one step (10 m, see [`crate::models::activity`]).
//! Coordinates are non-negative by construction; the grid origin is the
//! top-left cell and y grows downward.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A point (x, y) on the grid. Immutable, value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Build a coordinate, rejecting negative components.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if x < 0 || y < 0 {
            return Err(GridError::InvalidArgument(format!(
                "coordinate components cannot be negative, received ({}, {})",
                x, y
            )));
        }
        Ok(Self { x, y })
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
