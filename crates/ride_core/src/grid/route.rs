//! Routes: the ordered trail of cells ridden during one activity
//!
//! A route always holds at least its starting coordinate and only ever
//! grows. A directional move appends one coordinate per unit step, so the
//! full trail is recorded, not just endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::grid::coordinate::Coordinate;

/// One of the four axis-aligned move directions.
///
/// The menu layer encodes directions as 1..=4; `from_code` maps that
/// encoding. Up decrements y (the grid origin is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Map the menu encoding [UP = 1, RIGHT = 2, DOWN = 3, LEFT = 4].
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            4 => Ok(Direction::Left),
            _ => Err(GridError::InvalidArgument(format!(
                "direction code must be 1..=4, received {}",
                code
            ))),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit displacement (dx, dy) for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// The ordered, non-empty sequence of coordinates ridden so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    coordinates: Vec<Coordinate>,
}

impl Route {
    /// Start a route at (x, y). Negative components are rejected.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        let start = Coordinate::new(x, y)?;
        Ok(Self { coordinates: vec![start] })
    }

    /// Number of coordinates recorded. Always >= 1.
    pub fn step_count(&self) -> usize {
        self.coordinates.len()
    }

    /// The coordinate at `index`, in traversal order.
    pub fn coordinate_at(&self, index: usize) -> Result<Coordinate> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(GridError::IndexOutOfRange { index, len: self.coordinates.len() })
    }

    /// The current position (the most recently appended coordinate).
    pub fn last(&self) -> Coordinate {
        // non-empty invariant: seeded with the start coordinate
        *self.coordinates.last().unwrap()
    }

    /// Append `steps` unit moves in `direction`, one coordinate per step.
    ///
    /// The whole destination span is validated before anything is appended:
    /// a move that would cross the x or y axis below zero is rejected
    /// atomically and the route is left unchanged.
    pub fn move_steps(&mut self, direction: Direction, steps: i32) -> Result<()> {
        if steps < 0 {
            return Err(GridError::InvalidArgument(format!(
                "steps cannot be negative, received {}",
                steps
            )));
        }

        let (dx, dy) = direction.delta();
        let current = self.last();

        // Only the far endpoint can be the first negative cell, but build
        // the whole span up front so nothing is appended on rejection.
        let mut span = Vec::with_capacity(steps as usize);
        for i in 1..=steps {
            span.push(Coordinate::new(current.x() + dx * i, current.y() + dy * i)?);
        }

        log::debug!(
            "route move: {:?} x{} from {} to {}",
            direction,
            steps,
            current,
            span.last().copied().unwrap_or(current)
        );

        self.coordinates.extend(span);
        Ok(())
    }

    /// True iff any recorded coordinate equals (x, y). Linear scan; no
    /// spatial index, which is fine at the grid sizes this engine targets.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.coordinates.iter().any(|c| c.x() == x && c.y() == y)
    }

    /// Read-only view of the recorded coordinates.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Roll back to `len` coordinates. Only the grid calls this, to undo a
    /// move whose re-validation failed; routes never shrink otherwise.
    pub(crate) fn truncate(&mut self, len: usize) {
        debug_assert!(len >= 1, "route cannot be truncated below its start coordinate");
        self.coordinates.truncate(len.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_start_coordinate() {
        let route = Route::new(2, 3).unwrap();
        assert_eq!(route.step_count(), 1);
        assert_eq!(route.coordinate_at(0).unwrap(), Coordinate::new(2, 3).unwrap());
        assert!(Route::new(-1, 0).is_err());
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(Direction::from_code(1).unwrap(), Direction::Up);
        assert_eq!(Direction::from_code(2).unwrap(), Direction::Right);
        assert_eq!(Direction::from_code(3).unwrap(), Direction::Down);
        assert_eq!(Direction::from_code(4).unwrap(), Direction::Left);
        assert!(matches!(Direction::from_code(0), Err(GridError::InvalidArgument(_))));
        assert!(matches!(Direction::from_code(5), Err(GridError::InvalidArgument(_))));
    }

    #[test]
    fn test_move_records_every_unit_step() {
        let mut route = Route::new(0, 0).unwrap();
        route.move_steps(Direction::Right, 3).unwrap();

        assert_eq!(route.step_count(), 4);
        assert_eq!(route.coordinate_at(1).unwrap(), Coordinate::new(1, 0).unwrap());
        assert_eq!(route.coordinate_at(2).unwrap(), Coordinate::new(2, 0).unwrap());
        assert_eq!(route.coordinate_at(3).unwrap(), Coordinate::new(3, 0).unwrap());
    }

    #[test]
    fn test_move_round_trip_returns_to_origin() {
        let mut route = Route::new(5, 5).unwrap();
        route.move_steps(Direction::Down, 4).unwrap();
        route.move_steps(Direction::Down.opposite(), 4).unwrap();

        assert_eq!(route.last(), Coordinate::new(5, 5).unwrap());
        assert_eq!(route.step_count(), 1 + 2 * 4);
    }

    #[test]
    fn test_move_zero_steps_is_a_no_op() {
        let mut route = Route::new(1, 1).unwrap();
        route.move_steps(Direction::Left, 0).unwrap();
        assert_eq!(route.step_count(), 1);
    }

    #[test]
    fn test_negative_steps_rejected() {
        let mut route = Route::new(1, 1).unwrap();
        assert!(matches!(
            route.move_steps(Direction::Up, -2),
            Err(GridError::InvalidArgument(_))
        ));
        assert_eq!(route.step_count(), 1);
    }

    #[test]
    fn test_move_past_origin_rejected_atomically() {
        let mut route = Route::new(2, 0).unwrap();
        // two steps left is fine, three would cross x = 0
        let err = route.move_steps(Direction::Left, 3);
        assert!(matches!(err, Err(GridError::InvalidArgument(_))));
        // nothing partially applied
        assert_eq!(route.step_count(), 1);
        assert_eq!(route.last(), Coordinate::new(2, 0).unwrap());

        route.move_steps(Direction::Left, 2).unwrap();
        assert_eq!(route.last(), Coordinate::new(0, 0).unwrap());
    }

    #[test]
    fn test_contains_scans_full_trail() {
        let mut route = Route::new(0, 0).unwrap();
        route.move_steps(Direction::Right, 2).unwrap();
        route.move_steps(Direction::Down, 2).unwrap();

        assert!(route.contains(0, 0));
        assert!(route.contains(1, 0));
        assert!(route.contains(2, 1));
        assert!(!route.contains(1, 1));
    }

    #[test]
    fn test_coordinate_at_out_of_range() {
        let route = Route::new(0, 0).unwrap();
        assert!(matches!(
            route.coordinate_at(1),
            Err(GridError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }
}
