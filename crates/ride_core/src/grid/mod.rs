//! The grid: bounded 2D space, obstacles, and the activities ridden on it
//!
//! The grid is the sole authority on spatial containment. Every mutation is
//! followed by a full invariant re-validation over all cells; a mutation
//! that would leave the grid inconsistent is rolled back and reported, so
//! rejected calls leave no trace.

pub mod coordinate;
pub mod obstacle;
pub mod route;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::models::activity::Activity;
use coordinate::Coordinate;
use obstacle::Obstacle;
use route::Direction;

/// The bounded grid holding obstacles and activities.
///
/// Cells span `[0, width) x [0, length)`. Obstacles are kept in insertion
/// order; activities are kept sorted by start instant, with the insertion
/// sequence as tiebreak so same-instant starts are preserved in order.
///
/// `Grid` is a plain value: embedders and tests may own instances directly.
/// The at-most-one-active-grid contract lives in [`crate::state`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    length: i32,
    obstacles: Vec<Obstacle>,
    activities: Vec<Activity>,
    next_seq: u64,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(width: i32, length: i32) -> Result<Self> {
        if width < 1 || length < 1 {
            return Err(GridError::InvalidArgument(format!(
                "grid dimensions must be positive, received {}x{}",
                width, length
            )));
        }
        Ok(Self { width, length, obstacles: Vec::new(), activities: Vec::new(), next_seq: 0 })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    /// Read-only view of the obstacles, in insertion order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Read-only view of the activities, ordered by start instant.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    // ========================
    // Obstacle management
    // ========================

    /// Add a rectangular obstacle spanning the two diagonal corners.
    ///
    /// Fails with `OutOfBounds` when the rectangle exceeds the grid and
    /// with `InvariantViolation` when it would cover a cell some route
    /// already occupies. A failed add leaves the obstacle list unchanged.
    pub fn add_obstacle(
        &mut self,
        top_left_x: i32,
        top_left_y: i32,
        bottom_right_x: i32,
        bottom_right_y: i32,
    ) -> Result<()> {
        let obstacle = Obstacle::new(
            Coordinate::new(top_left_x, top_left_y)?,
            Coordinate::new(bottom_right_x, bottom_right_y)?,
        )?;

        self.obstacles.push(obstacle);
        if let Err(err) = self.check_invariants() {
            self.obstacles.pop();
            return Err(err);
        }

        log::info!(
            "obstacle added: ({}, {})..({}, {})",
            top_left_x,
            top_left_y,
            bottom_right_x,
            bottom_right_y
        );
        Ok(())
    }

    /// Remove the obstacle at `index` (insertion order).
    pub fn remove_obstacle(&mut self, index: usize) -> Result<()> {
        if index >= self.obstacles.len() {
            return Err(GridError::IndexOutOfRange { index, len: self.obstacles.len() });
        }

        let removed = self.obstacles.remove(index);
        // removal can only relax constraints; re-validated anyway
        if let Err(err) = self.check_invariants() {
            self.obstacles.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    // ========================
    // Activity management
    // ========================

    /// Add an activity, keeping the collection ordered by start instant
    /// (ties broken by insertion order). Fails when the activity's route
    /// leaves the grid or crosses an obstacle; the collection is unchanged
    /// on failure.
    pub fn add_activity(&mut self, mut activity: Activity) -> Result<()> {
        activity.seq = self.next_seq;
        let key = (activity.start(), activity.seq);
        let pos = self.activities.partition_point(|a| (a.start(), a.seq) <= key);

        self.activities.insert(pos, activity);
        if let Err(err) = self.check_invariants() {
            self.activities.remove(pos);
            return Err(err);
        }

        self.next_seq += 1;
        log::info!("activity added at position {} ({} total)", pos, self.activities.len());
        Ok(())
    }

    /// Remove the activity at `index` (start-instant order).
    pub fn remove_activity(&mut self, index: usize) -> Result<()> {
        if index >= self.activities.len() {
            return Err(GridError::IndexOutOfRange { index, len: self.activities.len() });
        }

        let removed = self.activities.remove(index);
        if let Err(err) = self.check_invariants() {
            self.activities.insert(index, removed);
            return Err(err);
        }
        Ok(())
    }

    /// The activity at `index` (start-instant order).
    pub fn activity_at(&self, index: usize) -> Result<&Activity> {
        self.activities
            .get(index)
            .ok_or(GridError::IndexOutOfRange { index, len: self.activities.len() })
    }

    /// End the activity at `index`, fixing its average speed.
    pub fn end_activity(&mut self, index: usize) -> Result<()> {
        let len = self.activities.len();
        let activity = self
            .activities
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange { index, len })?;
        activity.end_activity()
    }

    /// Advance the route of the activity at `index` by `steps` unit moves
    /// in `direction`, then re-validate the whole grid. On violation the
    /// appended coordinates are rolled back and the route is unchanged.
    pub fn move_activity(&mut self, index: usize, direction: Direction, steps: i32) -> Result<()> {
        let len = self.activities.len();
        let activity = self
            .activities
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange { index, len })?;

        let route = activity.route_mut()?;
        let committed = route.step_count();
        route.move_steps(direction, steps)?;

        if let Err(err) = self.check_invariants() {
            // route_mut() succeeded above, the activity is still running
            if let Ok(route) = self.activities[index].route_mut() {
                route.truncate(committed);
            }
            return Err(err);
        }
        Ok(())
    }

    // ========================
    // Point queries
    // ========================

    /// True iff any obstacle covers (x, y).
    pub fn is_in_obstacle(&self, x: i32, y: i32) -> bool {
        self.obstacles.iter().any(|o| o.contains(x, y))
    }

    /// True iff any activity's route passes through (x, y).
    pub fn is_in_route(&self, x: i32, y: i32) -> bool {
        self.activities.iter().any(|a| a.route().contains(x, y))
    }

    /// True iff the route of the activity at `index` passes through (x, y).
    pub fn is_in_route_of(&self, index: usize, x: i32, y: i32) -> Result<bool> {
        let activity = self
            .activities
            .get(index)
            .ok_or(GridError::IndexOutOfRange { index, len: self.activities.len() })?;
        Ok(activity.route().contains(x, y))
    }

    // ========================
    // Invariant re-validation
    // ========================

    /// Re-validate every grid invariant from scratch.
    ///
    /// Checks dimensions, obstacle bounds, route bounds, and finally scans
    /// every cell asserting no cell is both in an obstacle and in a route.
    /// O(width x length x (obstacles + routes)) per call, which is the
    /// accepted cost at the map sizes this engine targets.
    fn check_invariants(&self) -> Result<()> {
        if self.width < 1 || self.length < 1 {
            return Err(GridError::IllegalState(format!(
                "grid dimensions must stay positive, found {}x{}",
                self.width, self.length
            )));
        }

        for obstacle in &self.obstacles {
            let br = obstacle.bottom_right();
            if br.x() >= self.width || br.y() >= self.length {
                return Err(GridError::OutOfBounds { x: br.x(), y: br.y() });
            }
        }

        for activity in &self.activities {
            for coord in activity.route().coordinates() {
                if coord.x() >= self.width || coord.y() >= self.length {
                    return Err(GridError::OutOfBounds { x: coord.x(), y: coord.y() });
                }
            }
        }

        for x in 0..self.width {
            for y in 0..self.length {
                if self.is_in_obstacle(x, y) && self.is_in_route(x, y) {
                    return Err(GridError::InvariantViolation { x, y });
                }
            }
        }

        Ok(())
    }
}
