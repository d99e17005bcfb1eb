//! Axis-aligned rectangular obstacles
//!
//! An obstacle blocks every cell of the closed rectangle between its
//! top-left and bottom-right corners. Routes may never enter it.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::grid::coordinate::Coordinate;

/// A rectangular region a route may not enter. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    top_left: Coordinate,
    bottom_right: Coordinate,
}

impl Obstacle {
    /// Build an obstacle from its diagonal corners.
    ///
    /// The bottom-right corner must be weakly greater than the top-left on
    /// both axes; degenerate one-cell obstacles (equal corners) are allowed,
    /// inverted rectangles are not.
    pub fn new(top_left: Coordinate, bottom_right: Coordinate) -> Result<Self> {
        if bottom_right.x() < top_left.x() || bottom_right.y() < top_left.y() {
            return Err(GridError::InvalidArgument(format!(
                "bottom-right corner {} must not precede top-left corner {}",
                bottom_right, top_left
            )));
        }
        Ok(Self { top_left, bottom_right })
    }

    #[inline]
    pub fn top_left(&self) -> Coordinate {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Coordinate {
        self.bottom_right
    }

    /// Horizontal extent in cells (at least 1).
    pub fn width(&self) -> i32 {
        self.bottom_right.x() - self.top_left.x() + 1
    }

    /// Vertical extent in cells (at least 1).
    pub fn length(&self) -> i32 {
        self.bottom_right.y() - self.top_left.y() + 1
    }

    /// Closed-interval containment on both axes.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.top_left.x()
            && x <= self.bottom_right.x()
            && y >= self.top_left.y()
            && y <= self.bottom_right.y()
    }
}
