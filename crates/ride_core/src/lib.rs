//! # ride_core - Grid-Consistency Engine for a Cycling Tracker
//!
//! Tracks cycling activities over a bounded 2D grid populated with
//! rectangular obstacles. The central invariant: a route may never occupy a
//! grid cell an obstacle covers, enforced by full re-validation after every
//! mutation.
//!
//! ## Structure
//! - `grid` - coordinates, obstacles, routes, and the grid that owns them
//! - `models` - gear, activities, rider profiles
//! - `state` - the single-active-grid slot
//! - `render` - text rendering consumed by the menu layer
//!
//! All operations are synchronous and single-actor; the only lock in the
//! crate guards the global grid slot, not concurrent mutation.

pub mod error;
pub mod grid;
pub mod models;
pub mod render;
pub mod state;

pub use error::{GridError, Result};
pub use grid::coordinate::Coordinate;
pub use grid::obstacle::Obstacle;
pub use grid::route::{Direction, Route};
pub use grid::Grid;
pub use models::{Activity, Gear, GearType, Profile, METERS_PER_STEP};
pub use state::{destroy_instance, get_instance, is_active, with_grid, with_grid_mut};
