//! Activities: one timed ride pairing a gear with a route
//!
//! An activity starts the moment it is created and ends at most once. Until
//! it ends the route can grow through [`Activity::route_mut`]; afterwards the
//! route is frozen and only the shared view remains. Average speed is derived
//! from the step count (10 m per step) and the elapsed wall-clock time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::grid::route::Route;
use crate::models::gear::Gear;

/// Distance covered by one route step, in meters.
pub const METERS_PER_STEP: f64 = 10.0;

/// A timed riding session: gear, route, start/end instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    gear: Gear,
    route: Route,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    avg_speed: Option<f64>,
    /// Insertion sequence assigned by the grid; tiebreak for activities
    /// sharing a start timestamp.
    pub(crate) seq: u64,
}

impl Activity {
    /// Start a new activity now, riding `gear` along `route`.
    pub fn new(gear: Gear, route: Route) -> Self {
        Self::with_start(gear, route, Utc::now())
    }

    /// Start a new activity at an explicit instant. The instant is trusted;
    /// use [`Activity::new`] outside of replay/test paths.
    pub fn with_start(gear: Gear, route: Route, start: DateTime<Utc>) -> Self {
        Self { gear, route, start, end: None, avg_speed: None, seq: 0 }
    }

    pub fn gear(&self) -> &Gear {
        &self.gear
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Mutable access to the route, only while the activity is running.
    /// Once ended, the route is frozen.
    pub fn route_mut(&mut self) -> Result<&mut Route> {
        if self.end.is_some() {
            return Err(GridError::IllegalState(
                "route cannot be modified after the activity has ended".to_string(),
            ));
        }
        Ok(&mut self.route)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn is_ended(&self) -> bool {
        self.end.is_some()
    }

    /// End the activity now. Idempotent: only the first call sets the end
    /// instant and computes the average speed.
    pub fn end_activity(&mut self) -> Result<()> {
        self.end_activity_at(Utc::now())
    }

    /// End the activity at an explicit instant (replay/test paths).
    pub fn end_activity_at(&mut self, end: DateTime<Utc>) -> Result<()> {
        if self.end.is_some() {
            return Ok(());
        }

        let elapsed_secs = (end - self.start).num_milliseconds() as f64 / 1000.0;
        if elapsed_secs <= 0.0 {
            return Err(GridError::ZeroDuration);
        }

        let distance_m = self.route.step_count() as f64 * METERS_PER_STEP;
        self.end = Some(end);
        self.avg_speed = Some(distance_m / elapsed_secs);

        log::info!(
            "activity ended: {} steps in {:.3} s, {:.2} m/s",
            self.route.step_count(),
            elapsed_secs,
            distance_m / elapsed_secs
        );
        Ok(())
    }

    /// Average speed in meters per second. Only defined after the activity
    /// has ended.
    pub fn avg_speed(&self) -> Result<f64> {
        self.avg_speed.ok_or_else(|| {
            GridError::IllegalState(
                "average speed is undefined until the activity has ended".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::models::gear::GearType;

    fn gear() -> Gear {
        Gear::new(GearType::RoadBike, "Domane", 25).unwrap()
    }

    #[test]
    fn test_avg_speed_undefined_before_end() {
        let activity = Activity::new(gear(), Route::new(0, 0).unwrap());
        assert!(matches!(activity.avg_speed(), Err(GridError::IllegalState(_))));
        assert!(!activity.is_ended());
        assert!(activity.end().is_none());
    }

    #[test]
    fn test_end_computes_avg_speed_from_steps_and_elapsed() {
        // 5 steps over 10 seconds: (5 * 10 m) / 10 s = 5 m/s
        let start = Utc::now();
        let mut route = Route::new(0, 0).unwrap();
        route.move_steps(crate::grid::route::Direction::Right, 4).unwrap();
        assert_eq!(route.step_count(), 5);

        let mut activity = Activity::with_start(gear(), route, start);
        activity.end_activity_at(start + Duration::seconds(10)).unwrap();

        let speed = activity.avg_speed().unwrap();
        assert!((speed - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_end_is_idempotent() {
        let start = Utc::now();
        let mut activity = Activity::with_start(gear(), Route::new(0, 0).unwrap(), start);

        activity.end_activity_at(start + Duration::seconds(2)).unwrap();
        let first_end = activity.end().unwrap();
        let first_speed = activity.avg_speed().unwrap();

        // second call is a no-op
        activity.end_activity_at(start + Duration::seconds(60)).unwrap();
        assert_eq!(activity.end().unwrap(), first_end);
        assert_eq!(activity.avg_speed().unwrap(), first_speed);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let start = Utc::now();
        let mut activity = Activity::with_start(gear(), Route::new(0, 0).unwrap(), start);
        assert_eq!(activity.end_activity_at(start), Err(GridError::ZeroDuration));
        // still running, can be ended later
        assert!(!activity.is_ended());
        activity.end_activity_at(start + Duration::seconds(1)).unwrap();
    }

    #[test]
    fn test_route_frozen_after_end() {
        let start = Utc::now();
        let mut activity = Activity::with_start(gear(), Route::new(0, 0).unwrap(), start);

        activity.route_mut().unwrap().move_steps(crate::grid::route::Direction::Down, 2).unwrap();
        activity.end_activity_at(start + Duration::seconds(5)).unwrap();

        assert!(matches!(activity.route_mut(), Err(GridError::IllegalState(_))));
        // shared view still available
        assert_eq!(activity.route().step_count(), 3);
    }
}
