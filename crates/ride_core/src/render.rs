//! Text rendering of the grid
//!
//! Pure string building over the grid's point queries; the menu layer does
//! the actual printing. One row per y value, obstacles drawn over routes.

use crate::error::Result;
use crate::grid::Grid;

pub const OBSTACLE_SYMBOL: char = '*';
pub const ROUTE_SYMBOL: char = '>';
pub const EMPTY_SYMBOL: char = '.';

/// Render the whole grid, marking every activity's route.
pub fn render_grid(grid: &Grid) -> String {
    render_with(grid, |x, y| grid.is_in_route(x, y))
}

/// Render the grid marking only the route of the activity at `index`.
pub fn render_activity(grid: &Grid, index: usize) -> Result<String> {
    // probe once so a bad index fails before any rendering
    grid.is_in_route_of(index, 0, 0)?;
    Ok(render_with(grid, |x, y| {
        grid.is_in_route_of(index, x, y).unwrap_or(false)
    }))
}

fn render_with(grid: &Grid, in_route: impl Fn(i32, i32) -> bool) -> String {
    let mut out = String::with_capacity((grid.width() as usize * 2 + 1) * grid.length() as usize);

    for y in 0..grid.length() {
        for x in 0..grid.width() {
            let symbol = if grid.is_in_obstacle(x, y) {
                OBSTACLE_SYMBOL
            } else if in_route(x, y) {
                ROUTE_SYMBOL
            } else {
                EMPTY_SYMBOL
            };
            out.push(symbol);
            if x + 1 < grid.width() {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::grid::route::{Direction, Route};
    use crate::models::activity::Activity;
    use crate::models::gear::{Gear, GearType};

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.add_obstacle(2, 2, 2, 2).unwrap();

        let gear = Gear::new(GearType::CommuterBike, "Sirrus", 20).unwrap();
        let mut activity = Activity::new(gear, Route::new(0, 0).unwrap());
        activity.route_mut().unwrap().move_steps(Direction::Down, 1).unwrap();
        grid.add_activity(activity).unwrap();
        grid
    }

    #[test]
    fn test_render_grid_symbols() {
        let rendered = render_grid(&sample_grid());
        assert_eq!(rendered, "> . .\n> . .\n. . *\n");
    }

    #[test]
    fn test_render_single_activity() {
        let mut grid = sample_grid();
        let gear = Gear::new(GearType::RoadBike, "Aethos", 30).unwrap();
        grid.add_activity(Activity::new(gear, Route::new(1, 0).unwrap())).unwrap();

        // only the second activity's route is marked
        let rendered = render_activity(&grid, 1).unwrap();
        assert_eq!(rendered, ". > .\n. . .\n. . *\n");
    }

    #[test]
    fn test_render_activity_bad_index() {
        let grid = sample_grid();
        assert!(matches!(
            render_activity(&grid, 4),
            Err(GridError::IndexOutOfRange { index: 4, len: 1 })
        ));
    }
}
