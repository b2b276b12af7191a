use crate::tile_grid::TileGrid;
use crate::REFERENCE_GRID_SIZE;
use grid_util::point::Point;

/// Everything needed to lay out a square grid and pick the search endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub size: usize,
    pub walls: Vec<Point>,
    pub start: Point,
    pub goal: Point,
}

impl Scenario {
    /// The 10x10 layout below, where S marks the start and G the goal:
    /// ```text
    ///         S
    ///
    ///
    ///
    ///
    ///
    /// m m m m m m m m
    ///
    ///   m m m m m m m m
    ///         G       m
    /// ```
    pub fn reference() -> Scenario {
        let n = REFERENCE_GRID_SIZE as i32;
        let walls = (0..8)
            .map(|x| Point::new(x, 6))
            .chain((1..9).map(|x| Point::new(x, 8)))
            .chain((8..n).map(|y| Point::new(8, y)))
            .collect();
        Scenario {
            size: REFERENCE_GRID_SIZE,
            walls,
            start: Point::new(4, 0),
            goal: Point::new(4, 9),
        }
    }

    /// Builds a grid of unvisited tiles with the walls placed. Walls outside the grid are skipped.
    pub fn build_grid(&self) -> TileGrid {
        let mut grid = TileGrid::square(self.size);
        for &wall in &self.walls {
            if grid.in_bounds(wall) {
                grid.set_wall(wall);
            }
        }
        grid
    }
}
