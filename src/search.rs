use crate::frontier::{Frontier, FrontierEntry};
use crate::heuristic::Heuristic;
use crate::reconstruct::reconstruct_path;
use crate::tile::Tile;
use crate::tile_grid::TileGrid;
use crate::DEFAULT_ITERATION_BUDGET;
use core::fmt;
use grid_util::point::Point;
use log::{debug, info, trace, warn};
use thiserror::Error;

/// How frontier candidates are ranked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Greedy nearest-heuristic exploration: the priority is the heuristic alone.
    Dfs,
    /// Steps taken plus the heuristic estimate.
    #[default]
    AStar,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchMode::Dfs => write!(f, "dfs"),
            SearchMode::AStar => write!(f, "a*"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub mode: SearchMode,
    /// Maximum number of expansions before the search gives up.
    pub iteration_budget: usize,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            mode: SearchMode::default(),
            iteration_budget: DEFAULT_ITERATION_BUDGET,
        }
    }
}

impl SearchConfig {
    pub fn new(mode: SearchMode, iteration_budget: usize) -> SearchConfig {
        SearchConfig {
            mode,
            iteration_budget,
        }
    }
}

/// Precondition violations, reported before any work is done.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("start location {0:?} is outside the grid")]
    StartOutOfBounds(Point),
    #[error("goal location {0:?} is outside the grid")]
    GoalOutOfBounds(Point),
    #[error("start location {0:?} is a wall")]
    StartOnWall(Point),
    #[error("goal location {0:?} is a wall")]
    GoalOnWall(Point),
}

/// The working grid of a search that reached its goal.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub grid: TileGrid,
    pub start: Point,
    pub goal: Point,
    /// Number of expansions performed.
    pub iterations: usize,
    /// Steps from start to goal along the found path.
    pub path_length: usize,
}

impl SearchResult {
    /// Copies the found path onto `original`, see [reconstruct_path].
    pub fn mark_path(&self, original: &mut TileGrid) -> Vec<Point> {
        reconstruct_path(&self.grid, original, self.start, self.goal)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    /// Every reachable candidate was expanded without meeting the goal.
    NotFound { start: Point, goal: Point },
    /// The iteration budget ran out first.
    BudgetExhausted {
        start: Point,
        goal: Point,
        iterations: usize,
    },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchOutcome::Found(result) => Some(result),
            _ => None,
        }
    }
}

/// Searches a private copy of `grid` for a route from `start` to `goal`.
///
/// Each expansion marks the current location as visited, queues its unvisited non-wall Moore
/// neighbours and pops the best candidate from the [Frontier]. The loop stops at the goal, on an
/// empty frontier or when `config.iteration_budget` expansions have been made. `grid` itself is
/// never modified; on success the working copy is returned inside [SearchOutcome::Found].
pub fn find_path<H>(
    grid: &TileGrid,
    start: Point,
    goal: Point,
    heuristic: &H,
    config: SearchConfig,
) -> Result<SearchOutcome, SearchError>
where
    H: Heuristic + ?Sized,
{
    if !grid.in_bounds(start) {
        return Err(SearchError::StartOutOfBounds(start));
    }
    if !grid.in_bounds(goal) {
        return Err(SearchError::GoalOutOfBounds(goal));
    }
    if grid.is_wall(start) {
        return Err(SearchError::StartOnWall(start));
    }
    if grid.is_wall(goal) {
        return Err(SearchError::GoalOnWall(goal));
    }
    let mut matrix = grid.clone();
    let mut frontier = Frontier::new();
    let mut current = start;
    let mut steps_from_origin = 0;
    let mut came_from: Option<Point> = None;
    let mut remaining = config.iteration_budget;

    while current != goal && remaining > 0 {
        debug!(
            "Iteration {}: expanding {:?} towards {:?}",
            config.iteration_budget - remaining,
            current,
            goal
        );
        matrix.set(current, Tile::visited(steps_from_origin, came_from));
        remaining -= 1;

        let neighbours = matrix
            .neighborhood(current)
            .into_iter()
            .filter(|&p| {
                let tile = matrix.get(p);
                !tile.is_visited() && !tile.is_wall()
            })
            .collect::<Vec<Point>>();
        trace!("Valid neighbours: {:?}", neighbours);

        for location in neighbours {
            let estimate = heuristic.estimate(location, goal);
            debug_assert!(estimate >= 0.0, "negative heuristic estimate {}", estimate);
            let priority = match config.mode {
                SearchMode::AStar => (steps_from_origin + 1) as f64 + estimate,
                SearchMode::Dfs => estimate,
            };
            frontier.add(FrontierEntry {
                priority,
                location,
                origin: current,
                steps_from_origin: steps_from_origin + 1,
            });
        }

        let Some(entry) = frontier.pop() else {
            info!(
                "No path found from start: {:?}, to goal location: {:?}",
                start, goal
            );
            return Ok(SearchOutcome::NotFound { start, goal });
        };
        current = entry.location;
        steps_from_origin = entry.steps_from_origin;
        came_from = Some(entry.origin);
    }

    let iterations = config.iteration_budget - remaining;
    if current != goal {
        warn!(
            "Iteration budget of {} exhausted before reaching {:?}",
            config.iteration_budget, goal
        );
        return Ok(SearchOutcome::BudgetExhausted {
            start,
            goal,
            iterations,
        });
    }
    matrix.set(goal, Tile::goal(steps_from_origin, came_from));
    debug!(
        "Reached {:?} in {} steps after {} iterations",
        goal, steps_from_origin, iterations
    );
    Ok(SearchOutcome::Found(SearchResult {
        grid: matrix,
        start,
        goal,
        iterations,
        path_length: steps_from_origin,
    }))
}

/// Runs [find_path] and, only when a path is found, marks it on `grid` (see [reconstruct_path]).
pub fn find_and_mark_path<H>(
    grid: &mut TileGrid,
    start: Point,
    goal: Point,
    heuristic: &H,
    config: SearchConfig,
) -> Result<SearchOutcome, SearchError>
where
    H: Heuristic + ?Sized,
{
    let outcome = find_path(grid, start, goal, heuristic, config)?;
    if let SearchOutcome::Found(result) = &outcome {
        result.mark_path(grid);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{bird_distance, chebyshev_distance};
    use crate::tile::TileState;

    fn search(grid: &TileGrid, start: Point, goal: Point, mode: SearchMode) -> SearchOutcome {
        find_path(
            grid,
            start,
            goal,
            &chebyshev_distance,
            SearchConfig::new(mode, DEFAULT_ITERATION_BUDGET),
        )
        .unwrap()
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = TileGrid::square(1);
        let start = Point::new(0, 0);
        let outcome = search(&grid, start, start, SearchMode::AStar);
        let result = outcome.result().unwrap();
        assert_eq!(result.path_length, 0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.grid.state(start), TileState::Goal);
    }

    /// Asserts that the optimal 2 step solution around the centre wall is found.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  G|
        let mut grid = TileGrid::square(3);
        grid.set_wall(Point::new(1, 1));
        for mode in [SearchMode::AStar, SearchMode::Dfs] {
            let outcome = search(&grid, Point::new(0, 0), Point::new(2, 2), mode);
            let result = outcome.result().unwrap();
            // The only two step route runs through the wall
            assert!(result.path_length >= 3);
            assert_eq!(result.grid.state(Point::new(1, 1)), TileState::Wall);
        }
    }

    #[test]
    fn walled_off_goal_is_not_found() {
        let mut grid = TileGrid::square(4);
        for p in grid.neighborhood(Point::new(3, 3)) {
            grid.set_wall(p);
        }
        let start = Point::new(0, 0);
        let goal = Point::new(3, 3);
        for mode in [SearchMode::AStar, SearchMode::Dfs] {
            let outcome = search(&grid, start, goal, mode);
            assert_eq!(outcome, SearchOutcome::NotFound { start, goal });
        }
    }

    #[test]
    fn zero_budget_marks_nothing() {
        let grid = TileGrid::square(5);
        let start = Point::new(0, 0);
        let goal = Point::new(4, 4);
        let outcome = find_path(
            &grid,
            start,
            goal,
            &bird_distance,
            SearchConfig::new(SearchMode::AStar, 0),
        )
        .unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::BudgetExhausted {
                start,
                goal,
                iterations: 0
            }
        );
    }

    /// The goal is not marked when the budget runs out.
    #[test]
    fn small_budget_is_exhausted() {
        let mut grid = TileGrid::square(10);
        let start = Point::new(0, 0);
        let goal = Point::new(9, 9);
        let outcome = find_and_mark_path(
            &mut grid,
            start,
            goal,
            &bird_distance,
            SearchConfig::new(SearchMode::AStar, 3),
        )
        .unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::BudgetExhausted {
                start,
                goal,
                iterations: 3
            }
        );
        assert_eq!(grid, TileGrid::square(10));
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let grid = TileGrid::square(3);
        let config = SearchConfig::default();
        assert_eq!(
            find_path(&grid, Point::new(-1, 0), Point::new(1, 1), &bird_distance, config),
            Err(SearchError::StartOutOfBounds(Point::new(-1, 0)))
        );
        assert_eq!(
            find_path(&grid, Point::new(0, 0), Point::new(1, 3), &bird_distance, config),
            Err(SearchError::GoalOutOfBounds(Point::new(1, 3)))
        );
    }

    #[test]
    fn wall_endpoints_are_rejected() {
        let mut grid = TileGrid::square(4);
        grid.set_wall(Point::new(0, 0));
        grid.set_wall(Point::new(3, 3));
        let before = grid.clone();
        let config = SearchConfig::default();
        assert_eq!(
            find_and_mark_path(
                &mut grid,
                Point::new(0, 0),
                Point::new(2, 2),
                &bird_distance,
                config
            ),
            Err(SearchError::StartOnWall(Point::new(0, 0)))
        );
        assert_eq!(
            find_and_mark_path(
                &mut grid,
                Point::new(1, 1),
                Point::new(3, 3),
                &bird_distance,
                config
            ),
            Err(SearchError::GoalOnWall(Point::new(3, 3)))
        );
        // Both walls survive
        assert_eq!(grid, before);
        assert_eq!(grid.count_state(TileState::Wall), 2);
    }

    #[test]
    fn caller_grid_is_untouched() {
        let grid = TileGrid::square(6);
        let before = grid.clone();
        search(&grid, Point::new(0, 0), Point::new(5, 3), SearchMode::AStar);
        assert_eq!(grid, before);
    }

    #[test]
    fn no_obstacle_path_matches_chebyshev_distance() {
        let grid = TileGrid::square(10);
        let cases = [
            (Point::new(0, 0), Point::new(9, 9)),
            (Point::new(4, 0), Point::new(4, 9)),
            (Point::new(2, 7), Point::new(8, 1)),
            (Point::new(9, 3), Point::new(0, 5)),
        ];
        for (start, goal) in cases {
            let outcome = search(&grid, start, goal, SearchMode::AStar);
            let expected = chebyshev_distance(start, goal) as usize;
            assert_eq!(outcome.result().unwrap().path_length, expected);
        }
    }

    #[test]
    fn dfs_and_astar_share_the_path_on_an_open_row() {
        let grid = TileGrid::new(8, 1);
        for mode in [SearchMode::AStar, SearchMode::Dfs] {
            let outcome = search(&grid, Point::new(0, 0), Point::new(7, 0), mode);
            let result = outcome.result().unwrap();
            assert_eq!(result.path_length, 7);
            assert_eq!(result.iterations, 7);
        }
    }
}
