//! # grid_search
//!
//! Route search on a fixed-size tile grid. A deduplicating priority [frontier] feeds an
//! expansion loop that runs in one of two [modes](search::SearchMode): greedy
//! nearest-heuristic exploration (`dfs`) or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) (`a*`). Moves go to any of the eight
//! neighbouring tiles at uniform cost, and the heuristic is injected by the caller.
//!
//! ```
//! use grid_search::{find_and_mark_path, heuristic::bird_distance, Scenario, SearchConfig};
//!
//! let scenario = Scenario::reference();
//! let mut grid = scenario.build_grid();
//! let outcome = find_and_mark_path(
//!     &mut grid,
//!     scenario.start,
//!     scenario.goal,
//!     &bird_distance,
//!     SearchConfig::default(),
//! )
//! .unwrap();
//! assert!(outcome.is_found());
//! println!("{}", grid);
//! ```
pub mod frontier;
pub mod heuristic;
pub mod reconstruct;
pub mod render;
pub mod scenario;
pub mod search;
pub mod tile;
pub mod tile_grid;

pub use crate::reconstruct::{is_connected_path, path_points, reconstruct_path};
pub use crate::render::{render, TileSymbols};
pub use crate::scenario::Scenario;
pub use crate::search::{
    find_and_mark_path, find_path, SearchConfig, SearchError, SearchMode, SearchOutcome,
    SearchResult,
};
pub use crate::tile::{Tile, TileState};
pub use crate::tile_grid::TileGrid;

/// Expansions allowed per search unless configured otherwise.
pub const DEFAULT_ITERATION_BUDGET: usize = 1000;
/// Width and height of [Scenario::reference].
pub const REFERENCE_GRID_SIZE: usize = 10;
