use grid_util::point::Point;

/// What a single cell of a [TileGrid](crate::tile_grid::TileGrid) currently holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileState {
    #[default]
    Unvisited,
    Wall,
    Visited,
    Goal,
}

/// One cell of the grid. `distance_from_start` and `predecessor` only carry meaning once the
/// tile has been visited by a search; the search origin has no predecessor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub state: TileState,
    pub distance_from_start: usize,
    pub predecessor: Option<Point>,
}

impl Tile {
    pub fn wall() -> Tile {
        Tile {
            state: TileState::Wall,
            ..Tile::default()
        }
    }
    pub fn visited(distance_from_start: usize, predecessor: Option<Point>) -> Tile {
        Tile {
            state: TileState::Visited,
            distance_from_start,
            predecessor,
        }
    }
    pub fn goal(distance_from_start: usize, predecessor: Option<Point>) -> Tile {
        Tile {
            state: TileState::Goal,
            distance_from_start,
            predecessor,
        }
    }
    pub fn is_wall(&self) -> bool {
        self.state == TileState::Wall
    }
    pub fn is_visited(&self) -> bool {
        self.state == TileState::Visited
    }
}
