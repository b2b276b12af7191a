use crate::tile::TileState;
use crate::tile_grid::TileGrid;
use grid_util::point::Point;
use itertools::Itertools;

/// Characters used to draw each [TileState].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSymbols {
    pub unvisited: char,
    pub wall: char,
    pub visited: char,
    pub goal: char,
}

impl Default for TileSymbols {
    fn default() -> TileSymbols {
        TileSymbols {
            unvisited: ' ',
            wall: 'm',
            visited: '*',
            goal: 'G',
        }
    }
}

impl TileSymbols {
    pub fn symbol(&self, state: TileState) -> char {
        match state {
            TileState::Unvisited => self.unvisited,
            TileState::Wall => self.wall,
            TileState::Visited => self.visited,
            TileState::Goal => self.goal,
        }
    }
}

/// Draws one line per grid row, with the symbols of a row separated by single spaces.
pub fn render(grid: &TileGrid, symbols: &TileSymbols) -> String {
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| symbols.symbol(grid.state(Point::new(x, y))))
                .join(" ")
        })
        .map(|row| row + "\n")
        .collect()
}
