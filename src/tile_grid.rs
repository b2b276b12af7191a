use crate::render::{render, TileSymbols};
use crate::tile::{Tile, TileState};
use core::fmt;
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;

/// Fixed-bounds matrix of [Tile]s indexed by [Point], where `x` is the column and `y` the row.
/// Stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Default for TileGrid {
    fn default() -> TileGrid {
        TileGrid::new(0, 0)
    }
}

impl TileGrid {
    /// Creates a grid of unvisited tiles.
    pub fn new(width: usize, height: usize) -> TileGrid {
        TileGrid {
            width,
            height,
            tiles: vec![Tile::default(); width * height],
        }
    }
    pub fn square(n: usize) -> TileGrid {
        TileGrid::new(n, n)
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    fn get_ix_point(&self, point: Point) -> usize {
        assert!(self.in_bounds(point), "{:?} is out of bounds", point);
        point.y as usize * self.width + point.x as usize
    }
    /// Panics if `point` is out of bounds, see [try_get](Self::try_get).
    pub fn get(&self, point: Point) -> Tile {
        self.tiles[self.get_ix_point(point)]
    }
    pub fn try_get(&self, point: Point) -> Option<Tile> {
        if self.in_bounds(point) {
            Some(self.get(point))
        } else {
            None
        }
    }
    pub fn set(&mut self, point: Point, tile: Tile) {
        let ix = self.get_ix_point(point);
        self.tiles[ix] = tile;
    }
    pub fn state(&self, point: Point) -> TileState {
        self.get(point).state
    }
    pub fn set_wall(&mut self, point: Point) {
        self.set(point, Tile::wall());
    }
    pub fn is_wall(&self, point: Point) -> bool {
        self.get(point).is_wall()
    }
    /// Iterates over every point of the grid, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Point::new(x, y)))
    }
    pub fn count_state(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// The in-bounds part of the Moore neighbourhood of `point`, the point itself excluded.
    /// Order is fixed: columns left to right, and within a column rows top to bottom.
    pub fn neighborhood(&self, point: Point) -> Vec<Point> {
        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&p| self.in_bounds(p))
            .collect()
    }

    /// Builds a [UnionFind] that links up every pair of adjacent non-wall tiles, diagonals included.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.width * self.height);
        for point in self.points() {
            if self.is_wall(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(point);
            for neighbor in self.neighborhood(point) {
                if !self.is_wall(neighbor) {
                    components.union(parent_ix, self.get_ix_point(neighbor));
                }
            }
        }
        components
    }

    /// Checks if start and goal are in bounds, not walls, and on the same connected component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return false;
        }
        if self.is_wall(start) || self.is_wall(goal) {
            return false;
        }
        self.components()
            .equiv(self.get_ix_point(start), self.get_ix_point(goal))
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(self, &TileSymbols::default()))
    }
}
