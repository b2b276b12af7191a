use crate::tile::Tile;
use crate::tile_grid::TileGrid;
use grid_util::point::Point;
use itertools::Itertools;

/// Follows predecessor links from `goal` back to `start` on a searched grid and returns the
/// locations ordered from start to goal. The walk stops at `start`, at a tile without a
/// predecessor, or after `distance_from_start(goal) + 1` tiles, whichever comes first.
pub fn path_points(working: &TileGrid, start: Point, goal: Point) -> Vec<Point> {
    let limit = working.get(goal).distance_from_start + 1;
    let mut path: Vec<Point> = std::iter::successors(Some(goal), |&p| {
        if p == start {
            None
        } else {
            working.get(p).predecessor
        }
    })
    .take(limit)
    .collect();
    path.reverse();
    path
}

/// Copies the tiles on the path from `start` to `goal` of the searched `working` grid onto
/// `original`, leaving every other tile of `original` as it was. The start tile is written as
/// visited unless it is the goal itself. Returns the path ordered from start to goal.
pub fn reconstruct_path(
    working: &TileGrid,
    original: &mut TileGrid,
    start: Point,
    goal: Point,
) -> Vec<Point> {
    let path = path_points(working, start, goal);
    for &p in &path {
        let tile = working.get(p);
        if p == start && start != goal {
            original.set(p, Tile::visited(tile.distance_from_start, tile.predecessor));
        } else {
            original.set(p, tile);
        }
    }
    path
}

/// Checks that every consecutive pair of points is exactly one king move apart.
pub fn is_connected_path(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| (a.x - b.x).abs().max((a.y - b.y).abs()) == 1)
}
