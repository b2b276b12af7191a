//! Distance estimates used to rank frontier candidates. Any `Fn(Point, Point) -> f64` closure is
//! a [Heuristic], so callers can inject their own.
use grid_util::point::Point;

/// Estimates the remaining distance from a location to the goal. Estimates must be non-negative.
pub trait Heuristic {
    fn estimate(&self, location: Point, goal: Point) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> f64,
{
    fn estimate(&self, location: Point, goal: Point) -> f64 {
        self(location, goal)
    }
}

/// Straight-line distance. Overestimates on an 8-connected uniform-cost grid, so `a*` runs using
/// it are not guaranteed to be shortest.
pub fn bird_distance(location: Point, goal: Point) -> f64 {
    let dx = (location.x - goal.x) as f64;
    let dy = (location.y - goal.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance), the exact step count
/// on an empty grid with diagonal moves.
pub fn chebyshev_distance(location: Point, goal: Point) -> f64 {
    (location.x - goal.x).abs().max((location.y - goal.y).abs()) as f64
}

pub fn manhattan_distance(location: Point, goal: Point) -> f64 {
    ((location.x - goal.x).abs() + (location.y - goal.y).abs()) as f64
}

/// Scales another heuristic by a constant factor, trading optimality for fewer expansions when
/// the factor exceeds one.
#[derive(Clone, Debug)]
pub struct Weighted<H> {
    pub heuristic: H,
    pub factor: f64,
}

impl<H: Heuristic> Weighted<H> {
    pub fn new(heuristic: H, factor: f64) -> Weighted<H> {
        debug_assert!(factor >= 0.0);
        Weighted { heuristic, factor }
    }
}

impl<H: Heuristic> Heuristic for Weighted<H> {
    fn estimate(&self, location: Point, goal: Point) -> f64 {
        self.heuristic.estimate(location, goal) * self.factor
    }
}
