//! The work queue of the search: a binary heap for ordering combined with an index map that
//! keeps at most one candidate per location.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A candidate location to expand next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierEntry {
    pub priority: f64,
    pub location: Point,
    pub origin: Point,
    pub steps_from_origin: usize,
}

/// Heap key for a queued location. The priority is fixed when the location is first queued.
struct SmallestPriorityHolder {
    priority: f64,
    sequence: u64,
    location: Point,
}

impl Eq for SmallestPriorityHolder {}

impl PartialEq for SmallestPriorityHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestPriorityHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestPriorityHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest priority first, then the earliest queued
        match other.priority.total_cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority queue over [FrontierEntry] that deduplicates on location.
#[derive(Default)]
pub struct Frontier {
    to_see: BinaryHeap<SmallestPriorityHolder>,
    entries: FxIndexMap<Point, FrontierEntry>,
    sequence: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Queues `entry`. If its location is already queued, the stored entry is replaced only when
    /// it took strictly more steps from the origin, whatever the two priorities are. A replaced
    /// entry keeps its place in the queue, so it is still ordered by the priority it was first
    /// queued with. Returns whether the frontier changed.
    pub fn add(&mut self, entry: FrontierEntry) -> bool {
        match self.entries.entry(entry.location) {
            Vacant(e) => {
                self.to_see.push(SmallestPriorityHolder {
                    priority: entry.priority,
                    sequence: self.sequence,
                    location: entry.location,
                });
                self.sequence += 1;
                e.insert(entry);
                true
            }
            Occupied(mut e) => {
                if e.get().steps_from_origin > entry.steps_from_origin {
                    e.insert(entry);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Removes and returns the entry queued with the lowest priority.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        let SmallestPriorityHolder { location, .. } = self.to_see.pop()?;
        self.entries.swap_remove(&location)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn contains(&self, location: &Point) -> bool {
        self.entries.contains_key(location)
    }
    pub fn get(&self, location: &Point) -> Option<&FrontierEntry> {
        self.entries.get(location)
    }
}
