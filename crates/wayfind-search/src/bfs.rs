//! Breadth-first search: guaranteed-shortest paths without a cost model.

use std::collections::{HashMap, HashSet, VecDeque};

use wayfind_core::Point;

use crate::SearchOutcome;
use crate::path::reconstruct;
use crate::traits::Walkability;

/// Neighbor probe order: down, up, left, right.
///
/// The order decides which of several equal-length shortest paths is
/// returned, never their length.
const DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Find a shortest path from `start` to `goal` by level-order expansion.
///
/// Because the frontier is a FIFO queue and every step costs one cell, cells
/// are dequeued in non-decreasing distance from `start`, so the first time
/// `goal` comes off the queue the reconstructed path has minimum cell count.
///
/// `start` is entered without a walkability check; only neighbors are
/// validated. A search may therefore escape a blocked start cell — an
/// observable quirk kept on purpose — while a blocked goal is simply never
/// reached.
pub fn search<W: Walkability>(terrain: &W, start: Point, goal: Point) -> SearchOutcome {
    let mut visited: HashSet<Point> = HashSet::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut frontier: VecDeque<Point> = VecDeque::new();
    let mut expanded = 0usize;

    visited.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        expanded += 1;

        if current == goal {
            let path = reconstruct(&came_from, goal);
            log::debug!(
                "bfs: found path {start}->{goal} len={} expanded={expanded}",
                path.len()
            );
            return SearchOutcome {
                path: Some(path),
                expanded,
            };
        }

        for dir in DIRS {
            let next = current + dir;
            if terrain.is_walkable(next) && !visited.contains(&next) {
                visited.insert(next);
                came_from.insert(next, current);
                frontier.push_back(next);
            }
        }
    }

    log::debug!("bfs: no path {start}->{goal} expanded={expanded}");
    SearchOutcome {
        path: None,
        expanded,
    }
}
