//! A* search: cost-aware best-first expansion with a Manhattan heuristic.

use std::collections::{HashMap, HashSet};

use wayfind_core::Point;

use crate::SearchOutcome;
use crate::distance::manhattan;
use crate::path::reconstruct;
use crate::queue::PriorityQueue;
use crate::traits::Walkability;

/// Neighbor probe order: up, down, left, right.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Find a shortest path from `start` to `goal` using A* with the
/// [`manhattan`] heuristic.
///
/// Manhattan distance is admissible and consistent on a 4-directional grid
/// with unit step costs, so the first pop of `goal` yields a cost-optimal
/// path. As in [`crate::bfs`], only neighbors are validated for walkability;
/// a search may escape a blocked start cell.
pub fn search<W: Walkability>(terrain: &W, start: Point, goal: Point) -> SearchOutcome {
    search_with(terrain, start, goal, manhattan)
}

/// [`search`] with a caller-supplied heuristic.
///
/// The heuristic must be admissible (never overestimate the true remaining
/// cost) for the result to be shortest. With a heuristic that is zero
/// everywhere the expansion degenerates to uniform-cost order and matches
/// BFS cell for cell.
pub fn search_with<W, F>(terrain: &W, start: Point, goal: Point, heuristic: F) -> SearchOutcome
where
    W: Walkability,
    F: Fn(Point, Point) -> i32,
{
    let mut open: PriorityQueue<Point> = PriorityQueue::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut g_score: HashMap<Point, i32> = HashMap::new();
    let mut f_score: HashMap<Point, i32> = HashMap::new();
    let mut closed: HashSet<Point> = HashSet::new();
    let mut expanded = 0usize;

    g_score.insert(start, 0);
    f_score.insert(start, heuristic(start, goal));
    open.push(start, f_score[&start]);

    while let Some(current) = open.pop() {
        // A cell can sit in the open queue several times, once per g-score
        // improvement; any pop after the first is stale and must not
        // re-expand the cell.
        if closed.contains(&current) {
            continue;
        }
        expanded += 1;

        if current == goal {
            let path = reconstruct(&came_from, goal);
            log::debug!(
                "astar: found path {start}->{goal} len={} expanded={expanded}",
                path.len()
            );
            return SearchOutcome {
                path: Some(path),
                expanded,
            };
        }
        closed.insert(current);

        // Every queued cell has a recorded gScore.
        let current_g = g_score[&current];

        for dir in DIRS {
            let neighbor = current + dir;
            if !terrain.is_walkable(neighbor) || closed.contains(&neighbor) {
                continue;
            }
            let tentative_g = current_g + 1;
            if g_score.get(&neighbor).is_none_or(|&g| tentative_g < g) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                f_score.insert(neighbor, tentative_g + heuristic(neighbor, goal));
                // Pushed again rather than re-prioritized in place; the
                // closed-set check above swallows the stale entry.
                open.push(neighbor, f_score[&neighbor]);
            }
        }
    }

    log::debug!("astar: no path {start}->{goal} expanded={expanded}");
    SearchOutcome {
        path: None,
        expanded,
    }
}
