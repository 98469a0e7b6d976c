//! Depth-first search: the first path found, with backtracking.

use std::collections::HashSet;

use wayfind_core::Point;

use crate::SearchOutcome;
use crate::traits::Walkability;

/// Neighbor probe order: up, down, left, right.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// One exploration frame: a cell on the current trail and the next
/// direction to try from it.
struct Frame {
    pos: Point,
    next_dir: usize,
}

/// Find *a* path from `start` to `goal` by first-match backtracking.
///
/// Each cell is entered at most once (the visited set only grows, also
/// across backtracks), directions are tried in the fixed [`DIRS`] order, and
/// the first branch that reaches the goal wins unconditionally — no
/// path-length comparison happens. The result is a valid path whose exact
/// shape is fully determined by the probe order and the grid, but it is not
/// necessarily shortest.
///
/// The backtracker runs on an explicit frame stack rather than the call
/// stack, so grid size never meets a recursion-depth limit. Unlike BFS and
/// A*, the entry test applies to `start` itself: a blocked or out-of-bounds
/// start is an immediate dead end.
pub fn search<W: Walkability>(terrain: &W, start: Point, goal: Point) -> SearchOutcome {
    let mut visited: HashSet<Point> = HashSet::new();
    let mut expanded = 0usize;

    // Entry test for the root, identical to the one every child gets below.
    if !terrain.is_walkable(start) {
        log::debug!("dfs: start {start} is not enterable");
        return SearchOutcome {
            path: None,
            expanded,
        };
    }
    visited.insert(start);
    expanded += 1;

    // The frame chain is the path: cells are pushed when entered and popped
    // when all four directions are exhausted.
    let mut trail = vec![start];
    if start == goal {
        return SearchOutcome {
            path: Some(trail),
            expanded,
        };
    }
    let mut stack = vec![Frame {
        pos: start,
        next_dir: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next_dir == DIRS.len() {
            // Dead end: undo this step and resume the parent at its next
            // sibling direction.
            stack.pop();
            trail.pop();
            continue;
        }
        let next = frame.pos + DIRS[frame.next_dir];
        frame.next_dir += 1;

        if !terrain.is_walkable(next) || visited.contains(&next) {
            continue;
        }
        visited.insert(next);
        expanded += 1;
        trail.push(next);

        if next == goal {
            log::debug!(
                "dfs: found path {start}->{goal} len={} expanded={expanded}",
                trail.len()
            );
            return SearchOutcome {
                path: Some(trail),
                expanded,
            };
        }
        stack.push(Frame {
            pos: next,
            next_dir: 0,
        });
    }

    log::debug!("dfs: no path {start}->{goal} expanded={expanded}");
    SearchOutcome {
        path: None,
        expanded,
    }
}
