//! **wayfind-search** — path search engines for grid-based games.
//!
//! Three interchangeable strategies over a static occupancy grid, plus the
//! priority queue A* runs on:
//!
//! | Engine | Entry point | Guarantee |
//! |---|---|---|
//! | BFS | [`find_path_bfs`] / [`bfs::search`] | shortest path, no cost model |
//! | DFS | [`find_path_dfs`] / [`dfs::search`] | *a* path, minimal bookkeeping |
//! | A* | [`find_path_astar`] / [`astar::search`] | shortest path, cost-aware |
//!
//! The engines are independent implementations of one contract: walkability
//! oracle plus two coordinates in, `Option` of a start→goal inclusive path
//! out, where `None` is the ordinary "no path exists" answer, not an error.
//! The `search` entry points additionally report the number of cells
//! expanded during the call via [`SearchOutcome`], for diagnostics and
//! display only.
//!
//! Every engine is a plain function with call-local state, so a shared
//! `&Grid` can serve any number of concurrent searches.

pub mod astar;
pub mod bfs;
pub mod dfs;
mod distance;
mod path;
mod queue;
mod traits;

use wayfind_core::{Grid, Point};

pub use distance::manhattan;
pub use queue::PriorityQueue;
pub use traits::Walkability;

/// What one search call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// The path from start to goal inclusive, or `None` when the goal is
    /// unreachable. Never `Some` of an empty vector.
    pub path: Option<Vec<Point>>,
    /// Cells dequeued/entered during the call. Diagnostic only; not part of
    /// the correctness contract.
    pub expanded: usize,
}

/// Shortest path by breadth-first search, or `None` if no path exists.
pub fn find_path_bfs(grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
    bfs::search(grid, start, goal).path
}

/// First path found by depth-first backtracking, or `None` if no path
/// exists. Not guaranteed shortest.
pub fn find_path_dfs(grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
    dfs::search(grid, start, goal).path
}

/// Shortest path by A* with a Manhattan heuristic, or `None` if no path
/// exists.
pub fn find_path_astar(grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
    astar::search(grid, start, goal).path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};
    use wayfind_core::Cell;

    /// Independent reference distance: plain flood fill counting levels.
    fn reference_distance(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
        let mut dist = std::collections::HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(start, 0usize);
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            if p == goal {
                return Some(dist[&p]);
            }
            for d in [
                Point::new(1, 0),
                Point::new(-1, 0),
                Point::new(0, 1),
                Point::new(0, -1),
            ] {
                let n = p + d;
                if grid.is_walkable(n) && !dist.contains_key(&n) {
                    dist.insert(n, dist[&p] + 1);
                    queue.push_back(n);
                }
            }
        }
        None
    }

    fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, goal: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        let mut seen = HashSet::new();
        for &p in path {
            assert!(seen.insert(p), "repeated cell {p}");
        }
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1, "non-unit step {} -> {}", w[0], w[1]);
            assert!(grid.is_walkable(w[1]), "step onto non-walkable {}", w[1]);
        }
    }

    fn maze() -> Grid {
        Grid::from_rows(&[
            &[0, 0, 0, 1, 0, 0, 0],
            &[0, 1, 0, 1, 0, 1, 0],
            &[0, 1, 0, 0, 0, 1, 0],
            &[0, 1, 1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[1, 1, 1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn all_engines_agree_on_reachability() {
        let g = maze();
        let start = Point::new(0, 0);
        for goal in [Point::new(6, 6), Point::new(4, 2), Point::new(6, 0)] {
            let b = find_path_bfs(&g, start, goal);
            let d = find_path_dfs(&g, start, goal);
            let a = find_path_astar(&g, start, goal);
            assert_eq!(b.is_some(), d.is_some());
            assert_eq!(b.is_some(), a.is_some());
        }
    }

    #[test]
    fn bfs_matches_reference_distance() {
        let g = maze();
        let start = Point::new(0, 0);
        for y in 0..7 {
            for x in 0..7 {
                let goal = Point::new(x, y);
                if !g.is_walkable(goal) {
                    continue;
                }
                let reference = reference_distance(&g, start, goal);
                let path = find_path_bfs(&g, start, goal);
                match reference {
                    // Path length is distance plus one for the start cell.
                    Some(d) => assert_eq!(path.unwrap().len(), d + 1, "goal {goal}"),
                    None => assert_eq!(path, None, "goal {goal}"),
                }
            }
        }
    }

    #[test]
    fn astar_matches_bfs_length_everywhere() {
        let g = maze();
        let start = Point::new(0, 0);
        for y in 0..7 {
            for x in 0..7 {
                let goal = Point::new(x, y);
                let b = find_path_bfs(&g, start, goal);
                let a = find_path_astar(&g, start, goal);
                assert_eq!(
                    a.as_ref().map(Vec::len),
                    b.as_ref().map(Vec::len),
                    "goal {goal}"
                );
            }
        }
    }

    #[test]
    fn dfs_paths_are_valid_if_longer() {
        let g = maze();
        let start = Point::new(0, 0);
        let goal = Point::new(6, 6);
        let shortest = find_path_bfs(&g, start, goal).unwrap();
        let dfs_path = find_path_dfs(&g, start, goal).unwrap();
        assert_valid_path(&g, &dfs_path, start, goal);
        assert!(dfs_path.len() >= shortest.len());
    }

    #[test]
    fn separating_wall_yields_none_from_all_engines() {
        let g = Grid::from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[1, 1, 1, 1, 1],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ])
        .unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(4, 4);
        assert_eq!(find_path_bfs(&g, start, goal), None);
        assert_eq!(find_path_dfs(&g, start, goal), None);
        assert_eq!(find_path_astar(&g, start, goal), None);
    }

    #[test]
    fn searches_never_mutate_the_grid() {
        let mut g = maze();
        g.set(Point::new(6, 5), Cell::Blocked);
        let snapshot = g.clone();
        let start = Point::new(0, 0);
        let goal = Point::new(6, 6);
        let _ = find_path_bfs(&g, start, goal);
        let _ = find_path_dfs(&g, start, goal);
        let _ = find_path_astar(&g, start, goal);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn open_five_by_five_example() {
        let g = Grid::new(5, 5).unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(4, 4);
        assert_eq!(find_path_bfs(&g, start, goal).unwrap().len(), 9);
        assert_eq!(find_path_astar(&g, start, goal).unwrap().len(), 9);
        let dfs_path = find_path_dfs(&g, start, goal).unwrap();
        assert_valid_path(&g, &dfs_path, start, goal);
        assert!(dfs_path.len() >= 9);
    }

    #[test]
    fn engines_share_one_grid_across_threads() {
        let g = maze();
        let start = Point::new(0, 0);
        let goal = Point::new(6, 6);
        let expect = find_path_bfs(&g, start, goal);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(&find_path_bfs(&g, start, goal), &expect);
                    assert!(find_path_astar(&g, start, goal).is_some());
                });
            }
        });
    }
}
