//! Parent-map path reconstruction, shared by BFS and A*.

use std::collections::HashMap;

use wayfind_core::Point;

/// Rebuild the path ending at `end` from a parent (came-from) map.
///
/// Walks backward from `end`, appending each cell's recorded parent until a
/// cell without one (the start), then reverses into start→end order. DFS
/// builds its path forward while backtracking and does not go through here.
pub(crate) fn reconstruct(came_from: &HashMap<Point, Point>, end: Point) -> Vec<Point> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&parent) = came_from.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_and_reverses() {
        let mut came_from = HashMap::new();
        came_from.insert(Point::new(1, 0), Point::new(0, 0));
        came_from.insert(Point::new(2, 0), Point::new(1, 0));
        came_from.insert(Point::new(2, 1), Point::new(2, 0));
        let path = reconstruct(&came_from, Point::new(2, 1));
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn end_without_parent_is_a_single_cell_path() {
        let came_from = HashMap::new();
        assert_eq!(reconstruct(&came_from, Point::ZERO), vec![Point::ZERO]);
    }
}
