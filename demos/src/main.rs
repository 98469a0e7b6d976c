//! Runs all three search engines over a fixed maze and a random one,
//! printing each path overlaid on the grid together with the number of
//! cells the engine expanded.

use rand::RngExt;

use wayfind_core::{Cell, Grid, Point};
use wayfind_search::{SearchOutcome, astar, bfs, dfs};

/// The classic 15×15 demo maze (0 = walkable, 1 = blocked).
const MAZE_ROWS: [[u8; 15]; 15] = [
    [0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0],
    [1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0],
    [0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
];

fn fixed_maze() -> Grid {
    let rows: Vec<&[u8]> = MAZE_ROWS.iter().map(|r| r.as_slice()).collect();
    Grid::from_rows(&rows).expect("static maze data is rectangular")
}

/// Scatter random walls until the corners stay connected.
fn random_maze(width: i32, height: i32) -> Grid {
    let mut rng = rand::rng();
    let start = Point::ZERO;
    let goal = Point::new(width - 1, height - 1);
    loop {
        let mut grid = Grid::new(width, height).expect("positive demo dimensions");
        for y in 0..height {
            for x in 0..width {
                let p = Point::new(x, y);
                if p != start && p != goal && rng.random_bool(0.3) {
                    grid.set(p, Cell::Blocked);
                }
            }
        }
        if bfs::search(&grid, start, goal).path.is_some() {
            return grid;
        }
    }
}

/// Render the grid with the path overlaid: `S`/`G` endpoints, `*` path
/// cells, `.` walkable, `#` blocked.
fn render(grid: &Grid, path: &[Point], start: Point, goal: Point) -> String {
    let on_path: std::collections::HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let c = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if on_path.contains(&p) {
                '*'
            } else if grid.is_walkable(p) {
                '.'
            } else {
                '#'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn report(name: &str, grid: &Grid, outcome: &SearchOutcome, start: Point, goal: Point) {
    match &outcome.path {
        Some(path) => {
            println!(
                "{name}: {} cells, {} expanded",
                path.len(),
                outcome.expanded
            );
            println!("{}", render(grid, path, start, goal));
        }
        None => println!("{name}: no path ({} expanded)\n", outcome.expanded),
    }
}

fn run_all(title: &str, grid: &Grid, start: Point, goal: Point) {
    println!("=== {title} ({}x{}) ===", grid.width(), grid.height());
    report("bfs", grid, &bfs::search(grid, start, goal), start, goal);
    report("dfs", grid, &dfs::search(grid, start, goal), start, goal);
    report("astar", grid, &astar::search(grid, start, goal), start, goal);
}

fn main() {
    let start = Point::ZERO;
    let goal = Point::new(14, 14);

    run_all("fixed maze", &fixed_maze(), start, goal);
    run_all("random maze", &random_maze(15, 15), start, goal);
}
