//! # grid_route
//!
//! Shortest-path search on 4-connected grids, as needed by turn-based grid game agents that ask
//! every turn how to get from one cell to another. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic and
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) for unit-cost moves.
//!
//! Searches are decoupled from any map representation: walkability is supplied through the
//! [Walkable] trait, which every `Fn(Coord) -> bool` closure implements, and step costs through a
//! plain closure. A [Grid] of cell symbols is provided as the default walkability source. All
//! search state lives inside a single call, so a shared oracle can be searched from several
//! threads at once.
//!
//! ```
//! use grid_route::{astar, Coord, Grid};
//!
//! let grid = Grid::from_rows(&[".#.", ".#.", "..."]).unwrap();
//! let path = astar(Coord::new(0, 0), Coord::new(2, 0), &grid);
//! assert_eq!(path.len(), 7);
//! ```
mod astar;
mod bfs;
pub mod coord;
pub mod grid;
pub mod solver;

pub use crate::coord::{Coord, CARDINALS, DOWN, LEFT, RIGHT, UP};
pub use crate::grid::{Grid, GridError, Walkable, WALL};

use crate::solver::{astar::AstarSolver, bfs::BfsSolver, search_single_goal, GridSolver};

/// Cost of a cardinal step when no cost function is given.
pub const DEFAULT_EDGE_COST: i32 = 1;

/// Lowest-cost path from `start` to `goal` where every step costs [DEFAULT_EDGE_COST]. The path
/// includes both endpoints and is empty if either endpoint is not walkable or no route exists.
pub fn astar<W>(start: Coord, goal: Coord, oracle: &W) -> Vec<Coord>
where
    W: Walkable + ?Sized,
{
    AstarSolver::new().get_path_single_goal(oracle, start, goal)
}

/// Like [astar], with the cost of stepping between two adjacent cells given by `edge_cost`.
/// Costs have to be at least one for the Manhattan heuristic to stay admissible; with costs of
/// zero a path is still found but may not be the cheapest.
pub fn astar_with_cost<W, F>(start: Coord, goal: Coord, oracle: &W, edge_cost: F) -> Vec<Coord>
where
    W: Walkable + ?Sized,
    F: FnMut(&Coord, &Coord) -> i32,
{
    search_single_goal(oracle, start, goal, edge_cost, |point| {
        point.manhattan_distance(&goal)
    })
}

/// Path with the fewest steps from `start` to `goal`, including both endpoints. Empty if either
/// endpoint is not walkable or no route exists.
pub fn bfs<W>(start: Coord, goal: Coord, oracle: &W) -> Vec<Coord>
where
    W: Walkable + ?Sized,
{
    BfsSolver.get_path_single_goal(oracle, start, goal)
}

/// Total cost of following `path` under `edge_cost`. Zero for paths with fewer than two cells.
pub fn path_cost<F>(path: &[Coord], mut edge_cost: F) -> i32
where
    F: FnMut(&Coord, &Coord) -> i32,
{
    path.windows(2).map(|w| edge_cost(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walkability from ASCII rows, '#' being a wall and (0, 0) the top-left cell.
    fn map_predicate<'a>(rows: &'a [&'a str]) -> impl Fn(Coord) -> bool + 'a {
        move |pos: Coord| {
            pos.y >= 0
                && (pos.y as usize) < rows.len()
                && pos.x >= 0
                && (pos.x as usize) < rows[pos.y as usize].len()
                && rows[pos.y as usize].as_bytes()[pos.x as usize] != b'#'
        }
    }

    fn corridor() -> Vec<Coord> {
        (0..5).map(|x| Coord::new(x, 0)).collect()
    }

    #[test]
    fn open_corridor() {
        let map = ["....."];
        let oracle = map_predicate(&map);
        let start = Coord::new(0, 0);
        let goal = Coord::new(4, 0);
        assert_eq!(astar(start, goal, &oracle), corridor());
        assert_eq!(bfs(start, goal, &oracle), corridor());
    }

    #[test]
    fn path_around_obstacle() {
        let map = [".#.", ".#.", "..."];
        let oracle = map_predicate(&map);
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 0);
        for path in [astar(start, goal, &oracle), bfs(start, goal, &oracle)] {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            assert!(!path.contains(&Coord::new(1, 0)));
            assert!(!path.contains(&Coord::new(1, 1)));
            assert_eq!(path.len(), 7);
        }
    }

    #[test]
    fn no_path() {
        let map = ["..#.", "..#.", "..#."];
        let oracle = map_predicate(&map);
        let start = Coord::new(0, 0);
        let goal = Coord::new(3, 0);
        assert!(astar(start, goal, &oracle).is_empty());
        assert!(bfs(start, goal, &oracle).is_empty());
    }

    #[test]
    fn start_equals_goal() {
        let map = ["."];
        let oracle = map_predicate(&map);
        let start = Coord::new(0, 0);
        assert_eq!(astar(start, start, &oracle), vec![start]);
        assert_eq!(bfs(start, start, &oracle), vec![start]);
    }

    /// Even a zero-length query fails when the cell itself is blocked.
    #[test]
    fn blocked_endpoints() {
        let map = ["#..", "..#"];
        let oracle = map_predicate(&map);
        let wall = Coord::new(0, 0);
        let open = Coord::new(1, 0);
        assert!(astar(wall, wall, &oracle).is_empty());
        assert!(bfs(wall, wall, &oracle).is_empty());
        assert!(astar(wall, open, &oracle).is_empty());
        assert!(bfs(open, Coord::new(2, 1), &oracle).is_empty());
        assert!(astar(open, Coord::new(-1, 0), &oracle).is_empty());
    }

    /// Expensive cells are avoided when a cheaper detour exists.
    #[test]
    fn weighted_detour() {
        // Entering the centre cell costs 10, everything else 1.
        let grid = Grid::new(3, 3, b'.').unwrap();
        let cost = |_: &Coord, to: &Coord| if to.y == 1 && to.x == 1 { 10 } else { 1 };
        let start = Coord::new(0, 1);
        let goal = Coord::new(2, 1);
        let path = astar_with_cost(start, goal, &grid, cost);
        assert!(!path.contains(&Coord::new(1, 1)));
        assert_eq!(path_cost(&path, cost), 4);
        assert_eq!(path_cost(&astar(start, goal, &grid), |_, _| 1), 2);
    }

    #[test]
    fn repeated_searches_agree() {
        let grid = Grid::from_rows(&["......", ".##.#.", "......", "#.##..", "......"]).unwrap();
        let start = Coord::new(0, 0);
        let goal = Coord::new(5, 4);
        assert_eq!(astar(start, goal, &grid), astar(start, goal, &grid));
        assert_eq!(bfs(start, goal, &grid), bfs(start, goal, &grid));
    }

    /// Searches near the edges of the `i32` range neither wrap around nor panic.
    #[test]
    fn extreme_coordinates() {
        let row = |p: Coord| p.y == 0;
        let start = Coord::new(i32::MAX, 0);
        let goal = Coord::new(i32::MAX - 2, 0);
        let expected = vec![start, Coord::new(i32::MAX - 1, 0), goal];
        assert_eq!(astar(start, goal, &row), expected);
        assert_eq!(bfs(start, goal, &row), expected);

        let far_left = Coord::new(i32::MIN, 0);
        let far_right = Coord::new(i32::MAX, 0);
        let endpoints_only = |p: Coord| p == far_left || p == far_right;
        assert!(astar(far_left, far_right, &endpoints_only).is_empty());
        assert!(astar(far_right, far_left, &endpoints_only).is_empty());
        assert!(bfs(far_left, far_right, &endpoints_only).is_empty());
        let corner = Coord::new(i32::MIN, i32::MIN);
        assert_eq!(astar(corner, corner, &|_: Coord| true), vec![corner]);
    }

    #[test]
    fn path_cost_of_short_paths() {
        assert_eq!(path_cost(&[], |_, _| 5), 0);
        assert_eq!(path_cost(&[Coord::new(1, 1)], |_, _| 5), 0);
    }
}
