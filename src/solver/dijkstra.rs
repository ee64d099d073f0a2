use crate::{coord::Coord, solver::GridSolver};

/// Uniform-cost search: A* without a heuristic.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Coord, _: &Coord) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::solver::astar::AstarSolver;

    #[test]
    fn matches_astar_cost() {
        let grid = Grid::from_rows(&[
            ".....#....",
            ".###.#.##.",
            ".#...#..#.",
            ".#.###.##.",
            "..........",
        ])
        .unwrap();
        let start = Coord::new(0, 0);
        let goal = Coord::new(9, 0);
        let dijkstra = DijkstraSolver.get_path_single_goal(&grid, start, goal);
        let astar = AstarSolver::new().get_path_single_goal(&grid, start, goal);
        assert!(!dijkstra.is_empty());
        assert_eq!(
            DijkstraSolver.get_path_cost(&dijkstra),
            AstarSolver::new().get_path_cost(&astar)
        );
    }
}
