use crate::{coord::Coord, solver::GridSolver};

/// A* with the Manhattan distance as heuristic, which is admissible and consistent for cardinal
/// moves costing at least one.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplies the heuristic. Values above 1.0 expand fewer cells but may return a path that
    /// is more expensive than the optimum.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    /// Just the Manhattan distance times the heuristic factor.
    fn heuristic(&self, p1: &Coord, p2: &Coord) -> i32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as i32
    }
}
