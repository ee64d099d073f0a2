use crate::astar::astar;
use crate::coord::Coord;
use crate::grid::Walkable;
use crate::DEFAULT_EDGE_COST;
use log::debug;
use smallvec::SmallVec;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

/// The walkable cardinal neighbours of `node`, each paired with the cost of stepping there.
pub(crate) fn neighborhood_points_and_cost<W, F>(
    oracle: &W,
    node: &Coord,
    mut cost: F,
) -> SmallVec<[(Coord, i32); 4]>
where
    W: Walkable + ?Sized,
    F: FnMut(&Coord, &Coord) -> i32,
{
    node.neumann_neighborhood()
        .into_iter()
        .filter(|&p| oracle.is_walkable(p))
        .map(|p| {
            let c = cost(node, &p);
            debug_assert!(c >= 0, "negative edge cost {c} from {node:?} to {p:?}");
            (p, c)
        })
        .collect()
}

/// Both endpoints have to be walkable for a search to start at all.
pub(crate) fn endpoints_walkable<W>(oracle: &W, start: &Coord, goal: &Coord) -> bool
where
    W: Walkable + ?Sized,
{
    if !oracle.is_walkable(*start) {
        debug!("Start {:?} is not walkable", start);
        false
    } else if !oracle.is_walkable(*goal) {
        debug!("Goal {:?} is not walkable", goal);
        false
    } else {
        true
    }
}

/// A* from `start` to `goal` with the given step cost and heuristic. Empty if either endpoint
/// is blocked or no route exists.
pub(crate) fn search_single_goal<W, FC, FH>(
    oracle: &W,
    start: Coord,
    goal: Coord,
    mut cost: FC,
    heuristic: FH,
) -> Vec<Coord>
where
    W: Walkable + ?Sized,
    FC: FnMut(&Coord, &Coord) -> i32,
    FH: FnMut(&Coord) -> i32,
{
    if !endpoints_walkable(oracle, &start, &goal) {
        return Vec::new();
    }
    debug!("Searching path from {:?} to {:?}", start, goal);
    astar(
        &start,
        |node| neighborhood_points_and_cost(oracle, node, &mut cost),
        heuristic,
        |point| *point == goal,
    )
    .map(|(v, _c)| v)
    .unwrap_or_default()
}

pub trait GridSolver {
    /// Estimate of the remaining cost from `p1` to `p2`. Must not overestimate the true cost for
    /// returned paths to be optimal.
    fn heuristic(&self, p1: &Coord, p2: &Coord) -> i32;

    /// Cost of a single cardinal step from `p1` to `p2`.
    fn cost(&self, _p1: &Coord, _p2: &Coord) -> i32 {
        DEFAULT_EDGE_COST
    }

    /// Sum of the step costs along a path.
    fn get_path_cost(&self, path: &[Coord]) -> i32 {
        path.windows(2).map(|w| self.cost(&w[0], &w[1])).sum()
    }

    /// Computes a path from `start` to `goal`, both included. The path is empty if either
    /// endpoint is not walkable or if the goal cannot be reached.
    fn get_path_single_goal<W>(&self, oracle: &W, start: Coord, goal: Coord) -> Vec<Coord>
    where
        W: Walkable + ?Sized,
    {
        search_single_goal(
            oracle,
            start,
            goal,
            |p1, p2| self.cost(p1, p2),
            |point| self.heuristic(point, &goal),
        )
    }

    /// Computes a path from the start to the nearest of the given goals and returns the selected
    /// goal in addition to the found path. Goals that are not walkable are ignored.
    fn get_path_multiple_goals<W>(
        &self,
        oracle: &W,
        start: Coord,
        goals: &[Coord],
    ) -> Option<(Coord, Vec<Coord>)>
    where
        W: Walkable + ?Sized,
    {
        let goals: SmallVec<[Coord; 8]> = goals
            .iter()
            .copied()
            .filter(|&g| oracle.is_walkable(g))
            .collect();
        if goals.is_empty() || !oracle.is_walkable(start) {
            debug!("No walkable goal or start for multi-goal search from {:?}", start);
            return None;
        }
        let (path, _cost) = astar(
            &start,
            |node| neighborhood_points_and_cost(oracle, node, |p1, p2| self.cost(p1, p2)),
            |point| {
                goals
                    .iter()
                    .map(|g| self.heuristic(point, g))
                    .min()
                    .unwrap_or(0)
            },
            |point| goals.contains(point),
        )?;
        let selected = *path.last()?;
        Some((selected, path))
    }
}
