use log::debug;
use smallvec::SmallVec;

use crate::{
    bfs::bfs,
    coord::Coord,
    grid::Walkable,
    solver::{endpoints_walkable, GridSolver},
};

/// Breadth-first search. Ignores step costs and returns a path with the fewest steps.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl BfsSolver {
    fn walkable_neighbours<'a, W>(oracle: &'a W, node: Coord) -> impl Iterator<Item = Coord> + 'a
    where
        W: Walkable + ?Sized,
    {
        node.neumann_neighborhood()
            .into_iter()
            .filter(move |&p| oracle.is_walkable(p))
    }
}

impl GridSolver for BfsSolver {
    fn heuristic(&self, _: &Coord, _: &Coord) -> i32 {
        0
    }

    fn get_path_single_goal<W>(&self, oracle: &W, start: Coord, goal: Coord) -> Vec<Coord>
    where
        W: Walkable + ?Sized,
    {
        if !endpoints_walkable(oracle, &start, &goal) {
            return Vec::new();
        }
        debug!("Searching path from {:?} to {:?}", start, goal);
        bfs(
            &start,
            |node| Self::walkable_neighbours(oracle, *node),
            |point| *point == goal,
        )
        .unwrap_or_default()
    }

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
        let path = bfs(
            &start,
            |node| Self::walkable_neighbours(oracle, *node),
            |point| goals.contains(point),
        )?;
        let selected = *path.last()?;
        Some((selected, path))
    }
}
