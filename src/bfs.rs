use crate::astar::{reverse_path, FxIndexMap, NO_PARENT};
use log::trace;
use std::collections::VecDeque;
use std::hash::Hash;

/// Breadth-first search from `start` to the first node satisfying `success`, returning the path
/// with the fewest edges including both endpoints. Every node is queued at most once and keeps
/// the first predecessor it was discovered from, so among equally short paths the one following
/// the successor enumeration order is returned.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), NO_PARENT);
    let mut to_see = VecDeque::from([0usize]);
    while let Some(index) = to_see.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                trace!("Goal dequeued after visiting {} nodes", parents.len());
                return Some(reverse_path(&parents, |&p| p, index));
            }
            successors(node)
        };
        for successor in successors {
            // Only the first discovery counts, which is along a shortest path.
            if parents.contains_key(&successor) {
                continue;
            }
            let (n, _) = parents.insert_full(successor, index);
            to_see.push_back(n);
        }
    }
    trace!("Frontier exhausted after visiting {} nodes", parents.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewest_edges() {
        // Two routes from 0 to 5: 0-1-2-3-4-5 and 0-6-5.
        let successors = |n: &u8| -> Vec<u8> {
            match n {
                0 => vec![1, 6],
                1 => vec![2],
                2 => vec![3],
                3 => vec![4],
                4 => vec![5],
                6 => vec![5],
                _ => vec![],
            }
        };
        assert_eq!(bfs(&0, successors, |n| *n == 5), Some(vec![0, 6, 5]));
    }

    /// Among equally short paths the first enumerated successor wins.
    #[test]
    fn ties_follow_enumeration_order() {
        let successors = |n: &u8| -> Vec<u8> {
            match n {
                0 => vec![2, 1],
                1 | 2 => vec![3],
                _ => vec![],
            }
        };
        assert_eq!(bfs(&0, successors, |n| *n == 3), Some(vec![0, 2, 3]));
    }

    #[test]
    fn start_is_goal() {
        assert_eq!(bfs(&7u8, |_| Vec::new(), |n| *n == 7), Some(vec![7]));
    }

    /// Cycles must neither loop forever nor produce a path.
    #[test]
    fn cycle_without_goal() {
        let successors = |n: &u8| vec![(n + 1) % 4];
        assert_eq!(bfs(&0, successors, |n| *n == 9), None);
    }
}
