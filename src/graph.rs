//! The capability set a state space exposes to the search engines.

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// A searchable state space.
///
/// The engines only read from a graph: `start` is read once on entry, while
/// `is_end`, `neighbors`, `cost` and `heuristic` are called as positions are
/// expanded. Start and end may be changed between searches, never during one.
///
/// Requirements the engines rely on but do not check:
/// 1. `neighbors` is finite and yields only traversable positions
/// 2. `cost` is never negative
/// 3. `heuristic` never overestimates the remaining cost (admissible),
///    otherwise A* may return a more expensive path than the cheapest one
pub trait Graph {
    /// Opaque state identifier, used as a hash map key
    type Position: Eq + Hash + Clone + Debug;
    /// Edge cost and heuristic estimate
    type Cost: Zero + Ord + Copy + Debug;

    fn start(&self) -> Self::Position;

    fn set_start(&mut self, position: Self::Position);

    fn end(&self) -> Self::Position;

    fn set_end(&mut self, position: Self::Position);

    /// Goal test, must agree with `end`
    fn is_end(&self, position: &Self::Position) -> bool {
        *position == self.end()
    }

    /// Traversable successors of `position`; empty for a dead end
    fn neighbors(&self, position: &Self::Position) -> impl IntoIterator<Item = Self::Position>;

    /// Cost of the edge between two adjacent positions
    fn cost(&self, from: &Self::Position, to: &Self::Position) -> Self::Cost;

    /// Estimated cost from `position` to the goal
    fn heuristic(&self, position: &Self::Position) -> Self::Cost;
}


/// Total edge cost along a path, zero for paths shorter than two positions
pub fn path_cost<G: Graph>(graph: &G, path: &[G::Position]) -> G::Cost {
    path.windows(2)
        .fold(G::Cost::zero(), |total, pair| total + graph.cost(&pair[0], &pair[1]))
}




#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::{MapGraph, labels};

    #[test]
    fn test_path_cost() {
        let graph = MapGraph::new(&[("A", "B", 2), ("B", "C", 5), ("A", "C", 9)], "A", "C");
        assert_eq!(path_cost(&graph, &labels(&["A", "B", "C"])), 7);
        assert_eq!(path_cost(&graph, &labels(&["A", "C"])), 9);
        assert_eq!(path_cost(&graph, &labels(&["A"])), 0);
        assert_eq!(path_cost(&graph, &[]), 0);
    }

    #[test]
    fn test_default_goal_test_follows_end() {
        let mut graph = MapGraph::new(&[("A", "B", 1)], "A", "B");
        assert!(graph.is_end(&"B".to_string()));
        graph.set_end("A".to_string());
        assert!(graph.is_end(&"A".to_string()));
        assert!(!graph.is_end(&"B".to_string()));
        graph.set_start("B".to_string());
        assert_eq!(graph.start(), "B");
    }
}
