use crate::errors::PathPlannerError;
use crate::graph::Graph;
use super::{shortest_path, GraphNodeMap, NO_PARENT};
use super::frontier::FifoFrontier;

use indexmap::map::Entry::Vacant;
use log::{debug, trace};


/// Breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
///
/// Expands positions in the order they were discovered and ignores edge costs
/// and the heuristic. Returns a path with the fewest edges, which is also the
/// cheapest path only when every edge costs the same.
pub fn bfs<G: Graph>(graph: &G) -> Result<Vec<G::Position>, PathPlannerError> {
    let start = graph.start();
    debug!("bfs: searching from {:?} to {:?}", start, graph.end());

    let (node_map, goal_index) = build_graph(graph, start);

    if let Some(goal_index) = goal_index {
        let path = shortest_path(&node_map, goal_index);
        debug!("bfs: reached goal in {} steps, {} discovered", node_map[goal_index].1, node_map.len());
        Ok(path)
    } else {
        debug!("bfs: queue exhausted after discovering {} positions", node_map.len());
        Err(PathPlannerError::NoPathFound)
    }
}


/// Traverses the graph breadth first
/// Each node is recorded once, on first discovery, with its edge count from the start
/// Returns the node map along with the index of the goal node
fn build_graph<G: Graph>(graph: &G, start: G::Position) -> (GraphNodeMap<G::Position, usize>, Option<usize>) {

    let mut queue = FifoFrontier::new();
    let mut node_map: GraphNodeMap<G::Position, usize> = GraphNodeMap::default();

    let start_index = node_map.insert_full(start, (NO_PARENT, 0)).0;
    queue.push(start_index);

    while let Some(index) = queue.pop() {

        let Some((node, &(_, depth))) = node_map.get_index(index) else {
            unreachable!("queued slot {index} outside the node map");
        };

        if graph.is_end(node) {
            trace!("bfs: goal found with {} positions still queued", queue.len());
            return (node_map, Some(index));
        }

        let current = node.clone();

        for neighbor in graph.neighbors(&current) {
            // first discovery wins, later ones are never shorter
            if let Vacant(e) = node_map.entry(neighbor) {
                queue.push(e.index());
                e.insert((index, depth + 1));
            }
        }
    }

    (node_map, None)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::path_cost;
    use crate::graph::fixtures::{MapGraph, labels, random_graph};
    use crate::graph_algos::a_star::a_star;
    use test_log::test;

    #[test]
    fn test_bfs_prefers_fewest_edges() {
        // A -> B -> D is expensive but short, A -> C -> E -> D is cheap but long
        let graph = MapGraph::new(
            &[("A", "B", 10), ("B", "D", 10), ("A", "C", 1), ("C", "E", 1), ("E", "D", 1)],
            "A", "D",
        );

        assert_eq!(bfs(&graph).unwrap(), labels(&["A", "B", "D"]));
        assert_eq!(a_star(&graph).unwrap(), labels(&["A", "C", "E", "D"]));
    }

    #[test]
    fn test_bfs_records_first_discovery_only() {
        // D is discovered from B first; the later, cheaper edge from C is ignored
        let graph = MapGraph::new(
            &[("A", "B", 1), ("A", "C", 1), ("B", "D", 50), ("C", "D", 1), ("D", "E", 1)],
            "A", "E",
        );

        let (node_map, goal_index) = build_graph(&graph, graph.start());
        let (b_index, _, _) = node_map.get_full("B").unwrap();

        assert_eq!(node_map["D"], (b_index, 2));
        assert_eq!(node_map["E"].1, 3);
        assert_eq!(node_map.get_index(goal_index.unwrap()).unwrap().0, "E");
        assert_eq!(bfs(&graph).unwrap(), labels(&["A", "B", "D", "E"]));
    }

    #[test]
    fn test_bfs_with_cycle() {
        let graph = MapGraph::undirected(
            &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1), ("C", "D", 1)],
            "A", "D",
        );

        assert_eq!(bfs(&graph).unwrap(), labels(&["A", "C", "D"]));
    }

    #[test]
    fn test_bfs_handles_unreachable_goal() {
        let graph = MapGraph::new(&[("A", "B", 1), ("B", "A", 1), ("D", "A", 1)], "A", "D");

        assert_eq!(bfs(&graph), Err(PathPlannerError::NoPathFound));
    }

    #[test]
    fn test_bfs_start_is_goal() {
        let graph = MapGraph::new(&[("A", "B", 1)], "A", "A");

        assert_eq!(bfs(&graph).unwrap(), labels(&["A"]));
    }

    #[test]
    fn test_bfs_agrees_with_a_star_on_existence() {
        for seed in 0..200 {
            let graph = random_graph(seed, 10, 0.15, 5);

            let a_star_path = a_star(&graph);
            let bfs_path = bfs(&graph);

            assert_eq!(a_star_path.is_ok(), bfs_path.is_ok(), "seed {seed}");
            if let Ok(path) = bfs_path {
                assert_eq!(path.first(), Some(&graph.start()));
                assert!(graph.is_end(path.last().unwrap()));
                for pair in path.windows(2) {
                    assert!(graph.neighbors(&pair[0]).into_iter().any(|n| n == pair[1]), "seed {seed}");
                }
            }
        }
    }

    #[test]
    fn test_bfs_matches_a_star_length_under_uniform_costs() {
        for seed in 0..200 {
            let mut graph = random_graph(seed, 10, 0.2, 0);
            for targets in graph.edges.values_mut() {
                for (_, cost) in targets.iter_mut() {
                    *cost = 1;
                }
            }

            match (a_star(&graph), bfs(&graph)) {
                (Ok(a), Ok(b)) => {
                    assert_eq!(a.len(), b.len(), "seed {seed}");
                    assert_eq!(path_cost(&graph, &a), path_cost(&graph, &b), "seed {seed}");
                }
                (Err(_), Err(_)) => {}
                (a, b) => panic!("seed {seed}: a_star {a:?}, bfs {b:?}"),
            }
        }
    }
}
