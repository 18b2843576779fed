use crate::errors::PathPlannerError;
use crate::graph::Graph;
use super::{shortest_path, GraphNodeMap, NO_PARENT};
use super::frontier::{Node, PriorityFrontier};

use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// From the graph's start, expand positions in order of cost + heuristic until
/// one passes the goal test. Returns the path from start to goal inclusive.
///
/// The path is the cheapest one when edge costs are non-negative and the
/// heuristic is admissible (never overestimates the remaining cost). An
/// inadmissible heuristic still yields a valid path, possibly a costlier one.
/// Entries with equal priority are expanded in discovery order, so repeated
/// searches over an unchanged graph return the same path.
pub fn a_star<G: Graph>(graph: &G) -> Result<Vec<G::Position>, PathPlannerError> {
    let start = graph.start();
    debug!("a_star: searching from {:?} to {:?}", start, graph.end());

    let (node_map, goal_index) = build_graph(graph, start);

    match goal_index {
        Some(goal_index) => {
            let path = shortest_path(&node_map, goal_index);
            debug!(
                "a_star: reached goal at cost {:?}, {} positions in path, {} discovered",
                node_map[goal_index].1, path.len(), node_map.len(),
            );
            Ok(path)
        }
        None => {
            debug!("a_star: frontier exhausted after discovering {} positions", node_map.len());
            Err(PathPlannerError::NoPathFound)
        }
    }
}


/// Traverses the graph using A* algorithm 
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_graph<G: Graph>(graph: &G, start: G::Position) -> (GraphNodeMap<G::Position, G::Cost>, Option<usize>) {

    // Open List
    // Nodes that need to be evaluated, sorted by f_cost (cost + heuristic)
    let mut open_list: PriorityFrontier<G::Cost> = PriorityFrontier::new();

    // Best known cost and parent for every node pushed so far
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the closed_list
    // for the start node, parent_index is set to NO_PARENT to indicate it has no parent
    let mut closed_list: GraphNodeMap<G::Position, G::Cost> = GraphNodeMap::default();

    let start_h = graph.heuristic(&start);
    let start_index = closed_list.insert_full(start, (NO_PARENT, Zero::zero())).0;
    open_list.push(start_index, Zero::zero(), start_h);

    let mut expanded = 0usize;

    while let Some(Node{index, cost, ..}) = open_list.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = closed_list.get_index(index) else {
            unreachable!("frontier entry for slot {index} outside the node map");
        };

        // A cheaper path to this node was found after this entry was pushed
        if c < cost {
            trace!("a_star: skipping stale entry for {:?} ({:?} > {:?})", node, cost, c);
            continue;
        }

        // Check if we've reached the goal
        if graph.is_end(node) {
            trace!("a_star: {} expansions, {} entries pushed", expanded, open_list.pushed());
            return (closed_list, Some(index));
        }

        let current = node.clone();
        expanded += 1;

        // loop over neighbors
        for neighbor in graph.neighbors(&current) {

            // new cost to reach this node = node cost + edge cost
            let new_cost = c + graph.cost(&current, &neighbor);

            let (neighbor_index, h_cost) = match closed_list.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let h_cost = graph.heuristic(e.key());
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    (neighbor_index, h_cost)
                }
                Occupied(mut e) => {
                    if new_cost >= e.get().1 {
                        // The existing path is as good or better, do nothing
                        continue;
                    }
                    trace!("a_star: cheaper path to {:?} ({:?} < {:?})", e.key(), new_cost, e.get().1);
                    let h_cost = graph.heuristic(e.key());
                    e.insert((index, new_cost));
                    (e.index(), h_cost)
                }
            };

            // Only add to the queue if we've found a better path
            open_list.push(neighbor_index, new_cost, new_cost + h_cost);
        }
    }

    trace!("a_star: {} expansions, {} entries left", expanded, open_list.len());
    (closed_list, None)
}
