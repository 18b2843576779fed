use super::{GraphNodeMap, NO_PARENT};

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
///
/// # Panics
/// If the parent chain leaves the map or is longer than the map itself.
/// Either means the map was corrupted, which no search can produce.
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Vec<N>
where 
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        // A chain visiting more slots than exist must contain a cycle
        assert!(
            path.len() < node_map.len(),
            "predecessor chain from slot {goal_index} does not reach the start",
        );
        let Some((node, &(parent_index, _))) = node_map.get_index(current_index) else {
            panic!("predecessor slot {current_index} missing from node map");
        };
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_reconstruction() {
        // Create a node map manually to test path building
        let mut node_map: GraphNodeMap<String, u32> = GraphNodeMap::default();

        let a_index = node_map.insert_full("A".to_string(), (NO_PARENT, 0)).0;
        let b_index = node_map.insert_full("B".to_string(), (a_index, 1)).0;
        let c_index = node_map.insert_full("C".to_string(), (a_index, 3)).0;
        let d_index = node_map.insert_full("D".to_string(), (c_index, 4)).0;

        // A -> C -> D
        assert_eq!(shortest_path(&node_map, d_index), vec!["A", "C", "D"]);
        // A -> B
        assert_eq!(shortest_path(&node_map, b_index), vec!["A", "B"]);
        // start is its own one element path
        assert_eq!(shortest_path(&node_map, a_index), vec!["A"]);
    }

    #[test]
    #[should_panic(expected = "does not reach the start")]
    fn test_cyclic_chain_is_fatal() {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();
        node_map.insert("A", (1, 0));
        node_map.insert("B", (0, 1));

        shortest_path(&node_map, 1);
    }

    #[test]
    #[should_panic(expected = "missing from node map")]
    fn test_dangling_parent_is_fatal() {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();
        node_map.insert("A", (NO_PARENT, 0));
        node_map.insert("B", (7, 1));

        shortest_path(&node_map, 1);
    }
}
