pub mod a_star;
pub mod bfs;
mod frontier;
mod shortest_path;

use shortest_path::shortest_path;

use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known cost to reach this node from the start
/// The map is both the cost ledger and the predecessor map of a search
/// Slot indices are stable for the whole search since nothing is removed
pub type GraphNodeMap<N, C> = IndexMap<N, (usize, C), BuildHasherDefault<FxHasher>>;

/// Parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;
