//! Shortest path search over caller-supplied graphs.
//!
//! A graph is anything implementing [`Graph`]: it owns the start and end
//! positions, enumerates neighbors, prices edges and estimates the remaining
//! cost to the goal. Two engines consume it:
//!
//! - [`a_star`] expands positions in order of `g + h` and returns the cheapest
//!   path when the heuristic is admissible.
//! - [`bfs`] expands positions in discovery order and returns a path with the
//!   fewest edges.
//!
//! Both return the path from start to goal inclusive, or
//! [`PathPlannerError::NoPathFound`] when the goal cannot be reached.
//!
//! [`GridGraph`] is a ready-made 4-connected grid with obstacles.

pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod grid;

pub use errors::{GridError, PathPlannerError};
pub use geometry::{GridPos, manhattan_distance};
pub use graph::{Graph, path_cost};
pub use graph_algos::{a_star::a_star, bfs::bfs};
pub use grid::GridGraph;
