//! dual-graph — one directed graph contract, two storage layouts.
//!
//! [`ListGraph`] keeps an ordered neighbor list per node; [`MatrixGraph`]
//! keeps a square 0/1 matrix. Both implement [`Adjacency`], over which
//! breadth-first and depth-first traversal are written once. The two
//! layouts break ties differently: list neighbors come out in insertion
//! order, matrix neighbors in ascending index order.
//!
//! ```
//! use dual_graph::{ListGraph, MatrixGraph};
//!
//! let mut list = ListGraph::new();
//! let mut matrix = MatrixGraph::new();
//! for label in ['A', 'B', 'C'] {
//!     list.add_node(label);
//!     matrix.add_node(label);
//! }
//! list.add_directed_edge(&'A', &'C').unwrap();
//! list.add_directed_edge(&'A', &'B').unwrap();
//! matrix.add_directed_edge(&'A', &'C').unwrap();
//! matrix.add_directed_edge(&'A', &'B').unwrap();
//!
//! assert_eq!(list.bfs(&'A').unwrap(), vec!['A', 'C', 'B']);
//! assert_eq!(matrix.bfs(&'A').unwrap(), vec!['A', 'B', 'C']);
//! assert!(list.bfs(&'Z').is_err());
//! ```

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs, dfs, dfs_with, reachable, Adjacency, Bfs, Dfs, DfsMode, GraphBuilder, ListGraph,
    ListNode, MatrixGraph, Visit,
};
pub use types::{Edge, EdgeKind, GraphError, GraphResult, Label};
