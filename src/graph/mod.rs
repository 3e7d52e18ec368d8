//! The two graph representations and the traversal code they share.

pub mod builder;
pub mod list_graph;
pub mod matrix_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use list_graph::{ListGraph, ListNode};
pub use matrix_graph::MatrixGraph;
pub use traversal::{bfs, dfs, dfs_with, reachable, Adjacency, Bfs, Dfs, DfsMode, Visit};
