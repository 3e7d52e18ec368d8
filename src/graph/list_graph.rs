//! Adjacency-list graph — an arena of nodes with index-based neighbor links.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Edge, GraphError, GraphResult, Label};

use super::traversal::{self, Adjacency, DfsMode};

/// A node of a [`ListGraph`]: its label and ordered out-neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode<L> {
    label: L,
    /// Arena indices of out-neighbors, in insertion order. Duplicates are kept.
    neighbors: Vec<usize>,
}

impl<L> ListNode<L> {
    fn new(label: L) -> Self {
        Self {
            label,
            neighbors: Vec::new(),
        }
    }

    /// The node's label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Arena indices of out-neighbors, in insertion order.
    pub fn neighbor_indices(&self) -> &[usize] {
        &self.neighbors
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Directed graph stored as adjacency lists.
///
/// The node arena is the sole owner of every node. Neighbor links are arena
/// indices resolved at traversal time, so cycles need no shared ownership.
/// Nodes and edges are append-only.
#[derive(Debug, Clone)]
pub struct ListGraph<L = char> {
    /// All nodes, in insertion order.
    nodes: Vec<ListNode<L>>,
    /// Label -> arena index. Iteration order is label-sorted.
    index: BTreeMap<L, usize>,
    /// Number of directed edges (an undirected edge counts twice).
    edge_count: usize,
}

impl<L: Label> ListGraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when a node with this label exists.
    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    /// Get a node by label.
    pub fn node(&self, label: &L) -> Option<&ListNode<L>> {
        self.index.get(label).and_then(|&idx| self.nodes.get(idx))
    }

    /// Add a node with no neighbors.
    ///
    /// Returns `false` and leaves the graph untouched if the label already exists.
    pub fn add_node(&mut self, label: L) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        let idx = self.nodes.len();
        log::debug!("list: added node '{}' at index {}", label, idx);
        self.index.insert(label.clone(), idx);
        self.nodes.push(ListNode::new(label));
        true
    }

    /// Add a directed edge `from -> to` between two existing nodes.
    ///
    /// Fails with `UnknownNode` and leaves the graph unchanged if either
    /// endpoint is missing.
    pub fn add_directed_edge(&mut self, from: &L, to: &L) -> GraphResult<()> {
        let (from_idx, to_idx) = self.endpoints(from, to)?;
        self.link(from_idx, to_idx);
        log::debug!("list: added edge {} -> {}", from, to);
        Ok(())
    }

    /// Add `a -> b` and `b -> a`. Either both are added or neither is.
    pub fn add_undirected_edge(&mut self, a: &L, b: &L) -> GraphResult<()> {
        let (a_idx, b_idx) = self.endpoints(a, b)?;
        self.link(a_idx, b_idx);
        self.link(b_idx, a_idx);
        log::debug!("list: added edge {} <-> {}", a, b);
        Ok(())
    }

    /// Out-neighbors of `label` in insertion order, or `None` if absent.
    pub fn neighbors<'a>(&'a self, label: &L) -> Option<impl Iterator<Item = &'a L> + 'a> {
        let node = self.node(label)?;
        Some(
            node.neighbors
                .iter()
                .filter_map(move |&idx| self.nodes.get(idx).map(ListNode::label)),
        )
    }

    /// All labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.index.keys()
    }

    /// All directed edges, grouped by source label (sorted) in stored order.
    pub fn edges(&self) -> Vec<Edge<L>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (label, &idx) in &self.index {
            for neighbor in self.neighbor_indices(idx) {
                if let Some(target) = self.label_at(neighbor) {
                    edges.push(Edge::new(label.clone(), target.clone()));
                }
            }
        }
        edges
    }

    /// Breadth-first visitation order from `start`.
    pub fn bfs(&self, start: &L) -> GraphResult<Vec<L>> {
        traversal::bfs(self, start)
    }

    /// Depth-first visitation order from `start` (explicit stack).
    pub fn dfs(&self, start: &L) -> GraphResult<Vec<L>> {
        traversal::dfs(self, start)
    }

    /// Depth-first visitation order from `start` using the given mode.
    pub fn dfs_with(&self, start: &L, mode: DfsMode) -> GraphResult<Vec<L>> {
        traversal::dfs_with(self, start, mode)
    }

    /// Print the structure to stdout, one node per line in label order.
    pub fn print_graph(&self) {
        print!("{}", self);
    }

    fn endpoints(&self, from: &L, to: &L) -> GraphResult<(usize, usize)> {
        let lookup = |label: &L| {
            self.index.get(label).copied().ok_or_else(|| {
                log::warn!("list: ignored edge {} -> {}: '{}' is not a node", from, to, label);
                GraphError::unknown(label)
            })
        };
        Ok((lookup(from)?, lookup(to)?))
    }

    fn link(&mut self, from: usize, to: usize) {
        if let Some(node) = self.nodes.get_mut(from) {
            node.neighbors.push(to);
            self.edge_count += 1;
        }
    }
}

impl<L: Label> Default for ListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Adjacency for ListGraph<L> {
    type Label = L;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    fn label_at(&self, index: usize) -> Option<&L> {
        self.nodes.get(index).map(ListNode::label)
    }

    fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .get(index)
            .map(|node| node.neighbors.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }
}

impl<L: Label> fmt::Display for ListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Graph structure (adjacency list) ---")?;
        for (label, &idx) in &self.index {
            write!(f, "Node {} ->", label)?;
            for neighbor in self.neighbor_indices(idx) {
                if let Some(target) = self.label_at(neighbor) {
                    write!(f, " {}", target)?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "----------------------------------------")
    }
}
