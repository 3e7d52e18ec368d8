//! Adjacency-matrix graph — a square 0/1 grid behind a label <-> index bijection.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Edge, GraphError, GraphResult, Label};

use super::traversal::{self, Adjacency, DfsMode};

/// Directed graph stored as a square boolean matrix.
///
/// Indices are assigned sequentially on first insertion, so index order is
/// insertion order. `matrix[i][j]` is set when there is an edge `i -> j`.
/// The matrix dimension always equals the node count.
#[derive(Debug, Clone)]
pub struct MatrixGraph<L = char> {
    /// Row-major adjacency matrix.
    matrix: Vec<Vec<bool>>,
    /// Label -> index.
    label_to_index: BTreeMap<L, usize>,
    /// Index -> label. Inverse of `label_to_index`.
    index_to_label: Vec<L>,
}

impl<L: Label> MatrixGraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            matrix: Vec::new(),
            label_to_index: BTreeMap::new(),
            index_to_label: Vec::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.index_to_label.len()
    }

    /// Side length of the matrix. Always equal to [`node_count`](Self::node_count).
    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    /// Number of set cells.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.index_to_label.is_empty()
    }

    /// True when a node with this label exists.
    pub fn contains(&self, label: &L) -> bool {
        self.label_to_index.contains_key(label)
    }

    /// Index assigned to `label`.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    /// Label stored at `index`.
    pub fn label_at(&self, index: usize) -> Option<&L> {
        self.index_to_label.get(index)
    }

    /// Labels in index (insertion) order.
    pub fn labels(&self) -> &[L] {
        &self.index_to_label
    }

    /// The matrix row for `label`, or `None` if absent.
    pub fn row(&self, label: &L) -> Option<&[bool]> {
        let idx = self.index_of(label)?;
        self.matrix.get(idx).map(Vec::as_slice)
    }

    /// True when the edge `from -> to` exists.
    pub fn has_edge(&self, from: &L, to: &L) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.cell(i, j),
            _ => false,
        }
    }

    /// Add a node, growing the matrix by one zeroed row and column.
    ///
    /// Returns `false` and leaves the graph untouched if the label already exists.
    pub fn add_node(&mut self, label: L) -> bool {
        if self.label_to_index.contains_key(&label) {
            return false;
        }
        let idx = self.index_to_label.len();
        for row in &mut self.matrix {
            row.push(false);
        }
        self.matrix.push(vec![false; idx + 1]);
        log::debug!("matrix: added node '{}' at index {}", label, idx);
        self.label_to_index.insert(label.clone(), idx);
        self.index_to_label.push(label);
        true
    }

    /// Set the edge `from -> to`. Setting an existing edge again is a no-op.
    ///
    /// Fails with `UnknownNode` and leaves the graph unchanged if either
    /// endpoint is missing. There is no undirected variant.
    pub fn add_directed_edge(&mut self, from: &L, to: &L) -> GraphResult<()> {
        let lookup = |label: &L| {
            self.index_of(label).ok_or_else(|| {
                log::warn!("matrix: ignored edge {} -> {}: '{}' is not a node", from, to, label);
                GraphError::unknown(label)
            })
        };
        let (i, j) = (lookup(from)?, lookup(to)?);
        if let Some(cell) = self.matrix.get_mut(i).and_then(|row| row.get_mut(j)) {
            *cell = true;
        }
        log::debug!("matrix: added edge {} -> {}", from, to);
        Ok(())
    }

    /// All edges in row-major order.
    pub fn edges(&self) -> Vec<Edge<L>> {
        let mut edges = Vec::new();
        for (i, from) in self.index_to_label.iter().enumerate() {
            for j in self.neighbor_indices(i) {
                if let Some(to) = self.index_to_label.get(j) {
                    edges.push(Edge::new(from.clone(), to.clone()));
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

    /// Print the matrix to stdout with row and column headers in index order.
    pub fn print_graph(&self) {
        print!("{}", self);
    }

    fn cell(&self, i: usize, j: usize) -> bool {
        self.matrix
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }
}

impl<L: Label> Default for MatrixGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Adjacency for MatrixGraph<L> {
    type Label = L;

    fn node_count(&self) -> usize {
        self.index_to_label.len()
    }

    fn index_of(&self, label: &L) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    fn label_at(&self, index: usize) -> Option<&L> {
        self.index_to_label.get(index)
    }

    /// Scans the whole row; neighbors come out in ascending index order.
    fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter_map(|(j, &cell)| cell.then_some(j))
    }
}

impl<L: Label> fmt::Display for MatrixGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .index_to_label
            .iter()
            .map(|label| label.to_string().chars().count())
            .max()
            .unwrap_or(1);

        writeln!(f, "--- Graph structure (adjacency matrix) ---")?;
        write!(f, "{:width$} |", "")?;
        for label in &self.index_to_label {
            write!(f, " {:>width$}", label.to_string())?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat((width + 1) * (self.node_count() + 1) + 1))?;

        for (label, row) in self.index_to_label.iter().zip(&self.matrix) {
            write!(f, "{:width$} |", label.to_string())?;
            for &cell in row {
                write!(f, " {:>width$}", u8::from(cell))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "------------------------------------------")
    }
}
