//! Fluent API for building ListGraph and MatrixGraph instances.

use crate::types::{EdgeKind, GraphError, GraphResult, Label};

use super::{ListGraph, MatrixGraph};

/// Fluent builder that records nodes and edges, then replays them in call
/// order into either representation.
///
/// Replaying in call order matters: matrix indices follow node insertion
/// order and list neighbors follow edge insertion order.
#[derive(Debug, Clone)]
pub struct GraphBuilder<L = char> {
    nodes: Vec<L>,
    edges: Vec<(EdgeKind, L, L)>,
}

impl<L: Label> GraphBuilder<L> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node. Repeated labels are kept and become no-ops on build.
    pub fn node(&mut self, label: L) -> &mut Self {
        self.nodes.push(label);
        self
    }

    /// Add several nodes in order.
    pub fn nodes(&mut self, labels: impl IntoIterator<Item = L>) -> &mut Self {
        self.nodes.extend(labels);
        self
    }

    /// Add a directed edge `from -> to`.
    pub fn edge(&mut self, from: L, to: L) -> &mut Self {
        self.edges.push((EdgeKind::Directed, from, to));
        self
    }

    /// Add an undirected edge. Only buildable as a [`ListGraph`].
    pub fn undirected(&mut self, a: L, b: L) -> &mut Self {
        self.edges.push((EdgeKind::Undirected, a, b));
        self
    }

    /// Add an edge of the given kind.
    pub fn link(&mut self, kind: EdgeKind, from: L, to: L) -> &mut Self {
        self.edges.push((kind, from, to));
        self
    }

    /// Add the nodes in order and close them into a directed ring
    /// `l0 -> l1 -> ... -> ln -> l0`.
    pub fn cycle(&mut self, labels: impl IntoIterator<Item = L>) -> &mut Self {
        let ring: Vec<L> = labels.into_iter().collect();
        self.nodes.extend(ring.iter().cloned());
        for (i, from) in ring.iter().enumerate() {
            if let Some(to) = ring.get((i + 1) % ring.len()) {
                self.edges.push((EdgeKind::Directed, from.clone(), to.clone()));
            }
        }
        self
    }

    /// Build an adjacency-list graph.
    pub fn build_list(&self) -> GraphResult<ListGraph<L>> {
        let mut graph = ListGraph::new();
        for label in &self.nodes {
            graph.add_node(label.clone());
        }
        for (kind, from, to) in &self.edges {
            match kind {
                EdgeKind::Directed => graph.add_directed_edge(from, to)?,
                EdgeKind::Undirected => graph.add_undirected_edge(from, to)?,
            }
        }
        Ok(graph)
    }

    /// Build an adjacency-matrix graph.
    ///
    /// Fails with `Unsupported` if any undirected edge was recorded.
    pub fn build_matrix(&self) -> GraphResult<MatrixGraph<L>> {
        if self.edges.iter().any(|(kind, _, _)| *kind == EdgeKind::Undirected) {
            return Err(GraphError::Unsupported {
                operation: "undirected edge",
                representation: "matrix",
            });
        }

        let mut graph = MatrixGraph::new();
        for label in &self.nodes {
            graph.add_node(label.clone());
        }
        for (_, from, to) in &self.edges {
            graph.add_directed_edge(from, to)?;
        }
        Ok(graph)
    }
}

impl<L: Label> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
