//! A graph of either representation, driven uniformly by the CLI.

use crate::graph::{traversal, DfsMode, ListGraph, MatrixGraph};
use crate::types::{Edge, EdgeKind, GraphError, GraphResult, Label};

/// Which storage layout to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// [`ListGraph`]
    List,
    /// [`MatrixGraph`]
    Matrix,
}

impl Representation {
    /// Return a human-readable name for this representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        }
    }

    /// Parse a representation from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list" | "adjacency-list" => Some(Self::List),
            "matrix" | "adjacency-matrix" => Some(Self::Matrix),
            _ => None,
        }
    }
}

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Breadth-first.
    Bfs,
    /// Depth-first.
    Dfs,
}

impl Order {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Parse an order name; `both` expands to BFS then DFS.
    pub fn parse_many(name: &str) -> Option<Vec<Self>> {
        match name.to_lowercase().as_str() {
            "bfs" => Some(vec![Self::Bfs]),
            "dfs" => Some(vec![Self::Dfs]),
            "both" => Some(vec![Self::Bfs, Self::Dfs]),
            _ => None,
        }
    }
}

/// One graph of either representation.
#[derive(Debug, Clone)]
pub enum Session<L: Label> {
    List(ListGraph<L>),
    Matrix(MatrixGraph<L>),
}

impl<L: Label> Session<L> {
    /// Create an empty graph of the given representation.
    pub fn new(repr: Representation) -> Self {
        match repr {
            Representation::List => Self::List(ListGraph::new()),
            Representation::Matrix => Self::Matrix(MatrixGraph::new()),
        }
    }

    /// The representation backing this session.
    pub fn representation(&self) -> Representation {
        match self {
            Self::List(_) => Representation::List,
            Self::Matrix(_) => Representation::Matrix,
        }
    }

    /// Add a node; `false` if it already existed.
    pub fn add_node(&mut self, label: L) -> bool {
        match self {
            Self::List(g) => g.add_node(label),
            Self::Matrix(g) => g.add_node(label),
        }
    }

    /// Add an edge of the given kind.
    pub fn add_edge(&mut self, kind: EdgeKind, from: &L, to: &L) -> GraphResult<()> {
        match (self, kind) {
            (Self::List(g), EdgeKind::Directed) => g.add_directed_edge(from, to),
            (Self::List(g), EdgeKind::Undirected) => g.add_undirected_edge(from, to),
            (Self::Matrix(g), EdgeKind::Directed) => g.add_directed_edge(from, to),
            (Self::Matrix(_), EdgeKind::Undirected) => Err(GraphError::Unsupported {
                operation: "undirected edge",
                representation: "matrix",
            }),
        }
    }

    /// Run a traversal from `start`.
    pub fn traverse(&self, order: Order, start: &L, mode: DfsMode) -> GraphResult<Vec<L>> {
        match (self, order) {
            (Self::List(g), Order::Bfs) => traversal::bfs(g, start),
            (Self::List(g), Order::Dfs) => traversal::dfs_with(g, start, mode),
            (Self::Matrix(g), Order::Bfs) => traversal::bfs(g, start),
            (Self::Matrix(g), Order::Dfs) => traversal::dfs_with(g, start, mode),
        }
    }

    /// Labels in the representation's natural order.
    pub fn labels(&self) -> Vec<L> {
        match self {
            Self::List(g) => g.labels().cloned().collect(),
            Self::Matrix(g) => g.labels().to_vec(),
        }
    }

    /// All directed edges.
    pub fn edges(&self) -> Vec<Edge<L>> {
        match self {
            Self::List(g) => g.edges(),
            Self::Matrix(g) => g.edges(),
        }
    }

    /// The printed structure.
    pub fn structure(&self) -> String {
        match self {
            Self::List(g) => g.to_string(),
            Self::Matrix(g) => g.to_string(),
        }
    }
}
