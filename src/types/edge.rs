//! Edge kinds and the edge pair returned by edge listings.

use serde::Serialize;

/// Whether an edge is one-way or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    /// `from -> to` only.
    Directed,
    /// `a -> b` and `b -> a`, added together.
    Undirected,
}

impl EdgeKind {
    /// Return the separator used in edge specs (`A>B`, `A=B`).
    pub fn symbol(&self) -> char {
        match self {
            Self::Directed => '>',
            Self::Undirected => '=',
        }
    }

    /// Return the arrow used in human-readable output.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Directed => "->",
            Self::Undirected => "<->",
        }
    }

    /// Split an edge spec such as `A>B` or `A=B` into its kind and endpoints.
    pub fn parse_spec(spec: &str) -> Option<(Self, &str, &str)> {
        for kind in [Self::Directed, Self::Undirected] {
            if let Some((from, to)) = spec.split_once(kind.symbol()) {
                let (from, to) = (from.trim(), to.trim());
                if from.is_empty() || to.is_empty() {
                    return None;
                }
                return Some((kind, from, to));
            }
        }
        None
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.arrow())
    }
}

/// A directed edge between two labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge<L> {
    /// Origin of the edge.
    pub from: L,
    /// Destination of the edge.
    pub to: L,
}

impl<L> Edge<L> {
    /// Create a new edge.
    pub fn new(from: L, to: L) -> Self {
        Self { from, to }
    }
}

impl<L: std::fmt::Display> std::fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
