//! Graph traversal algorithms (BFS, DFS) written once for both representations.
//!
//! Each representation implements [`Adjacency`], which exposes its nodes as
//! dense indices and yields out-neighbors in that representation's own order:
//! stored insertion order for [`ListGraph`](super::ListGraph), ascending
//! column index for [`MatrixGraph`](super::MatrixGraph). The iterators below
//! only ever see indices, so the tie-break between equally eligible
//! neighbors is decided entirely by the representation.

use std::collections::{BTreeSet, VecDeque};

use crate::types::{GraphError, GraphResult, Label};

/// Neighbor discovery over a graph whose nodes are addressed by dense indices.
pub trait Adjacency {
    /// Label type carried by each node.
    type Label: Label;

    /// Number of nodes; valid indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Index of the node with this label, if present.
    fn index_of(&self, label: &Self::Label) -> Option<usize>;

    /// Label of the node at `index`, if in range.
    fn label_at(&self, index: usize) -> Option<&Self::Label>;

    /// Out-neighbors of the node at `index`, in representation order.
    ///
    /// Yields nothing for an out-of-range index.
    fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_;
}

/// How depth-first traversal walks the graph.
///
/// Both modes produce the same visitation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsMode {
    /// Explicit stack; no recursion depth limit.
    #[default]
    Iterative,
    /// Call-stack recursion; depth equals the longest simple path explored.
    Recursive,
}

impl DfsMode {
    /// Return a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }

    /// Parse a mode from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "iterative" | "stack" => Some(Self::Iterative),
            "recursive" => Some(Self::Recursive),
            _ => None,
        }
    }
}

/// One node emitted by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a, L> {
    /// Label of the visited node.
    pub label: &'a L,
    /// Dense index of the visited node.
    pub index: usize,
    /// BFS: shortest-path distance from the start. DFS: depth in the DFS tree.
    pub depth: u32,
}

fn resolve_start<G: Adjacency>(graph: &G, start: &G::Label, order: &str) -> GraphResult<usize> {
    graph.index_of(start).ok_or_else(|| {
        log::warn!("{} start node '{}' not found", order, start);
        GraphError::not_found(start)
    })
}

/// Breadth-first iterator.
///
/// Nodes are marked visited when enqueued, so each is emitted at most once
/// and in non-decreasing distance from the start.
pub struct Bfs<'a, G: Adjacency> {
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<(usize, u32)>,
}

impl<'a, G: Adjacency> Bfs<'a, G> {
    /// Start a BFS at `start`. Fails with `NodeNotFound` if the label is absent.
    pub fn new(graph: &'a G, start: &G::Label) -> GraphResult<Self> {
        let start_index = resolve_start(graph, start, "BFS")?;
        let mut visited = vec![false; graph.node_count()];
        let mut queue = VecDeque::new();

        if let Some(seen) = visited.get_mut(start_index) {
            *seen = true;
            queue.push_back((start_index, 0));
        }

        Ok(Self {
            graph,
            visited,
            queue,
        })
    }
}

impl<'a, G: Adjacency> Iterator for Bfs<'a, G> {
    type Item = Visit<'a, G::Label>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let (current, depth) = self.queue.pop_front()?;

        for neighbor in graph.neighbor_indices(current) {
            if let Some(seen) = self.visited.get_mut(neighbor) {
                if !*seen {
                    *seen = true;
                    self.queue.push_back((neighbor, depth + 1));
                }
            }
        }

        let label = graph.label_at(current)?;
        Some(Visit {
            label,
            index: current,
            depth,
        })
    }
}

/// Depth-first iterator using an explicit stack.
///
/// Nodes are marked when popped and their unvisited neighbors are pushed in
/// reverse, so the first neighbor is explored first. This reproduces the
/// preorder of the recursive formulation exactly; stale stack entries for
/// nodes reached through another path are skipped on pop.
pub struct Dfs<'a, G: Adjacency> {
    graph: &'a G,
    visited: Vec<bool>,
    stack: Vec<(usize, u32)>,
    scratch: Vec<usize>,
}

impl<'a, G: Adjacency> Dfs<'a, G> {
    /// Start a DFS at `start`. Fails with `NodeNotFound` if the label is absent.
    pub fn new(graph: &'a G, start: &G::Label) -> GraphResult<Self> {
        let start_index = resolve_start(graph, start, "DFS")?;
        Ok(Self {
            graph,
            visited: vec![false; graph.node_count()],
            stack: vec![(start_index, 0)],
            scratch: Vec::new(),
        })
    }

    fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(true)
    }
}

impl<'a, G: Adjacency> Iterator for Dfs<'a, G> {
    type Item = Visit<'a, G::Label>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let (current, depth) = self.stack.pop()?;
            if self.is_visited(current) {
                continue;
            }
            if let Some(seen) = self.visited.get_mut(current) {
                *seen = true;
            }

            self.scratch.clear();
            self.scratch.extend(graph.neighbor_indices(current));
            while let Some(neighbor) = self.scratch.pop() {
                if !self.is_visited(neighbor) {
                    self.stack.push((neighbor, depth + 1));
                }
            }

            let label = graph.label_at(current)?;
            return Some(Visit {
                label,
                index: current,
                depth,
            });
        }
    }
}

/// BFS visitation order from `start`.
pub fn bfs<G: Adjacency>(graph: &G, start: &G::Label) -> GraphResult<Vec<G::Label>> {
    let order: Vec<G::Label> = Bfs::new(graph, start)?
        .map(|visit| visit.label.clone())
        .collect();
    log::debug!("BFS from {} visited {} node(s)", start, order.len());
    Ok(order)
}

/// DFS visitation order from `start` using the default [`DfsMode`].
pub fn dfs<G: Adjacency>(graph: &G, start: &G::Label) -> GraphResult<Vec<G::Label>> {
    dfs_with(graph, start, DfsMode::default())
}

/// DFS visitation order from `start` using the given mode.
pub fn dfs_with<G: Adjacency>(
    graph: &G,
    start: &G::Label,
    mode: DfsMode,
) -> GraphResult<Vec<G::Label>> {
    let order: Vec<G::Label> = match mode {
        DfsMode::Iterative => Dfs::new(graph, start)?
            .map(|visit| visit.label.clone())
            .collect(),
        DfsMode::Recursive => {
            let start_index = resolve_start(graph, start, "DFS")?;
            let mut visited = vec![false; graph.node_count()];
            let mut order = Vec::new();
            dfs_recurse(graph, start_index, &mut visited, &mut order);
            order
        }
    };
    log::debug!(
        "DFS ({}) from {} visited {} node(s)",
        mode.name(),
        start,
        order.len()
    );
    Ok(order)
}

fn dfs_recurse<G: Adjacency>(
    graph: &G,
    current: usize,
    visited: &mut [bool],
    order: &mut Vec<G::Label>,
) {
    match visited.get_mut(current) {
        Some(seen) if !*seen => *seen = true,
        _ => return,
    }
    if let Some(label) = graph.label_at(current) {
        order.push(label.clone());
    }
    for neighbor in graph.neighbor_indices(current) {
        if !visited.get(neighbor).copied().unwrap_or(true) {
            dfs_recurse(graph, neighbor, visited, order);
        }
    }
}

/// Every label reachable from `start` over directed edges, `start` included.
pub fn reachable<G: Adjacency>(graph: &G, start: &G::Label) -> GraphResult<BTreeSet<G::Label>> {
    Ok(Bfs::new(graph, start)?
        .map(|visit| visit.label.clone())
        .collect())
}
