//! CLI command implementations.
//!
//! Commands write to any `io::Write` so the binary can hand them stdout and
//! tests can hand them a buffer.

use std::io::Write;

use serde::Serialize;

use crate::graph::DfsMode;
use crate::types::{Edge, EdgeKind, GraphError, GraphResult, Label};

use super::session::{Order, Representation, Session};

/// Labels of the reference ring used by `dgraph demo`.
pub const DEMO_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Outcome of one traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    /// "BFS" or "DFS".
    pub order: &'static str,
    /// Requested start label.
    pub start: String,
    /// False when the start label was not a node.
    pub found: bool,
    /// Visited labels in order; empty when not found.
    pub visited: Vec<String>,
}

/// Everything one graph session produced.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// "list" or "matrix".
    pub representation: &'static str,
    /// Node labels in the representation's natural order.
    pub nodes: Vec<String>,
    /// All directed edges.
    pub edges: Vec<Edge<String>>,
    /// Edge specs dropped because an endpoint was not a node.
    pub ignored_edges: Vec<String>,
    /// Traversals in the order they ran.
    pub traversals: Vec<TraversalReport>,
}

/// Options for `dgraph run`.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Storage layout.
    pub representation: Representation,
    /// Node labels, added in order.
    pub nodes: Vec<String>,
    /// Edge specs (`A>B` directed, `A=B` undirected), added in order.
    pub edges: Vec<String>,
    /// Traversal start; no traversal runs when absent.
    pub start: Option<String>,
    /// Traversals to run from `start`.
    pub orders: Vec<Order>,
    /// DFS formulation.
    pub dfs_mode: DfsMode,
    /// Print the structure after building.
    pub print: bool,
}

/// Drives one session, echoing progress in text mode and collecting a report.
struct Driver<'w, W: Write, L: Label> {
    out: &'w mut W,
    json: bool,
    session: Session<L>,
    ignored_edges: Vec<String>,
    traversals: Vec<TraversalReport>,
}

impl<'w, W: Write, L: Label> Driver<'w, W, L> {
    fn new(out: &'w mut W, json: bool, repr: Representation) -> Self {
        Self {
            out,
            json,
            session: Session::new(repr),
            ignored_edges: Vec::new(),
            traversals: Vec::new(),
        }
    }

    fn say(&mut self, line: std::fmt::Arguments<'_>) -> GraphResult<()> {
        if !self.json {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn add_node(&mut self, label: L) -> GraphResult<()> {
        let shown = label.to_string();
        if self.session.add_node(label) {
            self.say(format_args!("Node '{}' added.", shown))
        } else {
            self.say(format_args!("Node '{}' already present.", shown))
        }
    }

    /// Unknown endpoints are reported and skipped; anything else is fatal.
    fn add_edge(&mut self, kind: EdgeKind, from: &L, to: &L) -> GraphResult<()> {
        match self.session.add_edge(kind, from, to) {
            Ok(()) => self.say(format_args!("Edge {} {} {} created.", from, kind, to)),
            Err(err @ GraphError::UnknownNode(_)) => {
                self.ignored_edges.push(format!("{}{}{}", from, kind.symbol(), to));
                self.say(format_args!("Edge {} {} {} ignored: {}", from, kind, to, err))
            }
            Err(err) => Err(err),
        }
    }

    fn print_structure(&mut self) -> GraphResult<()> {
        if !self.json {
            writeln!(self.out)?;
            write!(self.out, "{}", self.session.structure())?;
        }
        Ok(())
    }

    /// Returns whether the start node was found.
    fn traverse(&mut self, order: Order, start: &L, mode: DfsMode) -> GraphResult<bool> {
        let (found, visited) = match self.session.traverse(order, start, mode) {
            Ok(visited) => (true, visited),
            Err(GraphError::NodeNotFound(_)) => (false, Vec::new()),
            Err(err) => return Err(err),
        };

        let visited: Vec<String> = visited.iter().map(ToString::to_string).collect();
        if found {
            self.say(format_args!(
                "{} from {}: {}",
                order.name(),
                start,
                visited.join(" ")
            ))?;
        } else {
            self.say(format_args!(
                "{} from {}: {}",
                order.name(),
                start,
                GraphError::not_found(start)
            ))?;
        }

        self.traversals.push(TraversalReport {
            order: order.name(),
            start: start.to_string(),
            found,
            visited,
        });
        Ok(found)
    }

    fn finish(self) -> SessionReport {
        SessionReport {
            representation: self.session.representation().name(),
            nodes: self.session.labels().iter().map(ToString::to_string).collect(),
            edges: self
                .session
                .edges()
                .into_iter()
                .map(|e| Edge::new(e.from.to_string(), e.to.to_string()))
                .collect(),
            ignored_edges: self.ignored_edges,
            traversals: self.traversals,
        }
    }
}

/// Run the reference scenario on both representations: nodes A..F, the
/// ring A -> B -> ... -> F -> A, then traversals including a missing start.
pub fn cmd_demo<W: Write>(out: &mut W, json: bool) -> GraphResult<()> {
    let list = run_demo(
        out,
        json,
        Representation::List,
        &[(Order::Bfs, 'A'), (Order::Dfs, 'A')],
    )?;
    if !json {
        writeln!(out)?;
    }
    let matrix = run_demo(
        out,
        json,
        Representation::Matrix,
        &[(Order::Bfs, 'B'), (Order::Dfs, 'A')],
    )?;

    if json {
        let doc = serde_json::json!({ "list": list, "matrix": matrix });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    }
    Ok(())
}

fn run_demo<W: Write>(
    out: &mut W,
    json: bool,
    repr: Representation,
    traversals: &[(Order, char)],
) -> GraphResult<SessionReport> {
    if !json {
        writeln!(out, "===== ADJACENCY {} =====", repr.name().to_uppercase())?;
    }

    let mut driver: Driver<'_, W, char> = Driver::new(out, json, repr);
    for label in DEMO_LABELS {
        driver.add_node(label)?;
    }
    for (i, from) in DEMO_LABELS.iter().enumerate() {
        let to = &DEMO_LABELS[(i + 1) % DEMO_LABELS.len()];
        driver.add_edge(EdgeKind::Directed, from, to)?;
    }
    driver.print_structure()?;

    for (order, start) in traversals {
        driver.traverse(*order, start, DfsMode::default())?;
    }
    driver.traverse(Order::Bfs, &'Z', DfsMode::default())?;

    Ok(driver.finish())
}

/// Build an ad-hoc graph from the command line and traverse it.
///
/// Edges naming unknown nodes are skipped. A missing start node is reported
/// in the output and then returned as `NodeNotFound`.
pub fn cmd_run<W: Write>(out: &mut W, opts: &RunOptions, json: bool) -> GraphResult<()> {
    let edges = opts
        .edges
        .iter()
        .map(|spec| {
            EdgeKind::parse_spec(spec).ok_or_else(|| {
                GraphError::InvalidArgument(format!(
                    "edge '{}' must look like FROM>TO or A=B",
                    spec
                ))
            })
        })
        .collect::<GraphResult<Vec<_>>>()?;

    let mut driver: Driver<'_, W, String> = Driver::new(out, json, opts.representation);
    for label in &opts.nodes {
        driver.add_node(label.clone())?;
    }
    for (kind, from, to) in edges {
        driver.add_edge(kind, &from.to_string(), &to.to_string())?;
    }
    if opts.print {
        driver.print_structure()?;
    }

    let mut missing = None;
    if let Some(start) = &opts.start {
        for &order in &opts.orders {
            if !driver.traverse(order, start, opts.dfs_mode)? {
                missing = Some(start.clone());
            }
        }
    }

    let report = driver.finish();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }

    match missing {
        Some(start) => Err(GraphError::NodeNotFound(start)),
        None => Ok(()),
    }
}
