//! End-to-end: the reference ring, the builder, and the CLI commands.

use dual_graph::cli::{commands, Order, Representation, RunOptions};
use dual_graph::graph::{DfsMode, GraphBuilder, ListGraph, MatrixGraph};
use dual_graph::types::{EdgeKind, GraphError};

const RING: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

fn ring_list() -> ListGraph<char> {
    let mut graph = ListGraph::new();
    for label in RING {
        graph.add_node(label);
    }
    for (i, from) in RING.iter().enumerate() {
        graph
            .add_directed_edge(from, &RING[(i + 1) % RING.len()])
            .unwrap();
    }
    graph
}

fn ring_matrix() -> MatrixGraph<char> {
    let mut graph = MatrixGraph::new();
    for label in RING {
        graph.add_node(label);
    }
    for (i, from) in RING.iter().enumerate() {
        graph
            .add_directed_edge(from, &RING[(i + 1) % RING.len()])
            .unwrap();
    }
    graph
}

fn run_options(repr: Representation, edges: &[&str], start: &str) -> RunOptions {
    RunOptions {
        representation: repr,
        nodes: vec!["A".into(), "B".into(), "C".into()],
        edges: edges.iter().map(|e| e.to_string()).collect(),
        start: Some(start.to_string()),
        orders: vec![Order::Bfs, Order::Dfs],
        dfs_mode: DfsMode::Iterative,
        print: true,
    }
}

// ==================== Reference Ring ====================

#[test]
fn test_ring_on_list() {
    let graph = ring_list();
    assert_eq!(graph.bfs(&'A').unwrap(), RING.to_vec());
    assert_eq!(graph.dfs(&'A').unwrap(), RING.to_vec());
    assert!(matches!(graph.bfs(&'Z'), Err(GraphError::NodeNotFound(_))));
}

#[test]
fn test_ring_on_matrix() {
    let graph = ring_matrix();
    assert_eq!(
        graph.bfs(&'B').unwrap(),
        vec!['B', 'C', 'D', 'E', 'F', 'A']
    );
    assert_eq!(graph.dfs(&'A').unwrap(), RING.to_vec());
    assert!(matches!(graph.bfs(&'Z'), Err(GraphError::NodeNotFound(_))));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_cycle_matches_manual_ring() {
    let mut builder = GraphBuilder::new();
    builder.cycle(RING);

    let list = builder.build_list().unwrap();
    let matrix = builder.build_matrix().unwrap();
    assert_eq!(list.edges(), ring_list().edges());
    assert_eq!(matrix.edges(), ring_matrix().edges());
    assert_eq!(matrix.labels(), &RING);
}

#[test]
fn test_builder_rejects_undirected_matrix() {
    let mut builder = GraphBuilder::new();
    builder.nodes(['A', 'B']).undirected('A', 'B');

    assert_eq!(builder.build_list().unwrap().edge_count(), 2);
    assert!(matches!(
        builder.build_matrix(),
        Err(GraphError::Unsupported { .. })
    ));
}

#[test]
fn test_builder_propagates_unknown_endpoint() {
    let mut builder = GraphBuilder::new();
    builder
        .node('A')
        .node('A')
        .link(EdgeKind::Directed, 'A', 'B');

    assert!(matches!(
        builder.build_list(),
        Err(GraphError::UnknownNode(ref l)) if l == "B"
    ));
    assert!(builder.build_matrix().is_err());
}

#[test]
fn test_edge_spec_parsing() {
    assert_eq!(EdgeKind::parse_spec("A>B"), Some((EdgeKind::Directed, "A", "B")));
    assert_eq!(
        EdgeKind::parse_spec(" home = about "),
        Some((EdgeKind::Undirected, "home", "about"))
    );
    assert_eq!(EdgeKind::parse_spec("AB"), None);
    assert_eq!(EdgeKind::parse_spec(">B"), None);
}

// ==================== CLI Tests ====================

#[test]
fn test_demo_text_output() {
    let mut out = Vec::new();
    commands::cmd_demo(&mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("===== ADJACENCY LIST ====="));
    assert!(text.contains("===== ADJACENCY MATRIX ====="));
    assert!(text.contains("Node 'A' added."));
    assert!(text.contains("Edge F -> A created."));
    assert!(text.contains("Node A -> B"));
    assert!(text.contains("A | 0 1 0 0 0 0"));
    assert!(text.contains("BFS from A: A B C D E F"));
    assert!(text.contains("DFS from A: A B C D E F"));
    assert!(text.contains("BFS from B: B C D E F A"));
    assert!(text.contains("BFS from Z: Node 'Z' not found"));
}

#[test]
fn test_demo_json_output() {
    let mut out = Vec::new();
    commands::cmd_demo(&mut out, true).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let list = &doc["list"];
    assert_eq!(list["representation"], "list");
    assert_eq!(list["edges"].as_array().unwrap().len(), 6);
    assert_eq!(
        list["traversals"][0]["visited"],
        serde_json::json!(["A", "B", "C", "D", "E", "F"])
    );

    let matrix = &doc["matrix"];
    assert_eq!(
        matrix["traversals"][0]["visited"],
        serde_json::json!(["B", "C", "D", "E", "F", "A"])
    );
    assert_eq!(matrix["traversals"][2]["start"], "Z");
    assert_eq!(matrix["traversals"][2]["found"], false);
    assert_eq!(matrix["traversals"][2]["visited"], serde_json::json!([]));
}

#[test]
fn test_run_skips_edges_to_unknown_nodes() {
    let opts = run_options(Representation::List, &["A=B", "B>C", "C>Z"], "A");
    let mut out = Vec::new();
    commands::cmd_run(&mut out, &opts, false).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Edge A <-> B created."));
    assert!(text.contains("Edge C -> Z ignored: Edge references unknown node 'Z'"));
    assert!(text.contains("BFS from A: A B C"));
    assert!(text.contains("DFS from A: A B C"));

    let mut out = Vec::new();
    commands::cmd_run(&mut out, &opts, true).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(doc["ignored_edges"], serde_json::json!(["C>Z"]));
    assert_eq!(doc["edges"].as_array().unwrap().len(), 3);
}

#[test]
fn test_run_rejects_undirected_on_matrix() {
    let opts = run_options(Representation::Matrix, &["A=B"], "A");
    let result = commands::cmd_run(&mut Vec::<u8>::new(), &opts, false);
    assert!(matches!(result, Err(GraphError::Unsupported { .. })));
}

#[test]
fn test_run_rejects_malformed_edge() {
    let opts = run_options(Representation::List, &["AB"], "A");
    let result = commands::cmd_run(&mut Vec::<u8>::new(), &opts, false);
    assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
}

#[test]
fn test_run_reports_missing_start() {
    let opts = run_options(Representation::Matrix, &["A>B"], "Z");
    let mut out = Vec::new();
    let result = commands::cmd_run(&mut out, &opts, false);
    let text = String::from_utf8(out).unwrap();

    assert!(matches!(result, Err(GraphError::NodeNotFound(ref l)) if l == "Z"));
    assert!(text.contains("BFS from Z: Node 'Z' not found"));
    assert!(text.contains("DFS from Z: Node 'Z' not found"));
}

#[test]
fn test_representation_and_order_names() {
    assert_eq!(Representation::from_name("Matrix"), Some(Representation::Matrix));
    assert_eq!(Representation::from_name("tree"), None);
    assert_eq!(Order::parse_many("both"), Some(vec![Order::Bfs, Order::Dfs]));
    assert_eq!(Order::parse_many("dfs"), Some(vec![Order::Dfs]));
    assert_eq!(Order::parse_many("level"), None);
}
