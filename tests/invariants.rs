/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_beagle;

use lib_beagle::{ComputeGraph, EdgeConfig, Graph, TypedGraph};

#[test]
fn node_insertion_order_is_iteration_order() {
    let mut g = Graph::new();
    for id in ["z", "a", "m", "b"] {
        g.add_node(id).unwrap();
    }
    let ids: Vec<&str> = g.get_node_ids().iter().map(|id| id.value()).collect();
    assert_eq!(ids, vec!["z", "a", "m", "b"]);
}

#[test]
fn adj_matrix_diagonal_is_always_zero() {
    let mut g = Graph::new();
    for id in ["a", "b", "c"] {
        g.add_node(id).unwrap();
    }
    g.add_edge_by_id("ab", "a", "b", EdgeConfig::default())
        .unwrap();
    g.add_edge_by_id("bc", "b", "c", EdgeConfig::default())
        .unwrap();

    let m = ComputeGraph::adj_matrix(&g).unwrap();
    for i in 0..3 {
        assert_eq!(m[(i, i)], 0.0);
    }
}

#[test]
fn adding_then_removing_an_edge_restores_prior_stats() {
    let mut g = Graph::new();
    g.add_node("a").unwrap();
    g.add_node("b").unwrap();
    let before = (g.nr_dir_edges(), g.nr_und_edges(), g.nr_nodes());

    g.add_edge_by_id("ab", "a", "b", EdgeConfig::default())
        .unwrap();
    assert_eq!(g.nr_dir_edges(), before.0 + 1);

    g.delete_edge(&"ab".to_owned().into()).unwrap();
    let after = (g.nr_dir_edges(), g.nr_und_edges(), g.nr_nodes());
    assert_eq!(before, after);
}

#[test]
fn deleting_a_node_removes_incident_edges_first() {
    let mut g = Graph::new();
    for id in ["a", "b", "c"] {
        g.add_node(id).unwrap();
    }
    g.add_edge_by_id("ab", "a", "b", EdgeConfig::default())
        .unwrap();
    g.add_edge_by_id("bc", "b", "c", EdgeConfig::default())
        .unwrap();

    g.delete_node(&"b".to_owned().into()).unwrap();
    assert_eq!(g.nr_nodes(), 2);
    assert_eq!(g.nr_dir_edges(), 0);
    assert!(!g.has_edge_id(&"ab".to_owned().into()));
    assert!(!g.has_edge_id(&"bc".to_owned().into()));
}

#[test]
fn typed_graph_bucket_empties_when_last_member_is_removed() {
    let mut g = TypedGraph::new();
    g.add_node("alice").unwrap();
    g.add_node("bob").unwrap();
    g.add_edge_by_id(
        "friend",
        "alice",
        "bob",
        EdgeConfig {
            directed: false,
            weighted: false,
            weight: f64::NAN,
            label: Some("FRIEND".to_owned()),
        },
    )
    .unwrap();
    assert!(g.edge_type_names().any(|t| t == "FRIEND"));

    g.delete_edge(&"friend".to_owned().into()).unwrap();
    assert!(!g.edge_type_names().any(|t| t == "FRIEND"));
}

#[test]
fn adj_matrix_w_is_finite_exactly_where_adj_list_w_has_an_entry() {
    let mut g = Graph::new();
    for id in ["a", "b", "c"] {
        g.add_node(id).unwrap();
    }
    g.add_edge_by_id(
        "ab",
        "a",
        "b",
        EdgeConfig {
            directed: true,
            weighted: true,
            weight: 2.5,
            label: None,
        },
    )
    .unwrap();

    let adj = ComputeGraph::adj_list_w(&g, false, false, 0.0).unwrap();
    let matrix = ComputeGraph::adj_matrix_w(&g, false, false, 0.0).unwrap();
    let ids = g.get_node_ids().to_vec();
    for (i, u) in ids.iter().enumerate() {
        for (j, v) in ids.iter().enumerate() {
            let list_has_entry = adj[u].contains_key(v);
            assert_eq!(matrix[(i, j)].is_finite(), list_has_entry);
        }
    }
}
