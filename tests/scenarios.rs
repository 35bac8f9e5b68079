/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_beagle;

use approx::assert_relative_eq;
use lib_beagle::{
    closeness_centrality_matrix, closeness_centrality_pfs, dijkstra, pagerank, parse_json_graph,
    triad_count, triangle_count, EdgeConfig, Graph, Mode, NalgebraMatMul, PageRankConfig,
};

fn node(id: &str) -> lib_beagle::NodeId {
    id.to_owned().into()
}

#[test]
fn s1_dijkstra_on_small_directed_weighted_graph() {
    let mut g = Graph::new();
    for id in ["A", "B", "C", "D"] {
        g.add_node(id).unwrap();
    }
    let edges = [
        ("e1", "A", "B", 1.0),
        ("e2", "A", "C", 4.0),
        ("e3", "B", "C", 2.0),
        ("e4", "B", "D", 6.0),
        ("e5", "C", "D", 3.0),
    ];
    for (id, a, b, w) in edges {
        g.add_edge_by_id(
            id,
            a,
            b,
            EdgeConfig {
                directed: true,
                weighted: true,
                weight: w,
                label: None,
            },
        )
        .unwrap();
    }

    let result = dijkstra(&g, &node("A"), None).unwrap();
    assert_eq!(result[&node("A")].distance, 0.0);
    assert_eq!(result[&node("B")].distance, 1.0);
    assert_eq!(result[&node("C")].distance, 3.0);
    assert_eq!(result[&node("D")].distance, 6.0);

    assert_eq!(result[&node("A")].parent, Some(node("A")));
    assert_eq!(result[&node("B")].parent, Some(node("A")));
    assert_eq!(result[&node("C")].parent, Some(node("B")));
    assert_eq!(result[&node("D")].parent, Some(node("C")));
}

#[test]
fn s2_pagerank_converges_on_a_directed_ring() {
    let mut g = Graph::new();
    for id in ["A", "B", "C"] {
        g.add_node(id).unwrap();
    }
    for (id, a, b) in [("ab", "A", "B"), ("bc", "B", "C"), ("ca", "C", "A")] {
        g.add_edge_by_id(id, a, b, EdgeConfig::default()).unwrap();
    }

    let cfg = PageRankConfig {
        alpha: 0.15,
        iterations: 100,
        convergence: 1e-6,
        ..PageRankConfig::default()
    };
    let ranks = pagerank(&g, &cfg).unwrap();
    for id in ["A", "B", "C"] {
        let rank = ranks[&node(id)];
        assert_relative_eq!(rank, 1.0 / 3.0, epsilon = 1e-4);
    }
}

#[test]
fn s3_triangle_count_on_k4() {
    let mut g = Graph::new();
    for id in ["A", "B", "C", "D"] {
        g.add_node(id).unwrap();
    }
    let ids = ["A", "B", "C", "D"];
    let mut n = 0;
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            g.add_edge_by_id(format!("e{}", n), ids[i], ids[j], EdgeConfig {
                directed: false,
                weighted: false,
                weight: f64::NAN,
                label: None,
            })
            .unwrap();
            n += 1;
        }
    }

    let triads = triad_count(&g, false).unwrap();
    assert_eq!(triads, 12);

    let multiplier = NalgebraMatMul;
    let triangles = triangle_count(&g, false, &multiplier).unwrap();
    assert_relative_eq!(triangles, 4.0, epsilon = 1e-9);

    let transitivity = lib_beagle::transitivity(&g, false, &multiplier).unwrap();
    assert_relative_eq!(transitivity, 1.0, epsilon = 1e-9);
}

#[test]
fn s4_mixed_mode_stats() {
    let mut g = Graph::new();
    for id in ["A", "B", "C"] {
        g.add_node(id).unwrap();
    }
    g.add_edge_by_id("d1", "A", "B", EdgeConfig::default())
        .unwrap();
    g.add_edge_by_id("d2", "B", "C", EdgeConfig::default())
        .unwrap();
    g.add_edge_by_id(
        "u1",
        "A",
        "C",
        EdgeConfig {
            directed: false,
            weighted: false,
            weight: f64::NAN,
            label: None,
        },
    )
    .unwrap();

    let stats = g.get_stats();
    assert_eq!(stats.mode, Mode::Mixed);
    assert_eq!(stats.nr_dir_edges, 2);
    assert_eq!(stats.nr_und_edges, 1);
}

#[test]
fn s5_closeness_centrality_on_path_graph() {
    let mut g = Graph::new();
    for id in ["A", "B", "C", "D", "E"] {
        g.add_node(id).unwrap();
    }
    for (id, a, b) in [("ab", "A", "B"), ("bc", "B", "C"), ("cd", "C", "D"), ("de", "D", "E")] {
        g.add_edge_by_id(
            id,
            a,
            b,
            EdgeConfig {
                directed: false,
                weighted: false,
                weight: f64::NAN,
                label: None,
            },
        )
        .unwrap();
    }

    for closeness in [
        closeness_centrality_matrix(&g).unwrap(),
        closeness_centrality_pfs(&g).unwrap(),
    ] {
        assert_relative_eq!(closeness[&node("C")], 2.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(closeness[&node("A")], 0.4, epsilon = 1e-9);
        assert_relative_eq!(closeness[&node("E")], 0.4, epsilon = 1e-9);
    }
}

#[test]
fn s7_closeness_centrality_agrees_on_directed_ring() {
    let mut g = Graph::new();
    for id in ["A", "B", "C"] {
        g.add_node(id).unwrap();
    }
    for (id, a, b) in [("ab", "A", "B"), ("bc", "B", "C"), ("ca", "C", "A")] {
        g.add_edge_by_id(id, a, b, EdgeConfig::default()).unwrap();
    }

    let matrix = closeness_centrality_matrix(&g).unwrap();
    let pfs = closeness_centrality_pfs(&g).unwrap();
    for id in ["A", "B", "C"] {
        assert_relative_eq!(matrix[&node(id)], pfs[&node(id)], epsilon = 1e-9);
        assert_relative_eq!(matrix[&node(id)], 2.0 / 3.0, epsilon = 1e-9);
    }
}

#[test]
fn s6_json_sentinel_weights() {
    let text = r#"{
        "name": "sentinel",
        "data": {
            "a": { "edges": [
                { "to": "b", "weighted": true, "weight": "Infinity" },
                { "to": "c", "weighted": true, "weight": "undefined" }
            ] },
            "b": { "edges": [] },
            "c": { "edges": [] }
        }
    }"#;

    let g = parse_json_graph(text).unwrap();
    let inf_edge = g.get_edge_by_id(&"a_b_d".to_owned().into()).unwrap();
    assert_eq!(inf_edge.weight(), f64::INFINITY);

    let default_edge = g.get_edge_by_id(&"a_c_d".to_owned().into()).unwrap();
    assert_eq!(default_edge.weight(), 1.0);
}
