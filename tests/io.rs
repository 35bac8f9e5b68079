/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_beagle;

use lib_beagle::{parse_adjacency_list, parse_edge_list, parse_json_graph, CsvConfig, DirectionMode};

#[test]
fn csv_adjacency_list_builds_directed_graph() {
    let text = "a,b,c\nb,c\n";
    let cfg = CsvConfig {
        separator: ',',
        explicit_direction: false,
        direction_mode: DirectionMode::Directed,
        weighted: false,
    };
    let g = parse_adjacency_list(text, &cfg).unwrap();
    assert_eq!(g.nr_nodes(), 3);
    assert_eq!(g.nr_dir_edges(), 3);
}

#[test]
fn csv_adjacency_list_parses_paired_weight_tokens_when_weighted() {
    let text = "a;b;3.5\n";
    let cfg = CsvConfig {
        separator: ';',
        explicit_direction: false,
        direction_mode: DirectionMode::Directed,
        weighted: true,
    };
    let g = parse_adjacency_list(text, &cfg).unwrap();
    let edge = g.get_edges().next().unwrap();
    assert_eq!(edge.weight(), 3.5);
}

#[test]
fn csv_edge_list_respects_explicit_direction_column() {
    let text = "a,b,d\nb,c,u\n";
    let cfg = CsvConfig {
        separator: ',',
        explicit_direction: true,
        direction_mode: DirectionMode::Directed,
        weighted: false,
    };
    let g = parse_edge_list(text, &cfg).unwrap();
    assert_eq!(g.nr_dir_edges(), 1);
    assert_eq!(g.nr_und_edges(), 1);
}

#[test]
fn json_graph_skips_duplicate_and_reverse_undirected_edges() {
    let text = r#"{
        "name": "dup",
        "data": {
            "a": { "edges": [ { "to": "b", "directed": false } ] },
            "b": { "edges": [ { "to": "a", "directed": false } ] }
        }
    }"#;
    let g = parse_json_graph(text).unwrap();
    assert_eq!(g.nr_und_edges(), 1);
}

#[test]
fn json_graph_merges_feature_bag() {
    let text = r#"{
        "name": "feat",
        "data": {
            "a": { "features": { "color": "red" }, "edges": [] }
        }
    }"#;
    let g = parse_json_graph(text).unwrap();
    let node = g.get_node_by_id(&"a".to_owned().into()).unwrap();
    assert_eq!(node.get_feature("color").unwrap().as_str(), Some("red"));
}
