/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate thiserror;

pub mod dachshund;

pub use dachshund::closeness::{closeness_centrality_matrix, closeness_centrality_pfs};
pub use dachshund::compute_graph::{AdjListW, ComputeGraph};
pub use dachshund::dijkstra::{dijkstra, shortest_distance};
pub use dachshund::edge::{Edge, DEFAULT_WEIGHT};
pub use dachshund::error::{BeagleError, BeagleResult};
pub use dachshund::feature::{FeatureBag, FeatureValue};
pub use dachshund::floyd_warshall::all_pairs_shortest_distances;
pub use dachshund::graph::{EdgeConfig, Graph, GraphStats, Mode, NodeConfig};
pub use dachshund::id_types::{EdgeId, NodeId, GENERIC_TYPE};
pub use dachshund::io::{
    parse_adjacency_list, parse_edge_list, parse_json_graph, CsvConfig, DirectionMode,
};
pub use dachshund::matrix::{Matrix, MatrixMultiplier, NalgebraMatMul};
pub use dachshund::node::{NeighborEntry, Node};
pub use dachshund::pagerank::{pagerank, PageRankConfig};
pub use dachshund::pfs::{
    run_pfs, DirMode, NoopVisitor, PfsConfig, PfsEntry, PfsResult, PfsScope, PfsVisitor,
};
pub use dachshund::structural::{
    clustering_coefficients, transitivity, triad_count, triangle_count,
};
pub use dachshund::typed_graph::TypedGraph;
pub use dachshund::util::{clone, merge_arrays, merge_objects};
