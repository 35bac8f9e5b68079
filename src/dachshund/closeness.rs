/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::error::BeagleResult;
use crate::dachshund::floyd_warshall::all_pairs_shortest_distances;
use crate::dachshund::graph::Graph;
use crate::dachshund::id_types::NodeId;
use crate::dachshund::pfs::{run_pfs, DirMode, NoopVisitor, PfsConfig};
use fxhash::FxHashMap;

fn closeness_from_distances(n: usize, self_index: usize, dists: impl Iterator<Item = f64>) -> f64 {
    let sum: f64 = dists
        .enumerate()
        .filter(|(j, d)| *j != self_index && d.is_finite())
        .map(|(_, d)| d)
        .sum();
    if sum == 0.0 {
        0.0
    } else {
        (n as f64 - 1.0) / sum
    }
}

/// Closeness centrality for every node, computed from an all-pairs
/// shortest-distance matrix (Floyd-Warshall over the weighted adjacency
/// matrix).
pub fn closeness_centrality_matrix(graph: &Graph) -> BeagleResult<FxHashMap<NodeId, f64>> {
    let ids = graph.get_node_ids().to_vec();
    let n = ids.len();
    let dist = all_pairs_shortest_distances(graph)?;
    let mut result = FxHashMap::default();
    for (i, id) in ids.iter().enumerate() {
        let row = (0..n).map(|j| dist[(i, j)]);
        result.insert(id.clone(), closeness_from_distances(n, i, row));
    }
    Ok(result)
}

/// Closeness centrality for every node, computed by running priority-first
/// search from each node in turn. Agrees with
/// `closeness_centrality_matrix` on connected graphs.
pub fn closeness_centrality_pfs(graph: &Graph) -> BeagleResult<FxHashMap<NodeId, f64>> {
    let ids = graph.get_node_ids().to_vec();
    let n = ids.len();
    let cfg = PfsConfig {
        dir_mode: DirMode::Mixed,
        goal_node: None,
        weighted: true,
    };
    let mut result = FxHashMap::default();
    for (i, id) in ids.iter().enumerate() {
        let mut visitor = NoopVisitor;
        let distances = run_pfs(graph, id, &cfg, &mut visitor)?;
        let dists = ids.iter().map(|other| {
            distances
                .get(other)
                .map(|entry| entry.distance)
                .unwrap_or(f64::INFINITY)
        });
        result.insert(id.clone(), closeness_from_distances(n, i, dists));
    }
    Ok(result)
}
