/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::compute_graph::ComputeGraph;
use crate::dachshund::error::BeagleResult;
use crate::dachshund::graph::Graph;
use crate::dachshund::matrix::Matrix;

/// All-pairs shortest distances over the weighted adjacency matrix, via the
/// classic dynamic-programming relaxation. Used both directly (closeness
/// centrality's matrix mode) and as the reference implementation that the
/// PFS-based mode of closeness centrality is cross-checked against.
///
/// `incoming=false`: a directed edge stays one-way. Undirected edges are
/// still bidirectional because `reach_nodes` already lists them from both
/// endpoints; mirroring on top of that would symmetrize directed edges too
/// and silently turn a directed graph's distances into undirected ones.
pub fn all_pairs_shortest_distances(graph: &Graph) -> BeagleResult<Matrix> {
    let mut dist = ComputeGraph::adj_matrix_w(graph, false, true, 0.0)?;
    let n = dist.nrows();
    for k in 0..n {
        for i in 0..n {
            let dik = dist[(i, k)];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let via = dik + dist[(k, j)];
                if via < dist[(i, j)] {
                    dist[(i, j)] = via;
                }
            }
        }
    }
    Ok(dist)
}
