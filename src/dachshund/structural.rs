/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::compute_graph::ComputeGraph;
use crate::dachshund::error::BeagleResult;
use crate::dachshund::graph::Graph;
use crate::dachshund::id_types::NodeId;
use crate::dachshund::matrix::MatrixMultiplier;
use fxhash::FxHashMap;

/// Sum over nodes of the number of potential triangles through that node:
/// `deg·(deg−1)/2` for an undirected degree, `inDeg·outDeg` for a directed
/// one.
pub fn triad_count(graph: &Graph, directed: bool) -> BeagleResult<u64> {
    let mut total: u64 = 0;
    for node in graph.get_nodes() {
        if directed {
            total += (node.in_degree() * node.out_degree()) as u64;
        } else {
            let deg = node.und_degree();
            total += (deg * deg.saturating_sub(1) / 2) as u64;
        }
    }
    Ok(total)
}

/// Triangle count via matrix powers of the binary adjacency matrix:
/// `trace(A^3) / (6 for undirected, 3 for directed)`.
pub fn triangle_count(
    graph: &Graph,
    directed: bool,
    multiplier: &dyn MatrixMultiplier,
) -> BeagleResult<f64> {
    let a = ComputeGraph::adj_matrix(graph)?;
    let a2 = multiplier.matmul(&a, &a)?;
    let a3 = multiplier.matmul(&a2, &a)?;
    let trace: f64 = a3.diagonal().iter().sum();
    let divisor = if directed { 3.0 } else { 6.0 };
    Ok(trace / divisor)
}

/// `3 * triangles / triads`. `0.0` when there are no triads.
pub fn transitivity(
    graph: &Graph,
    directed: bool,
    multiplier: &dyn MatrixMultiplier,
) -> BeagleResult<f64> {
    let triads = triad_count(graph, directed)? as f64;
    if triads == 0.0 {
        return Ok(0.0);
    }
    let triangles = triangle_count(graph, directed, multiplier)?;
    Ok(3.0 * triangles / triads)
}

/// Per-node clustering coefficient: `A^3[i][i] / (deg·(deg−1))`, doubled
/// for directed graphs.
pub fn clustering_coefficients(
    graph: &Graph,
    directed: bool,
    multiplier: &dyn MatrixMultiplier,
) -> BeagleResult<FxHashMap<NodeId, f64>> {
    let ids = graph.get_node_ids().to_vec();
    let a = ComputeGraph::adj_matrix(graph)?;
    let a2 = multiplier.matmul(&a, &a)?;
    let a3 = multiplier.matmul(&a2, &a)?;

    let mut result = FxHashMap::default();
    for (i, id) in ids.iter().enumerate() {
        let node = graph.get_node_by_id(id)?;
        let deg = if directed {
            node.in_degree() + node.out_degree()
        } else {
            node.und_degree()
        };
        let denom = (deg * deg.saturating_sub(1)) as f64;
        let mut cc = if denom == 0.0 {
            0.0
        } else {
            a3[(i, i)] / denom
        };
        if directed {
            cc *= 2.0;
        }
        result.insert(id.clone(), cc);
    }
    Ok(result)
}
