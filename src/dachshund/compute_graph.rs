/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::edge::DEFAULT_WEIGHT;
use crate::dachshund::error::BeagleResult;
use crate::dachshund::graph::Graph;
use crate::dachshund::id_types::NodeId;
use crate::dachshund::matrix::Matrix;
use fxhash::FxHashMap;

/// Sparse adjacency dictionary: `u -> (v -> weight)`.
pub type AdjListW = FxHashMap<NodeId, FxHashMap<NodeId, f64>>;

fn upsert_min(result: &mut AdjListW, u: &NodeId, v: &NodeId, w: f64) {
    let row = result.entry(u.clone()).or_default();
    row.entry(v.clone())
        .and_modify(|existing| {
            if w < *existing {
                *existing = w;
            }
        })
        .or_insert(w);
}

/// Projections of a `Graph` into dense/sparse numeric forms.
/// Implemented as free functions over `&Graph` rather than a trait: a
/// shared-trait abstraction would exist mainly to let several unrelated
/// graph structs reuse one implementation, but `beagle` has a single
/// canonical `Graph`, so that indirection buys nothing here.
pub struct ComputeGraph;

impl ComputeGraph {
    /// Builds the per-node neighbor-weight mapping.
    ///
    /// - `incoming`: also walk `prevNodes(u)`, mirroring each discovered
    ///   entry into `result[v][u]` (this is how an undirected graph's mutual
    ///   reachability survives the directed/undirected split).
    /// - `include_self`: set `result[u][u] = self_dist`.
    /// - Parallel edges between the same `(u, v)` keep the minimum weight.
    pub fn adj_list_w(
        graph: &Graph,
        incoming: bool,
        include_self: bool,
        self_dist: f64,
    ) -> BeagleResult<AdjListW> {
        let mut result: AdjListW = graph
            .get_node_ids()
            .iter()
            .map(|id| (id.clone(), FxHashMap::default()))
            .collect();

        for u in graph.get_node_ids() {
            let node = graph.get_node_by_id(u)?;
            let mut domain = node.reach_nodes();
            if incoming {
                domain.extend(node.prev_nodes());
            }
            for entry in domain {
                let v = &entry.neighbor;
                let edge = graph.get_edge_by_id(&entry.edge)?;
                let raw = edge.raw_weight();
                let w = if raw.is_nan() { DEFAULT_WEIGHT } else { raw };
                upsert_min(&mut result, u, v, w);
                if incoming {
                    upsert_min(&mut result, v, u, w);
                }
            }
            if include_self {
                result.get_mut(u).unwrap().insert(u.clone(), self_dist);
            }
        }
        Ok(result)
    }

    /// Binary 0/1 adjacency matrix, diagonal always 0. Row/column order is
    /// `graph.get_node_ids()`.
    pub fn adj_matrix(graph: &Graph) -> BeagleResult<Matrix> {
        let ids = graph.get_node_ids().to_vec();
        let n = ids.len();
        let adj = Self::adj_list_w(graph, false, false, 0.0)?;
        let mut data = vec![0.0; n * n];
        for (i, u) in ids.iter().enumerate() {
            let row = &adj[u];
            for (j, v) in ids.iter().enumerate() {
                if i != j && row.contains_key(v) {
                    data[i * n + j] = 1.0;
                }
            }
        }
        Ok(Matrix::from_row_slice(n, n, &data))
    }

    /// Weighted adjacency matrix; unreachable cells hold `+inf`.
    pub fn adj_matrix_w(
        graph: &Graph,
        incoming: bool,
        include_self: bool,
        self_dist: f64,
    ) -> BeagleResult<Matrix> {
        let ids = graph.get_node_ids().to_vec();
        let n = ids.len();
        let adj = Self::adj_list_w(graph, incoming, include_self, self_dist)?;
        let mut data = vec![f64::INFINITY; n * n];
        for (i, u) in ids.iter().enumerate() {
            let row = &adj[u];
            for (j, v) in ids.iter().enumerate() {
                if let Some(w) = row.get(v) {
                    data[i * n + j] = *w;
                } else if i == j {
                    data[i * n + j] = if include_self { self_dist } else { f64::INFINITY };
                }
            }
        }
        Ok(Matrix::from_row_slice(n, n, &data))
    }

    /// Successor ("next") matrix used to seed Floyd-Warshall path
    /// reconstruction: cell `(i, j)` is `Some(j)` if `i == j` or `j` is
    /// reachable from `i`, else `None`.
    pub fn next_array(graph: &Graph, incoming: bool) -> BeagleResult<Vec<Vec<Option<usize>>>> {
        let ids = graph.get_node_ids().to_vec();
        let n = ids.len();
        let adj = Self::adj_list_w(graph, incoming, false, 0.0)?;
        let mut next = vec![vec![None; n]; n];
        for (i, u) in ids.iter().enumerate() {
            let row = &adj[u];
            for (j, v) in ids.iter().enumerate() {
                if i == j || row.contains_key(v) {
                    next[i][j] = Some(j);
                }
            }
        }
        Ok(next)
    }
}
