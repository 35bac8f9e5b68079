/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::error::{BeagleError, BeagleResult};
use crate::dachshund::graph::Graph;
use crate::dachshund::id_types::NodeId;
use fxhash::FxHashMap;

/// PageRank configuration. Defaults match the documented reference values.
pub struct PageRankConfig {
    pub alpha: f64,
    pub iterations: usize,
    pub convergence: f64,
    pub init: fn(usize) -> f64,
    pub alpha_damp: fn(usize) -> f64,
    /// Reserved; unused by the core loop. Stored only so a caller's
    /// configuration round-trips unchanged.
    pub weighted: bool,
}
impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            iterations: 1000,
            convergence: 1e-4,
            init: |n| 1.0 / n as f64,
            alpha_damp: |n| n as f64,
            weighted: false,
        }
    }
}

/// Runs array-based power-iteration PageRank to convergence (or the
/// iteration cap) and returns a rank per node id.
///
/// Node-to-array-index assignment (the `PR_index` of the iteration
/// pseudocode) lives in a local side table for the duration of this call
/// rather than as a feature written onto each node, so a run never mutates
/// the graph it reads.
pub fn pagerank(graph: &Graph, cfg: &PageRankConfig) -> BeagleResult<FxHashMap<NodeId, f64>> {
    let ids = graph.get_node_ids().to_vec();
    let n = ids.len();
    if n == 0 {
        return Ok(FxHashMap::default());
    }
    let index: FxHashMap<NodeId, usize> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i))
        .collect();

    let mut out_deg = vec![0usize; n];
    let mut pull: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, id) in ids.iter().enumerate() {
        let node = graph.get_node_by_id(id)?;
        out_deg[i] = node.out_degree() + node.und_degree();
        let mut sources = Vec::new();
        for entry in node.in_edge_entries() {
            sources.push(index[&entry.neighbor]);
        }
        for entry in node.und_edge_entries() {
            sources.push(index[&entry.neighbor]);
        }
        pull[i] = sources;
    }

    let init_value = (cfg.init)(n);
    let alpha_damp = (cfg.alpha_damp)(n);
    let mut old = vec![init_value; n];
    let mut curr = vec![0.0; n];

    for t in 0..cfg.iterations {
        let mut delta = 0.0;
        for i in 0..n {
            let mut s = 0.0;
            for &j in &pull[i] {
                if out_deg[j] == 0 {
                    return Err(BeagleError::invariant_violation(format!(
                        "pagerank: node {} has zero out-degree but is pulled into by node {}",
                        ids[j], ids[i]
                    )));
                }
                s += old[j] / out_deg[j] as f64;
            }
            curr[i] = (1.0 - cfg.alpha) * s + cfg.alpha / alpha_damp;
            delta += (curr[i] - old[i]).abs();
        }
        log::debug!("pagerank: iteration {} delta {}", t, delta);
        if delta <= cfg.convergence {
            std::mem::swap(&mut old, &mut curr);
            break;
        }
        std::mem::swap(&mut old, &mut curr);
    }

    Ok(ids
        .into_iter()
        .enumerate()
        .map(|(i, id)| (id, old[i]))
        .collect())
}
