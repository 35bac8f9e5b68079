/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::error::BeagleResult;
use crate::dachshund::graph::Graph;
use crate::dachshund::id_types::NodeId;
use crate::dachshund::pfs::{run_pfs, DirMode, NoopVisitor, PfsConfig, PfsResult};

/// Single-source shortest paths over outgoing directed/weighted edges, built
/// as a thin configuration of `run_pfs`. Stopping early at `goal` (when
/// supplied) is exactly `run_pfs`'s goal-node short-circuit.
pub fn dijkstra(graph: &Graph, source: &NodeId, goal: Option<NodeId>) -> BeagleResult<PfsResult> {
    let cfg = PfsConfig {
        dir_mode: DirMode::Out,
        goal_node: goal,
        weighted: true,
    };
    let mut visitor = NoopVisitor;
    run_pfs(graph, source, &cfg, &mut visitor)
}

/// The distance from `source` to `target`, or `f64::INFINITY` if
/// unreachable.
pub fn shortest_distance(graph: &Graph, source: &NodeId, target: &NodeId) -> BeagleResult<f64> {
    let result = dijkstra(graph, source, None)?;
    Ok(result
        .get(target)
        .map(|entry| entry.distance)
        .unwrap_or(f64::INFINITY))
}
