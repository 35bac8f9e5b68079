/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::edge::DEFAULT_WEIGHT;
use crate::dachshund::error::{BeagleError, BeagleResult};
use crate::dachshund::graph::Graph;
use crate::dachshund::id_types::NodeId;
use crate::dachshund::node::NeighborEntry;
use fxhash::FxHashMap;
use ordered_float::NotNan;
use priority_queue::PriorityQueue;
use serde::Serialize;
use std::cmp::Reverse;

/// Which neighborhood a priority-first search walks at each pop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirMode {
    /// Follow outgoing directed edges only (Dijkstra's traversal).
    Out,
    /// Follow incoming directed edges only.
    In,
    /// Follow undirected edges only.
    Und,
    /// `reachNodes`: outgoing directed edges plus undirected edges.
    Mixed,
}

/// Per-node state tracked during (and returned by) a PFS run.
#[derive(Clone, Debug, Serialize)]
pub struct PfsEntry {
    pub distance: f64,
    pub parent: Option<NodeId>,
    pub counter: i64,
}
impl PfsEntry {
    fn unvisited() -> Self {
        Self {
            distance: f64::INFINITY,
            parent: None,
            counter: -1,
        }
    }
}

pub type PfsResult = FxHashMap<NodeId, PfsEntry>;

/// The scope object passed to every lifecycle callback.
pub struct PfsScope<'a> {
    pub root: &'a NodeId,
    pub current: &'a NodeId,
    pub next: &'a NodeId,
    pub adj_dist: f64,
    pub proposed_dist: f64,
    pub best_new_dist: f64,
}

/// The six PFS joinpoints, as a visitor trait with no-op defaults. A single
/// trait with default methods gives zero-cost dispatch per joinpoint
/// without forcing every caller to supply all six callbacks.
pub trait PfsVisitor {
    /// Fired once, right after initialization.
    fn init_pfs(&mut self, _scope: &PfsScope) {}
    /// A candidate is being considered for the first time.
    fn not_encountered(&mut self, _scope: &PfsScope) {}
    /// A candidate's distance was relaxed (strictly improved).
    fn node_open(&mut self, _scope: &PfsScope) {
        log::debug!(
            "pfs: relaxed node (proposed={})",
            _scope.proposed_dist
        );
    }
    /// A candidate's proposed distance tied the current best (no update).
    fn node_closed(&mut self, _scope: &PfsScope) {}
    /// A candidate was relaxed but had already been encountered before.
    fn better_path(&mut self, _scope: &PfsScope) {}
    /// The configured goal node was popped off the queue.
    fn goal_reached(&mut self, _scope: &PfsScope) {}
}

/// A visitor with every joinpoint a no-op; used when no lifecycle hooks are
/// needed (e.g. by `dijkstra`).
pub struct NoopVisitor;
impl PfsVisitor for NoopVisitor {}

/// PFS configuration.
pub struct PfsConfig {
    pub dir_mode: DirMode,
    pub goal_node: Option<NodeId>,
    /// When true, each hop costs the traversed edge's weight; when false,
    /// every hop costs `1` regardless of edge weight.
    pub weighted: bool,
}
impl Default for PfsConfig {
    fn default() -> Self {
        Self {
            dir_mode: DirMode::Mixed,
            goal_node: None,
            weighted: true,
        }
    }
}

fn neighborhood(node: &crate::dachshund::node::Node, dir_mode: DirMode) -> Vec<NeighborEntry> {
    match dir_mode {
        DirMode::Out => node.next_nodes(),
        DirMode::In => node.prev_nodes(),
        DirMode::Und => node.conn_nodes(),
        DirMode::Mixed => node.reach_nodes(),
    }
}

/// Generalized best-first traversal: the basis Dijkstra, all-pairs
/// shortest distances and closeness centrality are all built on.
pub fn run_pfs(
    graph: &Graph,
    source: &NodeId,
    cfg: &PfsConfig,
    visitor: &mut dyn PfsVisitor,
) -> BeagleResult<PfsResult> {
    if !graph.has_node_id(source) {
        return Err(BeagleError::invalid_input(format!(
            "PFS source {} not in graph",
            source
        )));
    }

    let mut result: PfsResult = graph
        .get_node_ids()
        .iter()
        .map(|id| (id.clone(), PfsEntry::unvisited()))
        .collect();
    result.insert(
        source.clone(),
        PfsEntry {
            distance: 0.0,
            parent: Some(source.clone()),
            counter: 0,
        },
    );

    let mut counter: i64 = 1;
    let mut queue: PriorityQueue<NodeId, Reverse<NotNan<f64>>> = PriorityQueue::new();
    queue.push(source.clone(), Reverse(NotNan::new(0.0).unwrap()));

    visitor.init_pfs(&PfsScope {
        root: source,
        current: source,
        next: source,
        adj_dist: 0.0,
        proposed_dist: 0.0,
        best_new_dist: 0.0,
    });

    while let Some((current, _priority)) = queue.pop() {
        if let Some(goal) = &cfg.goal_node {
            if *goal == current {
                visitor.goal_reached(&PfsScope {
                    root: source,
                    current: &current,
                    next: &current,
                    adj_dist: result[&current].distance,
                    proposed_dist: result[&current].distance,
                    best_new_dist: result[&current].distance,
                });
                return Ok(result);
            }
        }

        let current_dist = result[&current].distance;
        let node = graph.get_node_by_id(&current)?;
        for entry in neighborhood(node, cfg.dir_mode) {
            let next = entry.neighbor;
            let edge = graph.get_edge_by_id(&entry.edge)?;
            let hop = if cfg.weighted { edge.weight() } else { DEFAULT_WEIGHT };
            let proposed = current_dist + hop;
            let adj = result[&next].distance;

            let scope = PfsScope {
                root: source,
                current: &current,
                next: &next,
                adj_dist: adj,
                proposed_dist: proposed,
                best_new_dist: proposed.min(adj),
            };

            if adj.is_infinite() {
                result.insert(
                    next.clone(),
                    PfsEntry {
                        distance: proposed,
                        parent: Some(current.clone()),
                        counter,
                    },
                );
                counter += 1;
                queue.push(next.clone(), Reverse(NotNan::new(proposed).unwrap()));
                visitor.not_encountered(&scope);
                visitor.node_open(&scope);
            } else if proposed < adj {
                result.insert(
                    next.clone(),
                    PfsEntry {
                        distance: proposed,
                        parent: Some(current.clone()),
                        counter,
                    },
                );
                counter += 1;
                queue.push(next.clone(), Reverse(NotNan::new(proposed).unwrap()));
                visitor.better_path(&scope);
                visitor.node_open(&scope);
            } else if (proposed - adj).abs() < f64::EPSILON {
                visitor.node_closed(&scope);
            }
        }
    }
    Ok(result)
}
