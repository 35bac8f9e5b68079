/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::edge::Edge;
use crate::dachshund::error::{BeagleError, BeagleResult};
use crate::dachshund::feature::{FeatureBag, FeatureValue};
use crate::dachshund::id_types::{EdgeId, NodeId};
use fxhash::FxHashMap;
use std::collections::HashSet;

/// One hop of a neighborhood walk: the neighbor reached, and the edge used
/// to reach it. Returned by `Node::{prev,next,conn,reach,all}_nodes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborEntry {
    pub neighbor: NodeId,
    pub edge: EdgeId,
}

/// Deduplicates a neighborhood walk by an identity function, keeping the
/// first occurrence of each identity. An optional identity function lets
/// callers collapse multi-edges between the same pair of nodes.
pub fn dedup_neighbors<F>(entries: Vec<NeighborEntry>, identity: Option<F>) -> Vec<NeighborEntry>
where
    F: Fn(&NeighborEntry) -> String,
{
    match identity {
        None => entries,
        Some(identity) => {
            let mut seen: HashSet<String> = HashSet::new();
            entries
                .into_iter()
                .filter(|e| seen.insert(identity(e)))
                .collect()
        }
    }
}

/// Core data structure used to represent a node in the graph. A node owns
/// no edges directly -- it owns bucketed *references* to edges that live in
/// the owning `Graph`, keyed by edge id, split into four buckets:
/// incoming, outgoing, undirected, and self-loop.
pub struct Node {
    pub id: NodeId,
    label: String,
    features: FeatureBag,
    in_edges: FxHashMap<EdgeId, NodeId>,
    out_edges: FxHashMap<EdgeId, NodeId>,
    und_edges: FxHashMap<EdgeId, NodeId>,
    self_edges: FxHashMap<EdgeId, NodeId>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        let label = id.value().to_owned();
        Self {
            id,
            label,
            features: FxHashMap::default(),
            in_edges: FxHashMap::default(),
            out_edges: FxHashMap::default(),
            und_edges: FxHashMap::default(),
            self_edges: FxHashMap::default(),
        }
    }

    pub fn get_label(&self) -> &str {
        &self.label
    }
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn get_feature(&self, key: &str) -> Option<&FeatureValue> {
        self.features.get(key)
    }
    pub fn set_feature(&mut self, key: impl Into<String>, value: FeatureValue) {
        self.features.insert(key.into(), value);
    }
    pub fn delete_feature(&mut self, key: &str) -> Option<FeatureValue> {
        self.features.remove(key)
    }
    pub fn clear_features(&mut self) {
        self.features.clear();
    }

    pub fn in_degree(&self) -> usize {
        self.in_edges.len()
    }
    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }
    pub fn und_degree(&self) -> usize {
        self.und_edges.len()
    }
    pub fn self_degree(&self) -> usize {
        self.self_edges.len()
    }

    pub fn has_edge(&self, edge_id: &EdgeId) -> bool {
        self.in_edges.contains_key(edge_id)
            || self.out_edges.contains_key(edge_id)
            || self.und_edges.contains_key(edge_id)
    }

    /// Registers `edge` against this node's buckets, following the
    /// directed/undirected/self-loop placement rules of `Graph::add_edge`.
    pub fn add_edge(&mut self, edge: &Edge) -> BeagleResult<()> {
        if !edge.touches(&self.id) {
            return Err(BeagleError::invalid_input(format!(
                "edge {} does not touch node {}",
                edge.id, self.id
            )));
        }
        if edge.directed {
            if edge.a == self.id {
                self.out_edges
                    .entry(edge.id.clone())
                    .or_insert_with(|| edge.b.clone());
                if edge.b == self.id {
                    self.in_edges
                        .entry(edge.id.clone())
                        .or_insert_with(|| edge.a.clone());
                }
            } else if edge.b == self.id {
                self.in_edges
                    .entry(edge.id.clone())
                    .or_insert_with(|| edge.a.clone());
            }
        } else {
            if self.und_edges.contains_key(&edge.id) {
                return Err(BeagleError::duplicate(format!(
                    "undirected edge {} already present on node {}",
                    edge.id, self.id
                )));
            }
            let neighbor = edge.other_endpoint(&self.id);
            self.und_edges.insert(edge.id.clone(), neighbor);
        }
        if edge.is_self_loop() {
            let self_id = self.id.clone();
            self.self_edges
                .entry(edge.id.clone())
                .or_insert_with(|| self_id);
        }
        Ok(())
    }

    /// Removes `edge_id` from every bucket it might be in. No-op if absent.
    pub fn remove_edge(&mut self, edge_id: &EdgeId) {
        self.in_edges.remove(edge_id);
        self.out_edges.remove(edge_id);
        self.und_edges.remove(edge_id);
        self.self_edges.remove(edge_id);
    }

    fn entries(bucket: &FxHashMap<EdgeId, NodeId>) -> Vec<NeighborEntry> {
        bucket
            .iter()
            .map(|(edge, neighbor)| NeighborEntry {
                neighbor: neighbor.clone(),
                edge: edge.clone(),
            })
            .collect()
    }

    pub fn in_edge_entries(&self) -> Vec<NeighborEntry> {
        Self::entries(&self.in_edges)
    }
    pub fn out_edge_entries(&self) -> Vec<NeighborEntry> {
        Self::entries(&self.out_edges)
    }
    pub fn und_edge_entries(&self) -> Vec<NeighborEntry> {
        Self::entries(&self.und_edges)
    }
    pub fn self_edge_entries(&self) -> Vec<NeighborEntry> {
        Self::entries(&self.self_edges)
    }
    /// `in_edges ∪ out_edges` -- the node's directed incidence.
    pub fn dir_edge_entries(&self) -> Vec<NeighborEntry> {
        let mut v = self.in_edge_entries();
        v.extend(self.out_edge_entries());
        v
    }
    /// `in_edges ∪ out_edges ∪ und_edges` -- every edge touching this node.
    pub fn all_edge_entries(&self) -> Vec<NeighborEntry> {
        let mut v = self.dir_edge_entries();
        v.extend(self.und_edge_entries());
        v
    }

    /// Predecessors: nodes with a directed edge into this one.
    pub fn prev_nodes(&self) -> Vec<NeighborEntry> {
        self.in_edge_entries()
    }
    /// Successors: nodes this one has a directed edge into.
    pub fn next_nodes(&self) -> Vec<NeighborEntry> {
        self.out_edge_entries()
    }
    /// Undirected neighbors.
    pub fn conn_nodes(&self) -> Vec<NeighborEntry> {
        self.und_edge_entries()
    }
    /// `nextNodes ∪ connNodes`: the "forward reach" of a node under
    /// mixed-mode traversal.
    pub fn reach_nodes(&self) -> Vec<NeighborEntry> {
        let mut v = self.next_nodes();
        v.extend(self.conn_nodes());
        v
    }
    /// `prevNodes ∪ nextNodes ∪ connNodes`: every neighbor reachable in
    /// either direction.
    pub fn all_neighbors(&self) -> Vec<NeighborEntry> {
        let mut v = self.prev_nodes();
        v.extend(self.next_nodes());
        v.extend(self.conn_nodes());
        v
    }
}
