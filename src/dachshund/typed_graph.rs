/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::edge::Edge;
use crate::dachshund::error::BeagleResult;
use crate::dachshund::graph::{EdgeConfig, Graph, NodeConfig};
use crate::dachshund::id_types::{canonicalize_type_name, EdgeId, NodeId, GENERIC_TYPE};
use fxhash::FxHashMap;
use std::ops::{Deref, DerefMut};

fn type_bucket(entity_id: &str, label: &str) -> String {
    if label == entity_id {
        GENERIC_TYPE.to_owned()
    } else {
        canonicalize_type_name(label)
    }
}

/// Adds a typed overlay to `Graph`: every node/edge lives in exactly one
/// type bucket, derived from its label rather than tracked as a separate
/// field, so an untyped entity (label == id) always lands in the reserved
/// `GENERIC` bucket.
///
/// `TypedGraph` derefs to the underlying `Graph` so every C2 operation is
/// still available; it only adds bookkeeping around `add_node*`,
/// `add_edge*`, `delete_node` and `delete_edge` to keep the overlay in
/// sync.
pub struct TypedGraph {
    base: Graph,
    typed_nodes: FxHashMap<String, Vec<NodeId>>,
    typed_edges: FxHashMap<String, Vec<EdgeId>>,
}

impl Default for TypedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TypedGraph {
    type Target = Graph;
    fn deref(&self) -> &Graph {
        &self.base
    }
}
impl DerefMut for TypedGraph {
    fn deref_mut(&mut self) -> &mut Graph {
        &mut self.base
    }
}

impl TypedGraph {
    pub fn new() -> Self {
        Self {
            base: Graph::new(),
            typed_nodes: FxHashMap::default(),
            typed_edges: FxHashMap::default(),
        }
    }

    pub fn add_node(&mut self, id: impl Into<NodeId>) -> BeagleResult<()> {
        self.add_node_by_id(id, NodeConfig::default())
    }

    pub fn add_node_by_id(&mut self, id: impl Into<NodeId>, cfg: NodeConfig) -> BeagleResult<()> {
        let id = id.into();
        let label = cfg.label.clone().unwrap_or_else(|| id.value().to_owned());
        self.base.add_node_by_id(id.clone(), cfg)?;
        let bucket = type_bucket(id.value(), &label);
        self.typed_nodes.entry(bucket).or_default().push(id);
        Ok(())
    }

    pub fn add_edge(&mut self, edge: Edge) -> BeagleResult<()> {
        let id = edge.id.clone();
        let label = edge.label.clone();
        self.base.add_edge(edge)?;
        let bucket = type_bucket(id.value(), &label);
        self.typed_edges.entry(bucket).or_default().push(id);
        Ok(())
    }

    pub fn add_edge_by_id(
        &mut self,
        id: impl Into<EdgeId>,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        cfg: EdgeConfig,
    ) -> BeagleResult<()> {
        let id = id.into();
        let label = cfg.label.clone().unwrap_or_else(|| id.value().to_owned());
        self.base.add_edge_by_id(id.clone(), a, b, cfg)?;
        let bucket = type_bucket(id.value(), &label);
        self.typed_edges.entry(bucket).or_default().push(id);
        Ok(())
    }

    pub fn delete_edge(&mut self, edge_id: &EdgeId) -> BeagleResult<()> {
        if let Ok(edge) = self.base.get_edge_by_id(edge_id) {
            let bucket = type_bucket(edge_id.value(), &edge.label);
            self.remove_from_bucket_edges(&bucket, edge_id);
        }
        self.base.delete_edge(edge_id)
    }

    pub fn delete_node(&mut self, node_id: &NodeId) -> BeagleResult<()> {
        let incident: Vec<EdgeId> = match self.base.get_node_by_id(node_id) {
            Ok(node) => node.all_edge_entries().into_iter().map(|e| e.edge).collect(),
            Err(_) => Vec::new(),
        };
        for edge_id in incident {
            self.delete_edge(&edge_id)?;
        }
        if let Ok(node) = self.base.get_node_by_id(node_id) {
            let bucket = type_bucket(node_id.value(), node.get_label());
            self.remove_from_bucket_nodes(&bucket, node_id);
        }
        self.base.delete_node(node_id)
    }

    fn remove_from_bucket_nodes(&mut self, bucket: &str, id: &NodeId) {
        if let Some(ids) = self.typed_nodes.get_mut(bucket) {
            ids.retain(|x| x != id);
            if ids.is_empty() {
                self.typed_nodes.remove(bucket);
            }
        }
    }
    fn remove_from_bucket_edges(&mut self, bucket: &str, id: &EdgeId) {
        if let Some(ids) = self.typed_edges.get_mut(bucket) {
            ids.retain(|x| x != id);
            if ids.is_empty() {
                self.typed_edges.remove(bucket);
            }
        }
    }

    pub fn node_type_names(&self) -> impl Iterator<Item = &str> {
        self.typed_nodes.keys().map(String::as_str)
    }
    pub fn edge_type_names(&self) -> impl Iterator<Item = &str> {
        self.typed_edges.keys().map(String::as_str)
    }
    pub fn node_ids_of_type(&self, type_name: &str) -> &[NodeId] {
        self.typed_nodes
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
    pub fn edge_ids_of_type(&self, type_name: &str) -> &[EdgeId] {
        self.typed_edges
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
