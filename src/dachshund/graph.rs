/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::edge::Edge;
use crate::dachshund::error::{BeagleError, BeagleResult};
use crate::dachshund::feature::FeatureBag;
use crate::dachshund::id_types::{EdgeId, NodeId};
use crate::dachshund::node::Node;
use fxhash::FxHashMap;
use serde::Serialize;

/// The graph's derived directedness view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// No edges yet.
    Init,
    /// Only directed edges.
    Directed,
    /// Only undirected edges.
    Undirected,
    /// Both directed and undirected edges present.
    Mixed,
}

/// Result shape for `Graph::get_stats`.
#[derive(Clone, Debug, Serialize)]
pub struct GraphStats {
    pub nr_nodes: usize,
    pub nr_dir_edges: usize,
    pub nr_und_edges: usize,
    pub mode: Mode,
    pub density: f64,
}

/// Per-node construction options for `Graph::add_node_by_id`.
#[derive(Clone, Debug, Default)]
pub struct NodeConfig {
    pub label: Option<String>,
    pub features: FeatureBag,
}

/// Per-edge construction options for `Graph::add_edge_by_id`.
#[derive(Clone, Debug)]
pub struct EdgeConfig {
    pub directed: bool,
    pub weighted: bool,
    pub weight: f64,
    pub label: Option<String>,
}
impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
            weight: f64::NAN,
            label: None,
        }
    }
}

/// Owns nodes and edges, enforces the container's structural invariants,
/// and tracks degree/mode accounting. Nodes live in a `HashMap<NodeId,
/// Node>` plus a side `Vec<NodeId>` that preserves insertion order across
/// a mixed directed/undirected model.
pub struct Graph {
    nodes: FxHashMap<NodeId, Node>,
    node_order: Vec<NodeId>,
    edges: FxHashMap<EdgeId, Edge>,
    edge_order: Vec<EdgeId>,
    directed_ids: Vec<EdgeId>,
    undirected_ids: Vec<EdgeId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            node_order: Vec::new(),
            edges: FxHashMap::default(),
            edge_order: Vec::new(),
            directed_ids: Vec::new(),
            undirected_ids: Vec::new(),
        }
    }

    // ---- node construction / queries ----------------------------------

    pub fn add_node(&mut self, id: impl Into<NodeId>) -> BeagleResult<()> {
        self.add_node_by_id(id, NodeConfig::default())
    }

    pub fn add_node_by_id(&mut self, id: impl Into<NodeId>, cfg: NodeConfig) -> BeagleResult<()> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(BeagleError::duplicate(format!("node {} already exists", id)));
        }
        let mut node = Node::new(id.clone());
        if let Some(label) = cfg.label {
            node.set_label(label);
        }
        for (k, v) in cfg.features {
            node.set_feature(k, v);
        }
        self.node_order.push(id.clone());
        self.nodes.insert(id, node);
        Ok(())
    }

    pub fn has_node_id(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get_node_by_id(&self, id: &NodeId) -> BeagleResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| BeagleError::not_found(format!("node {}", id)))
    }

    pub fn get_node_by_id_mut(&mut self, id: &NodeId) -> BeagleResult<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| BeagleError::not_found(format!("node {}", id)))
    }

    /// Nodes in insertion order: iteration order matches insertion order
    /// across every projection and algorithm.
    pub fn get_node_ids(&self) -> &[NodeId] {
        &self.node_order
    }

    pub fn get_nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().map(move |id| &self.nodes[id])
    }

    pub fn nr_nodes(&self) -> usize {
        self.node_order.len()
    }

    // ---- edge construction / queries -----------------------------------

    pub fn add_edge_by_id(
        &mut self,
        id: impl Into<EdgeId>,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        cfg: EdgeConfig,
    ) -> BeagleResult<()> {
        let edge = Edge::new(id.into(), cfg.label, a.into(), b.into(), cfg.directed, cfg.weighted, cfg.weight);
        self.add_edge(edge)
    }

    pub fn add_edge(&mut self, edge: Edge) -> BeagleResult<()> {
        if self.edges.contains_key(&edge.id) {
            return Err(BeagleError::duplicate(format!("edge {} already exists", edge.id)));
        }
        if !self.nodes.contains_key(&edge.a) {
            return Err(BeagleError::invalid_input(format!(
                "edge {} endpoint {} not in graph",
                edge.id, edge.a
            )));
        }
        if !self.nodes.contains_key(&edge.b) {
            return Err(BeagleError::invalid_input(format!(
                "edge {} endpoint {} not in graph",
                edge.id, edge.b
            )));
        }
        if !edge.directed && edge.is_self_loop() {
            let existing = self.nodes[&edge.a].und_edge_entries();
            if existing.iter().any(|e| e.neighbor == edge.a) {
                return Err(BeagleError::duplicate(format!(
                    "node {} already has an undirected self-loop",
                    edge.a
                )));
            }
        }

        let a = edge.a.clone();
        let b = edge.b.clone();
        self.nodes.get_mut(&a).unwrap().add_edge(&edge)?;
        if b != a {
            self.nodes.get_mut(&b).unwrap().add_edge(&edge)?;
        }

        if edge.directed {
            self.directed_ids.push(edge.id.clone());
        } else {
            self.undirected_ids.push(edge.id.clone());
        }
        self.edge_order.push(edge.id.clone());
        self.edges.insert(edge.id.clone(), edge);
        Ok(())
    }

    pub fn has_edge_id(&self, id: &EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    pub fn get_edge_by_id(&self, id: &EdgeId) -> BeagleResult<&Edge> {
        self.edges
            .get(id)
            .ok_or_else(|| BeagleError::not_found(format!("edge {}", id)))
    }

    pub fn get_edge_ids(&self) -> &[EdgeId] {
        &self.edge_order
    }

    pub fn get_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_order.iter().map(move |id| &self.edges[id])
    }

    pub fn nr_dir_edges(&self) -> usize {
        self.directed_ids.len()
    }

    pub fn nr_und_edges(&self) -> usize {
        self.undirected_ids.len()
    }

    // ---- deletion (cascading) -------------------------------------------

    /// Removes `edge_id` from both endpoints' buckets and from the graph's
    /// edge maps. No-op if the edge does not exist.
    pub fn delete_edge(&mut self, edge_id: &EdgeId) -> BeagleResult<()> {
        let edge = match self.edges.remove(edge_id) {
            Some(e) => e,
            None => return Ok(()),
        };
        self.edge_order.retain(|id| id != edge_id);
        if edge.directed {
            self.directed_ids.retain(|id| id != edge_id);
        } else {
            self.undirected_ids.retain(|id| id != edge_id);
        }
        if let Some(node) = self.nodes.get_mut(&edge.a) {
            node.remove_edge(edge_id);
        }
        if edge.b != edge.a {
            if let Some(node) = self.nodes.get_mut(&edge.b) {
                node.remove_edge(edge_id);
            }
        }
        Ok(())
    }

    /// Removes every edge incident to `node_id`, then the node itself
    /// Removing a node removes all of its incident edges first.
    pub fn delete_node(&mut self, node_id: &NodeId) -> BeagleResult<()> {
        let node = self
            .nodes
            .get(node_id)
            .ok_or_else(|| BeagleError::not_found(format!("node {}", node_id)))?;
        let incident: Vec<EdgeId> = node.all_edge_entries().into_iter().map(|e| e.edge).collect();
        for edge_id in incident {
            self.delete_edge(&edge_id)?;
        }
        self.nodes.remove(node_id);
        self.node_order.retain(|id| id != node_id);
        Ok(())
    }

    // ---- derived views ---------------------------------------------------

    pub fn get_mode(&self) -> Mode {
        match (self.nr_dir_edges() > 0, self.nr_und_edges() > 0) {
            (false, false) => Mode::Init,
            (true, false) => Mode::Directed,
            (false, true) => Mode::Undirected,
            (true, true) => Mode::Mixed,
        }
    }

    pub fn get_stats(&self) -> GraphStats {
        let n = self.nr_nodes();
        let dir = self.nr_dir_edges();
        let und = self.nr_und_edges();
        let density = if n < 2 {
            0.0
        } else {
            let max_pairs = (n * (n - 1)) as f64;
            let total = if und > 0 {
                (dir + 2 * und) as f64
            } else {
                dir as f64
            };
            total / max_pairs
        };
        GraphStats {
            nr_nodes: n,
            nr_dir_edges: dir,
            nr_und_edges: und,
            mode: self.get_mode(),
            density,
        }
    }
}
