/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::id_types::{EdgeId, NodeId};

/// Edge weight used by algorithms that require one when `weighted` is false:
/// treated as `1` in those algorithms.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A graph edge. `(a, b)` denote the same undirected edge as `(b, a)`;
/// `directed` distinguishes the two interpretations of the pair.
#[derive(Clone, Debug)]
pub struct Edge {
    pub id: EdgeId,
    pub label: String,
    pub a: NodeId,
    pub b: NodeId,
    pub directed: bool,
    pub weighted: bool,
    weight: f64,
}
impl Edge {
    pub fn new(
        id: EdgeId,
        label: Option<String>,
        a: NodeId,
        b: NodeId,
        directed: bool,
        weighted: bool,
        weight: f64,
    ) -> Self {
        let label = label.unwrap_or_else(|| id.value().to_owned());
        Self {
            id,
            label,
            a,
            b,
            directed,
            weighted,
            weight,
        }
    }

    /// Whether this edge has `a` and `b` as the same node (a self-loop).
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// The edge's weight if `weighted`, else `DEFAULT_WEIGHT`.
    pub fn weight(&self) -> f64 {
        if self.weighted {
            self.weight
        } else {
            DEFAULT_WEIGHT
        }
    }

    /// The raw stored weight, `NaN` when the edge carries none. The
    /// `adjListW`/`adjMatrixW` projections apply the NaN -> DEFAULT_WEIGHT
    /// conversion themselves; the edge just reports what it has.
    pub fn raw_weight(&self) -> f64 {
        if self.weighted {
            self.weight
        } else {
            f64::NAN
        }
    }

    /// Given one endpoint, returns the other. Panics if `from` is not an
    /// endpoint of this edge -- callers are expected to have checked
    /// membership first.
    pub fn other_endpoint(&self, from: &NodeId) -> NodeId {
        if *from == self.a {
            self.b.clone()
        } else if *from == self.b {
            self.a.clone()
        } else {
            panic!("node {} is not an endpoint of edge {}", from, self.id);
        }
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        self.a == *node_id || self.b == *node_id
    }
}
