/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Uniquely identifies a `Node`, relative to an existing `Graph`.
///
/// Identity here is a caller-supplied string: a stable unique string
/// within a graph.
#[derive(Clone, Debug, PartialOrd, Ord, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);
impl NodeId {
    pub fn value(&self) -> &str {
        &self.0
    }
}
impl<T> From<T> for NodeId
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Self(s.into())
    }
}
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uniquely identifies an `Edge`, relative to an existing `Graph`.
#[derive(Clone, Debug, PartialOrd, Ord, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);
impl EdgeId {
    pub fn value(&self) -> &str {
        &self.0
    }
}
impl<T> From<T> for EdgeId
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Self(s.into())
    }
}
impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The reserved bucket name for typed-graph entries whose label equals their
/// id.
pub const GENERIC_TYPE: &str = "GENERIC";

/// Canonicalizes a type name the way `TypedGraph` expects it: uppercased.
/// Callers decide separately whether an entity is untyped (label == id, in
/// which case it belongs in `GENERIC_TYPE` rather than under this name).
pub fn canonicalize_type_name(label: &str) -> String {
    label.to_uppercase()
}
