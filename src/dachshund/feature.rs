/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use fxhash::FxHashMap;
use serde_json::Value;

/// Opaque per-node/per-edge attribute value: a mapping from a string key to
/// an arbitrary value. Represented as `serde_json::Value` rather than a
/// hand-rolled tagged enum: the crate already depends on `serde_json` for
/// its JSON graph format, `Value` already covers the variant set needed
/// (int, float, string, bool, mapping, sequence, plus null), and it
/// composes for free with `merge_objects`/`clone`.
pub type FeatureValue = Value;

/// A node or edge's feature bag. `FxHashMap` (not `std::HashMap`) is the
/// hasher used for small, hot internal maps throughout this crate.
pub type FeatureBag = FxHashMap<String, FeatureValue>;
