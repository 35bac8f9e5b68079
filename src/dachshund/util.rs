/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use serde_json::{Map, Value};

/// Merges a list of JSON objects into one, later entries overwriting
/// earlier ones key-by-key. Non-object inputs are skipped.
pub fn merge_objects(objects: &[Value]) -> Value {
    let mut merged = Map::new();
    for object in objects {
        if let Value::Object(map) = object {
            for (k, v) in map {
                merged.insert(k.clone(), v.clone());
            }
        }
    }
    Value::Object(merged)
}

/// Concatenates a list of JSON arrays, deduplicating by an identity
/// function; the first occurrence of each identity is kept.
pub fn merge_arrays<F>(arrays: &[Value], identity: F) -> Value
where
    F: Fn(&Value) -> String,
{
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();
    for array in arrays {
        if let Value::Array(items) = array {
            for item in items {
                if seen.insert(identity(item)) {
                    result.push(item.clone());
                }
            }
        }
    }
    Value::Array(result)
}

/// Deep-copies a value built only from plain mappings, sequences, and
/// scalars (no cycles). `serde_json::Value` already satisfies this shape,
/// so a structural clone is just `Value::clone`.
pub fn clone(value: &Value) -> Value {
    value.clone()
}
