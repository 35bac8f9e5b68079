/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::edge::DEFAULT_WEIGHT;
use crate::dachshund::error::{BeagleError, BeagleResult};
use crate::dachshund::graph::{EdgeConfig, Graph, NodeConfig};
use serde_json::Value;

/// Resolves a weight token into a finite number, `+-inf`, or the default
/// weight, per the sentinel strings a JSON/CSV source may carry:
/// `"Infinity"`, `"-Infinity"`, `"MAX"`, `"MIN"`, `"undefined"`.
pub fn parse_weight_sentinel(token: &str) -> Option<f64> {
    match token {
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "MAX" => Some(f64::MAX),
        "MIN" => Some(f64::MIN),
        "undefined" => Some(DEFAULT_WEIGHT),
        _ => token.parse::<f64>().ok(),
    }
}

fn parse_weight_value(value: &Value) -> BeagleResult<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| BeagleError::invalid_input(format!("malformed weight: {}", value))),
        Value::String(s) => parse_weight_sentinel(s)
            .ok_or_else(|| BeagleError::invalid_input(format!("malformed weight: {}", s))),
        other => Err(BeagleError::invalid_input(format!(
            "malformed weight: {}",
            other
        ))),
    }
}

/// Builds a `Graph` from the JSON graph wire format:
/// `{name, data: { <node_id>: { features?, coords?, edges: [ {to, directed?,
/// weighted?, weight?, typeOfEdge?} ] } } }`.
///
/// Edge ids are synthesized as `"{src}_{tgt}_{d|u}"`. A duplicate id, or the
/// reverse id of an already-registered undirected edge, is silently
/// skipped rather than surfaced as an error -- this mirrors how an
/// undirected edge is naturally listed from both endpoints' adjacency in
/// this format.
pub fn parse_json_graph(text: &str) -> BeagleResult<Graph> {
    let root: Value = serde_json::from_str(text)?;
    let data = root
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| BeagleError::invalid_input("JSON graph missing `data` object".to_owned()))?;

    let mut graph = Graph::new();
    for node_id in data.keys() {
        let node_def = &data[node_id];
        let mut cfg = NodeConfig::default();
        if let Some(features) = node_def.get("features").and_then(Value::as_object) {
            for (k, v) in features {
                cfg.features.insert(k.clone(), v.clone());
            }
        }
        if let Some(coords) = node_def.get("coords") {
            cfg.features.insert("coords".to_owned(), coords.clone());
        }
        graph.add_node_by_id(node_id.clone(), cfg)?;
    }

    for (src, node_def) in data {
        let edges = match node_def.get("edges").and_then(Value::as_array) {
            Some(edges) => edges,
            None => continue,
        };
        for edge_def in edges {
            let to = edge_def
                .get("to")
                .and_then(Value::as_str)
                .ok_or_else(|| BeagleError::invalid_input("edge missing `to`".to_owned()))?;
            let directed = edge_def
                .get("directed")
                .and_then(Value::as_bool)
                .unwrap_or(true);
            let weighted = edge_def
                .get("weighted")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let weight = match edge_def.get("weight") {
                Some(w) if weighted => parse_weight_value(w)?,
                _ => f64::NAN,
            };
            let label = edge_def
                .get("typeOfEdge")
                .and_then(Value::as_str)
                .map(str::to_owned);

            let suffix = if directed { "d" } else { "u" };
            let id = format!("{}_{}_{}", src, to, suffix);
            let reverse_id = format!("{}_{}_{}", to, src, suffix);
            if graph.has_edge_id(&id.clone().into()) {
                continue;
            }
            if !directed && graph.has_edge_id(&reverse_id.clone().into()) {
                continue;
            }

            graph.add_edge_by_id(
                id,
                src.clone(),
                to.to_owned(),
                EdgeConfig {
                    directed,
                    weighted,
                    weight,
                    label,
                },
            )?;
        }
    }

    Ok(graph)
}
