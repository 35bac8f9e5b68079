/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::edge::DEFAULT_WEIGHT;
use crate::dachshund::error::{BeagleError, BeagleResult};
use crate::dachshund::graph::{EdgeConfig, Graph, NodeConfig};
use crate::dachshund::io::json::parse_weight_sentinel;

/// Default edge direction for rows that don't carry an explicit one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectionMode {
    Directed,
    Undirected,
}

/// Shared knobs for both CSV readers.
#[derive(Clone, Debug)]
pub struct CsvConfig {
    pub separator: char,
    pub explicit_direction: bool,
    pub direction_mode: DirectionMode,
    pub weighted: bool,
}
impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            explicit_direction: false,
            direction_mode: DirectionMode::Directed,
            weighted: false,
        }
    }
}

fn parse_weight_token(token: &str) -> BeagleResult<f64> {
    parse_weight_sentinel(token)
        .ok_or_else(|| BeagleError::invalid_input(format!("malformed weight: {}", token)))
}

fn ensure_node(graph: &mut Graph, id: &str) -> BeagleResult<()> {
    if !graph.has_node_id(&id.to_owned().into()) {
        graph.add_node_by_id(id.to_owned(), NodeConfig::default())?;
    }
    Ok(())
}

fn add_edge_once(
    graph: &mut Graph,
    src: &str,
    tgt: &str,
    directed: bool,
    weighted: bool,
    weight: f64,
) -> BeagleResult<()> {
    let suffix = if directed { "d" } else { "u" };
    let id = format!("{}_{}_{}", src, tgt, suffix);
    let reverse_id = format!("{}_{}_{}", tgt, src, suffix);
    if graph.has_edge_id(&id.clone().into()) {
        return Ok(());
    }
    if !directed && graph.has_edge_id(&reverse_id.into()) {
        return Ok(());
    }
    graph.add_edge_by_id(
        id,
        src.to_owned(),
        tgt.to_owned(),
        EdgeConfig {
            directed,
            weighted,
            weight,
            label: None,
        },
    )
}

/// Parses one line per source node; tokens after the first are neighbor
/// ids. When `cfg.weighted`, each neighbor is followed by its own weight
/// token, so the remaining tokens are consumed two at a time.
pub fn parse_adjacency_list(text: &str, cfg: &CsvConfig) -> BeagleResult<Graph> {
    let mut graph = Graph::new();
    let directed = matches!(cfg.direction_mode, DirectionMode::Directed);

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let tokens: Vec<&str> = line.split(cfg.separator).collect();
        let src = tokens[0];
        ensure_node(&mut graph, src)?;
        let rest = &tokens[1..];
        let step = if cfg.weighted { 2 } else { 1 };
        let mut i = 0;
        while i < rest.len() {
            let neighbor = rest[i];
            let weight = if cfg.weighted {
                let w = rest.get(i + 1).ok_or_else(|| {
                    BeagleError::invalid_input(format!(
                        "adjacency list row missing weight for neighbor {}: {}",
                        neighbor, line
                    ))
                })?;
                parse_weight_token(w)?
            } else {
                DEFAULT_WEIGHT
            };
            ensure_node(&mut graph, neighbor)?;
            add_edge_once(&mut graph, src, neighbor, directed, cfg.weighted, weight)?;
            i += step;
        }
    }
    Ok(graph)
}

/// Parses one line per edge: `source, target [, direction, weight]` when
/// `explicit_direction`; otherwise every edge uses `direction_mode`.
pub fn parse_edge_list(text: &str, cfg: &CsvConfig) -> BeagleResult<Graph> {
    let mut graph = Graph::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let tokens: Vec<&str> = line.split(cfg.separator).map(str::trim).collect();
        if tokens.len() < 2 {
            return Err(BeagleError::invalid_input(format!(
                "edge list row needs at least source and target: {}",
                line
            )));
        }
        let src = tokens[0];
        let tgt = tokens[1];
        ensure_node(&mut graph, src)?;
        ensure_node(&mut graph, tgt)?;

        let (directed, weight_token) = if cfg.explicit_direction {
            let dir_token = tokens.get(2).ok_or_else(|| {
                BeagleError::invalid_input(format!(
                    "edge list row missing direction column: {}",
                    line
                ))
            })?;
            let directed = matches!(*dir_token, "d" | "directed" | "D");
            (directed, tokens.get(3).copied())
        } else {
            (
                matches!(cfg.direction_mode, DirectionMode::Directed),
                tokens.get(2).copied(),
            )
        };

        let weight = match weight_token {
            Some(w) if cfg.weighted => parse_weight_token(w)?,
            _ => DEFAULT_WEIGHT,
        };
        add_edge_once(&mut graph, src, tgt, directed, cfg.weighted, weight)?;
    }
    Ok(graph)
}
