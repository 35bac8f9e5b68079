/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod csv;
pub mod json;

pub use csv::{parse_adjacency_list, parse_edge_list, CsvConfig, DirectionMode};
pub use json::parse_json_graph;
