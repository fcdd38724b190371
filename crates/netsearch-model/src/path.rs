//! Paths and path search results.

use std::collections::BTreeMap;

use netsearch_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::edge::EdgeData;
use crate::node::Node;

/// One path: nodes plus co-ordered edge data, so `edge_data[i]` connects
/// `path[i]` to `path[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub path: Vec<Node>,
    pub edge_data: Vec<EdgeData>,
}

impl Path {
    pub fn node_count(&self) -> usize {
        self.path.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_data.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.len() < 2 {
            return Err(Error::Validation(format!(
                "path has {} node(s), need at least 2",
                self.path.len()
            )));
        }
        if self.edge_data.len() + 1 != self.path.len() {
            return Err(Error::Validation(format!(
                "path has {} nodes but {} edges",
                self.path.len(),
                self.edge_data.len()
            )));
        }
        for (i, (hop, edge)) in self.path.windows(2).zip(&self.edge_data).enumerate() {
            if !edge.subject().same_entity(&hop[0]) || !edge.object().same_entity(&hop[1]) {
                return Err(Error::Validation(format!(
                    "edge {} ({} -> {}) does not connect {} -> {}",
                    i,
                    edge.subject().display_name(),
                    edge.object().display_name(),
                    hop[0].display_name(),
                    hop[1].display_name()
                )));
            }
            edge.validate()?;
        }
        Ok(())
    }
}

/// Paths found by one search, bucketed by node count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResultData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Node>,
    #[serde(default)]
    pub paths: BTreeMap<usize, Vec<Path>>,
}

impl PathResultData {
    pub fn is_empty(&self) -> bool {
        self.paths.values().all(|bucket| bucket.is_empty())
    }

    pub fn total_paths(&self) -> usize {
        self.paths.values().map(Vec::len).sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.is_none() && self.target.is_none() {
            return Err(Error::Validation(
                "path results carry neither source nor target".into(),
            ));
        }
        for (node_count, bucket) in &self.paths {
            for path in bucket {
                if path.node_count() != *node_count {
                    return Err(Error::Validation(format!(
                        "path of {} nodes stored under bucket {}",
                        path.node_count(),
                        node_count
                    )));
                }
                path.validate()?;
            }
        }
        Ok(())
    }
}
