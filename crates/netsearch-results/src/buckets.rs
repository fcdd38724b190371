//! Path results grouped by length, ready for display.

use netsearch_core::Result;
use netsearch_model::{Node, Path, PathResultData};
use serde::Serialize;

use crate::aggregate::EdgeSummary;

/// One path with its edges summarized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathView {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeSummary>,
}

impl PathView {
    pub fn from_path(path: &Path) -> Self {
        Self {
            nodes: path.path.clone(),
            edges: path.edge_data.iter().map(EdgeSummary::from_edge).collect(),
        }
    }

    /// `A → B → C`
    pub fn label(&self) -> String {
        self.nodes
            .iter()
            .map(Node::display_name)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// All paths with the same number of nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathBucket {
    pub node_count: usize,
    pub edge_count: usize,
    pub paths: Vec<PathView>,
}

/// A validated path search result. Buckets ascend by node count and empty
/// buckets are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSection {
    pub source: Option<Node>,
    pub target: Option<Node>,
    pub buckets: Vec<PathBucket>,
}

impl PathSection {
    /// Fails when any path is stored under the wrong bucket or its edges do
    /// not chain.
    pub fn from_data(data: &PathResultData) -> Result<Self> {
        data.validate()?;
        let buckets = data
            .paths
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(node_count, paths)| PathBucket {
                node_count: *node_count,
                edge_count: node_count.saturating_sub(1),
                paths: paths.iter().map(PathView::from_path).collect(),
            })
            .collect();
        Ok(Self {
            source: data.source.clone(),
            target: data.target.clone(),
            buckets,
        })
    }

    pub fn total_paths(&self) -> usize {
        self.buckets.iter().map(|b| b.paths.len()).sum()
    }

    pub fn bucket(&self, node_count: usize) -> Option<&PathBucket> {
        self.buckets.iter().find(|b| b.node_count == node_count)
    }
}
