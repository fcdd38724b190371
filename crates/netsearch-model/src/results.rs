//! The `/query` response and its optional sections.

use netsearch_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::edge::EdgeData;
use crate::node::Node;
use crate::path::PathResultData;

/// Common ontological parents of source and target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OntologyResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Node>,
    #[serde(default)]
    pub parents: Vec<Node>,
}

impl OntologyResults {
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        for node in self.source.iter().chain(&self.target).chain(&self.parents) {
            node.validate()?;
        }
        Ok(())
    }
}

/// Shared targets (`downstream`) or shared regulators of source and target.
///
/// `source_data[i]` and `target_data[i]` describe the same interactor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SharedInteractorsResults {
    #[serde(default)]
    pub source_data: Vec<EdgeData>,
    #[serde(default)]
    pub target_data: Vec<EdgeData>,
    #[serde(default)]
    pub downstream: bool,
}

impl SharedInteractorsResults {
    pub fn validate(&self) -> Result<()> {
        if self.source_data.len() != self.target_data.len() {
            return Err(Error::LengthMismatch {
                source_len: self.source_data.len(),
                target_len: self.target_data.len(),
            });
        }
        for edge in self.source_data.iter().chain(&self.target_data) {
            edge.validate()?;
        }
        Ok(())
    }
}

/// Top-level response of `POST /query`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Results {
    pub query_hash: String,
    #[serde(default)]
    pub time_limit: f64,
    #[serde(default)]
    pub timed_out: bool,
    /// Statement hashes, as strings so JavaScript clients keep precision.
    #[serde(default)]
    pub hashes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_results: Option<PathResultData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_path_results: Option<PathResultData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology_results: Option<OntologyResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_target_results: Option<SharedInteractorsResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_regulators_results: Option<SharedInteractorsResults>,
}
