//! Turns a raw `Results` payload into typed, validated sections.

use netsearch_core::Result;
use netsearch_model::{Node, OntologyResults, PathResultData, Results, SharedInteractorsResults};
use serde::Serialize;
use tracing::{info, warn};

use crate::buckets::PathSection;
use crate::pairing::SharedInteractorsSection;

/// State of one optional result section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Section<T> {
    /// Missing from the payload, or present but empty.
    Absent,
    Present(T),
    /// Present but failed validation; holds the reason.
    Malformed(String),
}

impl<T> Section<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    pub fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    fn from_result(name: &str, result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Present(value),
            Err(e) => {
                warn!("Dropping malformed {} section: {}", name, e);
                Self::Malformed(e.to_string())
            }
        }
    }
}

/// Common ontological parents of the two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OntologySection {
    pub source: Option<Node>,
    pub target: Option<Node>,
    pub parents: Vec<Node>,
}

/// Which sections have something to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionsPresent {
    pub has_path_res: bool,
    pub has_rev_path_res: bool,
    pub has_ont_res: bool,
    pub has_shared_targets: bool,
    pub has_shared_regulators: bool,
}

impl SectionsPresent {
    pub fn any(&self) -> bool {
        self.has_path_res
            || self.has_rev_path_res
            || self.has_ont_res
            || self.has_shared_targets
            || self.has_shared_regulators
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResults {
    pub query_hash: String,
    pub time_limit: f64,
    pub timed_out: bool,
    pub hashes: Vec<String>,
    pub path_results: Section<PathSection>,
    pub reverse_path_results: Section<PathSection>,
    pub ontology_results: Section<OntologySection>,
    pub shared_target_results: Section<SharedInteractorsSection>,
    pub shared_regulators_results: Section<SharedInteractorsSection>,
}

impl NormalizedResults {
    pub fn sections_present(&self) -> SectionsPresent {
        SectionsPresent {
            has_path_res: self.path_results.is_present(),
            has_rev_path_res: self.reverse_path_results.is_present(),
            has_ont_res: self.ontology_results.is_present(),
            has_shared_targets: self.shared_target_results.is_present(),
            has_shared_regulators: self.shared_regulators_results.is_present(),
        }
    }

    /// Names of sections dropped as malformed.
    pub fn malformed_sections(&self) -> Vec<&'static str> {
        [
            ("path_results", self.path_results.is_malformed()),
            ("reverse_path_results", self.reverse_path_results.is_malformed()),
            ("ontology_results", self.ontology_results.is_malformed()),
            ("shared_target_results", self.shared_target_results.is_malformed()),
            (
                "shared_regulators_results",
                self.shared_regulators_results.is_malformed(),
            ),
        ]
        .into_iter()
        .filter_map(|(name, bad)| bad.then_some(name))
        .collect()
    }

    pub fn timeout_notice(&self) -> Option<String> {
        self.timed_out.then(|| {
            format!(
                "The search timed out after {} seconds; the results shown may be incomplete.",
                self.time_limit
            )
        })
    }
}

/// Single-pass normalizer for `/query` responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultNormalizer;

impl ResultNormalizer {
    pub fn normalize(results: Results) -> NormalizedResults {
        let normalized = NormalizedResults {
            path_results: Self::path_section("path_results", results.path_results.as_ref()),
            reverse_path_results: Self::path_section(
                "reverse_path_results",
                results.reverse_path_results.as_ref(),
            ),
            ontology_results: Self::ontology_section(results.ontology_results.as_ref()),
            shared_target_results: Self::shared_section(
                "shared_target_results",
                results.shared_target_results.as_ref(),
            ),
            shared_regulators_results: Self::shared_section(
                "shared_regulators_results",
                results.shared_regulators_results.as_ref(),
            ),
            query_hash: results.query_hash,
            time_limit: results.time_limit,
            timed_out: results.timed_out,
            hashes: results.hashes,
        };

        if normalized.timed_out {
            warn!(
                "Query {} timed out after {}s",
                normalized.query_hash, normalized.time_limit
            );
        }
        info!(
            "Normalized query {}: {:?}",
            normalized.query_hash,
            normalized.sections_present()
        );
        normalized
    }

    fn path_section(name: &str, data: Option<&PathResultData>) -> Section<PathSection> {
        match data {
            Some(data) if !data.is_empty() => {
                Section::from_result(name, PathSection::from_data(data))
            }
            _ => Section::Absent,
        }
    }

    fn ontology_section(data: Option<&OntologyResults>) -> Section<OntologySection> {
        match data {
            Some(data) if !data.is_empty() => Section::from_result(
                "ontology_results",
                data.validate().map(|_| OntologySection {
                    source: data.source.clone(),
                    target: data.target.clone(),
                    parents: data.parents.clone(),
                }),
            ),
            _ => Section::Absent,
        }
    }

    fn shared_section(
        name: &str,
        data: Option<&SharedInteractorsResults>,
    ) -> Section<SharedInteractorsSection> {
        match data {
            Some(data) if !data.source_data.is_empty() && !data.target_data.is_empty() => {
                Section::from_result(name, SharedInteractorsSection::from_data(data))
            }
            _ => Section::Absent,
        }
    }
}
