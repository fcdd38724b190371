//! Evidence aggregation per statement type and per edge.

use netsearch_model::{ContextWeight, EdgeData, Node, Sign, SourceCounts, StmtData, StmtTypeSupport};
use serde::Serialize;

/// Sum source counts key by key; keys missing from a map contribute 0.
pub fn merge_source_counts<'a, I>(maps: I) -> SourceCounts
where
    I: IntoIterator<Item = &'a SourceCounts>,
{
    let mut merged = SourceCounts::new();
    for map in maps {
        for (source, count) in map {
            let total = merged.entry(source.clone()).or_insert(0);
            *total = total.saturating_add(*count);
        }
    }
    merged
}

/// Evidence for one statement type on one edge, recomputed from its
/// statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StmtTypeSummary {
    pub stmt_type: String,
    pub source_counts: SourceCounts,
    pub evidence_count: u64,
    pub stmt_count: usize,
    pub max_belief: f64,
    pub curated: bool,
    pub statements: Vec<StmtData>,
}

impl StmtTypeSummary {
    pub fn from_support(support: &StmtTypeSupport) -> Self {
        let statements = &support.statements;
        Self {
            stmt_type: support.stmt_type.clone(),
            source_counts: merge_source_counts(statements.iter().map(|s| &s.source_counts)),
            evidence_count: statements
                .iter()
                .map(|s| s.evidence_count)
                .fold(0, u64::saturating_add),
            stmt_count: statements.len(),
            max_belief: statements.iter().map(|s| s.belief).fold(0.0, f64::max),
            curated: statements.iter().any(|s| s.curated),
            statements: statements.clone(),
        }
    }
}

/// Renderable summary of one edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSummary {
    pub subject: Node,
    pub object: Node,
    pub belief: f64,
    pub weight: f64,
    pub sign: Option<Sign>,
    pub context_weight: ContextWeight,
    pub db_url_edge: String,
    /// Most evidence first.
    pub stmt_types: Vec<StmtTypeSummary>,
    pub source_counts: SourceCounts,
    pub evidence_count: u64,
    pub stmt_count: usize,
}

impl EdgeSummary {
    pub fn from_edge(edge: &EdgeData) -> Self {
        let mut stmt_types: Vec<StmtTypeSummary> = edge
            .statements
            .values()
            .map(StmtTypeSummary::from_support)
            .collect();
        stmt_types.sort_by(|a, b| {
            b.evidence_count
                .cmp(&a.evidence_count)
                .then_with(|| a.stmt_type.cmp(&b.stmt_type))
        });

        Self {
            subject: edge.subject().clone(),
            object: edge.object().clone(),
            belief: edge.belief,
            weight: edge.weight,
            sign: edge.sign,
            context_weight: edge.context_weight,
            db_url_edge: edge.db_url_edge.clone(),
            source_counts: merge_source_counts(stmt_types.iter().map(|t| &t.source_counts)),
            evidence_count: stmt_types
                .iter()
                .map(|t| t.evidence_count)
                .fold(0, u64::saturating_add),
            stmt_count: stmt_types
                .iter()
                .map(|t| t.stmt_count)
                .fold(0, usize::saturating_add),
            stmt_types,
        }
    }
}
