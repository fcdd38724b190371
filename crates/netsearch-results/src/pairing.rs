//! Shared targets and shared regulators, paired row by row.

use netsearch_core::{Error, Result};
use netsearch_model::{EdgeData, Node, SharedInteractorsResults};
use serde::Serialize;

use crate::aggregate::EdgeSummary;

/// Pair two arrays index-wise. Both must have the same length.
pub fn zip_equal_arrays<A, B>(a: Vec<A>, b: Vec<B>) -> Result<Vec<(A, B)>> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            source_len: a.len(),
            target_len: b.len(),
        });
    }
    Ok(a.into_iter().zip(b).collect())
}

/// One shared interactor with the source-side and target-side edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedInteractorRow {
    pub interactor: Node,
    pub source_edge: EdgeSummary,
    pub target_edge: EdgeSummary,
}

impl SharedInteractorRow {
    /// Targets sit at the object end (`s → x`, `t → x`), regulators at the
    /// subject end (`x → s`, `x → t`).
    fn interactor_of(edge: &EdgeData, downstream: bool) -> &Node {
        if downstream {
            edge.object()
        } else {
            edge.subject()
        }
    }

    pub fn pair(source: &EdgeData, target: &EdgeData, downstream: bool) -> Result<Self> {
        let from_source = Self::interactor_of(source, downstream);
        let from_target = Self::interactor_of(target, downstream);
        if !from_source.same_entity(from_target) {
            return Err(Error::Shape(format!(
                "shared interactor mismatch: {} vs {}",
                from_source.key(),
                from_target.key()
            )));
        }
        Ok(Self {
            interactor: from_source.clone(),
            source_edge: EdgeSummary::from_edge(source),
            target_edge: EdgeSummary::from_edge(target),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedInteractorsSection {
    /// Shared targets when true, shared regulators otherwise.
    pub downstream: bool,
    pub rows: Vec<SharedInteractorRow>,
}

impl SharedInteractorsSection {
    pub fn from_data(data: &SharedInteractorsResults) -> Result<Self> {
        data.validate()?;
        let pairs = zip_equal_arrays(
            data.source_data.iter().collect(),
            data.target_data.iter().collect(),
        )?;
        let rows = pairs
            .into_iter()
            .map(|(s, t)| SharedInteractorRow::pair(s, t, data.downstream))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            downstream: data.downstream,
            rows,
        })
    }

    pub fn title(&self) -> &'static str {
        if self.downstream {
            "Shared Targets"
        } else {
            "Shared Regulators"
        }
    }
}
