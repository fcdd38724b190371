//! Directed edges with their statement support.

use std::collections::BTreeMap;

use netsearch_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::node::{Node, Sign};
use crate::stmt::{SourceCounts, StmtTypeSupport};

const NOT_APPLICABLE: &str = "N/A";

/// Context (MeSH) weight of an edge: a number, or `"N/A"` outside context
/// searches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawContextWeight", into = "RawContextWeight")]
pub enum ContextWeight {
    #[default]
    NotApplicable,
    Value(f64),
}

impl ContextWeight {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::NotApplicable => None,
            Self::Value(v) => Some(*v),
        }
    }
}

impl std::fmt::Display for ContextWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "{}", NOT_APPLICABLE),
            Self::Value(v) => write!(f, "{:.3}", v),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawContextWeight {
    Number(f64),
    Text(String),
}

impl TryFrom<RawContextWeight> for ContextWeight {
    type Error = String;

    fn try_from(raw: RawContextWeight) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawContextWeight::Number(v) => Ok(Self::Value(v)),
            RawContextWeight::Text(t) if t == NOT_APPLICABLE => Ok(Self::NotApplicable),
            RawContextWeight::Text(t) => Err(format!(
                "context_weight must be a number or \"N/A\", got {:?}",
                t
            )),
        }
    }
}

impl From<ContextWeight> for RawContextWeight {
    fn from(cw: ContextWeight) -> Self {
        match cw {
            ContextWeight::NotApplicable => Self::Text(NOT_APPLICABLE.into()),
            ContextWeight::Value(v) => Self::Number(v),
        }
    }
}

/// One directed edge `[subject, object]` and the statements supporting it,
/// keyed by statement type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub edge: [Node; 2],
    pub statements: BTreeMap<String, StmtTypeSupport>,
    pub belief: f64,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
    #[serde(default)]
    pub context_weight: ContextWeight,
    #[serde(default)]
    pub db_url_edge: String,
    #[serde(default)]
    pub source_counts: SourceCounts,
}

impl EdgeData {
    pub fn subject(&self) -> &Node {
        &self.edge[0]
    }

    pub fn object(&self) -> &Node {
        &self.edge[1]
    }

    pub fn validate(&self) -> Result<()> {
        let label = || {
            format!(
                "{} -> {}",
                self.subject().display_name(),
                self.object().display_name()
            )
        };
        self.subject().validate()?;
        self.object().validate()?;
        if self.statements.is_empty() {
            return Err(Error::Validation(format!(
                "edge {} has no supporting statements",
                label()
            )));
        }
        if self.source_counts.is_empty() {
            return Err(Error::Validation(format!(
                "edge {} has no source counts",
                label()
            )));
        }
        if self.belief < 0.0 || self.weight < 0.0 {
            return Err(Error::Validation(format!(
                "edge {} has negative belief or weight",
                label()
            )));
        }
        for (stmt_type, support) in &self.statements {
            if stmt_type != &support.stmt_type {
                return Err(Error::Validation(format!(
                    "edge {}: support for {} filed under key {}",
                    label(),
                    support.stmt_type,
                    stmt_type
                )));
            }
            support.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn edge_json(context_weight: serde_json::Value) -> serde_json::Value {
        json!({
            "edge": [
                {"name": "BRCA1", "namespace": "HGNC", "identifier": "1100"},
                {"name": "TP53", "namespace": "HGNC", "identifier": "11998"}
            ],
            "statements": {
                "Activation": {
                    "stmt_type": "Activation",
                    "source_counts": {"reach": 4},
                    "statements": [{
                        "stmt_type": "Activation",
                        "evidence_count": 4,
                        "stmt_hash": 123,
                        "source_counts": {"reach": 4},
                        "belief": 0.9,
                        "curated": false,
                        "english": "BRCA1 activates TP53."
                    }]
                }
            },
            "belief": 0.9,
            "weight": 0.105,
            "context_weight": context_weight,
            "db_url_edge": "https://db.indra.bio/statements/from_agents?subject=1100@HGNC&object=11998@HGNC&format=html",
            "source_counts": {"reach": 4}
        })
    }

    #[test]
    fn test_context_weight_variants() {
        let na: EdgeData = serde_json::from_value(edge_json(json!("N/A"))).unwrap();
        assert_eq!(na.context_weight, ContextWeight::NotApplicable);
        assert_eq!(serde_json::to_value(na.context_weight).unwrap(), json!("N/A"));

        let num: EdgeData = serde_json::from_value(edge_json(json!(0.25))).unwrap();
        assert_eq!(num.context_weight.value(), Some(0.25));

        assert!(serde_json::from_value::<EdgeData>(edge_json(json!("high"))).is_err());
    }

    #[test]
    fn test_edge_must_have_two_nodes() {
        let mut value = edge_json(json!("N/A"));
        value["edge"] = json!([{"namespace": "HGNC", "identifier": "1100"}]);
        assert!(serde_json::from_value::<EdgeData>(value).is_err());
    }

    #[test]
    fn test_validate_edge() {
        let edge: EdgeData = serde_json::from_value(edge_json(json!("N/A"))).unwrap();
        assert!(edge.validate().is_ok());
        assert_eq!(edge.subject().display_name(), "BRCA1");

        let mut empty = edge.clone();
        empty.statements.clear();
        assert!(empty.validate().is_err());

        let mut uncounted = edge.clone();
        uncounted.source_counts.clear();
        assert!(uncounted.validate().is_err());

        let mut misfiled = edge;
        let support = misfiled.statements.remove("Activation").unwrap();
        misfiled.statements.insert("Inhibition".into(), support);
        assert!(misfiled.validate().is_err());
    }
}
