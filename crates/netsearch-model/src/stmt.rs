//! Mechanistic statements and their per-type grouping on an edge.

use std::collections::BTreeMap;

use netsearch_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::node::Sign;

/// Evidence count per extraction source, e.g. `{"reach": 5, "sparser": 1}`.
pub type SourceCounts = BTreeMap<String, u64>;

/// One observed statement supporting an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtData {
    pub stmt_type: String,
    pub evidence_count: u64,
    pub stmt_hash: i64,
    pub source_counts: SourceCounts,
    pub belief: f64,
    pub curated: bool,
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_sign: Option<Sign>,
    #[serde(default)]
    pub db_url_hash: String,
}

impl StmtData {
    pub fn validate(&self) -> Result<()> {
        let fail = |what: &str| -> Result<()> {
            Err(Error::Validation(format!(
                "statement {} ({}): {}",
                self.stmt_hash, self.stmt_type, what
            )))
        };
        if self.stmt_type.is_empty() {
            return fail("empty stmt_type");
        }
        if self.evidence_count == 0 {
            return fail("evidence_count must be > 0");
        }
        if self.source_counts.is_empty() {
            return fail("source_counts must not be empty");
        }
        if !(0.0..=1.0).contains(&self.belief) {
            return fail("belief outside [0, 1]");
        }
        if self.english.trim().is_empty() {
            return fail("empty english text");
        }
        Ok(())
    }
}

/// All statements of one type between a fixed subject/object pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtTypeSupport {
    pub stmt_type: String,
    #[serde(default)]
    pub source_counts: SourceCounts,
    pub statements: Vec<StmtData>,
}

impl StmtTypeSupport {
    pub fn validate(&self) -> Result<()> {
        if self.statements.is_empty() {
            return Err(Error::Validation(format!(
                "{} support has no statements",
                self.stmt_type
            )));
        }
        for stmt in &self.statements {
            if stmt.stmt_type != self.stmt_type {
                return Err(Error::Validation(format!(
                    "statement {} of type {} filed under {}",
                    stmt.stmt_hash, stmt.stmt_type, self.stmt_type
                )));
            }
            stmt.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stmt(json: serde_json::Value) -> StmtData {
        serde_json::from_value(json).unwrap()
    }

    fn phosphorylation() -> serde_json::Value {
        json!({
            "stmt_type": "Phosphorylation",
            "evidence_count": 3,
            "stmt_hash": -2_954_091_011_234_520_123i64,
            "source_counts": {"reach": 2, "sparser": 1},
            "belief": 0.86,
            "curated": false,
            "english": "MAP2K1 phosphorylates MAPK1.",
            "residue": "T",
            "position": "185",
            "db_url_hash": "https://db.indra.bio/statements/from_hash/-2954091011234520123?format=html"
        })
    }

    #[test]
    fn test_parse_optional_fields() {
        let s = stmt(phosphorylation());
        assert_eq!(s.residue.as_deref(), Some("T"));
        assert_eq!(s.weight, None);
        assert_eq!(s.initial_sign, None);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_empty_source_counts_rejected() {
        let mut value = phosphorylation();
        value["source_counts"] = json!({});
        assert!(stmt(value).validate().is_err());
    }

    #[test]
    fn test_belief_out_of_range_rejected() {
        let mut value = phosphorylation();
        value["belief"] = json!(1.2);
        assert!(stmt(value).validate().is_err());
    }

    #[test]
    fn test_support_type_mismatch_rejected() {
        let support = StmtTypeSupport {
            stmt_type: "Activation".into(),
            source_counts: SourceCounts::new(),
            statements: vec![stmt(phosphorylation())],
        };
        assert!(support.validate().is_err());

        let empty = StmtTypeSupport {
            stmt_type: "Activation".into(),
            source_counts: SourceCounts::new(),
            statements: vec![],
        };
        assert!(empty.validate().is_err());
    }
}
