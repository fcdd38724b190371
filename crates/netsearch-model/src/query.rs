//! The `/query` request body.

use netsearch_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::node::Sign;

/// Response rendering requested from the backend. The client always asks
/// for `html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Html,
    Json,
}

/// Canonical network search query. Field names are the backend's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSearchQuery {
    pub source: String,
    pub target: String,
    /// Statement types to exclude; empty allows all.
    pub stmt_filter: Vec<String>,
    pub edge_hash_blacklist: Vec<String>,
    pub allowed_ns: Vec<String>,
    pub node_blacklist: Vec<String>,
    pub path_length: Option<u32>,
    pub depth_limit: u32,
    pub sign: Option<Sign>,
    pub weighted: bool,
    pub belief_cutoff: f64,
    pub curated_db_only: bool,
    pub fplx_expand: bool,
    pub k_shortest: u32,
    pub max_per_node: u32,
    /// Blacklist the highest-degree node every `n` paths.
    pub cull_best_node: Option<u32>,
    pub mesh_ids: Vec<String>,
    pub strict_mesh_id_filtering: bool,
    pub const_c: u32,
    pub const_tk: u32,
    pub user_timeout: f64,
    pub two_way: bool,
    pub shared_regulators: bool,
    pub terminal_ns: Vec<String>,
    pub format: ResponseFormat,
}

impl Default for NetworkSearchQuery {
    fn default() -> Self {
        Self {
            source: String::new(),
            target: String::new(),
            stmt_filter: Vec::new(),
            edge_hash_blacklist: Vec::new(),
            allowed_ns: Vec::new(),
            node_blacklist: Vec::new(),
            path_length: None,
            depth_limit: 2,
            sign: None,
            weighted: false,
            belief_cutoff: 0.0,
            curated_db_only: false,
            fplx_expand: false,
            k_shortest: 50,
            max_per_node: 5,
            cull_best_node: None,
            mesh_ids: Vec::new(),
            strict_mesh_id_filtering: false,
            const_c: 1,
            const_tk: 10,
            user_timeout: 30.0,
            two_way: false,
            shared_regulators: false,
            terminal_ns: Vec::new(),
            format: ResponseFormat::Html,
        }
    }
}

impl NetworkSearchQuery {
    /// Open searches pin only one end.
    pub fn is_open(&self) -> bool {
        self.source.is_empty() != self.target.is_empty()
    }

    pub fn is_signed(&self) -> bool {
        self.sign.is_some()
    }

    /// Context weighting applies when MeSH ids are given without strict
    /// filtering.
    pub fn is_context_weighted(&self) -> bool {
        !self.mesh_ids.is_empty() && !self.strict_mesh_id_filtering
    }

    pub fn is_any_weighted(&self) -> bool {
        self.weighted || self.is_context_weighted()
    }

    /// Copy of the query with source and target switched.
    pub fn reverse_search(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.is_empty() && self.target.is_empty() {
            return Err(Error::CannotSubmit);
        }
        if self.path_length == Some(0) {
            return Err(Error::Validation("path_length must be > 0".into()));
        }
        if self.max_per_node == 0 {
            return Err(Error::Validation("max_per_node must be > 0".into()));
        }
        if self.depth_limit == 0 {
            return Err(Error::Validation("depth_limit must be > 0".into()));
        }
        if self.k_shortest == 0 {
            return Err(Error::Validation("k_shortest must be > 0".into()));
        }
        if self.cull_best_node == Some(0) {
            return Err(Error::Validation("cull_best_node must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.belief_cutoff) {
            return Err(Error::Validation(format!(
                "belief_cutoff must be within [0, 1], got {}",
                self.belief_cutoff
            )));
        }
        if self.user_timeout.is_nan() || self.user_timeout <= 0.0 {
            return Err(Error::Validation("user_timeout must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let query = NetworkSearchQuery {
            source: "BRCA1".into(),
            target: "BRCA2".into(),
            path_length: Some(3),
            sign: Some(Sign::Positive),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "source", "target", "stmt_filter", "edge_hash_blacklist", "allowed_ns",
            "node_blacklist", "path_length", "depth_limit", "sign", "weighted",
            "belief_cutoff", "curated_db_only", "fplx_expand", "k_shortest",
            "max_per_node", "cull_best_node", "mesh_ids", "strict_mesh_id_filtering",
            "const_c", "const_tk", "user_timeout", "two_way", "shared_regulators",
            "terminal_ns", "format",
        ] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert_eq!(obj.len(), 25);
        assert_eq!(value["format"], json!("html"));
        assert_eq!(value["sign"], json!(0));
        assert_eq!(value["cull_best_node"], json!(null));
    }

    #[test]
    fn test_reverse_search() {
        let query = NetworkSearchQuery {
            source: "BRCA1".into(),
            target: "BRCA2".into(),
            k_shortest: 7,
            ..Default::default()
        };
        let rev = query.reverse_search();
        assert_eq!(rev.source, "BRCA2");
        assert_eq!(rev.target, "BRCA1");
        assert_eq!(rev.k_shortest, 7);
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            NetworkSearchQuery::default().validate(),
            Err(Error::CannotSubmit)
        ));
        let ok = NetworkSearchQuery {
            target: "TP53".into(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
        assert!(ok.is_open());

        let bad = NetworkSearchQuery {
            path_length: Some(0),
            ..ok.clone()
        };
        assert!(bad.validate().is_err());

        let bad_belief = NetworkSearchQuery {
            belief_cutoff: 1.5,
            ..ok
        };
        assert!(bad_belief.validate().is_err());
    }

    #[test]
    fn test_weighting_flags() {
        let query = NetworkSearchQuery {
            source: "A".into(),
            mesh_ids: vec!["D000818".into()],
            ..Default::default()
        };
        assert!(query.is_context_weighted());
        assert!(query.is_any_weighted());

        let strict = NetworkSearchQuery {
            strict_mesh_id_filtering: true,
            ..query
        };
        assert!(!strict.is_context_weighted());
        assert!(!strict.is_any_weighted());
    }
}
