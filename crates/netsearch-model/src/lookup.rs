//! Secondary endpoints: cross-references (`GET /xrefs`) and grounding
//! (`POST /ground`).

use serde::{Deserialize, Serialize};

/// One cross-reference of a node, sent as `[namespace, identifier, url]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Xref {
    pub namespace: String,
    pub identifier: String,
    pub lookup_url: String,
}

impl From<(String, String, String)> for Xref {
    fn from((namespace, identifier, lookup_url): (String, String, String)) -> Self {
        Self {
            namespace,
            identifier,
            lookup_url,
        }
    }
}

impl From<Xref> for (String, String, String) {
    fn from(x: Xref) -> Self {
        (x.namespace, x.identifier, x.lookup_url)
    }
}

/// Free text to ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingRequest {
    pub text: String,
}

/// The namespace/identifier a text was grounded to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundedTerm {
    pub db: String,
    pub id: String,
    #[serde(default)]
    pub entry_name: String,
}

/// One grounding candidate, best first in the service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingMatch {
    pub term: GroundedTerm,
    #[serde(default)]
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_xref_triples() {
        let xrefs: Vec<Xref> = serde_json::from_value(json!([
            ["HGNC", "1100", "https://identifiers.org/hgnc:1100"],
            ["UP", "P38398", "https://identifiers.org/uniprot:P38398"]
        ]))
        .unwrap();
        assert_eq!(xrefs.len(), 2);
        assert_eq!(xrefs[1].namespace, "UP");
        assert_eq!(
            serde_json::to_value(&xrefs[0]).unwrap(),
            json!(["HGNC", "1100", "https://identifiers.org/hgnc:1100"])
        );
    }

    #[test]
    fn test_grounding_match() {
        let matches: Vec<GroundingMatch> = serde_json::from_value(json!([
            {"term": {"db": "HGNC", "id": "1100", "entry_name": "BRCA1", "status": "name"}, "score": 0.77}
        ]))
        .unwrap();
        assert_eq!(matches[0].term.entry_name, "BRCA1");
    }
}
