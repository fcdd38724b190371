//! Biological entities and their signs.

use netsearch_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Edge or node sign. On the wire `0` is positive and `1` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sign {
    Positive,
    Negative,
}

impl TryFrom<u8> for Sign {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Positive),
            1 => Ok(Self::Negative),
            other => Err(format!("sign must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Sign> for u8 {
    fn from(sign: Sign) -> u8 {
        match sign {
            Sign::Positive => 0,
            Sign::Negative => 1,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "+"),
            Self::Negative => write!(f, "-"),
        }
    }
}

impl std::str::FromStr for Sign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" | "0" | "plus" | "positive" => Ok(Self::Positive),
            "-" | "1" | "minus" | "negative" => Ok(Self::Negative),
            other => Err(Error::Validation(format!("unknown sign {:?}", other))),
        }
    }
}

/// Natural key of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub namespace: String,
    pub identifier: String,
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.identifier)
    }
}

/// A biological entity as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub namespace: String,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<String>,
}

impl Node {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            namespace: namespace.into(),
            identifier: identifier.into(),
            sign: None,
            lookup: None,
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            namespace: self.namespace.clone(),
            identifier: self.identifier.clone(),
        }
    }

    /// Whether both nodes denote the same entity, ignoring display fields.
    pub fn same_entity(&self, other: &Node) -> bool {
        self.namespace == other.namespace && self.identifier == other.identifier
    }

    /// Name for display, falling back to `namespace:identifier`.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}:{}", self.namespace, self.identifier),
        }
    }

    /// Identifiers.org style lookup link, if the backend supplied one.
    pub fn lookup_url(&self) -> Option<&str> {
        self.lookup.as_deref().filter(|l| !l.is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(Error::Validation(format!(
                "node {:?} has an empty namespace",
                self.display_name()
            )));
        }
        if self.identifier.trim().is_empty() {
            return Err(Error::Validation(format!(
                "node {:?} has an empty identifier",
                self.display_name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_wire_format() {
        let node: Node = serde_json::from_value(json!({
            "name": "MAPK1", "namespace": "HGNC", "identifier": "6871", "sign": 1
        }))
        .unwrap();
        assert_eq!(node.sign, Some(Sign::Negative));
        assert_eq!(serde_json::to_value(Sign::Positive).unwrap(), json!(0));

        let bad = serde_json::from_value::<Node>(json!({
            "namespace": "HGNC", "identifier": "6871", "sign": 2
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_missing_name_displays_key() {
        let node: Node =
            serde_json::from_value(json!({"namespace": "FPLX", "identifier": "AMPK"})).unwrap();
        assert_eq!(node.display_name(), "FPLX:AMPK");
        assert_eq!(node.lookup_url(), None);
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_same_entity_ignores_display_fields() {
        let a = Node::new("BRCA1", "HGNC", "1100");
        let mut b = Node::new("brca1", "HGNC", "1100");
        b.lookup = Some("https://identifiers.org/hgnc:1100".into());
        assert!(a.same_entity(&b));
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }

    #[test]
    fn test_validate_empty_identifier() {
        let node = Node::new("X", "HGNC", " ");
        assert!(matches!(node.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_sign_from_str() {
        assert_eq!("+".parse::<Sign>().unwrap(), Sign::Positive);
        assert_eq!("minus".parse::<Sign>().unwrap(), Sign::Negative);
        assert!("?".parse::<Sign>().is_err());
    }
}
