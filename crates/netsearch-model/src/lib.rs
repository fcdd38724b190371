//! netsearch model — typed request/response contract of the network search API.
//!
//! Payloads are parsed once with serde and checked once with `validate()`
//! when they cross the network edge; everything downstream works on these
//! types as plain data.

pub mod edge;
pub mod lookup;
pub mod node;
pub mod path;
pub mod query;
pub mod results;
pub mod stmt;

pub use edge::{ContextWeight, EdgeData};
pub use lookup::{GroundedTerm, GroundingMatch, GroundingRequest, Xref};
pub use node::{Node, NodeKey, Sign};
pub use path::{Path, PathResultData};
pub use query::{NetworkSearchQuery, ResponseFormat};
pub use results::{OntologyResults, Results, SharedInteractorsResults};
pub use stmt::{SourceCounts, StmtData, StmtTypeSupport};
