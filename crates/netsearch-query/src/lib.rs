//! Query building — turns sparse form state into one canonical
//! `NetworkSearchQuery`.
//!
//! The form's derived predicates (open search, context search, weighting)
//! decide which fields are active; disabled fields are replaced by the
//! configured defaults rather than sent as typed.

pub mod builder;
pub mod form;
pub mod hash;
pub mod plan;
pub mod text;

pub use builder::QueryBuilder;
pub use form::{DisabledFields, QueryForm};
pub use hash::query_hash;
pub use plan::{FilterOptions, PathAlgorithm, SearchPlan};
pub use text::{join_text_list, parse_text_list};
