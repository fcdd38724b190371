//! Result normalization — interprets a `/query` response once into plain
//! data for rendering.
//!
//! Each of the five optional sections is resolved to `Section::Absent`,
//! `Section::Present` or `Section::Malformed`; a malformed section never
//! takes the others down with it.

pub mod aggregate;
pub mod buckets;
pub mod normalize;
pub mod pairing;

pub use aggregate::{merge_source_counts, EdgeSummary, StmtTypeSummary};
pub use buckets::{PathBucket, PathSection, PathView};
pub use normalize::{NormalizedResults, OntologySection, ResultNormalizer, Section, SectionsPresent};
pub use pairing::{zip_equal_arrays, SharedInteractorRow, SharedInteractorsSection};
