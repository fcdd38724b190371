//! Raw search form state and the predicates derived from it.

use netsearch_model::Sign;
use serde::{Deserialize, Serialize};

use crate::text::parse_text_list;

/// Search form as the user left it. Every field may be omitted.
///
/// `hash_blacklist`, `node_blacklist` and `mesh_ids` are comma-separated
/// free text; the list fields come from multi-selects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryForm {
    pub source: String,
    pub target: String,
    pub stmt_filter: Vec<String>,
    pub hash_blacklist: String,
    pub allowed_ns: Vec<String>,
    pub node_blacklist: String,
    pub path_length: Option<u32>,
    pub depth_limit: Option<u32>,
    pub sign: Option<Sign>,
    pub weighted: bool,
    pub belief_cutoff: Option<f64>,
    pub curated_db_only: bool,
    pub fplx_expand: bool,
    pub k_shortest: Option<u32>,
    pub max_per_node: Option<u32>,
    pub cull_best_node: Option<u32>,
    pub mesh_ids: String,
    pub strict_mesh_id_filtering: bool,
    pub const_c: Option<u32>,
    pub const_tk: Option<u32>,
    pub user_timeout: Option<f64>,
    pub two_way: bool,
    pub shared_regulators: bool,
    pub terminal_ns: Vec<String>,
}

/// Which inputs are inert for the current form state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DisabledFields {
    /// `mesh_ids` and `strict_mesh_id_filtering`.
    pub mesh: bool,
    /// `const_c` and `const_tk`.
    pub context_constants: bool,
    pub path_length: bool,
    /// `max_per_node` and `depth_limit`.
    pub open_search_limits: bool,
    pub terminal_ns: bool,
}

impl QueryForm {
    pub fn mesh_id_list(&self) -> Vec<String> {
        parse_text_list(Some(&self.mesh_ids))
    }

    pub fn hash_blacklist_list(&self) -> Vec<String> {
        parse_text_list(Some(&self.hash_blacklist))
    }

    pub fn node_blacklist_list(&self) -> Vec<String> {
        parse_text_list(Some(&self.node_blacklist))
    }

    pub fn is_context_search(&self) -> bool {
        !self.mesh_id_list().is_empty()
    }

    /// At most one endpoint given.
    pub fn is_open_search(&self) -> bool {
        self.source.is_empty() || self.target.is_empty()
    }

    pub fn cannot_submit(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }

    pub fn is_context_weighted(&self) -> bool {
        self.is_context_search() && !self.strict_mesh_id_filtering
    }

    pub fn is_any_weighted(&self) -> bool {
        self.is_context_weighted() || self.weighted
    }

    pub fn disabled_fields(&self) -> DisabledFields {
        let context = self.is_context_search();
        let open = self.is_open_search();
        let any_weighted = self.is_any_weighted();
        DisabledFields {
            mesh: self.weighted,
            context_constants: self.weighted || self.strict_mesh_id_filtering,
            path_length: any_weighted,
            open_search_limits: !open || context || any_weighted,
            terminal_ns: context || !open,
        }
    }
}
