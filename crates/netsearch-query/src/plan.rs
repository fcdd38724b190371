//! Which searches the backend will run for a query, and a summary of the
//! filters it applies.

use netsearch_model::NetworkSearchQuery;
use serde::Serialize;

/// Path search algorithm selected by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Both ends given.
    ShortestSimplePaths,
    /// Open search without weighting.
    BreadthFirst,
    /// Open search with edge or context weights.
    Dijkstra,
}

impl std::fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShortestSimplePaths => write!(f, "shortest_simple_paths"),
            Self::BreadthFirst => write!(f, "bfs_search"),
            Self::Dijkstra => write!(f, "open_dijkstra_search"),
        }
    }
}

/// Searches expected for a query, i.e. which result sections may appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPlan {
    pub path_algorithm: PathAlgorithm,
    /// Same algorithm with source and target swapped, when `two_way`.
    pub reverse_algorithm: Option<PathAlgorithm>,
    pub shared_targets: bool,
    pub shared_regulators: bool,
    pub ontology: bool,
    /// Uses the signed graph.
    pub signed: bool,
}

impl SearchPlan {
    pub fn for_query(query: &NetworkSearchQuery) -> Self {
        let open = query.is_open();
        let path_algorithm = if !open {
            PathAlgorithm::ShortestSimplePaths
        } else if query.is_any_weighted() {
            PathAlgorithm::Dijkstra
        } else {
            PathAlgorithm::BreadthFirst
        };
        Self {
            path_algorithm,
            reverse_algorithm: query.two_way.then_some(path_algorithm),
            shared_targets: !open,
            shared_regulators: !open && query.shared_regulators,
            ontology: !open,
            signed: query.is_signed(),
        }
    }

    /// Result section names that may be populated, in response order.
    pub fn expected_sections(&self) -> Vec<&'static str> {
        let mut sections = vec!["path_results"];
        if self.reverse_algorithm.is_some() {
            sections.push("reverse_path_results");
        }
        if self.ontology {
            sections.push("ontology_results");
        }
        if self.shared_targets {
            sections.push("shared_target_results");
        }
        if self.shared_regulators {
            sections.push("shared_regulators_results");
        }
        sections
    }
}

/// Node and statement filters carried by a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub exclude_stmts: Vec<String>,
    pub hash_blacklist: Vec<String>,
    pub allowed_ns: Vec<String>,
    pub node_blacklist: Vec<String>,
    pub path_length: Option<u32>,
    pub belief_cutoff: f64,
    pub curated_db_only: bool,
    pub max_paths: u32,
    pub cull_best_node: Option<u32>,
    pub weighted: bool,
    pub context_weighted: bool,
    pub overall_weighted: bool,
}

impl FilterOptions {
    pub fn from_query(query: &NetworkSearchQuery) -> Self {
        Self {
            exclude_stmts: query.stmt_filter.clone(),
            hash_blacklist: query.edge_hash_blacklist.clone(),
            allowed_ns: query.allowed_ns.clone(),
            node_blacklist: query.node_blacklist.clone(),
            path_length: query.path_length,
            belief_cutoff: query.belief_cutoff,
            curated_db_only: query.curated_db_only,
            max_paths: query.k_shortest,
            cull_best_node: query.cull_best_node,
            weighted: query.weighted,
            context_weighted: query.is_context_weighted(),
            overall_weighted: query.is_any_weighted(),
        }
    }

    /// No statement or node filter is active.
    pub fn no_filters(&self) -> bool {
        self.no_stmt_filters() && self.no_node_filters() && self.path_length.is_none()
    }

    pub fn no_stmt_filters(&self) -> bool {
        self.belief_cutoff == 0.0
            && self.exclude_stmts.is_empty()
            && self.hash_blacklist.is_empty()
            && !self.curated_db_only
    }

    pub fn no_node_filters(&self) -> bool {
        self.node_blacklist.is_empty() && self.allowed_ns.is_empty()
    }
}
