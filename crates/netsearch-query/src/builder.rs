//! Assembles the canonical `NetworkSearchQuery` from a `QueryForm`.

use netsearch_core::{Error, QueryDefaults, Result};
use netsearch_model::{NetworkSearchQuery, ResponseFormat};
use tracing::debug;

use crate::form::{DisabledFields, QueryForm};

/// Builds submittable queries from form state.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    form: QueryForm,
    defaults: QueryDefaults,
}

impl QueryBuilder {
    pub fn new(form: QueryForm) -> Self {
        Self {
            form,
            defaults: QueryDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: QueryDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    /// Mutable access for event handlers; predicates are recomputed on
    /// every call, so nothing needs invalidating.
    pub fn form_mut(&mut self) -> &mut QueryForm {
        &mut self.form
    }

    pub fn cannot_submit(&self) -> bool {
        self.form.cannot_submit()
    }

    pub fn disabled_fields(&self) -> DisabledFields {
        self.form.disabled_fields()
    }

    /// Produce the query, or refuse when no endpoint is given or a value is
    /// out of range.
    pub fn build(&self) -> Result<NetworkSearchQuery> {
        let form = &self.form;
        if form.cannot_submit() {
            return Err(Error::CannotSubmit);
        }
        let defaults = &self.defaults;
        let disabled = form.disabled_fields();

        let (mesh_ids, strict_mesh_id_filtering) = if disabled.mesh {
            (Vec::new(), false)
        } else {
            (form.mesh_id_list(), form.strict_mesh_id_filtering)
        };

        let (const_c, const_tk) = if disabled.context_constants {
            (defaults.const_c, defaults.const_tk)
        } else {
            (
                form.const_c.unwrap_or(defaults.const_c),
                form.const_tk.unwrap_or(defaults.const_tk),
            )
        };

        let path_length = if disabled.path_length {
            None
        } else {
            form.path_length
        };

        let (max_per_node, depth_limit) = if disabled.open_search_limits {
            (defaults.max_per_node, defaults.depth_limit)
        } else {
            (
                form.max_per_node.unwrap_or(defaults.max_per_node),
                form.depth_limit.unwrap_or(defaults.depth_limit),
            )
        };

        let terminal_ns = if disabled.terminal_ns {
            Vec::new()
        } else {
            form.terminal_ns.clone()
        };

        let query = NetworkSearchQuery {
            source: form.source.clone(),
            target: form.target.clone(),
            stmt_filter: form.stmt_filter.clone(),
            edge_hash_blacklist: form.hash_blacklist_list(),
            allowed_ns: form.allowed_ns.clone(),
            node_blacklist: form.node_blacklist_list(),
            path_length,
            depth_limit,
            sign: form.sign,
            weighted: form.weighted,
            belief_cutoff: form.belief_cutoff.unwrap_or(defaults.belief_cutoff),
            curated_db_only: form.curated_db_only,
            fplx_expand: form.fplx_expand,
            k_shortest: form.k_shortest.unwrap_or(defaults.k_shortest),
            max_per_node,
            cull_best_node: form.cull_best_node,
            mesh_ids,
            strict_mesh_id_filtering,
            const_c,
            const_tk,
            user_timeout: form.user_timeout.unwrap_or(defaults.user_timeout),
            two_way: form.two_way,
            shared_regulators: form.shared_regulators,
            terminal_ns,
            format: ResponseFormat::Html,
        };
        query.validate()?;

        debug!(
            "Built query {:?} -> {:?} (disabled: {:?})",
            query.source, query.target, disabled
        );
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsearch_model::Sign;

    fn closed_form() -> QueryForm {
        QueryForm {
            source: "BRCA1".into(),
            target: "BRCA2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cannot_submit_without_endpoints() {
        let builder = QueryBuilder::new(QueryForm::default());
        assert!(builder.cannot_submit());
        assert!(matches!(builder.build(), Err(Error::CannotSubmit)));
    }

    #[test]
    fn test_defaults_fill_omitted_fields() {
        let query = QueryBuilder::new(closed_form()).build().unwrap();
        assert_eq!(query.k_shortest, 50);
        assert_eq!(query.user_timeout, 30.0);
        assert_eq!(query.belief_cutoff, 0.0);
        assert_eq!(query.format, ResponseFormat::Html);
        assert!(query.stmt_filter.is_empty());
    }

    #[test]
    fn test_configured_defaults_used() {
        let defaults = QueryDefaults {
            k_shortest: 10,
            user_timeout: 5.0,
            ..Default::default()
        };
        let query = QueryBuilder::new(closed_form())
            .with_defaults(defaults)
            .build()
            .unwrap();
        assert_eq!(query.k_shortest, 10);
        assert_eq!(query.user_timeout, 5.0);
    }

    #[test]
    fn test_text_lists_parsed() {
        let form = QueryForm {
            hash_blacklist: "-2954091011234520123, 31225735345362,".into(),
            node_blacklist: " ubiquitin ,".into(),
            ..closed_form()
        };
        let query = QueryBuilder::new(form).build().unwrap();
        assert_eq!(
            query.edge_hash_blacklist,
            vec!["-2954091011234520123", "31225735345362"]
        );
        assert_eq!(query.node_blacklist, vec!["ubiquitin"]);
    }

    #[test]
    fn test_weighted_drops_mesh_and_path_length() {
        let form = QueryForm {
            weighted: true,
            mesh_ids: "D000818".into(),
            strict_mesh_id_filtering: true,
            const_c: Some(3),
            const_tk: Some(99),
            path_length: Some(4),
            ..closed_form()
        };
        let query = QueryBuilder::new(form).build().unwrap();
        assert!(query.weighted);
        assert!(query.mesh_ids.is_empty());
        assert!(!query.strict_mesh_id_filtering);
        assert_eq!((query.const_c, query.const_tk), (1, 10));
        assert_eq!(query.path_length, None);
    }

    #[test]
    fn test_context_weighted_keeps_constants() {
        let form = QueryForm {
            source: "BRCA1".into(),
            mesh_ids: "D000818, D001921".into(),
            const_c: Some(2),
            const_tk: Some(20),
            path_length: Some(3),
            max_per_node: Some(9),
            terminal_ns: vec!["HGNC".into()],
            ..Default::default()
        };
        let query = QueryBuilder::new(form).build().unwrap();
        assert_eq!(query.mesh_ids, vec!["D000818", "D001921"]);
        assert_eq!((query.const_c, query.const_tk), (2, 20));
        // context weighted => no path length, no open-search limits
        assert_eq!(query.path_length, None);
        assert_eq!(query.max_per_node, 5);
        assert!(query.terminal_ns.is_empty());
    }

    #[test]
    fn test_open_search_keeps_limits() {
        let form = QueryForm {
            target: "TP53".into(),
            max_per_node: Some(8),
            depth_limit: Some(3),
            terminal_ns: vec!["HGNC".into(), "FPLX".into()],
            sign: Some(Sign::Negative),
            path_length: Some(3),
            ..Default::default()
        };
        let query = QueryBuilder::new(form).build().unwrap();
        assert_eq!(query.max_per_node, 8);
        assert_eq!(query.depth_limit, 3);
        assert_eq!(query.terminal_ns, vec!["HGNC", "FPLX"]);
        assert_eq!(query.path_length, Some(3));
        assert_eq!(query.sign, Some(Sign::Negative));
    }

    #[test]
    fn test_closed_search_ignores_open_limits() {
        let form = QueryForm {
            max_per_node: Some(8),
            depth_limit: Some(4),
            terminal_ns: vec!["HGNC".into()],
            ..closed_form()
        };
        let query = QueryBuilder::new(form).build().unwrap();
        assert_eq!(query.max_per_node, 5);
        assert_eq!(query.depth_limit, 2);
        assert!(query.terminal_ns.is_empty());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let form = QueryForm {
            belief_cutoff: Some(2.0),
            ..closed_form()
        };
        assert!(matches!(
            QueryBuilder::new(form).build(),
            Err(Error::Validation(_))
        ));

        let form = QueryForm {
            path_length: Some(0),
            ..closed_form()
        };
        assert!(QueryBuilder::new(form).build().is_err());
    }

    #[test]
    fn test_form_mut_recomputes() {
        let mut builder = QueryBuilder::new(QueryForm::default());
        assert!(builder.cannot_submit());
        builder.form_mut().target = "TP53".into();
        assert!(!builder.cannot_submit());
        assert!(builder.build().is_ok());
    }
}
