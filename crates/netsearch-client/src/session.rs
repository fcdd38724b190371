//! One user's search session: submits queries, keeps the last outcome and
//! caches cross-references.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use netsearch_core::{Error, QueryDefaults, Result};
use netsearch_model::{GroundingMatch, NetworkSearchQuery, Node, NodeKey, Xref};
use netsearch_query::{query_hash, QueryBuilder, QueryForm, SearchPlan};
use netsearch_results::{NormalizedResults, ResultNormalizer};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use crate::backend::SearchBackend;

/// A completed submission.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub query: NetworkSearchQuery,
    pub query_hash: u32,
    pub plan: SearchPlan,
    pub results: NormalizedResults,
    pub submitted_at: DateTime<Utc>,
    pub elapsed_ms: u128,
}

#[derive(Debug, Default)]
struct SessionState {
    last_query: Option<NetworkSearchQuery>,
    last_outcome: Option<SearchOutcome>,
    last_error: Option<String>,
}

/// Holds the busy flag for one submission and clears it when dropped, also
/// when the submitting future is cancelled.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct SearchSession {
    backend: Arc<dyn SearchBackend>,
    defaults: QueryDefaults,
    busy: AtomicBool,
    state: RwLock<SessionState>,
    /// One cell per node; concurrent lookups of the same node share a fetch.
    xref_cache: Mutex<HashMap<NodeKey, Arc<OnceCell<Vec<Xref>>>>>,
}

impl SearchSession {
    pub fn new(backend: Arc<dyn SearchBackend>, defaults: QueryDefaults) -> Self {
        Self {
            backend,
            defaults,
            busy: AtomicBool::new(false),
            state: RwLock::new(SessionState::default()),
            xref_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn last_query(&self) -> Option<NetworkSearchQuery> {
        self.state.read().last_query.clone()
    }

    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.state.read().last_outcome.clone()
    }

    /// Message of the last failed submission; cleared by the next success.
    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    /// Build a query from form state with the session defaults and submit it.
    pub async fn submit(&self, form: QueryForm) -> Result<SearchOutcome> {
        let query = QueryBuilder::new(form)
            .with_defaults(self.defaults.clone())
            .build()?;
        self.submit_query(query).await
    }

    /// Submit a built query. A second submission while one is in flight is
    /// refused with `Error::Busy`. On failure the previous outcome is kept.
    pub async fn submit_query(&self, query: NetworkSearchQuery) -> Result<SearchOutcome> {
        query.validate()?;
        let _guard = BusyGuard::acquire(&self.busy)?;

        let hash = query_hash(&query);
        let plan = SearchPlan::for_query(&query);
        info!(
            "Submitting query {:08x}: {:?} -> {:?} via {}",
            hash, query.source, query.target, plan.path_algorithm
        );
        self.state.write().last_query = Some(query.clone());

        let submitted_at = Utc::now();
        let started = Instant::now();
        let response = self.backend.query(&query).await;
        let elapsed_ms = started.elapsed().as_millis();

        match response {
            Ok(results) => {
                let results = ResultNormalizer::normalize(results);
                if let Some(notice) = results.timeout_notice() {
                    warn!("{}", notice);
                }
                let outcome = SearchOutcome {
                    query,
                    query_hash: hash,
                    plan,
                    results,
                    submitted_at,
                    elapsed_ms,
                };
                let mut state = self.state.write();
                state.last_outcome = Some(outcome.clone());
                state.last_error = None;
                info!("Query {:08x} finished in {}ms", hash, elapsed_ms);
                Ok(outcome)
            }
            Err(e) => {
                error!("Query {:08x} failed: {}", hash, e);
                self.state.write().last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Cross-references for a node, fetched once per node per session even
    /// under concurrent calls. Failed fetches are not cached.
    pub async fn xrefs(&self, node: &Node) -> Result<Vec<Xref>> {
        let key = node.key();
        let cell = self.xref_cache.lock().entry(key.clone()).or_default().clone();
        if let Some(cached) = cell.get() {
            debug!("xrefs cache hit for {}", key);
            return Ok(cached.clone());
        }
        let xrefs = cell
            .get_or_try_init(|| self.backend.xrefs(&node.namespace, &node.identifier))
            .await?;
        Ok(xrefs.clone())
    }

    pub async fn ground(&self, text: &str) -> Result<Vec<GroundingMatch>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation("nothing to ground".into()));
        }
        self.backend.ground(text).await
    }
}
