//! The three calls a search session makes against the network search API.

use async_trait::async_trait;
use netsearch_core::Result;
use netsearch_model::{GroundingMatch, NetworkSearchQuery, Results, Xref};

/// Network search API. Implemented over HTTP by `HttpBackend`; tests plug
/// in in-memory stubs.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// `POST /query`
    async fn query(&self, query: &NetworkSearchQuery) -> Result<Results>;

    /// `GET /xrefs?ns=..&id=..`
    async fn xrefs(&self, namespace: &str, identifier: &str) -> Result<Vec<Xref>>;

    /// `POST /ground`
    async fn ground(&self, text: &str) -> Result<Vec<GroundingMatch>>;
}
