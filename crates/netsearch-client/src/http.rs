//! `SearchBackend` over HTTP with reqwest.

use std::time::Duration;

use async_trait::async_trait;
use netsearch_core::{ClientConfig, Error, Result};
use netsearch_model::{GroundingMatch, GroundingRequest, NetworkSearchQuery, Results, Xref};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::backend::SearchBackend;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and decode a JSON body. Non-2xx statuses become
    /// `Error::Backend` with the response text.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            error!("{} request failed: {}", what, e);
            Error::Transport(format!("{} request failed: {}", what, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} returned {}: {}", what, status, body);
            return Err(Error::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!("Reading {} response failed: {}", what, e);
            Error::Transport(format!("Reading {} response failed: {}", what, e))
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn query(&self, query: &NetworkSearchQuery) -> Result<Results> {
        let url = self.config.endpoint("query");
        debug!("POST {}", url);
        self.send(self.client.post(&url).json(query), "query").await
    }

    async fn xrefs(&self, namespace: &str, identifier: &str) -> Result<Vec<Xref>> {
        let url = self.config.endpoint("xrefs");
        debug!("GET {} ns={} id={}", url, namespace, identifier);
        let request = self
            .client
            .get(&url)
            .query(&[("ns", namespace), ("id", identifier)]);
        self.send(request, "xrefs").await
    }

    async fn ground(&self, text: &str) -> Result<Vec<GroundingMatch>> {
        let url = self.config.endpoint("ground");
        debug!("POST {} text={:?}", url, text);
        let body = GroundingRequest { text: text.to_string() };
        self.send(self.client.post(&url).json(&body), "ground").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_config() {
        let config = ClientConfig {
            base_url: "localhost:8000".into(),
            ..Default::default()
        };
        assert!(matches!(HttpBackend::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_new_keeps_config() {
        let backend = HttpBackend::new(ClientConfig::default()).unwrap();
        assert_eq!(backend.config().endpoint("query"), "http://localhost:8000/query");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let config = ClientConfig {
            // reserved port, nothing listens there
            base_url: "http://127.0.0.1:9".into(),
            request_timeout_secs: 2,
            ..Default::default()
        };
        let backend = HttpBackend::new(config).unwrap();
        let err = backend.ground("BRCA1").await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
