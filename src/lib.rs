//! Ranking Insight SDK for Rust.
//!
//! A typed client for the ranking-insight REST service, which tracks the
//! marketplace best-seller ranks of a cosmetics brand's products, plus the
//! client-side pipeline that turns ranking summaries into dashboard-ready
//! records and chart series.
//!
//! # Quick start
//!
//! ```no_run
//! use ranking_insight_sdk::{aggregate, RankingClient};
//!
//! let client = RankingClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()
//!     .unwrap();
//!
//! let summary = client.rankings().summary().unwrap();
//! let result = aggregate::aggregate(&summary);
//! println!("{} products in the top 10", result.counters.top10);
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod queries;
pub mod series;
pub mod transport;
pub mod view;
pub mod views;

pub use aggregate::{aggregate, Aggregation, DerivedProductRanking, RankingCounters, SortKey, Trend};
#[cfg(feature = "async")]
pub use async_client::{AsyncRankingClient, ViewTask};
pub use error::{ErrorKind, RankingError, Result};
pub use gateway::Gateway;
pub use transport::{RetryPolicy, Transport};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Endpoint;
use crate::models::{DashboardStats, HealthStatus, Insights, VectorSyncResult};
use crate::transport::ReqwestTransport;

// ---------------------------------------------------------------------------
// RankingClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`RankingClient`].
///
/// Use [`RankingClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](RankingClientBuilder::build).
pub struct RankingClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for RankingClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
            max_retries: config::DEFAULT_MAX_RETRIES,
            retry_backoff: config::DEFAULT_RETRY_BACKOFF,
            transport: None,
        }
    }
}

impl RankingClientBuilder {
    /// Set the service base URL.
    ///
    /// If not set, `RANKING_API_URL` is used when present, otherwise
    /// `http://localhost:8000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how many times a failed GET request is retried. Defaults to 2.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the delay before the first retry; later retries double it.
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Use a custom [`Transport`] instead of the default `reqwest` client.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client. No request is sent.
    pub fn build(self) -> Result<RankingClient> {
        let base_url = self.base_url.unwrap_or_else(config::default_base_url);
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };
        let retry = RetryPolicy::new(self.max_retries, self.retry_backoff);
        let gateway = Gateway::new(&base_url, transport, retry)?;
        Ok(RankingClient { gateway })
    }
}

// ---------------------------------------------------------------------------
// RankingClient
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Wraps a [`Gateway`] and exposes endpoint groups as lightweight borrowing
/// wrappers. Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct RankingClient {
    gateway: Gateway,
}

impl RankingClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> RankingClientBuilder {
        RankingClientBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the product catalog interface.
    pub fn products(&self) -> queries::products::ProductQuery<'_> {
        queries::products::ProductQuery::new(&self.gateway)
    }

    /// Access the ranking history, summary and chart interface.
    pub fn rankings(&self) -> queries::rankings::RankingQuery<'_> {
        queries::rankings::RankingQuery::new(&self.gateway)
    }

    /// Access the report interface.
    pub fn reports(&self) -> queries::reports::ReportQuery<'_> {
        queries::reports::ReportQuery::new(&self.gateway)
    }

    /// Access the chat interface.
    pub fn chat(&self) -> queries::chat::ChatQuery<'_> {
        queries::chat::ChatQuery::new(&self.gateway)
    }

    // -- Single-call endpoints ---------------------------------------------

    /// Service liveness and initialization state.
    pub fn health(&self) -> Result<HealthStatus> {
        self.gateway
            .get_json("Failed to check health", Endpoint::Health.path(), Vec::new())
    }

    /// Headline counters for the dashboard.
    pub fn stats(&self) -> Result<DashboardStats> {
        self.gateway
            .get_json("Failed to fetch stats", Endpoint::Stats.path(), Vec::new())
    }

    /// Performance and marketing insights.
    pub fn insights(&self) -> Result<Insights> {
        self.gateway
            .get_json("Failed to fetch insights", Endpoint::Insights.path(), Vec::new())
    }

    /// Force a ranking collection and re-index the vector store.
    pub fn sync_vector_db(&self) -> Result<VectorSyncResult> {
        self.gateway
            .post_json("Failed to sync vector DB", Endpoint::VectorSync.path(), None)
    }

    /// Ranking history database statistics, returned as raw JSON.
    pub fn db_stats(&self) -> Result<serde_json::Value> {
        self.gateway
            .get_json("Failed to fetch DB stats", Endpoint::DbStats.path(), Vec::new())
    }

    // -- Accessors -----------------------------------------------------------

    pub fn base_url(&self) -> &str {
        self.gateway.base_url()
    }

    /// Return a reference to the underlying [`Gateway`] for advanced usage.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

impl fmt::Display for RankingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let retry = self.gateway.retry_policy();
        write!(
            f,
            "RankingClient(base_url={}, max_retries={})",
            self.gateway.base_url(),
            retry.max_retries
        )
    }
}
