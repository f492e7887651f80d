//! Async wrapper around [`RankingClient`] for use in Tokio runtimes.
//!
//! Runs gateway calls on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! View loads can be spawned as a [`ViewTask`], which is aborted when the
//! owning view drops it.
//!
//! # Example
//!
//! ```no_run
//! use ranking_insight_sdk::AsyncRankingClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncRankingClient::builder().build().unwrap();
//!
//!     // Run any sync client method via closure
//!     let stats = client.run(|c| c.stats()).await.unwrap();
//!
//!     // Dashboard fetches run concurrently
//!     let dashboard = client.load_dashboard(30).await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::{RankingError, Result};
use crate::models::RankingSummary;
use crate::views::{DashboardData, RankingTable};
use crate::{RankingClient, RankingClientBuilder, SortKey, Transport};

// ---------------------------------------------------------------------------
// AsyncRankingClientBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncRankingClient`]; wraps [`RankingClientBuilder`].
pub struct AsyncRankingClientBuilder {
    inner: RankingClientBuilder,
}

impl AsyncRankingClientBuilder {
    /// Set the service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set how many times a failed GET request is retried.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.inner = self.inner.max_retries(retries);
        self
    }

    /// Set the delay before the first retry.
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.inner = self.inner.retry_backoff(backoff);
        self
    }

    /// Use a custom [`Transport`] instead of the default `reqwest` client.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.inner = self.inner.transport(transport);
        self
    }

    /// Build the client. No request is sent.
    pub fn build(self) -> Result<AsyncRankingClient> {
        Ok(AsyncRankingClient::from_client(self.inner.build()?))
    }
}

// ---------------------------------------------------------------------------
// AsyncRankingClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`RankingClient`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. Cheap to clone.
#[derive(Clone)]
pub struct AsyncRankingClient {
    inner: Arc<RankingClient>,
}

impl AsyncRankingClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncRankingClientBuilder {
        AsyncRankingClientBuilder {
            inner: RankingClient::builder(),
        }
    }

    pub fn from_client(client: RankingClient) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Borrow the wrapped sync client.
    pub fn client(&self) -> &RankingClient {
        &self.inner
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ranking_insight_sdk::AsyncRankingClient;
    /// # async fn example() -> ranking_insight_sdk::Result<()> {
    /// # let client = AsyncRankingClient::builder().build()?;
    /// let summary = client.run(|c| c.rankings().summary()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&RankingClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(join_error)?
    }

    /// Fetch the ranking summary asynchronously.
    pub async fn ranking_summary(&self) -> Result<RankingSummary> {
        self.run(|c| c.rankings().summary()).await
    }

    /// Fetch stats, chart data and summary concurrently, then aggregate.
    ///
    /// Every request is awaited before the result is decided; any error
    /// fails the whole load.
    pub async fn load_dashboard(&self, days: u32) -> Result<DashboardData> {
        let (stats, chart, summary) = tokio::join!(
            self.run(|c| c.stats()),
            self.run(move |c| c.rankings().chart_data(days)),
            self.run(|c| c.rankings().summary()),
        );
        Ok(DashboardData::from_parts(stats?, chart?, &summary?))
    }

    /// Fetch the summary and brand catalog concurrently for the ranking table.
    pub async fn load_ranking_table(&self, sort: SortKey) -> Result<RankingTable> {
        let (summary, products) = tokio::join!(
            self.run(|c| c.rankings().summary()),
            self.run(|c| c.products().laneige()),
        );
        Ok(RankingTable::from_parts(&summary?, &products?, sort))
    }

    /// Spawn a view load as a cancellable task.
    pub fn spawn_view<F, Fut, T>(&self, load: F) -> ViewTask<T>
    where
        F: FnOnce(AsyncRankingClient) -> Fut,
        Fut: std::future::Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        ViewTask {
            handle: Some(tokio::spawn(load(self.clone()))),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewTask
// ---------------------------------------------------------------------------

/// An in-flight view load tied to the lifetime of its view.
///
/// Dropping the task aborts it, so a torn-down view never receives a late
/// result. A blocking request already running on the pool still finishes
/// (bounded by the client timeout), but its result is discarded.
pub struct ViewTask<T> {
    handle: Option<JoinHandle<Result<T>>>,
}

impl<T> ViewTask<T> {
    /// Abort the load.
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the load. Returns [`RankingError::Cancelled`] if it was
    /// aborted.
    pub async fn join(mut self) -> Result<T> {
        match self.handle.take() {
            Some(handle) => handle.await.map_err(join_error)?,
            None => Err(RankingError::Cancelled),
        }
    }
}

impl<T> Drop for ViewTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> RankingError {
    if e.is_cancelled() {
        RankingError::Cancelled
    } else if e.is_panic() {
        std::panic::resume_unwind(e.into_panic())
    } else {
        RankingError::InvalidArgument(format!("Task join error: {e}"))
    }
}
