//! Request execution against the ranking-insight REST service.
//!
//! [`Gateway`] resolves paths against the base URL, sends requests through a
//! [`Transport`], applies the [`RetryPolicy`] to idempotent requests, and
//! maps every failure to a [`RankingError`] carrying the endpoint's fixed
//! context message.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{RankingError, Result};
use crate::transport::{HttpRequest, HttpResponse, Method, RetryPolicy, Transport};

/// Shared request executor used by every query interface.
#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl Gateway {
    /// Create a gateway for `base_url`.
    ///
    /// The URL must use `http` or `https`; a trailing slash is dropped.
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, retry: RetryPolicy) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(RankingError::InvalidArgument(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            transport,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Absolute URL for an API path (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        context: &'static str,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(path),
            query,
            body: None,
        };
        let resp = self.send(context, &request)?;
        decode(context, &resp)
    }

    /// POST `body` (or no body) to `path` and decode the JSON reply.
    pub fn post_json<T: DeserializeOwned>(
        &self,
        context: &'static str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let request = HttpRequest {
            method: Method::Post,
            url: self.url(path),
            query: Vec::new(),
            body,
        };
        let resp = self.send(context, &request)?;
        decode(context, &resp)
    }

    /// GET `path` and return the raw body bytes.
    pub fn get_bytes(&self, context: &'static str, path: &str) -> Result<Vec<u8>> {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(path),
            query: Vec::new(),
            body: None,
        };
        Ok(self.send(context, &request)?.body)
    }

    /// Send once, or with retries for GET requests.
    ///
    /// POST requests are never retried: chat, report generation and vector
    /// sync all have server-side effects.
    fn send(&self, context: &'static str, request: &HttpRequest) -> Result<HttpResponse> {
        let attempt = || -> Result<HttpResponse> {
            tracing::debug!(method = %request.method, url = %request.url, "sending request");
            let resp = self
                .transport
                .execute(request)
                .map_err(|failure| RankingError::Transport {
                    context,
                    message: failure.0,
                })?;
            if !resp.is_success() {
                return Err(RankingError::HttpStatus {
                    context,
                    status: resp.status,
                });
            }
            Ok(resp)
        };

        match request.method {
            Method::Get => self.retry.run(context, attempt),
            Method::Post => attempt(),
        }
    }
}

fn decode<T: DeserializeOwned>(context: &'static str, resp: &HttpResponse) -> Result<T> {
    serde_json::from_slice(&resp.body).map_err(|source| RankingError::Decode { context, source })
}
