//! Shared test fixtures for the ranking-insight SDK integration tests.
//!
//! Provides `FakeTransport`, a scripted in-memory [`Transport`] keyed by
//! request path, plus canned service payloads and a `client()` helper that
//! wires them together without touching the network.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ranking_insight_sdk::models::{ChartDataPoint, RankingSummary};
use ranking_insight_sdk::transport::{HttpRequest, HttpResponse, Transport, TransportFailure};
use ranking_insight_sdk::RankingClient;
use serde_json::{json, Value};

pub const BASE_URL: &str = "http://ranking.test";

// ---------------------------------------------------------------------------
// FakeTransport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Reply {
    Json(u16, Value),
    Bytes(u16, Vec<u8>),
    Fail(String),
}

/// Requests seen by a `FakeTransport`, shared with the test after the
/// transport has been moved into a client.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<HttpRequest>>>);

impl RequestLog {
    pub fn all(&self) -> Vec<HttpRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Number of requests whose URL path equals `path`.
    pub fn count_path(&self, path: &str) -> usize {
        self.all().iter().filter(|r| path_of(&r.url) == path).count()
    }

    pub fn last(&self) -> HttpRequest {
        self.all().last().cloned().expect("no requests recorded")
    }
}

/// Scripted transport. Each path holds a queue of replies; the last reply in
/// a queue repeats forever. Unknown paths answer 404.
///
/// `Reply::Json` bodies are re-serialized from a `Value` and so lose object
/// key order; serve order-sensitive payloads with `with_bytes`.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, VecDeque<Reply>>>,
    log: RequestLog,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.with_sequence(path, vec![Reply::Json(200, body)])
    }

    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.with_sequence(path, vec![Reply::Json(status, json!({"detail": "error"}))])
    }

    pub fn with_bytes(self, path: &str, body: &[u8]) -> Self {
        self.with_sequence(path, vec![Reply::Bytes(200, body.to_vec())])
    }

    pub fn with_failure(self, path: &str, message: &str) -> Self {
        self.with_sequence(path, vec![Reply::Fail(message.to_string())])
    }

    pub fn with_sequence(self, path: &str, replies: Vec<Reply>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), replies.into_iter().collect());
        self
    }

    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        self.log.0.lock().unwrap().push(request.clone());

        let path = path_of(&request.url);
        let mut routes = self.routes.lock().unwrap();
        let reply = match routes.get_mut(&path) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Reply::Json(404, json!({"detail": "Not Found"})),
        };

        match reply {
            Reply::Json(status, body) => Ok(HttpResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            }),
            Reply::Bytes(status, body) => Ok(HttpResponse { status, body }),
            Reply::Fail(message) => Err(TransportFailure(message)),
        }
    }
}

fn path_of(url: &str) -> String {
    let path = url.strip_prefix(BASE_URL).unwrap_or(url);
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Client over `transport` with retries enabled and no backoff delay.
pub fn client(transport: FakeTransport) -> RankingClient {
    RankingClient::builder()
        .base_url(BASE_URL)
        .max_retries(2)
        .retry_backoff(Duration::ZERO)
        .transport(transport)
        .build()
        .unwrap()
}

/// Transport answering every dashboard and table endpoint successfully.
pub fn healthy_transport() -> FakeTransport {
    FakeTransport::new()
        .with_json("/", json!({"status": "ok", "message": "running", "initialized": true}))
        .with_json("/api/stats", stats_json())
        .with_bytes("/api/rankings/summary", SUMMARY_JSON.as_bytes())
        .with_bytes("/api/rankings/chart-data", CHART_JSON.as_bytes())
        .with_json("/api/products/laneige", products_json())
        .with_json("/api/insights", insights_json())
        .with_json("/api/reports", reports_json())
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

pub fn stats_json() -> Value {
    json!({
        "total_products": 120,
        "laneige_products": 4,
        "top5_products": 2,
        "average_rank": 6.3
    })
}

/// Four products over two categories, as raw response text.
///
/// Kept as text rather than a `json!` value: `serde_json::Value` sorts object
/// keys, and the aggregation order under test is the wire order. Products are
/// deliberately listed out of alphabetical order. Lip Sleeping Mask climbs
/// (change 7), Lip Glowy Balm is flat, Water Bank Cream sits outside the
/// top 10 and Cream Skin Toner sits exactly on the top-10 boundary.
pub const SUMMARY_JSON: &str = r#"{
    "lip_care": {
        "Lip Sleeping Mask": {
            "avg_rank": 3.0, "best_rank": 1, "worst_rank": 8, "top5_days": 20
        },
        "Lip Glowy Balm": {
            "avg_rank": 5.0, "best_rank": 5, "worst_rank": 5, "top5_days": 30,
            "current_rank": 5, "trend": "declining", "top10_days": 30
        }
    },
    "skincare": {
        "Water Bank Cream": {
            "avg_rank": 14.2, "best_rank": 9, "worst_rank": 21, "top5_days": 0,
            "current_rank": 12
        },
        "Cream Skin Toner": {
            "avg_rank": 10.0, "best_rank": 7, "worst_rank": 13, "top5_days": 0
        }
    }
}"#;

/// Three days of chart data; series keys are in first-seen, non-alphabetical
/// order.
pub const CHART_JSON: &str = r#"[
    {"date": "Day 1", "Lip_Sleeping_Mask": 8, "Lip_Glowy_Balm": 5},
    {"date": "Day 2", "Lip_Sleeping_Mask": 4, "Lip_Glowy_Balm": null},
    {"date": "Day 3", "Lip_Sleeping_Mask": 1, "Lip_Glowy_Balm": 5, "Water_Bank_Cream": 12}
]"#;

pub fn summary() -> RankingSummary {
    serde_json::from_str(SUMMARY_JSON).unwrap()
}

pub fn chart() -> Vec<ChartDataPoint> {
    serde_json::from_str(CHART_JSON).unwrap()
}

pub fn products_json() -> Value {
    json!([
        {
            "product_id": 1, "product_name": "Lip Sleeping Mask", "brand": "LANEIGE",
            "category": "Lip Care", "amazon_category": "lip_care",
            "price": 24.0, "rating": 4.6, "is_laneige": true
        },
        {
            "product_id": 2, "product_name": "Water Bank Cream", "brand": "LANEIGE",
            "category": "Skincare", "amazon_category": "skincare",
            "price": 38.0, "rating": 4.4, "is_laneige": true, "skin_type": "All"
        },
        {
            "product_id": 3, "product_name": "Lip Glowy Balm", "brand": "LANEIGE",
            "category": "Lip Care", "amazon_category": "lip_care",
            "price": 18.0, "rating": null, "is_laneige": true
        }
    ])
}

pub fn insights_json() -> Value {
    json!({
        "performanceCards": [{
            "type": "best_seller",
            "title": "Best seller",
            "description": "Lip Sleeping Mask averages 3.0",
            "metric": "Best rank: 1",
            "color": "#4CAF50"
        }],
        "marketingCards": [{
            "type": "action",
            "title": "Action plan",
            "description": "Ranking-based strategy",
            "details": [],
            "recommendations": ["Cross-sell top 5 products"],
            "color": "#2196F3"
        }],
        "performanceChart": [
            {"week": "Week 1", "avgRank": 7.5, "top5Rate": 40.0}
        ],
        "categoryTrend": [
            {"category": "Lip Care", "growth": 12.0, "color": "#E4007F"}
        ],
        "lastUpdated": "2026-10-16T09:00:00"
    })
}

pub fn reports_json() -> Value {
    json!([
        {
            "filename": "ranking_report_20261016.xlsx",
            "filepath": "output/ranking_report_20261016.xlsx",
            "created_at": 1792141200.0,
            "size": 18432
        }
    ])
}
