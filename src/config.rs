use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const BASE_URL_ENV: &str = "RANKING_API_URL";

pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_PRODUCT_LIMIT: u32 = 100;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(250);

pub const FALLBACK_CATEGORY_COLOR: &str = "#666666";

/// Service endpoints. Paths are fixed; path parameters are appended by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    Stats,
    Products,
    LaneigeProducts,
    Rankings,
    RankingSummary,
    ChartData,
    Chat,
    Reports,
    GenerateReport,
    DownloadReport,
    VectorSync,
    Insights,
    DbStats,
}

impl Endpoint {
    pub const ALL: [Endpoint; 14] = [
        Endpoint::Health,
        Endpoint::Stats,
        Endpoint::Products,
        Endpoint::LaneigeProducts,
        Endpoint::Rankings,
        Endpoint::RankingSummary,
        Endpoint::ChartData,
        Endpoint::Chat,
        Endpoint::Reports,
        Endpoint::GenerateReport,
        Endpoint::DownloadReport,
        Endpoint::VectorSync,
        Endpoint::Insights,
        Endpoint::DbStats,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/",
            Endpoint::Stats => "/api/stats",
            Endpoint::Products => "/api/products",
            Endpoint::LaneigeProducts => "/api/products/laneige",
            Endpoint::Rankings => "/api/rankings",
            Endpoint::RankingSummary => "/api/rankings/summary",
            Endpoint::ChartData => "/api/rankings/chart-data",
            Endpoint::Chat => "/api/chat",
            Endpoint::Reports => "/api/reports",
            Endpoint::GenerateReport => "/api/reports/generate",
            Endpoint::DownloadReport => "/api/reports/download",
            Endpoint::VectorSync => "/api/vectordb/sync",
            Endpoint::Insights => "/api/insights",
            Endpoint::DbStats => "/api/db/stats",
        }
    }
}

pub fn category_colors() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("lip_care", "#E4007F"),
        ("skincare", "#4285F4"),
        ("lip_makeup", "#4CAF50"),
        ("face_powder", "#FF9800"),
    ])
}

pub fn default_base_url() -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
