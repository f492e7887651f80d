//! Ranking history, summary and chart queries (`/api/rankings/*`).

use crate::config::Endpoint;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{ChartDataPoint, RankingHistory, RankingSummary};

// ---------------------------------------------------------------------------
// RankingQuery
// ---------------------------------------------------------------------------

/// Query interface for ranking data.
pub struct RankingQuery<'a> {
    gateway: &'a Gateway,
}

impl<'a> RankingQuery<'a> {
    /// Create a new `RankingQuery` bound to the given gateway.
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Daily ranking rows per category.
    ///
    /// `None` requests every category. An unknown category comes back as a
    /// single key with no rows.
    pub fn history(&self, category: Option<&str>, days: u32) -> Result<RankingHistory> {
        let query = vec![
            ("category".to_string(), category.unwrap_or("all").to_string()),
            ("days".to_string(), days.to_string()),
        ];
        self.gateway.get_json(
            "Failed to fetch rankings",
            Endpoint::Rankings.path(),
            query,
        )
    }

    /// Per-category, per-product rank aggregates for the tracked brand.
    pub fn summary(&self) -> Result<RankingSummary> {
        self.gateway.get_json(
            "Failed to fetch ranking summary",
            Endpoint::RankingSummary.path(),
            Vec::new(),
        )
    }

    /// One point per day for the last `days` days, ordered by date.
    pub fn chart_data(&self, days: u32) -> Result<Vec<ChartDataPoint>> {
        self.gateway.get_json(
            "Failed to fetch chart data",
            Endpoint::ChartData.path(),
            vec![("days".to_string(), days.to_string())],
        )
    }
}
