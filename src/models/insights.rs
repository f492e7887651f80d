use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Insights — GET /api/insights
// ---------------------------------------------------------------------------

/// Performance and marketing insight payload.
///
/// Generated server-side either by a language model or by rules, so every
/// collection defaults to empty when the generator omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    #[serde(default)]
    pub performance_cards: Vec<InsightCard>,
    #[serde(default)]
    pub marketing_cards: Vec<InsightCard>,
    #[serde(default)]
    pub performance_chart: Vec<PerformancePoint>,
    #[serde(default)]
    pub category_trend: Vec<CategoryTrend>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightCard {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Weekly roll-up of the tracked brand's ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub week: String,
    pub avg_rank: f64,
    pub top5_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTrend {
    pub category: String,
    /// First-week to last-week improvement, in percent.
    pub growth: f64,
    #[serde(default)]
    pub color: Option<String>,
}
