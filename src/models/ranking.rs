use serde::{Deserialize, Serialize};

use super::ordered::OrderedMap;

// ---------------------------------------------------------------------------
// RankingSummaryEntry — Per-product aggregate over the history window
// ---------------------------------------------------------------------------

/// Aggregate ranks for one product over the service's history window.
///
/// Rank 1 is best, so for well-formed data
/// `best_rank <= avg_rank <= worst_rank`. The SDK does not check this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummaryEntry {
    pub avg_rank: f64,
    pub best_rank: u32,
    pub worst_rank: u32,
    /// Days the product placed in its category's top 5.
    #[serde(default)]
    pub top5_days: u32,
    #[serde(default)]
    pub current_rank: Option<u32>,
    /// Service-side trend label (`"rising"` / `"declining"`).
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub top10_days: Option<u32>,
}

/// Category key -> product name -> summary entry, in wire order.
pub type RankingSummary = OrderedMap<OrderedMap<RankingSummaryEntry>>;

// ---------------------------------------------------------------------------
// ChartDataPoint — One day of per-product ranks
// ---------------------------------------------------------------------------

/// One day's snapshot of ranks, keyed by product series key.
///
/// The service keys series by product name with spaces replaced by
/// underscores (see [`series_key`](crate::series::series_key)). A product
/// missing from a day was unranked that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub date: String,
    #[serde(flatten)]
    pub ranks: OrderedMap<Option<f64>>,
}

impl ChartDataPoint {
    pub fn rank(&self, key: &str) -> Option<f64> {
        self.ranks.get(key).copied().flatten()
    }
}

// ---------------------------------------------------------------------------
// RankingRow — One product's daily ranks (GET /api/rankings)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub product_name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub is_laneige: bool,
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Remaining columns, including the `day_N` rank columns.
    #[serde(flatten)]
    pub columns: OrderedMap<serde_json::Value>,
}

impl RankingRow {
    /// Daily ranks as `(day number, rank)`, ordered by day number.
    pub fn days(&self) -> Vec<(u32, Option<f64>)> {
        let mut days: Vec<(u32, Option<f64>)> = self
            .columns
            .iter()
            .filter_map(|(key, value)| {
                let day = key.strip_prefix("day_")?.parse::<u32>().ok()?;
                Some((day, value.as_f64()))
            })
            .collect();
        days.sort_by_key(|(day, _)| *day);
        days
    }

    /// Observed ranks in day order, skipping unranked days.
    pub fn observed_ranks(&self) -> Vec<f64> {
        self.days().into_iter().filter_map(|(_, rank)| rank).collect()
    }
}

/// Category key -> daily ranking rows, in wire order.
pub type RankingHistory = OrderedMap<Vec<RankingRow>>;
