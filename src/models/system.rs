use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HealthStatus — GET /
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub initialized: bool,
}

// ---------------------------------------------------------------------------
// DashboardStats — GET /api/stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_products: u64,
    pub laneige_products: u64,
    pub top5_products: u64,
    /// Mean rank of the tracked brand's products, rounded to one decimal.
    pub average_rank: f64,
}

// ---------------------------------------------------------------------------
// VectorSyncResult — POST /api/vectordb/sync
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSyncResult {
    pub success: bool,
    pub updated_count: u64,
    #[serde(default)]
    pub history_days: Option<u64>,
    pub message: String,
}
