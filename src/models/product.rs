use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product — Catalog entry returned by the products endpoints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u64,
    pub product_name: String,
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Marketplace category key (e.g. `lip_care`).
    #[serde(default)]
    pub amazon_category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_laneige: bool,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub skin_type: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
}

// ---------------------------------------------------------------------------
// ProductFilter — Query parameters for GET /api/products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Marketplace category key to match exactly.
    pub category: Option<String>,
    pub laneige_only: bool,
    /// Maximum number of products; the service defaults to 100.
    pub limit: Option<u32>,
}

impl ProductFilter {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(category) = &self.category {
            query.push(("category".to_string(), category.clone()));
        }
        if self.laneige_only {
            query.push(("laneige_only".to_string(), "true".to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }
}
