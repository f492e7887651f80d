//! Product catalog queries (`/api/products`).

use crate::config::Endpoint;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{Product, ProductFilter};

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for the product catalog.
pub struct ProductQuery<'a> {
    gateway: &'a Gateway,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given gateway.
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// List products, optionally filtered by marketplace category and brand.
    pub fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.gateway.get_json(
            "Failed to fetch products",
            Endpoint::Products.path(),
            filter.to_query(),
        )
    }

    /// List every product of the tracked brand.
    pub fn laneige(&self) -> Result<Vec<Product>> {
        self.gateway.get_json(
            "Failed to fetch LANEIGE products",
            Endpoint::LaneigeProducts.path(),
            Vec::new(),
        )
    }
}
