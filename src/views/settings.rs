//! User-editable client settings.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{RankingError, Result};
use crate::models::ProductFilter;
use crate::RankingClient;

pub const MAX_DAYS: u32 = 365;
pub const MAX_PRODUCT_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub default_days: u32,
    pub product_limit: u32,
    pub laneige_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: config::default_base_url(),
            default_days: config::DEFAULT_DAYS,
            product_limit: config::DEFAULT_PRODUCT_LIMIT,
            laneige_only: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DAYS).contains(&self.default_days) {
            return Err(RankingError::InvalidArgument(format!(
                "default_days must be between 1 and {}, got {}",
                MAX_DAYS, self.default_days
            )));
        }
        if !(1..=MAX_PRODUCT_LIMIT).contains(&self.product_limit) {
            return Err(RankingError::InvalidArgument(format!(
                "product_limit must be between 1 and {}, got {}",
                MAX_PRODUCT_LIMIT, self.product_limit
            )));
        }
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(RankingError::InvalidArgument(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Validate and build a client for these settings.
    pub fn client(&self) -> Result<RankingClient> {
        self.validate()?;
        RankingClient::builder().base_url(self.base_url.clone()).build()
    }

    pub fn product_filter(&self, category: Option<&str>) -> ProductFilter {
        ProductFilter {
            category: category.map(str::to_string),
            laneige_only: self.laneige_only,
            limit: Some(self.product_limit),
        }
    }
}
