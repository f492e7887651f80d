//! Ranking aggregation.
//!
//! Folds the nested ranking summary (category -> product -> entry) into a
//! flat list of [`DerivedProductRanking`] records with derived metrics, plus
//! a small set of counters for the dashboard header.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{Product, RankingSummary, RankingSummaryEntry};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    fn from_change(change: i64) -> Self {
        match change.cmp(&0) {
            Ordering::Greater => Trend::Up,
            Ordering::Less => Trend::Down,
            Ordering::Equal => Trend::Flat,
        }
    }
}

/// One product's ranking with derived metrics.
///
/// Rebuilt on every aggregation pass; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProductRanking {
    pub product_name: String,
    /// Category key as sent by the service (e.g. `lip_care`).
    pub category: String,
    /// Display form of the category key (e.g. `Lip Care`).
    pub category_label: String,
    /// Catalog id, once joined via [`attach_product_ids`].
    pub product_id: Option<u64>,
    pub current: u32,
    pub best: u32,
    pub worst: u32,
    pub avg: f64,
    /// `worst - best`; positive reads as improvement over the window.
    pub change: i64,
    pub top5: bool,
    pub top10: bool,
    pub top5_days: u32,
    pub trend: Trend,
}

impl DerivedProductRanking {
    fn from_entry(category: &str, product_name: &str, entry: &RankingSummaryEntry) -> Self {
        // Proxy for window improvement, not a first-vs-last delta; see
        // `series::first_last_delta` for the directional metric.
        let change = i64::from(entry.worst_rank) - i64::from(entry.best_rank);
        Self {
            product_name: product_name.to_string(),
            category: category.to_string(),
            category_label: category_label(category),
            product_id: None,
            current: entry.current_rank.unwrap_or(entry.best_rank),
            best: entry.best_rank,
            worst: entry.worst_rank,
            avg: entry.avg_rank,
            change,
            top5: entry.avg_rank <= 5.0,
            top10: entry.avg_rank <= 10.0,
            top5_days: entry.top5_days,
            trend: Trend::from_change(change),
        }
    }

    pub fn category_color(&self) -> &'static str {
        category_color(&self.category)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingCounters {
    /// Products with an average rank of 10 or better.
    pub top10: usize,
    /// Products with a positive change.
    pub up: usize,
    /// Products with a negative change.
    pub down: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending average rank.
    Average,
    /// Ascending best rank.
    Best,
    /// Descending change (largest improvement first).
    Change,
    /// Product name, case-insensitive.
    Name,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub rankings: Vec<DerivedProductRanking>,
    pub counters: RankingCounters,
}

impl Aggregation {
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Positional display rank for the record at `index` (1-based).
    pub fn display_rank(index: usize) -> usize {
        index + 1
    }

    /// Records paired with their display rank, in current order.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &DerivedProductRanking)> {
        self.rankings
            .iter()
            .enumerate()
            .map(|(i, r)| (Self::display_rank(i), r))
    }

    /// Reorder records in place. The sort is stable, so ties keep wire order.
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Average => self
                .rankings
                .sort_by(|a, b| a.avg.partial_cmp(&b.avg).unwrap_or(Ordering::Equal)),
            SortKey::Best => self.rankings.sort_by_key(|r| r.best),
            SortKey::Change => self.rankings.sort_by(|a, b| b.change.cmp(&a.change)),
            SortKey::Name => self
                .rankings
                .sort_by_key(|r| r.product_name.to_lowercase()),
        }
    }

    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a DerivedProductRanking> + 'a {
        self.rankings.iter().filter(move |r| r.category == category)
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Flatten a ranking summary into derived records and counters.
///
/// Categories and products are visited in wire order; no sorting happens
/// here. Input is trusted: `best <= avg <= worst` is neither checked nor
/// repaired. An empty summary yields an empty result and zero counters.
pub fn aggregate(summary: &RankingSummary) -> Aggregation {
    let mut rankings = Vec::new();
    let mut counters = RankingCounters::default();

    for (category, products) in summary.iter() {
        for (product_name, entry) in products.iter() {
            let derived = DerivedProductRanking::from_entry(category, product_name, entry);

            if derived.top10 {
                counters.top10 += 1;
            }
            match derived.trend {
                Trend::Up => counters.up += 1,
                Trend::Down => counters.down += 1,
                Trend::Flat => {}
            }

            rankings.push(derived);
        }
    }

    Aggregation { rankings, counters }
}

/// Fill `product_id` on each record by matching normalized product names
/// against the catalog.
///
/// Returns the number of records matched. Records without a match keep
/// `None`. When several catalog products normalize to the same name, the
/// first one wins.
pub fn attach_product_ids(aggregation: &mut Aggregation, products: &[Product]) -> usize {
    let mut index: HashMap<String, u64> = HashMap::with_capacity(products.len());
    for product in products {
        index
            .entry(normalize_name(&product.product_name))
            .or_insert(product.product_id);
    }

    let mut matched = 0;
    for record in &mut aggregation.rankings {
        record.product_id = index.get(&normalize_name(&record.product_name)).copied();
        if record.product_id.is_some() {
            matched += 1;
        }
    }
    matched
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// `"lip_care"` -> `"Lip Care"`.
pub fn category_label(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn category_color(key: &str) -> &'static str {
    config::category_colors()
        .get(key)
        .copied()
        .unwrap_or(config::FALLBACK_CATEGORY_COLOR)
}

/// Normalize a product name for joining across payloads.
///
/// Lowercases, treats underscores and punctuation as separators, and
/// collapses runs of separators into a single space.
pub fn normalize_name(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
