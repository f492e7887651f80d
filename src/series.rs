//! Chart series reconciliation.
//!
//! Turns the day-major chart payload (one [`ChartDataPoint`] per day) into
//! product-major series for the products the user has selected.

use serde::{Deserialize, Serialize};

use crate::models::ChartDataPoint;

/// Chart key for a product name, as emitted by the chart endpoint.
pub fn series_key(product_name: &str) -> String {
    product_name.replace(' ', "_")
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Ordered set of selected series keys.
///
/// Client-only state: it is not persisted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `key`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.deselect(key) {
            false
        } else {
            self.keys.push(key.to_string());
            true
        }
    }

    /// Add `key` if absent. Returns `true` if it was added.
    pub fn select(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Remove `key`. Returns `true` if it was present.
    pub fn deselect(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for key in iter {
            selection.select(&key.into());
        }
        selection
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Relabel points "Day 1", "Day 2", ... in order.
    Sequential,
    /// Keep the `date` label sent by the service.
    Dates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    /// `None` when the product was unranked that day.
    pub rank: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSeries {
    pub key: String,
    pub points: Vec<SeriesPoint>,
}

impl ProductSeries {
    /// Whether the product was ranked on at least one day.
    pub fn has_data(&self) -> bool {
        self.points.iter().any(|p| p.rank.is_some())
    }
}

/// Build one series per selected key, in selection order.
///
/// A key that appears in no point still gets a series, with every rank
/// `None`.
pub fn reconcile(points: &[ChartDataPoint], selection: &Selection, mode: LabelMode) -> Vec<ProductSeries> {
    let labels: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, point)| match mode {
            LabelMode::Sequential => format!("Day {}", i + 1),
            LabelMode::Dates => point.date.clone(),
        })
        .collect();

    selection
        .iter()
        .map(|key| ProductSeries {
            key: key.to_string(),
            points: points
                .iter()
                .zip(&labels)
                .map(|(point, label)| SeriesPoint {
                    label: label.clone(),
                    rank: point.rank(key),
                })
                .collect(),
        })
        .collect()
}

/// Union of series keys across all points, in first-seen order.
pub fn available_keys(points: &[ChartDataPoint]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for point in points {
        for key in point.ranks.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}

/// First observed rank minus last observed rank for `key`.
///
/// Positive means the product climbed over the window. `None` when the
/// product has no observed rank at all.
pub fn first_last_delta(points: &[ChartDataPoint], key: &str) -> Option<f64> {
    let mut observed = points.iter().filter_map(|p| p.rank(key));
    let first = observed.next()?;
    let last = observed.last().unwrap_or(first);
    Some(first - last)
}
