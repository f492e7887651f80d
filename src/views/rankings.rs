//! Sortable ranking table joined to the catalog.

use std::thread;

use crate::aggregate::{self, Aggregation, SortKey};
use crate::error::Result;
use crate::models::{Product, RankingSummary};
use crate::view::{LoadState, ViewKind};
use crate::RankingClient;

#[derive(Debug, Clone, PartialEq)]
pub struct RankingTable {
    pub aggregation: Aggregation,
    pub sort: SortKey,
}

impl RankingTable {
    pub fn from_parts(summary: &RankingSummary, products: &[Product], sort: SortKey) -> Self {
        let mut aggregation = aggregate::aggregate(summary);
        aggregate::attach_product_ids(&mut aggregation, products);
        aggregation.sort_by(sort);
        Self { aggregation, sort }
    }

    /// Fetch the summary and the brand's catalog concurrently.
    pub fn fetch(client: &RankingClient, sort: SortKey) -> Result<Self> {
        thread::scope(|s| {
            let summary = s.spawn(|| client.rankings().summary());
            let products = s.spawn(|| client.products().laneige());

            let summary = super::settle(summary);
            let products = super::settle(products);

            Ok(Self::from_parts(&summary?, &products?, sort))
        })
    }
}

pub struct RankingTableView {
    sort: SortKey,
    state: LoadState<RankingTable>,
}

impl Default for RankingTableView {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingTableView {
    pub fn new() -> Self {
        Self {
            sort: SortKey::Average,
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState<RankingTable> {
        &self.state
    }

    pub fn refresh(&mut self, client: &RankingClient) {
        self.state.start_refresh();
        let result = RankingTable::fetch(client, self.sort);
        self.state.resolve(ViewKind::Rankings, result);
    }

    /// Change the sort order, re-sorting loaded data without refetching.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = key;
        if let Some(table) = self.state.data_mut() {
            table.aggregation.sort_by(key);
            table.sort = key;
        }
    }
}
