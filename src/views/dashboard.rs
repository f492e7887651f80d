//! Dashboard: headline stats, aggregated rankings and the rank chart.

use std::thread;

use crate::aggregate::{self, Aggregation};
use crate::error::Result;
use crate::models::{ChartDataPoint, DashboardStats, RankingSummary};
use crate::series::{self, LabelMode, ProductSeries, Selection};
use crate::view::{LoadState, ViewKind};
use crate::RankingClient;

// ---------------------------------------------------------------------------
// DashboardData
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub aggregation: Aggregation,
    pub chart: Vec<ChartDataPoint>,
}

impl DashboardData {
    /// Combine the three dashboard payloads once all have arrived.
    pub fn from_parts(
        stats: DashboardStats,
        chart: Vec<ChartDataPoint>,
        summary: &RankingSummary,
    ) -> Self {
        Self {
            stats,
            aggregation: aggregate::aggregate(summary),
            chart,
        }
    }

    /// Fetch stats, chart data and the ranking summary concurrently.
    pub fn fetch(client: &RankingClient, days: u32) -> Result<Self> {
        thread::scope(|s| {
            let stats = s.spawn(|| client.stats());
            let chart = s.spawn(|| client.rankings().chart_data(days));
            let summary = s.spawn(|| client.rankings().summary());

            let stats = super::settle(stats);
            let chart = super::settle(chart);
            let summary = super::settle(summary);

            Ok(Self::from_parts(stats?, chart?, &summary?))
        })
    }
}

// ---------------------------------------------------------------------------
// DashboardView
// ---------------------------------------------------------------------------

pub struct DashboardView {
    days: u32,
    state: LoadState<DashboardData>,
    selection: Selection,
}

impl DashboardView {
    pub fn new(days: u32) -> Self {
        Self {
            days,
            state: LoadState::Loading,
            selection: Selection::new(),
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn state(&self) -> &LoadState<DashboardData> {
        &self.state
    }

    /// Reload everything. On failure no partial data is kept.
    pub fn refresh(&mut self, client: &RankingClient) {
        self.state.start_refresh();
        let result = DashboardData::fetch(client, self.days);
        self.apply(result);
    }

    /// Settle a load produced elsewhere (e.g. by the async client).
    pub fn apply(&mut self, result: Result<DashboardData>) {
        self.state.resolve(ViewKind::Dashboard, result);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggle a chart series. Unknown keys are accepted and simply plot
    /// nothing.
    pub fn toggle_series(&mut self, key: &str) -> bool {
        self.selection.toggle(key)
    }

    /// Select the first `n` series present in the chart data.
    pub fn select_first(&mut self, n: usize) {
        if let Some(data) = self.state.data() {
            for key in series::available_keys(&data.chart).iter().take(n) {
                self.selection.select(key);
            }
        }
    }

    /// Series for the current selection; empty until the view is ready.
    pub fn series(&self, mode: LabelMode) -> Vec<ProductSeries> {
        match self.state.data() {
            Some(data) => series::reconcile(&data.chart, &self.selection, mode),
            None => Vec::new(),
        }
    }
}
