//! Report list with generate-and-refresh.

use crate::error::Result;
use crate::models::{GeneratedReport, ReportInfo};
use crate::view::{LoadState, ViewKind};
use crate::RankingClient;

#[derive(Default)]
pub struct ReportsView {
    state: LoadState<Vec<ReportInfo>>,
}

impl ReportsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<ReportInfo>> {
        &self.state
    }

    pub fn refresh(&mut self, client: &RankingClient) {
        self.state.start_refresh();
        let result = client.reports().list();
        self.state.resolve(ViewKind::Reports, result);
    }

    /// Generate a report, then reload the list so it shows up.
    ///
    /// A generation failure is returned and leaves the list untouched.
    pub fn generate(&mut self, client: &RankingClient, days: u32) -> Result<GeneratedReport> {
        let report = client.reports().generate(days).inspect_err(|e| {
            tracing::warn!(view = %ViewKind::Reports, error = %e, "report generation failed");
        })?;
        self.refresh(client);
        Ok(report)
    }

    pub fn download_url(&self, client: &RankingClient, report: &ReportInfo) -> String {
        client.reports().download_url(&report.filename)
    }
}
