use crate::models::Insights;
use crate::view::{LoadState, ViewKind};
use crate::RankingClient;

#[derive(Default)]
pub struct InsightsView {
    state: LoadState<Insights>,
}

impl InsightsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Insights> {
        &self.state
    }

    pub fn refresh(&mut self, client: &RankingClient) {
        self.state.start_refresh();
        let result = client.insights();
        self.state.resolve(ViewKind::Insights, result);
    }
}
