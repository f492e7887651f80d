//! Stateful views over the gateway.
//!
//! Each view owns its own [`LoadState`](crate::view::LoadState) and fetch
//! lifecycle. Views that need several requests issue them concurrently and
//! only settle once every request has finished; any failure fails the whole
//! load.

pub mod chat;
pub mod dashboard;
pub mod insights;
pub mod rankings;
pub mod reports;
pub mod settings;

pub use chat::{ChatRole, ChatTranscript, ChatTurn};
pub use dashboard::{DashboardData, DashboardView};
pub use insights::InsightsView;
pub use rankings::{RankingTable, RankingTableView};
pub use reports::ReportsView;
pub use settings::Settings;

use std::thread::ScopedJoinHandle;

use crate::error::Result;

/// Wait for a scoped fetch, re-raising a panic from the fetch thread.
pub(crate) fn settle<T>(handle: ScopedJoinHandle<'_, Result<T>>) -> Result<T> {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}
