//! Query modules for the ranking-insight SDK.
//!
//! Each module provides a query struct that borrows the client's
//! [`Gateway`](crate::gateway::Gateway) and exposes one method per service
//! capability, returning typed models from [`crate::models`].

pub mod chat;
pub mod products;
pub mod rankings;
pub mod reports;

pub use chat::ChatQuery;
pub use products::ProductQuery;
pub use rankings::RankingQuery;
pub use reports::ReportQuery;
