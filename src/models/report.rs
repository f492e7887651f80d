use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInfo {
    pub filename: String,
    pub filepath: String,
    /// Modification time as Unix seconds.
    pub created_at: f64,
    /// File size in bytes.
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub success: bool,
    pub filepath: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReportRequest {
    pub days: u32,
}
