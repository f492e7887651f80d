//! Excel report listing, generation and download (`/api/reports/*`).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Endpoint;
use crate::error::{RankingError, Result};
use crate::gateway::Gateway;
use crate::models::{GeneratedReport, ReportInfo, ReportRequest};

// ---------------------------------------------------------------------------
// ReportQuery
// ---------------------------------------------------------------------------

/// Query interface for generated spreadsheet reports.
pub struct ReportQuery<'a> {
    gateway: &'a Gateway,
}

impl<'a> ReportQuery<'a> {
    /// Create a new `ReportQuery` bound to the given gateway.
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// List reports, newest first.
    pub fn list(&self) -> Result<Vec<ReportInfo>> {
        self.gateway
            .get_json("Failed to fetch reports", Endpoint::Reports.path(), Vec::new())
    }

    /// Ask the service to generate a report covering the last `days` days.
    pub fn generate(&self, days: u32) -> Result<GeneratedReport> {
        if days == 0 {
            return Err(RankingError::InvalidArgument(
                "Report window must be at least one day".into(),
            ));
        }
        let body = serde_json::to_value(ReportRequest { days }).map_err(|source| {
            RankingError::Decode {
                context: "Failed to generate report",
                source,
            }
        })?;
        self.gateway.post_json(
            "Failed to generate report",
            Endpoint::GenerateReport.path(),
            Some(body),
        )
    }

    /// Direct download URL for a report file.
    ///
    /// Pure URL construction; nothing is fetched. The filename is
    /// percent-encoded as a single path segment.
    pub fn download_url(&self, filename: &str) -> String {
        self.gateway.url(&download_path(filename))
    }

    /// Download a report into `dir`, returning the written path.
    ///
    /// The body is written to a temp file in `dir` and renamed on success, so
    /// a failed download never leaves a partial file behind.
    pub fn download_to<P: AsRef<Path>>(&self, filename: &str, dir: P) -> Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| *n == filename)
            .ok_or_else(|| {
                RankingError::InvalidArgument(format!("Invalid report filename: '{}'", filename))
            })?;

        let bytes = self
            .gateway
            .get_bytes("Failed to download report", &download_path(name))?;

        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let dest = dir.join(name);

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;
        tmp.persist(&dest).map_err(|e| RankingError::Io(e.error))?;

        tracing::info!(path = %dest.display(), bytes = bytes.len(), "report downloaded");
        Ok(dest)
    }
}

fn download_path(filename: &str) -> String {
    format!(
        "{}/{}",
        Endpoint::DownloadReport.path(),
        urlencoding::encode(filename)
    )
}
