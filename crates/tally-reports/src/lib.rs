//! # Tally Reports Client
//!
//! HTTP client for the profit/loss reports API of the Tally backend.
//!
//! Every method maps to a single REST call: build the request, check the
//! status against the configured accepted sets, unwrap the
//! `{result, message}` envelope and validate the payload shape. There is
//! no retry logic, no task polling and no shared mutable state between
//! calls; long-running backend work comes back as a [`PendingTask`]
//! handle whose completion protocol lives elsewhere.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tally_reports::{ReportPeriod, ReportsClient};
//!
//! #[tokio::main]
//! async fn main() -> tally_reports::ApiResult<()> {
//!     let client = ReportsClient::new("http://127.0.0.1:4242/api/1")?;
//!
//!     let task = client
//!         .generate_report(ReportPeriod { start: 1609459200, end: 1640995199 })
//!         .await?;
//!     println!("report generation queued as task {}", task.task_id);
//!
//!     let reports = client.fetch_reports().await?;
//!     println!("{} reports on record", reports.entries_found);
//!     Ok(())
//! }
//! ```

pub mod case;
pub mod client;
pub mod config;
pub mod download;
pub mod envelope;
pub mod error;
pub mod status;

pub use client::ReportsClient;
pub use config::ClientConfig;
pub use download::DownloadStatus;
pub use envelope::ActionResult;
pub use error::{ApiError, ApiResult};
pub use status::StatusPolicy;

// Re-export the wire types every operation hands in or out.
pub use tally_types::{
    ActionableItems, Collection, DebugExportPayload, PageRequest, PendingTask, ProfitLossEvent,
    ProfitLossOverview, Report, ReportPeriod, Timestamp,
};
