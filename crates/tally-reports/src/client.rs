//! HTTP client for the reports API.

use std::path::Path;

use reqwest::{multipart, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use tally_types::{
    ActionableItems, Collection, DebugExportPayload, PageRequest, PendingTask, ProfitLossEvent,
    ProfitLossOverview, Report, ReportPeriod, Timestamp,
};

use crate::case;
use crate::config::ClientConfig;
use crate::download::{self, DownloadStatus};
use crate::envelope::ActionResult;
use crate::error::{ApiError, ApiResult};

/// Client for the profit/loss reports API.
///
/// Each method is one independent request/response exchange. The client
/// holds no mutable state and is cheaply cloneable, so it can be shared
/// across components.
#[derive(Debug, Clone)]
pub struct ReportsClient {
    http: Client,
    config: ClientConfig,
}

impl ReportsClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent("tally-reports")
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Queues generation of a profit/loss report over `period`.
    ///
    /// The backend runs generation as a long-lived job; the returned
    /// [`PendingTask`] is the handle to poll elsewhere.
    pub async fn generate_report(&self, period: ReportPeriod) -> ApiResult<PendingTask> {
        #[derive(Serialize)]
        struct GenerateQuery {
            async_query: bool,
            from_timestamp: Timestamp,
            to_timestamp: Timestamp,
        }

        let params = case::snakecase_keys(serde_json::to_value(GenerateQuery {
            async_query: true,
            from_timestamp: period.start,
            to_timestamp: period.end,
        })?);

        debug!(
            "queueing report generation for {}..{}",
            period.start, period.end
        );
        let response = self
            .http
            .get(format!("{}/history", self.config.base_url))
            .query(&params)
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Asks the backend to write the current report as CSV files under
    /// `directory`, a path on the backend host.
    pub async fn export_report_csv(&self, directory: &str) -> ApiResult<bool> {
        let response = self
            .http
            .get(format!("{}/history/export", self.config.base_url))
            .query(&[("directory_path", directory)])
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Downloads the current report as a zip archive into `directory`.
    ///
    /// This is the one operation with local recovery: transport
    /// failures, rejected statuses, failure envelopes and filesystem
    /// errors are all folded into [`DownloadStatus::Failed`] instead of
    /// being returned as `Err`.
    pub async fn download_report_csv(&self, directory: &Path) -> DownloadStatus {
        let response = match self
            .http
            .get(format!("{}/history/download", self.config.base_url))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return DownloadStatus::failed(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::OK {
            let bytes = match response.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => return DownloadStatus::failed(e.to_string()),
            };
            return match download::save_archive(directory, &bytes) {
                Ok(path) => DownloadStatus::Downloaded { path },
                Err(e) => DownloadStatus::failed(e.to_string()),
            };
        }

        if !self.config.status.accepts_task(status) {
            warn!("report download rejected with status {status}");
            return DownloadStatus::failed(format!("unexpected status {status}"));
        }

        // Accepted non-200 statuses carry a JSON failure envelope.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return DownloadStatus::failed(e.to_string()),
        };
        match serde_json::from_str::<ActionResult<Value>>(&body) {
            Ok(envelope) => DownloadStatus::failed(envelope.message),
            Err(e) => DownloadStatus::failed(e.to_string()),
        }
    }

    /// Queues a diagnostic dump of the inputs used to build reports.
    pub async fn export_report_data(&self, payload: &DebugExportPayload) -> ApiResult<PendingTask> {
        let mut body = serde_json::to_value(payload)?;
        if let Value::Object(ref mut map) = body {
            map.insert("async_query".to_string(), Value::Bool(true));
        }
        let body = case::snakecase_keys(body);

        let response = self
            .http
            .post(format!("{}/history/debug", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Points the backend at a dump file on its own filesystem and
    /// queues an import.
    pub async fn import_report_data(&self, filepath: &str) -> ApiResult<PendingTask> {
        let body = case::snakecase_keys(json!({
            "filepath": filepath,
            "async_query": true,
        }));

        let response = self
            .http
            .put(format!("{}/history/debug", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Uploads a dump file and queues an import.
    ///
    /// The multipart field name is the fixed literal `filepath`; no key
    /// mapping is applied to multipart bodies. Unlike the other
    /// operations this one accepts 2xx statuses only.
    pub async fn upload_report_data(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> ApiResult<PendingTask> {
        debug!("uploading report dump {file_name}");
        let part = multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = multipart::Form::new().part("filepath", part);

        let response = self
            .http
            .post(format!(
                "{}/history/debug?async_query=true",
                self.config.base_url
            ))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        Self::unwrap_envelope(response).await
    }

    /// Fetches the problems of the last report generation that need
    /// user action.
    pub async fn fetch_actionable_items(&self) -> ApiResult<ActionableItems> {
        let response = self
            .http
            .get(format!("{}/history/actionable_items", self.config.base_url))
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Fetches the summaries of all generated reports.
    pub async fn fetch_reports(&self) -> ApiResult<Collection<Report>> {
        let response = self
            .http
            .get(format!("{}/reports", self.config.base_url))
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Fetches the overview of one generated report.
    ///
    /// The backend wraps the overview in a single-entry collection; the
    /// first entry is returned and an empty collection is a shape error.
    pub async fn fetch_report(&self, report_id: u64) -> ApiResult<ProfitLossOverview> {
        let response = self
            .http
            .get(format!("{}/reports/{report_id}", self.config.base_url))
            .send()
            .await?;

        let overview: Collection<ProfitLossOverview> = self.handle_json(response).await?;
        overview
            .entries
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::InvalidShape("empty overview collection".to_string()))
    }

    /// Fetches one page of a report's line events.
    ///
    /// The page request goes out verbatim as the POST body.
    pub async fn fetch_report_events(
        &self,
        report_id: u64,
        page: PageRequest,
    ) -> ApiResult<Collection<ProfitLossEvent>> {
        let response = self
            .http
            .post(format!("{}/reports/{report_id}/data", self.config.base_url))
            .json(&page)
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Deletes a generated report.
    pub async fn delete_report(&self, report_id: u64) -> ApiResult<bool> {
        debug!("deleting report {report_id}");
        let response = self
            .http
            .delete(format!("{}/reports/{report_id}", self.config.base_url))
            .send()
            .await?;

        self.handle_json(response).await
    }

    /// Applies the accepted-status check, unwraps the envelope and
    /// validates the payload shape.
    async fn handle_json<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        if !self.config.status.accepts(response.status()) {
            return Err(Self::status_error(response).await);
        }
        Self::unwrap_envelope(response).await
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ApiError::Status { status, body }
    }

    /// Two deserialization stages keep the failure classes apart: a body
    /// that is not an envelope is `InvalidResponse`, a payload that does
    /// not match the expected type is `InvalidShape`.
    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let envelope: ActionResult<Value> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let payload = envelope.into_result()?;
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidShape(e.to_string()))
    }
}
