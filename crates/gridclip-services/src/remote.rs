//! Backend formatting of row-range exports.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ExportError, ExportResult};
use crate::export::RowExportRequest;
use crate::settings::RemoteSettings;

/// Formats a row interval server-side.
///
/// The returned text is the finished clipboard content and is used verbatim.
#[async_trait]
pub trait RowExportSource: Send + Sync {
    async fn fetch_rows(&self, request: &RowExportRequest) -> ExportResult<String>;
}

/// [`RowExportSource`] backed by the row copy HTTP endpoint
pub struct HttpRowExportSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRowExportSource {
    pub fn new(settings: &RemoteSettings) -> ExportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.row_copy_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RowExportSource for HttpRowExportSource {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint, start = request.start_row, end = request.end_row))]
    async fn fetch_rows(&self, request: &RowExportRequest) -> ExportResult<String> {
        let form = request.form_fields()?;

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| ExportError::RemoteFailed(e.to_string()))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "row export endpoint rejected request");
            return Err(ExportError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(bytes = body.len(), "row export text received");
        Ok(body)
    }
}
