//! Google Drive API client for metadata listing.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{DriveError, Result};
use crate::list::{ListQuery, PageFetcher};
use crate::models::{ApiErrorResponse, FileListResponse, FileRecord};

/// Base URL for Google Drive API v3.
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Field selection for listing calls. Everything the renderers and the
/// pathfinder consume must be requested here, or Drive omits it.
const LIST_FIELDS: &str =
    "nextPageToken, files(id, name, md5Checksum, mimeType, size, createdTime, parents, headRevisionId)";

/// Field selection for single-file lookups done by the pathfinder.
const FILE_FIELDS: &str = "id, name, mimeType, parents";

/// Client for the Drive metadata API.
///
/// Holds a bearer access token obtained out of band; token acquisition
/// and refresh are not this crate's concern.
pub struct DriveClient {
    base_url: String,
    access_token: String,
    http: Client,
}

impl DriveClient {
    /// Create a new client with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, DRIVE_API_BASE)
    }

    /// Create a client against a non-default endpoint (used by tests).
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            http: Client::new(),
        }
    }

    /// Get metadata for a single file by ID.
    pub async fn get_file(&self, file_id: &str) -> Result<FileRecord> {
        let response = self
            .http
            .get(format!("{}/files/{}", self.base_url, file_id))
            .bearer_auth(&self.access_token)
            .query(&[("supportsAllDrives", "true"), ("fields", FILE_FIELDS)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }

        let record: FileRecord = response.json().await?;
        Ok(record)
    }
}

#[async_trait]
impl PageFetcher for DriveClient {
    async fn fetch_page(
        &self,
        query: &ListQuery,
        page_token: Option<&str>,
    ) -> Result<FileListResponse> {
        let page_size = query.page_size();
        debug!(page_size, page_token = page_token.unwrap_or(""), "fetching page");

        let page_size = page_size.to_string();
        let mut request = self
            .http
            .get(format!("{}/files", self.base_url))
            .bearer_auth(&self.access_token)
            .query(&[
                ("q", query.query.as_str()),
                ("fields", LIST_FIELDS),
                ("orderBy", query.sort_order.as_str()),
                ("pageSize", page_size.as_str()),
            ]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }

        let page: FileListResponse = response.json().await?;
        Ok(page)
    }
}

/// Map a non-2xx response body to an API error, preferring the
/// structured error message when the body parses as one.
fn api_error(status: u16, body: String) -> DriveError {
    if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
        return DriveError::Api {
            status: api_error.error.code,
            message: api_error.error.message,
        };
    }
    DriveError::Api {
        status,
        message: body,
    }
}
