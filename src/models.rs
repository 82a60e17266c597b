//! Data models for Google Drive API responses.

use serde::{Deserialize, Serialize};

/// MIME type Google Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Metadata for a file or folder in Google Drive.
///
/// A snapshot of server state at fetch time; never mutated after the
/// listing completes, except for the name swap in absolute-path mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub md5_checksum: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub head_revision_id: Option<String>,
}

impl FileRecord {
    /// True if this record denotes a folder.
    pub fn is_dir(&self) -> bool {
        self.mime_type.as_deref() == Some(FOLDER_MIME_TYPE)
    }

    /// True if this record holds binary content. Drive only computes
    /// an md5 checksum for blob (non-document) files, so the presence
    /// of one is the marker.
    pub fn is_binary(&self) -> bool {
        self.md5_checksum.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Drive reports `size` as a JSON string and omits it for folders.
fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) => s.parse::<u64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// One page of results from the files.list API endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Google API error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_record_deserialize() {
        let json = r#"{
            "id": "abc123",
            "name": "report.bin",
            "md5Checksum": "d41d8cd98f00b204e9800998ecf8427e",
            "mimeType": "application/octet-stream",
            "size": "1024",
            "createdTime": "2024-03-01T09:30:00.000Z",
            "parents": ["folder1"],
            "headRevisionId": "rev9"
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "abc123");
        assert_eq!(record.name, "report.bin");
        assert_eq!(record.size, Some(1024));
        assert_eq!(record.parents, vec!["folder1".to_string()]);
        assert_eq!(record.head_revision_id.as_deref(), Some("rev9"));
    }

    #[test]
    fn test_folder_record_without_size() {
        let json = r#"{
            "id": "folder123",
            "name": "My Folder",
            "mimeType": "application/vnd.google-apps.folder"
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_dir());
        assert!(!record.is_binary());
        assert_eq!(record.size, None);
        assert!(record.parents.is_empty());
    }

    #[test]
    fn test_binary_classification() {
        let json = r#"{"id": "f1", "name": "a.tar", "md5Checksum": "abcd"}"#;
        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_binary());
        assert!(!record.is_dir());
    }

    #[test]
    fn test_file_list_response() {
        let json = r#"{
            "files": [{"id": "f1", "name": "one"}, {"id": "f2", "name": "two"}],
            "nextPageToken": "token123"
        }"#;

        let page: FileListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.files.len(), 2);
        assert_eq!(page.next_page_token.as_deref(), Some("token123"));
    }
}
