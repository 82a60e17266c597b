//! Bounded paginated listing.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FileListResponse, FileRecord};

/// Largest page the Drive API will serve per listing call.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Parameters for a listing operation.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Drive search-filter expression (`q` parameter).
    pub query: String,
    /// Sort order (`orderBy` parameter), server default when empty.
    pub sort_order: String,
    /// Maximum number of records to return, 0 = unbounded.
    pub max_files: u64,
}

impl ListQuery {
    /// Page size for each fetch: never larger than the API limit, and
    /// never larger than the requested maximum when one is set.
    pub fn page_size(&self) -> u64 {
        if self.max_files > 0 && self.max_files < MAX_PAGE_SIZE {
            self.max_files
        } else {
            MAX_PAGE_SIZE
        }
    }
}

/// One-method seam over the remote listing service, so the pagination
/// loop can be exercised against in-memory fakes.
#[async_trait]
pub trait PageFetcher {
    async fn fetch_page(
        &self,
        query: &ListQuery,
        page_token: Option<&str>,
    ) -> Result<FileListResponse>;
}

/// Fetch pages until the source is exhausted or `max_files` records
/// have been accumulated, then truncate to exactly `max_files`.
///
/// A page may overshoot the maximum since page boundaries do not align
/// with it; the excess tail is dropped, preserving order. Fetch errors
/// propagate unchanged.
pub async fn list_all_files<F>(fetcher: &F, query: &ListQuery) -> Result<Vec<FileRecord>>
where
    F: PageFetcher + ?Sized,
{
    let mut files: Vec<FileRecord> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetcher.fetch_page(query, page_token.as_deref()).await?;
        files.extend(page.files);

        // Stop when we have all the files we need
        if query.max_files > 0 && files.len() as u64 >= query.max_files {
            break;
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    if query.max_files > 0 {
        files.truncate(query.max_files as usize);
    }

    Ok(files)
}
