//! drive-ls - List Google Drive files as a delimited or aligned table.
//!
//! The pipeline is sequential: fetch pages of file metadata until the
//! source is exhausted or the requested maximum is reached, optionally
//! resolve each file's absolute path, then render the records to an
//! output sink.
//!
//! # Example
//!
//! ```no_run
//! use drive_ls::{list_all_files, DriveClient, ListQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = DriveClient::new("access-token");
//!     let query = ListQuery {
//!         query: "trashed = false".to_string(),
//!         sort_order: String::new(),
//!         max_files: 30,
//!     };
//!
//!     let files = list_all_files(&client, &query).await?;
//!     drive_ls::write_tabbed(std::io::stdout(), &files, &Default::default())?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod list;
pub mod models;
pub mod path;
pub mod render;

// Re-exports for convenience
pub use client::DriveClient;
pub use error::{DriveError, Result};
pub use list::{list_all_files, ListQuery, PageFetcher};
pub use models::{FileListResponse, FileRecord};
pub use path::Pathfinder;
pub use render::{write_csv, write_tabbed, DisplayOptions};
