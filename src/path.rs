//! Absolute path resolution for file records.

use std::collections::HashMap;

use crate::client::DriveClient;
use crate::error::{DriveError, Result};
use crate::models::FileRecord;

/// Resolves a record's fully-qualified path by climbing its parent
/// folders. Folder lookups are cached for the lifetime of the
/// pathfinder, so siblings share ancestry fetches.
pub struct Pathfinder<'a> {
    client: &'a DriveClient,
    folders: HashMap<String, FileRecord>,
}

impl<'a> Pathfinder<'a> {
    pub fn new(client: &'a DriveClient) -> Self {
        Self {
            client,
            folders: HashMap::new(),
        }
    }

    /// Return the absolute path of a file, e.g. `/projects/2024/report.pdf`.
    ///
    /// Follows the first parent at each level until a folder with no
    /// parents (the drive root) is reached; the root itself is not part
    /// of the path. A record with no parents resolves to its bare name.
    pub async fn abs_path(&mut self, file: &FileRecord) -> Result<String> {
        if file.parents.is_empty() {
            return Ok(file.name.clone());
        }

        let mut segments = vec![file.name.clone()];
        let mut parent_id = file.parents[0].clone();

        loop {
            let folder = self.lookup_folder(&parent_id).await.map_err(|err| {
                DriveError::PathResolution {
                    name: file.name.clone(),
                    reason: err.to_string(),
                }
            })?;

            match folder.parents.first() {
                Some(next) => {
                    segments.push(folder.name.clone());
                    parent_id = next.clone();
                }
                // Reached the root folder, which is not named in the path
                None => break,
            }
        }

        segments.reverse();
        Ok(format!("/{}", segments.join("/")))
    }

    async fn lookup_folder(&mut self, folder_id: &str) -> Result<FileRecord> {
        if let Some(folder) = self.folders.get(folder_id) {
            return Ok(folder.clone());
        }

        let folder = self.client.get_file(folder_id).await?;
        self.folders.insert(folder_id.to_string(), folder.clone());
        Ok(folder)
    }
}
